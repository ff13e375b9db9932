//! trailwatch - terminal dashboard client for a CloudTrail alert-scanning
//! service
//!
//! This library drives a session-scoped security dashboard: it triggers
//! log scans on a remote service, retrieves the resulting alert records,
//! and projects them as a paginated, filterable table with aggregate
//! severity counts and a per-alert detail view.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`alert_view`): Alert records, severity
//!   classification, and pure pagination/summary derivations
//! - **Application Layer** (`application`): Session state, user intents,
//!   and the dashboard controller use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use trailwatch::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let gateway = HttpAlertGateway::new("http://127.0.0.1:5000")?;
//! let indicator = SpinnerIndicator::new();
//! let renderer = ConsoleRenderer::new();
//!
//! // Create the controller in the pre-scan zero state
//! let mut dashboard = DashboardController::new(gateway, indicator, renderer, 50);
//! dashboard.show_initial();
//!
//! // React to user intents
//! dashboard.dispatch(UserIntent::ScanLocal).await?;
//! dashboard.dispatch(UserIntent::NextPage).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod alert_view;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{ConsoleRenderer, SpinnerIndicator};
    pub use crate::adapters::outbound::network::HttpAlertGateway;
    pub use crate::alert_view::domain::{
        badge_style, classify, AlertRecord, Playbook, ScanTarget, SeverityBucket,
    };
    pub use crate::alert_view::services::SummaryCounts;
    pub use crate::application::dto::{AlertsRequest, FilterSelection, ScanReport};
    pub use crate::application::state::{PageView, UserIntent, ViewState, DEFAULT_PAGE_SIZE};
    pub use crate::application::use_cases::DashboardController;
    pub use crate::ports::outbound::{AlertGateway, RenderSurface, ScanIndicator};
    pub use crate::shared::Result;
}
