//! Pure domain models for the alert dashboard.
//!
//! Nothing in this module performs I/O; severity classification and the
//! alert record shape are shared by the application core and the adapters.

pub mod alert;
pub mod scan;
pub mod severity;

pub use alert::{AlertRecord, Playbook};
pub use scan::ScanTarget;
pub use severity::{badge_style, classify, SeverityBucket};
