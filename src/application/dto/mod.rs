//! Data transfer objects crossing the application boundary.

pub mod alert_query;
pub mod scan_report;

pub use alert_query::{AlertsRequest, FilterSelection};
pub use scan_report::ScanReport;
