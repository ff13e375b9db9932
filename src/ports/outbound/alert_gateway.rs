use crate::alert_view::domain::{AlertRecord, ScanTarget};
use crate::application::dto::{AlertsRequest, ScanReport};
use crate::shared::Result;
use async_trait::async_trait;

/// AlertGateway port for reaching the remote scanning service.
///
/// The scanning engine, log parsers, and alert persistence all live behind
/// these two calls; the dashboard core never sees anything but the wire
/// shapes.
#[async_trait]
pub trait AlertGateway {
    /// Triggers a scan of the given source and returns the backend's report.
    async fn trigger_scan(&self, target: ScanTarget) -> Result<ScanReport>;

    /// Fetches the alert records selected by the request description.
    async fn fetch_alerts(&self, request: &AlertsRequest) -> Result<Vec<AlertRecord>>;
}
