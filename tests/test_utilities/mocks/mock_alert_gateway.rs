use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use trailwatch::prelude::*;

/// Mock AlertGateway with scripted responses that records every call.
///
/// Clones share the recorded call log, so tests keep a handle after moving
/// the mock into the controller.
#[derive(Default, Clone)]
pub struct MockAlertGateway {
    scan_report: Option<ScanReport>,
    scan_fails: bool,
    alerts: Vec<AlertRecord>,
    /// Fetches from this 0-based call index onward fail
    fail_fetch_from: Option<usize>,
    scan_calls: Arc<Mutex<Vec<ScanTarget>>>,
    fetch_queries: Arc<Mutex<Vec<String>>>,
}

impl MockAlertGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scan_report(mut self, alerts_detected: u64, scan_id: Option<&str>) -> Self {
        self.scan_report = Some(ScanReport {
            alerts_detected,
            scan_id: scan_id.map(str::to_string),
        });
        self
    }

    pub fn failing_scan(mut self) -> Self {
        self.scan_fails = true;
        self
    }

    pub fn with_alerts(mut self, alerts: Vec<AlertRecord>) -> Self {
        self.alerts = alerts;
        self
    }

    pub fn failing_fetch_from(mut self, call_index: usize) -> Self {
        self.fail_fetch_from = Some(call_index);
        self
    }

    pub fn scan_calls(&self) -> Vec<ScanTarget> {
        self.scan_calls.lock().unwrap().clone()
    }

    pub fn fetch_queries(&self) -> Vec<String> {
        self.fetch_queries.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_queries.lock().unwrap().len()
    }
}

#[async_trait]
impl AlertGateway for MockAlertGateway {
    async fn trigger_scan(&self, target: ScanTarget) -> Result<ScanReport> {
        self.scan_calls.lock().unwrap().push(target);
        if self.scan_fails {
            anyhow::bail!("connection refused");
        }
        Ok(self.scan_report.clone().unwrap_or_default())
    }

    async fn fetch_alerts(&self, request: &AlertsRequest) -> Result<Vec<AlertRecord>> {
        let call_index = {
            let mut queries = self.fetch_queries.lock().unwrap();
            queries.push(request.path_and_query());
            queries.len() - 1
        };
        if let Some(from) = self.fail_fetch_from {
            if call_index >= from {
                anyhow::bail!("gateway timeout");
            }
        }
        Ok(self.alerts.clone())
    }
}
