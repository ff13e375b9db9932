/// Remote scan source selectable from the dashboard.
///
/// Each target maps to one fixed scan-trigger endpoint on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanTarget {
    /// Logs staged on the scanning host itself
    Local,
    /// Logs ingested from the cloud object store
    CloudStore,
}

impl ScanTarget {
    /// Path of the POST endpoint that triggers this scan.
    pub fn endpoint(self) -> &'static str {
        match self {
            ScanTarget::Local => "/api/scan",
            ScanTarget::CloudStore => "/api/scan_s3",
        }
    }

    /// Human label used in notices.
    pub fn label(self) -> &'static str {
        match self {
            ScanTarget::Local => "local logs",
            ScanTarget::CloudStore => "cloud store logs",
        }
    }
}
