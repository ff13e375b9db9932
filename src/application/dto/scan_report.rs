use serde::Deserialize;

/// Response body of a scan-trigger endpoint.
///
/// The scan identifier is optional on the wire; a backend that omits it
/// leaves subsequent alert queries unscoped, which the dashboard tolerates
/// rather than treating as a failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanReport {
    #[serde(default)]
    pub alerts_detected: u64,
    #[serde(default, rename = "scanId")]
    pub scan_id: Option<String>,
}
