use crate::alert_view::domain::{AlertRecord, ScanTarget};
use crate::application::dto::{AlertsRequest, ScanReport};
use crate::ports::outbound::AlertGateway;
use crate::shared::error::DashboardError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// HttpAlertGateway adapter for the remote scanning service.
///
/// Implements the AlertGateway port over the service's HTTP API: two fixed
/// POST scan-trigger endpoints and one GET alert-query endpoint. Uses an
/// async reqwest client so scans never block the session loop.
#[derive(Debug)]
pub struct HttpAlertGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAlertGateway {
    /// Creates a gateway for the given base URL (e.g. `http://127.0.0.1:5000`).
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = validate_base_url(base_url)?;
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("trailwatch/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }
}

/// Checks the scheme and host portion and strips any trailing slash so
/// endpoint paths can be appended directly.
fn validate_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');

    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| DashboardError::InvalidServerUrl {
            url: url.to_string(),
            reason: "URL must start with http:// or https://".to_string(),
        })?;

    if rest.is_empty() {
        return Err(DashboardError::InvalidServerUrl {
            url: url.to_string(),
            reason: "URL has no host".to_string(),
        }
        .into());
    }

    if rest.contains('?') || rest.contains('#') {
        return Err(DashboardError::InvalidServerUrl {
            url: url.to_string(),
            reason: "Base URL must not carry a query or fragment".to_string(),
        }
        .into());
    }

    Ok(trimmed.to_string())
}

#[async_trait]
impl AlertGateway for HttpAlertGateway {
    async fn trigger_scan(&self, target: ScanTarget) -> Result<ScanReport> {
        let url = self.url(target.endpoint());
        let response = self.client.post(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Scan endpoint {} returned status code {}",
                target.endpoint(),
                response.status()
            );
        }

        let report: ScanReport = response.json().await?;
        Ok(report)
    }

    async fn fetch_alerts(&self, request: &AlertsRequest) -> Result<Vec<AlertRecord>> {
        let url = self.url(&request.path_and_query());
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Alert query returned status code {}",
                response.status()
            );
        }

        let alerts: Vec<AlertRecord> = response.json().await?;
        Ok(alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::FilterSelection;

    #[test]
    fn test_gateway_creation() {
        let gateway = HttpAlertGateway::new("http://127.0.0.1:5000");
        assert!(gateway.is_ok());
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let gateway = HttpAlertGateway::new("http://127.0.0.1:5000/").unwrap();
        assert_eq!(gateway.url("/api/alerts"), "http://127.0.0.1:5000/api/alerts");
    }

    #[test]
    fn test_rejects_missing_scheme() {
        let result = HttpAlertGateway::new("127.0.0.1:5000");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("http://"));
    }

    #[test]
    fn test_rejects_empty_host() {
        assert!(HttpAlertGateway::new("http://").is_err());
    }

    #[test]
    fn test_rejects_query_in_base() {
        assert!(HttpAlertGateway::new("http://host?x=1").is_err());
    }

    #[test]
    fn test_url_composition_with_query() {
        let gateway = HttpAlertGateway::new("https://soc.example").unwrap();
        let selection = FilterSelection {
            severity: Some("High".to_string()),
            ..Default::default()
        };
        let request = AlertsRequest::from_selection(&selection, Some("s1"));
        assert_eq!(
            gateway.url(&request.path_and_query()),
            "https://soc.example/api/alerts?severity=High&scan_id=s1"
        );
    }
}
