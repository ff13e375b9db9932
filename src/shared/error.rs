use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts wrapping the dashboard to distinguish
/// between argument errors and runtime failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Clean session shutdown
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (bad server URL, config error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the dashboard client.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
///
/// Both transport variants degrade to "previous state preserved"; neither
/// is fatal to the session. Loading alerts with no active scan is a normal
/// guarded state, not an error, so it has no variant here.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Scan request failed: {endpoint}\nDetails: {details}\n\n💡 Hint: Check that the scanning service is reachable and try the scan again")]
    ScanFailed { endpoint: String, details: String },

    #[error("Alert query failed: {details}\n\n💡 Hint: The previous results are still shown; re-apply the filters to retry")]
    AlertQueryFailed { details: String },

    #[error("Invalid server URL: {url}\nReason: {reason}\n\n💡 Hint: Pass a full base URL such as http://127.0.0.1:5000")]
    InvalidServerUrl { url: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_equality() {
        assert_eq!(ExitCode::Success, ExitCode::Success);
        assert_ne!(ExitCode::Success, ExitCode::ApplicationError);
    }

    #[test]
    fn test_scan_failed_display() {
        let error = DashboardError::ScanFailed {
            endpoint: "/api/scan".to_string(),
            details: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Scan request failed"));
        assert!(display.contains("/api/scan"));
        assert!(display.contains("connection refused"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_alert_query_failed_display() {
        let error = DashboardError::AlertQueryFailed {
            details: "timed out".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Alert query failed"));
        assert!(display.contains("timed out"));
        assert!(display.contains("previous results are still shown"));
    }

    #[test]
    fn test_invalid_server_url_display() {
        let error = DashboardError::InvalidServerUrl {
            url: "ftp://example".to_string(),
            reason: "unsupported scheme".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid server URL"));
        assert!(display.contains("ftp://example"));
        assert!(display.contains("unsupported scheme"));
    }
}
