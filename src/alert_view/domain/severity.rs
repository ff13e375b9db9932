/// Aggregate bucket a severity label counts toward.
///
/// "Critical" and "High" share one bucket for the summary cards; unknown or
/// missing labels fall into no bucket but still count toward the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityBucket {
    High,
    Medium,
    Low,
    None,
}

/// Classifies a raw severity label into its aggregate bucket.
///
/// Matching is case-insensitive and never fails: empty or unrecognized
/// labels map to `SeverityBucket::None`.
pub fn classify(label: &str) -> SeverityBucket {
    match label.to_lowercase().as_str() {
        "critical" | "high" => SeverityBucket::High,
        "medium" => SeverityBucket::Medium,
        "low" => SeverityBucket::Low,
        _ => SeverityBucket::None,
    }
}

/// Returns the badge style name for a severity label, if it has one.
///
/// Unknown labels render as plain text, so they get no style. Unlike
/// [`classify`], Critical and High keep distinct styles.
pub fn badge_style(label: &str) -> Option<&'static str> {
    match label.to_lowercase().as_str() {
        "critical" => Some("severity-critical"),
        "high" => Some("severity-high"),
        "medium" => Some("severity-medium"),
        "low" => Some("severity-low"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_critical_and_high_share_bucket() {
        assert_eq!(classify("Critical"), SeverityBucket::High);
        assert_eq!(classify("High"), SeverityBucket::High);
    }

    #[test]
    fn test_classify_medium_and_low() {
        assert_eq!(classify("Medium"), SeverityBucket::Medium);
        assert_eq!(classify("Low"), SeverityBucket::Low);
    }

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(classify("CRITICAL"), SeverityBucket::High);
        assert_eq!(classify("high"), SeverityBucket::High);
        assert_eq!(classify("mEdIuM"), SeverityBucket::Medium);
    }

    #[test]
    fn test_classify_unknown_and_empty() {
        assert_eq!(classify(""), SeverityBucket::None);
        assert_eq!(classify("Informational"), SeverityBucket::None);
        assert_eq!(classify("???"), SeverityBucket::None);
    }

    #[test]
    fn test_badge_style_known_labels() {
        assert_eq!(badge_style("Critical"), Some("severity-critical"));
        assert_eq!(badge_style("high"), Some("severity-high"));
        assert_eq!(badge_style("Medium"), Some("severity-medium"));
        assert_eq!(badge_style("LOW"), Some("severity-low"));
    }

    #[test]
    fn test_badge_style_unknown_is_unstyled() {
        assert_eq!(badge_style(""), None);
        assert_eq!(badge_style("Weird"), None);
    }
}
