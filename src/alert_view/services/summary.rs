use crate::alert_view::domain::{classify, AlertRecord, SeverityBucket};

/// Aggregate severity counts for the summary cards.
///
/// Derived, never stored: recomputed from the full current collection on
/// every load. `high` includes both Critical and High labels; records with
/// an unrecognized severity count only toward `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryCounts {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SummaryCounts {
    /// Tallies the collection into severity buckets.
    pub fn from_alerts(alerts: &[AlertRecord]) -> Self {
        let mut counts = SummaryCounts {
            total: alerts.len(),
            ..Default::default()
        };
        for alert in alerts {
            match classify(&alert.severity) {
                SeverityBucket::High => counts.high += 1,
                SeverityBucket::Medium => counts.medium += 1,
                SeverityBucket::Low => counts.low += 1,
                SeverityBucket::None => {}
            }
        }
        counts
    }
}
