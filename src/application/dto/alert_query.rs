/// User-chosen filters applied to the next alert query.
///
/// Not persisted between loads; the controller keeps the latest selection
/// and reads it fresh each time a query is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    /// Severity label filter, `None` for "any"
    pub severity: Option<String>,
    /// Exact detection-rule filter
    pub rule: Option<String>,
    /// Restrict to events within the last N hours
    pub hours_back: Option<u32>,
}

impl FilterSelection {
    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.severity.is_none() && self.rule.is_none() && self.hours_back.is_none()
    }
}

/// Fully described alert-retrieval request: path plus ordered query
/// parameters.
///
/// Building the request is deterministic: identical inputs always produce
/// an identical description, so query composition is testable without a
/// live backend. Parameters whose source value is empty or absent are
/// omitted entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertsRequest {
    params: Vec<(&'static str, String)>,
}

impl AlertsRequest {
    const PATH: &'static str = "/api/alerts";

    /// Composes the request from the current filters and active scan identity.
    pub fn from_selection(selection: &FilterSelection, scan_id: Option<&str>) -> Self {
        let mut params = Vec::new();

        if let Some(severity) = non_empty(selection.severity.as_deref()) {
            params.push(("severity", severity.to_string()));
        }
        if let Some(rule) = non_empty(selection.rule.as_deref()) {
            params.push(("rule", rule.to_string()));
        }
        if let Some(hours) = selection.hours_back {
            params.push(("hours_back", hours.to_string()));
        }
        // Scope to the active scan so historic data never leaks in
        if let Some(id) = non_empty(scan_id) {
            params.push(("scan_id", id.to_string()));
        }

        Self { params }
    }

    /// Ordered query parameters as (name, raw value) pairs.
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Path with URL-encoded query string, ready to append to a base URL.
    pub fn path_and_query(&self) -> String {
        if self.params.is_empty() {
            return Self::PATH.to_string();
        }
        let query: Vec<String> = self
            .params
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect();
        format!("{}?{}", Self::PATH, query.join("&"))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
