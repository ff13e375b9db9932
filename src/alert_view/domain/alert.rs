use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One detected security event returned by the alert-query endpoint.
///
/// All fields are tolerant of absence: the backend serializes alerts from
/// heterogeneous log sources and older scans may lack newer fields. Records
/// are immutable once fetched and owned by the view state for the duration
/// of one loaded view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertRecord {
    /// Detection rule that produced this alert
    #[serde(default)]
    pub rule: String,
    /// Raw severity label as sent by the backend (open set)
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub user: String,
    #[serde(default, rename = "sourceIP")]
    pub source_ip: String,
    #[serde(default, rename = "eventName")]
    pub event_name: String,
    #[serde(default, rename = "awsRegion")]
    pub aws_region: String,
    /// Display-formatted event timestamp
    #[serde(default, rename = "eventTime")]
    pub event_time: String,
    /// Full underlying log event, kept verbatim for the detail view
    #[serde(default, rename = "rawEvent", skip_serializing_if = "Option::is_none")]
    pub raw_event: Option<Value>,
    /// Remediation playbook attached by the backend when the rule has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playbook: Option<Playbook>,
}

/// Remediation guidance for one detection rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playbook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub risk: String,
    /// Ordered remediation steps, rendered as a 1-based numbered list
    #[serde(default)]
    pub actions: Vec<String>,
}
