use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity of the tool that produced a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ToolInfo {
    pub fn prodschema() -> Self {
        Self {
            name: "prodschema".to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }
    }
}

/// Wall-clock run info, RFC 3339 timestamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunInfo {
    #[serde(default)]
    pub started_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// What one rule did to the graph. Empty vectors mean the rule fired but
/// found nothing to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub rule_id: String,

    /// Index of the mutated node in the output graph, when the rule targets
    /// a single node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_index: Option<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys_set: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys_removed: Vec<String>,

    #[serde(default)]
    pub nodes_dropped: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub rules_run: u64,
    pub keys_set: u64,
    pub keys_removed: u64,
    pub nodes_dropped: u64,
    pub reviews_emitted: u64,
}

impl ReportSummary {
    pub fn from_changes(changes: &[ChangeRecord], reviews_emitted: u64) -> Self {
        Self {
            rules_run: changes.len() as u64,
            keys_set: changes.iter().map(|c| c.keys_set.len() as u64).sum(),
            keys_removed: changes.iter().map(|c| c.keys_removed.len() as u64).sum(),
            nodes_dropped: changes.iter().map(|c| c.nodes_dropped).sum(),
            reviews_emitted,
        }
    }
}

/// Artifact describing one transform run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchReport {
    pub schema: String,
    pub tool: ToolInfo,
    pub run: RunInfo,

    /// Whether the activation gate let the rules run.
    pub activated: bool,

    #[serde(default)]
    pub changes: Vec<ChangeRecord>,

    pub summary: ReportSummary,

    /// Free-form detail blob (review-extraction counters and the like).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl PatchReport {
    pub fn new(tool: ToolInfo, activated: bool) -> Self {
        Self {
            schema: crate::schema::PRODSCHEMA_REPORT_V1.to_string(),
            tool,
            run: RunInfo::default(),
            activated,
            changes: vec![],
            summary: ReportSummary::default(),
            data: None,
        }
    }
}
