//! Data Model: Rendered output and per-stage trace
use serde::{Deserialize, Serialize};

/// Result of a traced pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rendered {
    /// Final HTML fragment
    pub html: String,
    /// Pipeline id (ex: "wrap→highlight→highlight→highlight")
    pub pipeline_id: String,
    /// One entry per stage, in execution order
    pub trace: Vec<StageTrace>,
}

impl Rendered {
    /// Ids of the stages that actually changed the text
    pub fn changed_stages(&self) -> Vec<&str> {
        self.trace
            .iter()
            .filter(|t| t.changed)
            .map(|t| t.id.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTrace {
    pub id: String,
    pub in_hash: String,
    pub out_hash: String,
    pub deterministic: bool,
    pub latency_us: u64,
    /// False when the stage passed its input through untouched
    pub changed: bool,
}
