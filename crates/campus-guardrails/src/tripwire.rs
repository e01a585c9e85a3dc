//! Tripwire records

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::GuardrailVerdict;

/// Record of a guardrail stopping a run
///
/// Produced by the chain when a guardrail trips; the caller must abort
/// the pending action and may log or surface the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tripwire {
    /// Name of the guardrail that triggered
    pub guardrail: String,

    /// The verdict it produced
    pub verdict: GuardrailVerdict,

    /// When the tripwire fired
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Tripwire {
    /// Create a new tripwire record
    pub fn new(guardrail: impl Into<String>, verdict: GuardrailVerdict) -> Self {
        Self {
            guardrail: guardrail.into(),
            verdict,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Human-readable reason, when the verdict recorded one
    pub fn reason(&self) -> Option<&str> {
        self.verdict.diagnostic("reason").and_then(Value::as_str)
    }
}
