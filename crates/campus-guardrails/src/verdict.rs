//! Guardrail verdicts

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome of a single guardrail evaluation
///
/// Constructed fresh on every evaluation and never mutated afterwards.
/// `diagnostics` carries key/value context for the caller's logging and
/// auditing; it is not interpreted by the guardrails themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardrailVerdict {
    /// Whether the guardrail tripped
    pub triggered: bool,

    /// Diagnostic key/value pairs
    #[serde(default)]
    pub diagnostics: Map<String, Value>,
}

impl GuardrailVerdict {
    /// Create a triggered verdict
    pub fn trip() -> Self {
        Self {
            triggered: true,
            diagnostics: Map::new(),
        }
    }

    /// Create a passing verdict
    pub fn pass() -> Self {
        Self {
            triggered: false,
            diagnostics: Map::new(),
        }
    }

    /// Attach a diagnostic key/value pair
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.diagnostics.insert(key.into(), value.into());
        self
    }

    /// Whether the guardrail tripped
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Look up a diagnostic value
    pub fn diagnostic(&self, key: &str) -> Option<&Value> {
        self.diagnostics.get(key)
    }
}
