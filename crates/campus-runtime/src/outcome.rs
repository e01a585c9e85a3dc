//! Run outcomes

use campus_guardrails::{RawInput, Tripwire};

/// Result of screening an input for an agent
///
/// A triggered guardrail is expected control flow, not an error, so it
/// is reported as a value: the caller decides whether a blocked run is
/// surfaced as a rejection message, a log entry or a retry prompt.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// Every guardrail passed; the caller proceeds with the input
    Proceed {
        /// The input, handed back for further processing
        input: RawInput,
    },

    /// A guardrail triggered; the pending action must be aborted
    Blocked(Tripwire),
}

impl RunOutcome {
    /// Whether the run was blocked
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }

    /// The tripwire, when the run was blocked
    pub fn tripwire(&self) -> Option<&Tripwire> {
        match self {
            Self::Blocked(tripwire) => Some(tripwire),
            Self::Proceed { .. } => None,
        }
    }
}
