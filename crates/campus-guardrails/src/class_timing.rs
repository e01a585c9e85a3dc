//! Class-timing change filter

use async_trait::async_trait;

use crate::{Guardrail, GuardrailVerdict, RawInput};

/// Phrases that signal a request to change class timings.
const TIMING_PHRASES: [&str; 2] = ["change my class timing", "change my class timings"];

/// Blocks requests asking to change class timings
///
/// Pure substring containment over the normalized input. No word
/// boundaries are applied, so a longer word containing the phrase also
/// matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassTimingFilter;

impl ClassTimingFilter {
    /// Create the filter
    pub fn new() -> Self {
        Self
    }

    fn verdict_for(&self, text: &str) -> GuardrailVerdict {
        if TIMING_PHRASES.iter().any(|phrase| text.contains(phrase)) {
            GuardrailVerdict::trip()
                .with("reason", "user asked to change class timings")
                .with("text", text)
        } else {
            GuardrailVerdict::pass().with("ok", true).with("text", text)
        }
    }
}

#[async_trait]
impl Guardrail for ClassTimingFilter {
    fn name(&self) -> &str {
        "class_timing"
    }

    async fn evaluate(&self, input: &RawInput) -> GuardrailVerdict {
        self.verdict_for(&input.normalize())
    }
}
