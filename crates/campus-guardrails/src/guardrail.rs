//! Guardrail trait definition

use async_trait::async_trait;

use crate::{GuardrailVerdict, RawInput};

/// Trait for input guardrails
///
/// A guardrail screens raw user input before an agent acts on it.
/// Evaluation is total: it always produces a verdict and never fails.
/// Absence of an expected pattern is a passing verdict, not an error.
///
/// Implementations hold no mutable state and may be invoked from any
/// number of concurrent callers.
#[async_trait]
pub trait Guardrail: Send + Sync {
    /// Name of this guardrail, used in tripwire records and logs
    fn name(&self) -> &str;

    /// Evaluate the raw input
    async fn evaluate(&self, input: &RawInput) -> GuardrailVerdict;
}
