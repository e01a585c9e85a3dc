//! Ordered guardrail composition

use std::sync::Arc;

use crate::{Guardrail, RawInput, Tripwire};

/// Ordered list of guardrails evaluated before an agent runs
///
/// Guardrails run in insertion order; evaluation stops at the first
/// triggered verdict.
#[derive(Clone)]
pub struct GuardrailChain {
    guardrails: Vec<Arc<dyn Guardrail>>,
}

impl GuardrailChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self {
            guardrails: Vec::new(),
        }
    }

    /// Add a guardrail to the end of the chain
    pub fn with_guardrail<G: Guardrail + 'static>(mut self, guardrail: G) -> Self {
        self.guardrails.push(Arc::new(guardrail));
        self
    }

    /// Number of guardrails in the chain
    pub fn len(&self) -> usize {
        self.guardrails.len()
    }

    /// Whether the chain is empty
    pub fn is_empty(&self) -> bool {
        self.guardrails.is_empty()
    }

    /// Evaluate the input against each guardrail in order
    ///
    /// Returns a tripwire for the first guardrail that triggers, or
    /// `None` when every guardrail passes. An empty chain passes
    /// everything.
    pub async fn evaluate(&self, input: &RawInput) -> Option<Tripwire> {
        for guardrail in &self.guardrails {
            let verdict = guardrail.evaluate(input).await;
            if verdict.is_triggered() {
                tracing::warn!("Guardrail {} tripped on input", guardrail.name());
                return Some(Tripwire::new(guardrail.name(), verdict));
            }
        }
        None
    }
}

impl Default for GuardrailChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GuardrailVerdict;
    use async_trait::async_trait;

    struct AlwaysTrip(&'static str);

    #[async_trait]
    impl Guardrail for AlwaysTrip {
        fn name(&self) -> &str {
            self.0
        }

        async fn evaluate(&self, _input: &RawInput) -> GuardrailVerdict {
            GuardrailVerdict::trip().with("reason", "always trips")
        }
    }

    struct AlwaysPass;

    #[async_trait]
    impl Guardrail for AlwaysPass {
        fn name(&self) -> &str {
            "always_pass"
        }

        async fn evaluate(&self, _input: &RawInput) -> GuardrailVerdict {
            GuardrailVerdict::pass().with("ok", true)
        }
    }

    #[tokio::test]
    async fn test_empty_chain_passes() {
        let chain = GuardrailChain::new();
        assert!(chain.is_empty());

        let tripwire = chain.evaluate(&RawInput::text("anything")).await;
        assert!(tripwire.is_none());
    }

    #[tokio::test]
    async fn test_all_passing() {
        let chain = GuardrailChain::new()
            .with_guardrail(AlwaysPass)
            .with_guardrail(AlwaysPass);
        assert_eq!(chain.len(), 2);

        let tripwire = chain.evaluate(&RawInput::text("anything")).await;
        assert!(tripwire.is_none());
    }

    #[tokio::test]
    async fn test_stops_at_first_trigger() {
        let chain = GuardrailChain::new()
            .with_guardrail(AlwaysPass)
            .with_guardrail(AlwaysTrip("first"))
            .with_guardrail(AlwaysTrip("second"));

        let tripwire = chain.evaluate(&RawInput::text("anything")).await.unwrap();
        assert_eq!(tripwire.guardrail, "first");
    }
}
