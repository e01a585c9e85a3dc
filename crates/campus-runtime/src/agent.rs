//! Agent definition and input screening

use campus_guardrails::{Guardrail, GuardrailChain, RawInput};

use crate::RunOutcome;

/// An agent with an ordered list of input guardrails
pub struct Agent {
    name: String,
    instructions: String,
    guardrails: GuardrailChain,
}

impl Agent {
    /// Create a new agent builder
    pub fn builder() -> AgentBuilder {
        AgentBuilder::new()
    }

    /// Agent name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Agent instructions
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Screen the input through this agent's guardrails
    ///
    /// Guardrails run in registration order; the first triggered one
    /// blocks the run. When none trigger the input is handed back and
    /// the caller proceeds with it.
    pub async fn run(&self, input: RawInput) -> RunOutcome {
        if let Some(tripwire) = self.guardrails.evaluate(&input).await {
            tracing::warn!(
                "Agent {} blocked by guardrail {}",
                self.name,
                tripwire.guardrail
            );
            return RunOutcome::Blocked(tripwire);
        }

        tracing::debug!("Agent {} input passed all guardrails", self.name);
        RunOutcome::Proceed { input }
    }
}

/// Builder for [`Agent`]
pub struct AgentBuilder {
    name: Option<String>,
    instructions: Option<String>,
    guardrails: GuardrailChain,
}

impl AgentBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            name: None,
            instructions: None,
            guardrails: GuardrailChain::new(),
        }
    }

    /// Set the agent name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the agent instructions
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Append an input guardrail
    pub fn guardrail<G: Guardrail + 'static>(mut self, guardrail: G) -> Self {
        self.guardrails = self.guardrails.with_guardrail(guardrail);
        self
    }

    /// Replace the guardrail chain wholesale
    pub fn guardrails(mut self, chain: GuardrailChain) -> Self {
        self.guardrails = chain;
        self
    }

    /// Build the agent
    pub fn build(self) -> Agent {
        Agent {
            name: self.name.unwrap_or_else(|| "agent".to_string()),
            instructions: self.instructions.unwrap_or_default(),
            guardrails: self.guardrails,
        }
    }
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
