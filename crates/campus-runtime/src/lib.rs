//! Campus Runtime
//!
//! The agent runner: an agent holds its identity and an ordered list of
//! input guardrails, and screening an input yields an explicit outcome
//! instead of unwinding through the caller.

pub mod agent;
pub mod outcome;

// Re-exports
pub use agent::{Agent, AgentBuilder};
pub use outcome::RunOutcome;
