//! Campus Guardrails
//!
//! Input-screening guardrails for campus assistant agents. Each
//! guardrail is a predicate over the flattened input text; a triggered
//! verdict tells the caller to abort the pending action.
//!
//! # Example
//!
//! ```
//! use campus_guardrails::{ClassTimingFilter, GuardrailChain};
//!
//! let chain = GuardrailChain::new().with_guardrail(ClassTimingFilter::new());
//! assert_eq!(chain.len(), 1);
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod guardrail;
pub mod input;
pub mod tripwire;
pub mod verdict;

// Built-in guardrails
pub mod class_timing;
pub mod school_gate;
pub mod temperature;

// Re-exports
pub use chain::GuardrailChain;
pub use config::ScreeningConfig;
pub use error::{GuardrailError, Result};
pub use guardrail::Guardrail;
pub use input::{InputMessage, MessageRole, RawInput};
pub use tripwire::Tripwire;
pub use verdict::GuardrailVerdict;

pub use class_timing::ClassTimingFilter;
pub use school_gate::SchoolGatekeeper;
pub use temperature::TemperatureFloor;
