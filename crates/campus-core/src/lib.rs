//! Campus Core
//!
//! Shared plumbing for the campusgate workspace: error handling,
//! configuration loading, and logging setup.

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{load_config, AppConfig};
pub use error::{CoreError, Result};
pub use logging::init_logging;
