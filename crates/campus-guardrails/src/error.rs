//! Error types for guardrails

/// Result type for guardrail construction
pub type Result<T> = std::result::Result<T, GuardrailError>;

/// Errors that can occur while building guardrails
///
/// Evaluation itself is total and always produces a verdict; only
/// construction can fail.
#[derive(Debug, thiserror::Error)]
pub enum GuardrailError {
    /// A matching pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_error_conversion() {
        let err = regex::Regex::new("(unclosed").unwrap_err();
        let err = GuardrailError::from(err);
        assert!(matches!(err, GuardrailError::Pattern(_)));
        assert!(err.to_string().starts_with("Invalid pattern"));
    }
}
