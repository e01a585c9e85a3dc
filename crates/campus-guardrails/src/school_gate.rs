//! School gatekeeper guardrail

use async_trait::async_trait;
use regex::Regex;

use crate::{error::Result, Guardrail, GuardrailVerdict, RawInput};

/// Phrases that mark the speaker as one of our own students.
const ALLOW_PHRASES: [&str; 2] = ["from my school", "my school student"];

/// Phrases that reveal a student from another school, scanned in order.
const DENY_PHRASES: [&str; 5] = [
    "other school",
    "different school",
    "not from my school",
    "from other school",
    "student from ",
];

/// Captures a school name after a "school" marker with optional ":",
/// whitespace or "-" separators.
const SCHOOL_NAME_PATTERN: &str = r"school[:\s-]*([a-z0-9 ]+)";

/// Admits only students of our own school
///
/// Checks run in strict order: the allow-list first (it always wins,
/// even when a deny phrase occurs in the same text), then the
/// deny-phrases, then a fallback parse that extracts an explicit school
/// name and rejects it unless it names our own school.
pub struct SchoolGatekeeper {
    school_name: Regex,
}

impl SchoolGatekeeper {
    /// Create the gatekeeper
    pub fn new() -> Result<Self> {
        Ok(Self {
            school_name: Regex::new(SCHOOL_NAME_PATTERN)?,
        })
    }

    fn verdict_for(&self, text: &str) -> GuardrailVerdict {
        if ALLOW_PHRASES.iter().any(|phrase| text.contains(phrase)) {
            return GuardrailVerdict::pass().with("allowed", true).with("text", text);
        }

        if DENY_PHRASES.iter().any(|phrase| text.contains(phrase)) {
            return GuardrailVerdict::trip()
                .with("reason", "other school detected")
                .with("text", text);
        }

        if let Some(name) = self.school_name.captures(text).and_then(|caps| caps.get(1)) {
            let name = name.as_str().trim();
            if !name.contains("my school") {
                return GuardrailVerdict::trip()
                    .with("school_name", name)
                    .with("text", text);
            }
        }

        GuardrailVerdict::pass().with("allowed", true).with("text", text)
    }
}

#[async_trait]
impl Guardrail for SchoolGatekeeper {
    fn name(&self) -> &str {
        "school_gatekeeper"
    }

    async fn evaluate(&self, input: &RawInput) -> GuardrailVerdict {
        self.verdict_for(&input.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_trips_on_other_school() {
        let gate = SchoolGatekeeper::new().unwrap();
        let input = RawInput::text("Student from Other School wants to enter the premises");

        let verdict = gate.evaluate(&input).await;
        assert!(verdict.is_triggered());
        assert_eq!(
            verdict.diagnostic("reason").and_then(|v| v.as_str()),
            Some("other school detected")
        );
    }

    #[tokio::test]
    async fn test_allows_own_student() {
        let gate = SchoolGatekeeper::new().unwrap();
        let input = RawInput::text("I am a my school student visiting");

        let verdict = gate.evaluate(&input).await;
        assert!(!verdict.is_triggered());
        assert_eq!(verdict.diagnostic("allowed"), Some(&json!(true)));
    }

    #[tokio::test]
    async fn test_allow_list_wins_over_deny_phrases() {
        let gate = SchoolGatekeeper::new().unwrap();
        let input = RawInput::text("other school but I am a my school student");

        let verdict = gate.evaluate(&input).await;
        assert!(!verdict.is_triggered());
        assert_eq!(verdict.diagnostic("allowed"), Some(&json!(true)));
    }

    #[tokio::test]
    async fn test_deny_phrase_variants() {
        let gate = SchoolGatekeeper::new().unwrap();

        for text in [
            "he goes to a different school",
            "she is not from my school",
            "a visitor from other school",
            "student from Greenwood wants a pass",
        ] {
            let verdict = gate.evaluate(&RawInput::text(text)).await;
            assert!(verdict.is_triggered(), "expected trip for {:?}", text);
            assert_eq!(
                verdict.diagnostic("reason").and_then(|v| v.as_str()),
                Some("other school detected")
            );
        }
    }

    #[tokio::test]
    async fn test_fallback_parse_extracts_school_name() {
        let gate = SchoolGatekeeper::new().unwrap();
        let input = RawInput::text("Entry pass, school: Greenwood High");

        let verdict = gate.evaluate(&input).await;
        assert!(verdict.is_triggered());
        assert_eq!(
            verdict.diagnostic("school_name").and_then(|v| v.as_str()),
            Some("greenwood high")
        );
    }

    #[tokio::test]
    async fn test_fallback_parse_stops_at_punctuation() {
        let gate = SchoolGatekeeper::new().unwrap();
        let input = RawInput::text("enrolled at school Riverdale, batch 9");

        let verdict = gate.evaluate(&input).await;
        assert!(verdict.is_triggered());
        assert_eq!(
            verdict.diagnostic("school_name").and_then(|v| v.as_str()),
            Some("riverdale")
        );
    }

    #[tokio::test]
    async fn test_fallback_parse_accepts_own_school() {
        let gate = SchoolGatekeeper::new().unwrap();
        let input = RawInput::text("school: my school");

        let verdict = gate.evaluate(&input).await;
        assert!(!verdict.is_triggered());
        assert_eq!(verdict.diagnostic("allowed"), Some(&json!(true)));
    }

    #[tokio::test]
    async fn test_passes_unrelated_input() {
        let gate = SchoolGatekeeper::new().unwrap();
        let input = RawInput::text("What are the visiting hours?");

        let verdict = gate.evaluate(&input).await;
        assert!(!verdict.is_triggered());
        assert_eq!(verdict.diagnostic("allowed"), Some(&json!(true)));
    }

    #[tokio::test]
    async fn test_idempotent_verdicts() {
        let gate = SchoolGatekeeper::new().unwrap();
        let input = RawInput::text("Student from Other School wants to enter");

        let first = gate.evaluate(&input).await;
        let second = gate.evaluate(&input).await;
        assert_eq!(first, second);
    }
}
