//! Temperature floor guardrail

use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;

use crate::{error::Result, Guardrail, GuardrailVerdict, RawInput};

/// Matches the first one-or-two digit number, with an optional unit
/// suffix: "°c", "° c", a standalone trailing "c", a bare "°", or the
/// word " degrees". Only the digit group is captured.
const TEMP_PATTERN: &str = r"([0-9]{1,2})(?:\s*°\s*c|\s*°c|\s*c\b|°| degrees)?";

/// Default minimum temperature in °C.
const DEFAULT_MIN_TEMP: i64 = 26;

/// Blocks activity requests when the mentioned temperature is below a
/// minimum
///
/// Scans the normalized input for the first number and compares it
/// against the floor. The comparison is strictly less-than: a reading
/// equal to the floor passes. Inputs with no parseable temperature
/// pass as well; later numbers in the same text are ignored.
pub struct TemperatureFloor {
    pattern: Regex,
    min_temp: i64,
}

impl TemperatureFloor {
    /// Create the guardrail with the default 26 °C floor
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(TEMP_PATTERN)?,
            min_temp: DEFAULT_MIN_TEMP,
        })
    }

    /// Set the minimum temperature in °C
    pub fn with_min_temp(mut self, min_temp: i64) -> Self {
        self.min_temp = min_temp;
        self
    }

    fn verdict_for(&self, text: &str) -> GuardrailVerdict {
        let detected = self
            .pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse::<i64>().ok());

        match detected {
            Some(temp) => {
                let verdict = if temp < self.min_temp {
                    GuardrailVerdict::trip()
                } else {
                    GuardrailVerdict::pass()
                };
                verdict.with("detected_temp", temp).with("text", text)
            }
            None => GuardrailVerdict::pass()
                .with("detected_temp", Value::Null)
                .with("text", text),
        }
    }
}

#[async_trait]
impl Guardrail for TemperatureFloor {
    fn name(&self) -> &str {
        "temperature_floor"
    }

    async fn evaluate(&self, input: &RawInput) -> GuardrailVerdict {
        self.verdict_for(&input.normalize())
    }
}
