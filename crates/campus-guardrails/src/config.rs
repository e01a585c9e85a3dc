//! Configuration for the screening chain

use serde::{Deserialize, Serialize};

use crate::{ClassTimingFilter, GuardrailChain, Result, SchoolGatekeeper, TemperatureFloor};

/// Configuration for the input screening system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Enable screening globally
    #[serde(default)]
    pub enabled: bool,

    /// Class-timing filter configuration
    #[serde(default)]
    pub class_timing: ClassTimingConfig,

    /// Temperature floor configuration
    #[serde(default)]
    pub temperature: TemperatureConfig,

    /// School gatekeeper configuration
    #[serde(default)]
    pub school_gate: SchoolGateConfig,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            class_timing: ClassTimingConfig::default(),
            temperature: TemperatureConfig::default(),
            school_gate: SchoolGateConfig::default(),
        }
    }
}

/// Class-timing filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassTimingConfig {
    /// Enable the class-timing filter
    #[serde(default)]
    pub enabled: bool,
}

impl Default for ClassTimingConfig {
    fn default() -> Self {
        Self { enabled: false }
    }
}

/// Temperature floor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureConfig {
    /// Enable the temperature floor
    #[serde(default)]
    pub enabled: bool,

    /// Minimum temperature in °C
    #[serde(default = "default_min_temp")]
    pub min_temp: i64,
}

fn default_min_temp() -> i64 {
    26
}

impl Default for TemperatureConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_temp: default_min_temp(),
        }
    }
}

/// School gatekeeper configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolGateConfig {
    /// Enable the school gatekeeper
    #[serde(default)]
    pub enabled: bool,
}

impl Default for SchoolGateConfig {
    fn default() -> Self {
        Self { enabled: false }
    }
}

impl ScreeningConfig {
    /// Build a guardrail chain from configuration
    ///
    /// Only enabled guardrails are added, in the fixed order
    /// class-timing, temperature, school-gate. Returns `None` when
    /// screening is disabled or no guardrail is enabled.
    pub fn build_chain(&self) -> Result<Option<GuardrailChain>> {
        if !self.enabled {
            return Ok(None);
        }

        let mut chain = GuardrailChain::new();

        if self.class_timing.enabled {
            chain = chain.with_guardrail(ClassTimingFilter::new());
        }

        if self.temperature.enabled {
            let guard = TemperatureFloor::new()?.with_min_temp(self.temperature.min_temp);
            chain = chain.with_guardrail(guard);
        }

        if self.school_gate.enabled {
            chain = chain.with_guardrail(SchoolGatekeeper::new()?);
        }

        if chain.is_empty() {
            Ok(None)
        } else {
            tracing::info!("Built screening chain with {} guardrails", chain.len());
            Ok(Some(chain))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScreeningConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.temperature.min_temp, 26);
    }

    #[test]
    fn test_build_chain_disabled() {
        let config = ScreeningConfig::default();
        let chain = config.build_chain().unwrap();
        assert!(chain.is_none());
    }

    #[test]
    fn test_build_chain_enabled_but_empty() {
        let config = ScreeningConfig {
            enabled: true,
            ..Default::default()
        };
        let chain = config.build_chain().unwrap();
        assert!(chain.is_none());
    }

    #[test]
    fn test_build_chain_with_guardrails() {
        let config = ScreeningConfig {
            enabled: true,
            class_timing: ClassTimingConfig { enabled: true },
            temperature: TemperatureConfig {
                enabled: true,
                min_temp: 20,
            },
            ..Default::default()
        };

        let chain = config.build_chain().unwrap();
        assert!(chain.is_some());
        assert_eq!(chain.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_configured_min_temp_is_applied() {
        let config = ScreeningConfig {
            enabled: true,
            temperature: TemperatureConfig {
                enabled: true,
                min_temp: 20,
            },
            ..Default::default()
        };

        let chain = config.build_chain().unwrap().unwrap();

        // 24 is below the default floor but above the configured one.
        let tripwire = chain
            .evaluate(&crate::RawInput::text("run at 24°C"))
            .await;
        assert!(tripwire.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = ScreeningConfig {
            enabled: true,
            school_gate: SchoolGateConfig { enabled: true },
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ScreeningConfig = serde_json::from_str(&json).unwrap();

        assert!(deserialized.enabled);
        assert!(deserialized.school_gate.enabled);
        assert!(!deserialized.class_timing.enabled);
    }

    #[test]
    fn test_config_from_partial_toml_style_json() {
        let json = r#"{"enabled": true, "temperature": {"enabled": true}}"#;
        let config: ScreeningConfig = serde_json::from_str(json).unwrap();

        assert!(config.temperature.enabled);
        assert_eq!(config.temperature.min_temp, 26);
    }
}
