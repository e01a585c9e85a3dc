//! Configuration-Based Screening
//!
//! Shows how to build the screening chain from a configuration struct
//! instead of hardcoding guardrails in code.
//!
//! Run with:
//! ```bash
//! cargo run -p campus-guardrails --example config_based
//! ```

use campus_guardrails::config::{
    ClassTimingConfig, SchoolGateConfig, ScreeningConfig, TemperatureConfig,
};
use campus_guardrails::RawInput;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("⚙️  Configuration-Based Screening Demo\n");

    let config = ScreeningConfig {
        enabled: true,
        class_timing: ClassTimingConfig { enabled: true },
        temperature: TemperatureConfig {
            enabled: true,
            min_temp: 26,
        },
        school_gate: SchoolGateConfig { enabled: true },
    };

    let chain = config.build_chain()?;

    if let Some(chain) = chain {
        println!("✓ Built screening chain with {} guardrails\n", chain.len());

        let inputs = [
            "What is on the lunch menu?",
            "I want to change my class timings 😭😭",
            "Child: I want to go for a run at 24°C",
            "Student from Other School wants to enter the premises",
        ];

        for text in inputs {
            match chain.evaluate(&RawInput::text(text)).await {
                Some(tripwire) => println!("✗ {:?}: blocked by {}", text, tripwire.guardrail),
                None => println!("✓ {:?}: passed", text),
            }
        }
    } else {
        println!("No screening configured");
    }

    println!("\nConfiguration as JSON:");
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
