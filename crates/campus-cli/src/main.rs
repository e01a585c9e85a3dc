//! Campusgate CLI
//!
//! Wires configuration, logging and the built-in guardrails together
//! and runs the three screening exercises.

use campus_core::{config::load_config_or_default, logging::init_logging};
use campus_guardrails::{ClassTimingFilter, RawInput, SchoolGatekeeper, TemperatureFloor};
use campus_runtime::{Agent, RunOutcome};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = load_config_or_default("config.toml");
    init_logging(&config.logging);

    println!("🤖 Campusgate v{}", env!("CARGO_PKG_VERSION"));

    let schedule_agent = Agent::builder()
        .name(config.assistant.name.clone())
        .instructions(config.assistant.instructions.clone())
        .guardrail(ClassTimingFilter::new())
        .build();

    let outdoor_agent = Agent::builder()
        .name("outdoor-run-assistant")
        .instructions("Decide if the child may go for a run based on temperature.")
        .guardrail(TemperatureFloor::new()?)
        .build();

    let gatekeeper_agent = Agent::builder()
        .name("entry-gatekeeper")
        .instructions("Only admit students of our own school.")
        .guardrail(SchoolGatekeeper::new()?)
        .build();

    let exercises = [
        (&schedule_agent, "I want to change my class timings 😭😭"),
        (&outdoor_agent, "Child: I want to go for a run at 24°C"),
        (&gatekeeper_agent, "Student from Other School wants to enter the premises"),
    ];

    for (agent, text) in exercises {
        match agent.run(RawInput::text(text)).await {
            RunOutcome::Blocked(tripwire) => {
                tracing::info!(
                    "{}: tripwire {} fired ({})",
                    agent.name(),
                    tripwire.guardrail,
                    tripwire.reason().unwrap_or("no reason recorded")
                );
                println!("✗ {}: blocked by {}", agent.name(), tripwire.guardrail);
            }
            RunOutcome::Proceed { .. } => {
                println!("✓ {}: input passed, agent would proceed", agent.name());
            }
        }
    }

    Ok(())
}
