//! Screening Demo
//!
//! Runs three agents with input guardrails against inputs that are
//! expected to trip them, plus a pair that pass.
//!
//! Run with:
//! ```bash
//! cargo run -p campus-runtime --example screening_demo
//! ```

use campus_guardrails::{ClassTimingFilter, RawInput, SchoolGatekeeper, TemperatureFloor};
use campus_runtime::{Agent, RunOutcome};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("🛡️  Input Screening Demo\n");

    let schedule_agent = Agent::builder()
        .name("schedule-assistant")
        .instructions("Help students with schedule questions.")
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

    println!("=== Exercise 1: Class timings ===");
    report(
        &schedule_agent,
        schedule_agent
            .run(RawInput::text("I want to change my class timings 😭😭"))
            .await,
    );

    println!("\n=== Exercise 2: Temperature floor ===");
    report(
        &outdoor_agent,
        outdoor_agent
            .run(RawInput::text("Child: I want to go for a run at 24°C"))
            .await,
    );
    report(
        &outdoor_agent,
        outdoor_agent.run(RawInput::text("It is 30 degrees today")).await,
    );

    println!("\n=== Exercise 3: School gatekeeper ===");
    report(
        &gatekeeper_agent,
        gatekeeper_agent
            .run(RawInput::text("Student from Other School wants to enter the premises"))
            .await,
    );
    report(
        &gatekeeper_agent,
        gatekeeper_agent
            .run(RawInput::text("I am a my school student visiting"))
            .await,
    );

    println!("\n✅ Screening demo complete!");

    Ok(())
}

fn report(agent: &Agent, outcome: RunOutcome) {
    match outcome {
        RunOutcome::Blocked(tripwire) => {
            println!(
                "✗ {}: blocked by {} ({})",
                agent.name(),
                tripwire.guardrail,
                tripwire.reason().unwrap_or("no reason recorded")
            );
        }
        RunOutcome::Proceed { .. } => {
            println!("✓ {}: input passed, agent would proceed", agent.name());
        }
    }
}
