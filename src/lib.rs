//! Mouse Keepalive - keeps the session awake, one tiny cursor move at a time.
//!
//! A periodic tick nudges the cursor so the OS never considers the machine
//! idle, while a guard keeps the cursor over whichever window has focus.
//! The OS itself sits behind the [`platform`] traits.

pub mod agent;
pub mod movement;
pub mod platform;
pub mod session;

pub use agent::{Agent, AgentConfig, MovementStrategy};
pub use session::{dispatch_tick, run_session, TickOutcome, FAILURE_EXIT_CODE};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const APP_NAME: &str = "Mouse Keepalive";

/// Line shown in the main window.
pub fn about_text() -> String {
    format!("{} version {}", APP_NAME, env!("CARGO_PKG_VERSION"))
}

/// Initialize tracing/logging
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mouse_keepalive=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Validate `config` and run it on `host`. Returns the process exit code.
pub fn run<H: platform::Host + ?Sized>(host: &H, config: &AgentConfig) -> anyhow::Result<i32> {
    config.validate()?;
    tracing::info!("Agent configuration: {}", serde_json::to_string(config)?);
    Ok(run_session(host, config))
}
