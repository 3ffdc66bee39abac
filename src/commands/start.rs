use anyhow::Result;
use colored::Colorize;
use devstack::error::InfraError;
use devstack::orchestrator::Orchestrator;
use tracing::{error, info};

/// Execute the start command
///
/// Runs `compose up -d` once and blocks until it returns. Already-running
/// services are left to the orchestration tool.
pub fn execute(orchestrator: &dyn Orchestrator) -> Result<()> {
    info!("Starting docker infrastructure");

    orchestrator.up().map_err(|e| {
        error!(exit_code = ?e.exit_code(), "Failed to start infrastructure: {}", e);
        InfraError::Start(e)
    })?;

    println!("{}", "✅ Docker infrastructure started".green());
    info!("Docker infrastructure started");
    Ok(())
}
