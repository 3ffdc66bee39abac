use anyhow::Result;
use colored::Colorize;
use devstack::error::InfraError;
use devstack::orchestrator::Orchestrator;
use tracing::{error, info};

/// Execute the stop command (`compose stop`, containers are kept)
pub fn execute(orchestrator: &dyn Orchestrator) -> Result<()> {
    info!("Stopping docker infrastructure");

    orchestrator.down().map_err(|e| {
        error!(exit_code = ?e.exit_code(), "Failed to stop infrastructure: {}", e);
        InfraError::Stop(e)
    })?;

    println!("{}", "✅ Docker infrastructure stopped".green());
    info!("Docker infrastructure stopped");
    Ok(())
}
