use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use tracing::debug;

mod cli;
mod commands;

use devstack::{config, init_tracing, orchestrator::DockerCompose};

fn main() -> ExitCode {
    // Arguments are not parsed as options: only the first token selects the action
    let args = cli::Cli::from_env();

    // Single point of process termination: any failure is reported here and exits 1
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", format!("❌ {}", e).red());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Cli) -> Result<()> {
    let settings = config::load_settings(&args.config)?;

    init_tracing(&settings.log_level, &settings.log_format);
    debug!("Loaded settings: {:?}", settings);

    let orchestrator = DockerCompose::new(&settings.compose);

    // Dispatch to appropriate command handler
    match args.action() {
        cli::Action::Start => commands::start::execute(&orchestrator),
        cli::Action::Stop => commands::stop::execute(&orchestrator),
    }
}
