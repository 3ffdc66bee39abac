//! Container orchestration backend
//!
//! Actions talk to the external tool through the [`Orchestrator`] trait so that
//! the tool can be swapped through configuration or replaced by a mock in tests.

use std::fmt;
use tracing::{debug, info};

use crate::config::ComposeSettings;
use crate::error::OrchestratorError;

/// Bring the declared services up or stop them.
pub trait Orchestrator {
    /// Start services in detached mode
    fn up(&self) -> Result<(), OrchestratorError>;

    /// Stop services without removing them
    fn down(&self) -> Result<(), OrchestratorError>;
}

/// Fully resolved argv for one orchestration call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for ComposeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

impl ComposeCommand {
    /// Spawn the command, inheriting stdio, and block until it exits.
    pub fn run(&self) -> Result<(), OrchestratorError> {
        info!("Running `{}`", self);

        let output = duct::cmd(self.program.as_str(), &self.args)
            .unchecked()
            .run()
            .map_err(|source| OrchestratorError::Launch {
                command: self.to_string(),
                source,
            })?;

        debug!("`{}` exited with {}", self, output.status);

        if output.status.success() {
            Ok(())
        } else {
            Err(OrchestratorError::Status {
                command: self.to_string(),
                status: output.status,
            })
        }
    }
}

/// `docker compose` (or a compatible program) driven with fixed subcommands
#[derive(Debug, Clone)]
pub struct DockerCompose {
    settings: ComposeSettings,
}

impl DockerCompose {
    pub fn new(settings: &ComposeSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    /// Build `<program> compose [-f file] [-p project] <subcommand...>`
    pub fn command(&self, subcommand: &[&str]) -> ComposeCommand {
        let mut args = vec!["compose".to_string()];

        if let Some(file) = &self.settings.file {
            args.push("-f".to_string());
            args.push(file.display().to_string());
        }
        if let Some(project) = &self.settings.project_name {
            args.push("-p".to_string());
            args.push(project.clone());
        }
        args.extend(subcommand.iter().map(|s| s.to_string()));

        ComposeCommand {
            program: self.settings.program.clone(),
            args,
        }
    }

    pub fn up_command(&self) -> ComposeCommand {
        self.command(&["up", "-d"])
    }

    pub fn down_command(&self) -> ComposeCommand {
        self.command(&["stop"])
    }
}

impl Orchestrator for DockerCompose {
    fn up(&self) -> Result<(), OrchestratorError> {
        self.up_command().run()
    }

    fn down(&self) -> Result<(), OrchestratorError> {
        self.down_command().run()
    }
}
