use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure of a single orchestration tool invocation
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The process could not be spawned (not found, not executable, ...)
    #[error("could not run `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },
    /// The process ran and exited unsuccessfully
    #[error("command `{command}` returned non-zero {status}")]
    Status { command: String, status: ExitStatus },
}

impl OrchestratorError {
    /// Exit code of the child, if it exited normally
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Launch { .. } => None,
            Self::Status { status, .. } => status.code(),
        }
    }
}

/// Infrastructure action errors, as reported to the user
#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Failed to start infrastructure: {0}")]
    Start(#[source] OrchestratorError),
    #[error("Failed to stop infrastructure: {0}")]
    Stop(#[source] OrchestratorError),
}
