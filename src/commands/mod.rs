//! Command implementations for the CLI
//!
//! - start: bring the compose stack up in detached mode
//! - stop: stop the compose stack without removing containers

pub mod start;
pub mod stop;
