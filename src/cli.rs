use devstack::config::DEFAULT_CONFIG_NAME;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Positional token selecting the stop action
pub const DOWN_TOKEN: &str = "down";

/// Environment variable naming the config file (extension optional)
pub const CONFIG_PATH_ENV: &str = "DEVSTACK_CONFIG";

/// Infrastructure action selected from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
}

impl Action {
    /// Pick the action from the raw arguments (program name excluded).
    ///
    /// Only an exact `down` as the first argument stops. Everything else,
    /// including `--`, flags and typos, falls through to start.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        match args.into_iter().next() {
            Some(first) if first.as_ref() == OsStr::new(DOWN_TOKEN) => Action::Stop,
            _ => Action::Start,
        }
    }
}

/// Command line invocation: raw arguments plus the config file location
#[derive(Debug, Clone)]
pub struct Cli {
    pub config: PathBuf,
    pub args: Vec<OsString>,
}

impl Cli {
    /// Read the process arguments and `DEVSTACK_CONFIG`
    pub fn from_env() -> Self {
        Self::new(env::args_os().skip(1), env::var_os(CONFIG_PATH_ENV))
    }

    pub fn new<I, S>(args: I, config: Option<OsString>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            config: config
                .filter(|path| !path.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME)),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the action to execute, defaulting to Start
    pub fn action(&self) -> Action {
        Action::from_args(&self.args)
    }
}
