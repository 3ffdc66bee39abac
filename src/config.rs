use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `DEVSTACK__COMPOSE__PROGRAM=podman`
pub const ENV_PREFIX: &str = "DEVSTACK";

/// Default config file name (extension resolved by the `config` crate)
pub const DEFAULT_CONFIG_NAME: &str = "devstack";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub compose: ComposeSettings,
    pub log_level: String,
    /// `text` or `json`
    pub log_format: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComposeSettings {
    /// Orchestration executable, looked up on PATH
    pub program: String,
    /// Compose file passed as `-f`
    pub file: Option<PathBuf>,
    /// Project name passed as `-p`
    pub project_name: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            compose: ComposeSettings::default(),
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Default for ComposeSettings {
    fn default() -> Self {
        Self {
            program: "docker".to_string(),
            file: None,
            project_name: None,
        }
    }
}

/// Load settings from the optional config file and `DEVSTACK__*` environment variables.
///
/// A missing config file is not an error; without file or environment the
/// defaults run plain `docker compose`.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    load_settings_with_env(
        path,
        config::Environment::with_prefix(ENV_PREFIX).separator("__"),
    )
}

fn load_settings_with_env(path: &Path, env: config::Environment) -> anyhow::Result<Settings> {
    let config = config::Config::builder()
        .add_source(config::File::with_name(&path.to_string_lossy()).required(false))
        .add_source(env)
        .build()?;

    let settings: Settings = config.try_deserialize()?;
    validate_settings(&settings)?;

    Ok(settings)
}

fn validate_settings(settings: &Settings) -> anyhow::Result<()> {
    if settings.compose.program.trim().is_empty() {
        anyhow::bail!("compose.program cannot be empty");
    }

    match settings.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log_format '{}': expected 'text' or 'json'", other),
    }

    if let Some(project) = &settings.compose.project_name {
        if project.trim().is_empty() {
            anyhow::bail!("compose.project_name cannot be empty when set");
        }
    }

    Ok(())
}
