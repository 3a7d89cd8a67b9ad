mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

/// Loads the YAML file named by `CONFIG_PATH` (if it exists), then applies
/// environment overrides.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let config = load_file(&config_path).await?;

    apply_env_overrides(config, |key| env::var(key).ok())
}

/// Exports the variables of a dotenv file into the process environment.
/// Variables already set are left alone; a missing file is not an error.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!("Loaded environment from {}", path.display());
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::config(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Reads a YAML config file. A missing file yields the defaults.
pub async fn load_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Overrides file values with `HOST`, `PORT`, `EMAIL`, `GEMINI_API_KEY`,
/// `LLM_BASE_URL`, `LLM_MODEL` and `LLM_TIMEOUT_SECS` when set.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("PORT must be a valid port number, got '{port}'")))?;
    }
    if let Some(email) = lookup("EMAIL") {
        config.server.official_email = email;
    }
    if let Some(api_key) = lookup("GEMINI_API_KEY") {
        config.llm.api_key = api_key;
    }
    if let Some(base_url) = lookup("LLM_BASE_URL") {
        config.llm.base_url = base_url;
    }
    if let Some(model) = lookup("LLM_MODEL") {
        config.llm.model = model;
    }
    if let Some(secs) = lookup("LLM_TIMEOUT_SECS") {
        config.llm.timeout_secs = secs.parse().map_err(|_| {
            Error::config(format!("LLM_TIMEOUT_SECS must be a whole number, got '{secs}'"))
        })?;
    }

    validate(&config)?;

    Ok(config)
}

/// A zero timeout would fail every AI request before it is sent.
pub fn validate(config: &Config) -> Result<()> {
    if config.llm.timeout_secs == 0 {
        return Err(Error::config("llm.timeout_secs must be at least 1"));
    }
    Ok(())
}
