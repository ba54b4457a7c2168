mod types;

pub use types::*;

use crate::{Error, Result, scenario::ScenarioId};
use std::{env, path::PathBuf};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "contract-smoke.yaml";

/// Loads configuration from `explicit_path`, then `CONFIG_PATH`, then the
/// default file name. Only the default file is allowed to be absent.
pub async fn load(explicit_path: Option<PathBuf>) -> Result<Config> {
    let (config_path, required) = match explicit_path {
        Some(path) => (path, true),
        None => match env::var("CONFIG_PATH") {
            Ok(path) => (PathBuf::from(path), true),
            Err(_) => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        },
    };

    debug!("Loading configuration from: {}", config_path.display());

    let config_str = match tokio::fs::read_to_string(&config_path).await {
        Ok(s) => s,
        Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No configuration file found, using defaults");
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    let config: Config = serde_yaml::from_str(&config_str)?;
    Ok(config)
}

/// Command-line values layered on top of the file configuration.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub log_level: Option<String>,
    pub strict: bool,
    pub extended: bool,
    pub skip: Vec<String>,
}

impl Config {
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(base_url) = overrides.base_url {
            self.target.base_url = base_url;
        }
        if let Some(level) = overrides.log_level {
            self.logs.level = level;
        }
        self.checks.strict |= overrides.strict;
        self.checks.extended |= overrides.extended;
        self.checks.skip.extend(overrides.skip);
        self
    }

    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.target.base_url).map_err(|e| {
            Error::config(format!("Invalid base URL '{}': {}", self.target.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        for id in &self.checks.skip {
            id.parse::<ScenarioId>()?;
        }

        Ok(())
    }
}
