use super::{display::DisplayConfig, ranking::RankingConfig, traits::ConfigSection};
use crate::error::FocusError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of environment overrides, e.g. `FOCUS_FINDER_DISPLAY__LANGUAGE=de`.
pub const ENV_PREFIX: &str = "FOCUS_FINDER";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub ranking: RankingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), FocusError> {
        self.display.validate()?;
        self.ranking.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Defaults, then the optional TOML file, then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, FocusError> {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        Self::from_sources(path, Some(env))
    }

    /// Defaults overlaid with a TOML file only.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, FocusError> {
        Self::from_sources(Some(path.as_ref()), None)
    }

    fn from_sources(path: Option<&Path>, env: Option<Environment>) -> Result<Self, FocusError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            if !path.exists() {
                return Err(FocusError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        log::debug!("loaded configuration: {:?}", config);
        Ok(Self { config })
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Apply `f` and keep the result only if it validates.
    pub fn update<F>(&mut self, f: F) -> Result<(), FocusError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, FocusError> {
        Ok(toml::to_string_pretty(&self.config)?)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
