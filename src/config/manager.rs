use super::{constraints::ConstraintConfig, evolution::EvolutionConfig, traits::ConfigSection};
use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `ROSTERGEN__EVOLUTION__SEED=7`
pub const ENV_PREFIX: &str = "ROSTERGEN";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub constraints: ConstraintConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), RosterError> {
        validate_section(&self.evolution)?;
        validate_section(&self.constraints)?;
        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, RosterError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }
}

/// Prefix configuration errors with the TOML table they come from
fn validate_section<S: ConfigSection>(section: &S) -> Result<(), RosterError> {
    section.validate().map_err(|e| match e {
        RosterError::Configuration(msg) => {
            RosterError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML file, then apply `ROSTERGEN__<SECTION>__<FIELD>` environment overrides.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RosterError> {
        let settings = config::Config::builder()
            .add_source(
                config::File::from(path.as_ref())
                    .format(config::FileFormat::Toml)
                    .required(true),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        log::info!("Loaded configuration from {}", path.as_ref().display());

        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        Ok(())
    }

    /// Defaults plus environment overrides, for runs without a config file
    pub fn load_from_env(&self) -> Result<(), RosterError> {
        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RosterError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| RosterError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Apply an edit; the edit is rolled back if the result does not validate.
    pub fn update<F>(&self, f: F) -> Result<(), RosterError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
