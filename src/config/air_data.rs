use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::utils::ISA_SEA_LEVEL_DENSITY;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid air data configuration: {0}")]
    ValidationError(String),
}

/// Where the angle-of-attack and sideslip time derivatives come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateEstimation {
    /// Supplied by another stage through `AeroAngleRates` or the store.
    #[default]
    External,
    /// Backward difference of successive alpha/beta over the fixed timestep.
    FiniteDifference,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirDataConfig {
    /// Sea-level reference density used for equivalent airspeed (kg/m³).
    pub sea_level_density: f64,
    /// Log a warning whenever a computed quantity is NaN or infinite.
    pub warn_on_non_finite: bool,
    pub rate_estimation: RateEstimation,
}

impl Default for AirDataConfig {
    fn default() -> Self {
        Self {
            sea_level_density: ISA_SEA_LEVEL_DENSITY,
            warn_on_non_finite: true,
            rate_estimation: RateEstimation::External,
        }
    }
}

impl AirDataConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sea_level_density.is_finite() || self.sea_level_density <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "sea_level_density must be positive, got {}",
                self.sea_level_density
            )));
        }
        Ok(())
    }
}
