//! Measurement configuration file support.
//!
//! Reads the preferred display unit of each dimension from TOML:
//!
//! ```toml
//! [preferred]
//! length = "km"
//! time = "h"
//! speed = "m/s"
//! ```
//!
//! Dimensions left out fall back to their standard unit.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{MeasurementError, MeasurementResult};
use crate::unit::UnitTable;
use crate::units::{LENGTH_UNITS, SPEED_UNITS, TIME_UNITS};
use crate::validator::Validator;

/// Measurement configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementConfig {
    #[serde(default)]
    pub preferred: PreferredUnits,
}

/// Preferred unit abbreviation per dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferredUnits {
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub speed: Option<String>,
}

impl MeasurementConfig {
    /// Load the configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(MeasurementConfig)` if the file was read, parsed and validated
    /// * `Err(MeasurementError::Configuration)` if it cannot be read or parsed
    /// * `Err(MeasurementError::InvalidUnit)` if a preferred unit is unknown
    pub fn from_file<P: AsRef<Path>>(path: P) -> MeasurementResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            MeasurementError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml_str(&content)?;
        info!("Loaded measurement config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate the configuration from TOML text.
    pub fn from_toml_str(content: &str) -> MeasurementResult<Self> {
        let config: MeasurementConfig = toml::from_str(content).map_err(|e| {
            MeasurementError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks every preferred unit against its dimension's table.
    pub fn validate(&self) -> MeasurementResult<()> {
        let validator = Validator::new();
        let entries = [
            (&LENGTH_UNITS, &self.preferred.length),
            (&TIME_UNITS, &self.preferred.time),
            (&SPEED_UNITS, &self.preferred.speed),
        ];

        for (table, unit) in entries {
            if let Some(unit) = unit {
                validator.validate_unit(unit, table)?;
            }
        }
        Ok(())
    }

    /// The preferred unit of the dimension named `kind`, or its standard unit.
    pub fn preferred_unit(&self, kind: &str) -> MeasurementResult<String> {
        let (table, preferred): (&UnitTable, &Option<String>) = match kind {
            "length" => (&LENGTH_UNITS, &self.preferred.length),
            "time" => (&TIME_UNITS, &self.preferred.time),
            "speed" => (&SPEED_UNITS, &self.preferred.speed),
            other => {
                return Err(MeasurementError::Configuration(format!(
                    "No preferred unit setting for dimension '{}'",
                    other
                )))
            }
        };

        match preferred {
            Some(unit) => Ok(unit.clone()),
            None => table
                .standard_unit()
                .map(|unit| unit.abbr().to_string())
                .ok_or(MeasurementError::MissingStandardUnit(table.name())),
        }
    }
}
