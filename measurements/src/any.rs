//! Measurements whose dimension is only known at runtime.
//!
//! [`AnyMeasurement`] is a closed enum over the built-in dimensions. It is
//! what text input, configuration and serialized data are turned into before
//! the caller knows which concrete type to expect.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::MeasurementConfig;
use crate::error::{MeasurementError, MeasurementResult};
use crate::measurement::{Dimension, Measurement};
use crate::units::{Length, Speed, Time};

/// Name of the abstract base kind, which can never be instantiated.
pub const ABSTRACT_KIND: &str = "measurement";

/// Dimension names accepted by [`AnyMeasurement::new`].
pub const KINDS: [&str; 3] = ["length", "time", "speed"];

/// A measurement of any built-in dimension.
///
/// Serializes as `{"kind": "length", "quantity": 100.0, "unit": "cm"}`;
/// deserialization runs the same validation as [`AnyMeasurement::new`].
///
/// # Examples
///
/// ```
/// use measurements::{AnyMeasurement, Measurement};
///
/// let parsed = AnyMeasurement::new("time", 90.0, "min")?;
/// assert_eq!(parsed.as_measurement().standard_unit_quantity(), 5400.0);
///
/// assert!(AnyMeasurement::new("measurement", 1.0, "m").is_err());
/// # Ok::<(), measurements::MeasurementError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MeasurementRecord", into = "MeasurementRecord")]
pub enum AnyMeasurement {
    Length(Length),
    Time(Time),
    Speed(Speed),
}

impl AnyMeasurement {
    /// Builds a measurement of the dimension named `kind`.
    ///
    /// # Errors
    ///
    /// * `Construction` if `kind` is the abstract `"measurement"` or unknown
    /// * any error of the concrete constructor
    pub fn new(kind: &str, quantity: f64, unit: &str) -> MeasurementResult<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "length" => Length::new(quantity, unit).map(Self::Length),
            "time" => Time::new(quantity, unit).map(Self::Time),
            "speed" => Speed::new(quantity, unit).map(Self::Speed),
            ABSTRACT_KIND => Err(MeasurementError::Construction(
                "Class \"Measurement\" cannot be instantiated.".to_string(),
            )),
            other => Err(MeasurementError::Construction(format!(
                "Unknown measurement kind '{}', expected one of: {}",
                other,
                KINDS.join(", ")
            ))),
        }
    }

    /// Lower-case dimension name, as accepted by [`AnyMeasurement::new`].
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Length(_) => "length",
            Self::Time(_) => "time",
            Self::Speed(_) => "speed",
        }
    }

    /// The wrapped measurement as a trait object.
    pub fn as_measurement(&self) -> &dyn Measurement {
        match self {
            Self::Length(length) => length,
            Self::Time(time) => time,
            Self::Speed(speed) => speed,
        }
    }

    /// Converts to `unit`, keeping the dimension.
    pub fn convert_to(&self, unit: &str) -> MeasurementResult<Self> {
        match self {
            Self::Length(length) => length.convert_to(unit).map(Self::Length),
            Self::Time(time) => time.convert_to(unit).map(Self::Time),
            Self::Speed(speed) => speed.convert_to(unit).map(Self::Speed),
        }
    }

    /// Converts to the standard unit of the dimension.
    pub fn convert_to_standard(&self) -> MeasurementResult<Self> {
        self.convert_to(self.as_measurement().standard_unit())
    }

    /// Converts to the unit `config` prefers for this dimension.
    pub fn to_preferred(&self, config: &MeasurementConfig) -> MeasurementResult<Self> {
        let unit = config.preferred_unit(self.kind())?;
        debug!("Converting {} to preferred unit {}", self.kind(), unit);
        self.convert_to(&unit)
    }

    /// Equality by standard-unit quantity; fails across dimensions.
    pub fn is_equal_to(&self, other: &AnyMeasurement) -> MeasurementResult<bool> {
        let other = other.as_measurement();
        match self {
            Self::Length(length) => length.is_equal_to(other),
            Self::Time(time) => time.is_equal_to(other),
            Self::Speed(speed) => speed.is_equal_to(other),
        }
    }

    /// Ordering by standard-unit quantity; fails across dimensions.
    pub fn is_less_than(&self, other: &AnyMeasurement) -> MeasurementResult<bool> {
        let other = other.as_measurement();
        match self {
            Self::Length(length) => length.is_less_than(other),
            Self::Time(time) => time.is_less_than(other),
            Self::Speed(speed) => speed.is_less_than(other),
        }
    }

    /// Ordering by standard-unit quantity; fails across dimensions.
    pub fn is_greater_than(&self, other: &AnyMeasurement) -> MeasurementResult<bool> {
        let other = other.as_measurement();
        match self {
            Self::Length(length) => length.is_greater_than(other),
            Self::Time(time) => time.is_greater_than(other),
            Self::Speed(speed) => speed.is_greater_than(other),
        }
    }
}

impl fmt::Display for AnyMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(length) => fmt::Display::fmt(length, f),
            Self::Time(time) => fmt::Display::fmt(time, f),
            Self::Speed(speed) => fmt::Display::fmt(speed, f),
        }
    }
}

impl From<Length> for AnyMeasurement {
    fn from(value: Length) -> Self {
        Self::Length(value)
    }
}

impl From<Time> for AnyMeasurement {
    fn from(value: Time) -> Self {
        Self::Time(value)
    }
}

impl From<Speed> for AnyMeasurement {
    fn from(value: Speed) -> Self {
        Self::Speed(value)
    }
}

/// Serialized form of [`AnyMeasurement`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub kind: String,
    pub quantity: f64,
    pub unit: String,
}

impl TryFrom<MeasurementRecord> for AnyMeasurement {
    type Error = MeasurementError;

    fn try_from(record: MeasurementRecord) -> Result<Self, Self::Error> {
        Self::new(&record.kind, record.quantity, &record.unit)
    }
}

impl From<AnyMeasurement> for MeasurementRecord {
    fn from(value: AnyMeasurement) -> Self {
        let measurement = value.as_measurement();
        Self {
            kind: value.kind().to_string(),
            quantity: measurement.quantity(),
            unit: measurement.unit().to_string(),
        }
    }
}
