//! Input validation for measurements.
//!
//! The [`Validator`] is a stateless rule checker. Every check returns
//! `Ok(..)` or the [`MeasurementError`] describing the first violation; the
//! measurement core runs all checks before it stores anything, so a failed
//! check never leaves a half-built value behind.

use log::debug;

use crate::decimal::scaled_div;
use crate::error::{MeasurementError, MeasurementResult};
use crate::measurement::{Dimension, Measurement};
use crate::unit::{Unit, UnitTable};
use crate::units::KNOWN_UNIT_TABLES;

const QUANTITY_MESSAGE: &str = "Quantity must be a number greater than 0.";

/// Validator for measurement inputs.
///
/// Holds the fixed set of recognized unit tables. Tables are matched by
/// identity, so a copy of a known table with the same units is still
/// rejected.
///
/// # Examples
///
/// ```
/// use measurements::units::LENGTH_UNITS;
/// use measurements::Validator;
///
/// let validator = Validator::new();
/// assert!(validator.validate_units(&LENGTH_UNITS).is_ok());
/// assert!(validator.validate_quantity(-5.0).is_err());
/// assert_eq!(validator.validate_unit("cm", &LENGTH_UNITS).unwrap().ratio(), 0.01);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    tables: &'static [&'static UnitTable],
}

impl Validator {
    /// Creates a validator recognizing the built-in length, time and speed tables.
    pub fn new() -> Self {
        Self::with_tables(&KNOWN_UNIT_TABLES)
    }

    /// Creates a validator recognizing exactly `tables`.
    pub const fn with_tables(tables: &'static [&'static UnitTable]) -> Self {
        Self { tables }
    }

    /// The recognized unit tables.
    pub fn tables(&self) -> &'static [&'static UnitTable] {
        self.tables
    }

    /// Validates that `table` is one of the recognized unit tables.
    pub fn validate_units(&self, table: &UnitTable) -> MeasurementResult<()> {
        if self.tables.iter().any(|known| known.is(table)) {
            Ok(())
        } else {
            debug!("Rejected unrecognized unit table '{}'", table.name());
            Err(MeasurementError::InvalidUnits(
                "Units must be a reference to one of the unit tables.".to_string(),
            ))
        }
    }

    /// Validates that `quantity` is a finite number greater than zero.
    ///
    /// # Errors
    ///
    /// * `TypeMismatch` for NaN and infinities
    /// * `Range` for zero and negative values
    pub fn validate_quantity(&self, quantity: f64) -> MeasurementResult<()> {
        if !quantity.is_finite() {
            Err(MeasurementError::TypeMismatch(QUANTITY_MESSAGE.to_string()))
        } else if quantity <= 0.0 {
            Err(MeasurementError::Range(QUANTITY_MESSAGE.to_string()))
        } else {
            Ok(())
        }
    }

    /// Validates a derived standard-unit quantity.
    ///
    /// The value must be finite, positive, and stay finite and positive when
    /// expressed in every unit of `table`, so that any later conversion
    /// within the table succeeds.
    pub fn validate_standard_quantity(
        &self,
        standard_quantity: f64,
        table: &UnitTable,
    ) -> MeasurementResult<()> {
        let representable = |value: f64| value.is_finite() && value > 0.0;

        if !representable(standard_quantity) {
            return Err(MeasurementError::Range(format!(
                "Quantity is out of range: {} in the standard unit of {}.",
                standard_quantity,
                table.name()
            )));
        }
        for unit in table.units() {
            if !representable(scaled_div(standard_quantity, unit.ratio())) {
                return Err(MeasurementError::Range(format!(
                    "Quantity is out of range: {} cannot be expressed in '{}'.",
                    standard_quantity,
                    unit.abbr()
                )));
            }
        }
        Ok(())
    }

    /// Validates that `abbr` names a unit of `table` and returns that unit.
    ///
    /// The error lists every valid abbreviation of the table.
    pub fn validate_unit(&self, abbr: &str, table: &UnitTable) -> MeasurementResult<&'static Unit> {
        table.find(abbr).ok_or_else(|| MeasurementError::InvalidUnit {
            unit: abbr.to_string(),
            valid: table.abbreviations().collect(),
        })
    }

    /// Validates that `candidate` is exactly of the concrete dimension type `D`.
    ///
    /// Being *some* measurement is not enough: checking a time against
    /// `Length` fails.
    pub fn validate_measurement<'a, D: Dimension>(
        &self,
        candidate: &'a dyn Measurement,
    ) -> MeasurementResult<&'a D> {
        candidate.as_any().downcast_ref::<D>().ok_or_else(|| {
            MeasurementError::TypeMismatch(format!(
                "The measurement must be of the type {}, found {}",
                D::NAME,
                candidate.kind()
            ))
        })
    }

    /// Validates that all measurements in `list` share one concrete type.
    ///
    /// Empty and single-element lists are trivially homogeneous.
    pub fn validate_homogeneous_measurement_list(
        &self,
        list: &[&dyn Measurement],
    ) -> MeasurementResult<()> {
        for pair in list.windows(2) {
            if pair[0].as_any().type_id() != pair[1].as_any().type_id() {
                return Err(MeasurementError::HeterogeneousList(format!(
                    "Measurements must be of the same type, found {} and {}",
                    pair[0].kind(),
                    pair[1].kind()
                )));
            }
        }
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
