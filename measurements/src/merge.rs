//! Combining measurements of one dimension.
//!
//! Merging adds standard-unit quantities and converts the sum into the
//! requested unit; it is built entirely on the public operations of
//! [`Dimension`].

use log::debug;

use crate::error::{MeasurementError, MeasurementResult};
use crate::measurement::{Dimension, Measurement};
use crate::validator::Validator;

/// Merges two measurements of the same type into one expressed in `unit`.
pub fn merge_into<D: Dimension>(first: &D, second: &D, unit: &str) -> MeasurementResult<D> {
    let total = first.core().standard_unit_quantity() + second.core().standard_unit_quantity();
    from_standard_total(total, unit)
}

/// Merges every measurement of `list` into one of type `D` expressed in `unit`.
///
/// # Errors
///
/// * `HeterogeneousList` if the list mixes dimensions
/// * `TypeMismatch` if the list is homogeneous but not of type `D`
/// * `Range` for an empty list, whose total is zero
///
/// # Examples
///
/// ```
/// use measurements::merge::merge_all;
/// use measurements::{Length, Measurement};
///
/// let parts = [Length::new(1.0, "m")?, Length::new(50.0, "cm")?];
/// let list: Vec<&dyn Measurement> = parts.iter().map(|p| p as &dyn Measurement).collect();
///
/// let total: Length = merge_all(&list, "cm")?;
/// assert_eq!(total.quantity(), 150.0);
/// # Ok::<(), measurements::MeasurementError>(())
/// ```
pub fn merge_all<D: Dimension>(list: &[&dyn Measurement], unit: &str) -> MeasurementResult<D> {
    let validator = Validator::new();
    validator.validate_homogeneous_measurement_list(list)?;

    let mut total = 0.0;
    for item in list {
        total += validator
            .validate_measurement::<D>(*item)?
            .core()
            .standard_unit_quantity();
    }
    debug!("Merging {} {} measurements into {}", list.len(), D::NAME, unit);
    from_standard_total(total, unit)
}

fn from_standard_total<D: Dimension>(total: f64, unit: &str) -> MeasurementResult<D> {
    let units = D::unit_table();
    let standard_unit = units
        .standard_unit()
        .ok_or(MeasurementError::MissingStandardUnit(units.name()))?;
    D::from_quantity(total, standard_unit.abbr())?.convert_to(unit)
}

/// Merge as a method on every concrete dimension.
pub trait Merge: Dimension {
    /// Merges `other` into this measurement, returning a new one in `unit`.
    ///
    /// Fails with `TypeMismatch` if `other` is not of this dimension.
    ///
    /// ```
    /// use measurements::{Length, Measurement, Merge};
    ///
    /// let merged = Length::new(100.0, "cm")?.merge_with_into(&Length::new(50.0, "cm")?, "m")?;
    /// assert_eq!(merged.quantity(), 1.5);
    /// assert_eq!(merged.unit(), "m");
    /// # Ok::<(), measurements::MeasurementError>(())
    /// ```
    fn merge_with_into(&self, other: &dyn Measurement, unit: &str) -> MeasurementResult<Self> {
        let other = Validator::new().validate_measurement::<Self>(other)?;
        merge_into(self, other, unit)
    }
}

impl<D: Dimension> Merge for D {}
