//! The measurement core.
//!
//! A measurement is an immutable value: a positive quantity in a unit drawn
//! from one dimension's [`UnitTable`], plus the same quantity expressed in
//! the table's standard unit. The standard-unit quantity is derived once, at
//! construction, and is the only value conversion and comparison look at.
//!
//! Two traits split the surface:
//!
//! - [`Dimension`] is implemented by each concrete measurement type
//!   (`Length`, `Time`, `Speed`). It binds the unit table, supplies the
//!   rendering, and provides the typed operations (`convert_to`,
//!   `is_equal_to`, …), which always return the implementing type.
//! - [`Measurement`] is the object-safe read view every dimension gets for
//!   free. Comparisons take `&dyn Measurement` so that mixing dimensions is a
//!   reported error rather than a silent `false`.
//!
//! [`MeasurementCore`] can only be built inside this crate, so the abstract
//! form is never observable on its own.

use std::any::Any;
use std::fmt;

use log::{debug, error};

use crate::decimal::{scaled_div, scaled_mul};
use crate::error::{MeasurementError, MeasurementResult};
use crate::unit::{Unit, UnitTable};
use crate::validator::Validator;

/// State shared by every concrete measurement.
///
/// All fields are set once by [`MeasurementCore::new`] and never change.
#[derive(Debug, Clone, Copy)]
pub struct MeasurementCore {
    quantity: f64,
    unit: &'static Unit,
    standard_unit: &'static Unit,
    standard_unit_quantity: f64,
    units: &'static UnitTable,
}

impl MeasurementCore {
    /// Validates the inputs and derives the standard-unit quantity.
    ///
    /// Order of checks: unit table, standard unit, quantity, unit, derived
    /// standard-unit quantity.
    pub(crate) fn new(
        quantity: f64,
        unit: &str,
        units: &'static UnitTable,
    ) -> MeasurementResult<Self> {
        Self::with_validator(&Validator::new(), quantity, unit, units)
    }

    /// Same as [`MeasurementCore::new`], checked by `validator`.
    pub(crate) fn with_validator(
        validator: &Validator,
        quantity: f64,
        unit: &str,
        units: &'static UnitTable,
    ) -> MeasurementResult<Self> {
        validator.validate_units(units)?;
        let standard_unit = units.standard_unit().ok_or_else(|| {
            error!("Unit table '{}' has no unit with ratio 1", units.name());
            MeasurementError::MissingStandardUnit(units.name())
        })?;
        validator.validate_quantity(quantity)?;
        let unit = validator.validate_unit(unit, units)?;

        let standard_unit_quantity = scaled_mul(quantity, unit.ratio());
        validator.validate_standard_quantity(standard_unit_quantity, units)?;
        debug!(
            "Created {} measurement {}{} = {}{}",
            units.name(),
            quantity,
            unit.abbr(),
            standard_unit_quantity,
            standard_unit.abbr()
        );

        Ok(Self {
            quantity,
            unit,
            standard_unit,
            standard_unit_quantity,
            units,
        })
    }

    /// The quantity, in [`MeasurementCore::unit`].
    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Abbreviation of the unit the quantity is expressed in.
    #[inline]
    pub fn unit(&self) -> &'static str {
        self.unit.abbr()
    }

    /// Abbreviation of the table's standard unit.
    #[inline]
    pub fn standard_unit(&self) -> &'static str {
        self.standard_unit.abbr()
    }

    /// The quantity expressed in the standard unit.
    #[inline]
    pub fn standard_unit_quantity(&self) -> f64 {
        self.standard_unit_quantity
    }

    /// The unit table this measurement is bound to.
    #[inline]
    pub fn units(&self) -> &'static UnitTable {
        self.units
    }

    /// The equivalent quantity in `unit`, which must belong to the bound table.
    pub fn quantity_in(&self, unit: &str) -> MeasurementResult<f64> {
        let target = Validator::new().validate_unit(unit, self.units)?;
        let quantity = scaled_div(self.standard_unit_quantity, target.ratio());
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(MeasurementError::Range(format!(
                "Quantity is out of range: {}{} cannot be expressed in '{}'.",
                self.standard_unit_quantity,
                self.standard_unit.abbr(),
                target.abbr()
            )));
        }
        Ok(quantity)
    }
}

/// Object-safe read access to any measurement.
///
/// Implemented for every [`Dimension`]; there is no other way to implement it.
pub trait Measurement: fmt::Debug {
    /// Name of the concrete dimension type, e.g. `"Length"`.
    fn kind(&self) -> &'static str;

    /// The quantity, in [`Measurement::unit`].
    fn quantity(&self) -> f64;

    /// Abbreviation of the unit.
    fn unit(&self) -> &'static str;

    /// Abbreviation of the standard unit of this dimension.
    fn standard_unit(&self) -> &'static str;

    /// The quantity expressed in the standard unit.
    fn standard_unit_quantity(&self) -> f64;

    /// Text rendering supplied by the concrete dimension.
    fn describe(&self) -> MeasurementResult<String>;

    /// Upcast used for exact-type checks.
    fn as_any(&self) -> &dyn Any;
}

/// A concrete measurement type.
///
/// Implementors provide the unit table and wrap a [`MeasurementCore`]; every
/// operation below is provided on top of that.
///
/// # Examples
///
/// ```
/// use measurements::{Dimension, Length, Measurement};
///
/// let length = Length::new(100.0, "cm")?;
/// assert_eq!(length.standard_unit_quantity(), 1.0);
///
/// let millimetres = length.convert_to("mm")?;
/// assert_eq!(millimetres.quantity(), 1000.0);
///
/// assert!(length.is_equal_to(&Length::new(1.0, "m")?)?);
/// assert_eq!(length.to_string(), "100cm (1m)");
/// # Ok::<(), measurements::MeasurementError>(())
/// ```
pub trait Dimension: fmt::Debug + Copy + Sized + 'static {
    /// Name of the concrete type, used in error messages.
    const NAME: &'static str;

    /// The unit table of this dimension.
    fn unit_table() -> &'static UnitTable;

    /// Wraps a validated core.
    fn from_core(core: MeasurementCore) -> Self;

    /// The wrapped core.
    fn core(&self) -> &MeasurementCore;

    /// Renders the measurement as text.
    ///
    /// Concrete dimensions must override this; the default reports
    /// [`MeasurementError::NotImplemented`].
    fn render(&self) -> MeasurementResult<String> {
        Err(MeasurementError::NotImplemented(format!(
            "Method \"render()\" must be implemented for {}.",
            Self::NAME
        )))
    }

    /// Validates the inputs and builds a measurement of this dimension.
    fn from_quantity(quantity: f64, unit: &str) -> MeasurementResult<Self> {
        MeasurementCore::new(quantity, unit, Self::unit_table()).map(Self::from_core)
    }

    /// Returns the same measurement expressed in `unit`.
    ///
    /// `m.convert_to(m.unit())` is equal to `m`.
    fn convert_to(&self, unit: &str) -> MeasurementResult<Self> {
        let quantity = self.core().quantity_in(unit)?;
        debug!(
            "Converting {} {}{} to {}{}",
            Self::NAME,
            self.core().quantity(),
            self.core().unit(),
            quantity,
            unit
        );
        Self::from_quantity(quantity, unit)
    }

    /// Returns the same measurement expressed in the standard unit.
    fn convert_to_standard(&self) -> MeasurementResult<Self> {
        self.convert_to(self.core().standard_unit())
    }

    /// Whether `other` has the same standard-unit quantity.
    ///
    /// Fails with `TypeMismatch` if `other` is not of this dimension.
    fn is_equal_to(&self, other: &dyn Measurement) -> MeasurementResult<bool> {
        let other = Validator::new().validate_measurement::<Self>(other)?;
        Ok(self.core().standard_unit_quantity() == other.core().standard_unit_quantity())
    }

    /// Whether this is smaller than `other`.
    ///
    /// Fails with `TypeMismatch` if `other` is not of this dimension.
    fn is_less_than(&self, other: &dyn Measurement) -> MeasurementResult<bool> {
        let other = Validator::new().validate_measurement::<Self>(other)?;
        Ok(self.core().standard_unit_quantity() < other.core().standard_unit_quantity())
    }

    /// Whether this is greater than `other`.
    ///
    /// Fails with `TypeMismatch` if `other` is not of this dimension.
    fn is_greater_than(&self, other: &dyn Measurement) -> MeasurementResult<bool> {
        let other = Validator::new().validate_measurement::<Self>(other)?;
        Ok(self.core().standard_unit_quantity() > other.core().standard_unit_quantity())
    }
}

impl<D: Dimension> Measurement for D {
    fn kind(&self) -> &'static str {
        D::NAME
    }

    fn quantity(&self) -> f64 {
        self.core().quantity()
    }

    fn unit(&self) -> &'static str {
        self.core().unit()
    }

    fn standard_unit(&self) -> &'static str {
        self.core().standard_unit()
    }

    fn standard_unit_quantity(&self) -> f64 {
        self.core().standard_unit_quantity()
    }

    fn describe(&self) -> MeasurementResult<String> {
        self.render()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Implements `Display`, `PartialEq` and `PartialOrd` for a concrete dimension.
///
/// `Display` goes through [`Dimension::render`]; equality and ordering
/// compare standard-unit quantities.
#[macro_export]
macro_rules! impl_dimension_traits {
    ($dimension:ty) => {
        impl ::core::fmt::Display for $dimension {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let text = $crate::Dimension::render(self).map_err(|_| ::core::fmt::Error)?;
                f.write_str(&text)
            }
        }

        impl ::core::cmp::PartialEq for $dimension {
            fn eq(&self, other: &Self) -> bool {
                $crate::Dimension::core(self).standard_unit_quantity()
                    == $crate::Dimension::core(other).standard_unit_quantity()
            }
        }

        impl ::core::cmp::PartialOrd for $dimension {
            fn partial_cmp(&self, other: &Self) -> Option<::core::cmp::Ordering> {
                $crate::Dimension::core(self)
                    .standard_unit_quantity()
                    .partial_cmp(&$crate::Dimension::core(other).standard_unit_quantity())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Length, Time, LENGTH_UNITS};

    /// Bound to a known table but without its own rendering.
    #[derive(Debug, Clone, Copy)]
    struct Unrendered(MeasurementCore);

    impl Dimension for Unrendered {
        const NAME: &'static str = "Unrendered";

        fn unit_table() -> &'static UnitTable {
            &LENGTH_UNITS
        }

        fn from_core(core: MeasurementCore) -> Self {
            Self(core)
        }

        fn core(&self) -> &MeasurementCore {
            &self.0
        }
    }

    static STRAY_UNIT_LIST: [Unit; 2] = [Unit::new("a", 1.0), Unit::new("b", 10.0)];
    static STRAY_UNITS: UnitTable = UnitTable::new("stray", &STRAY_UNIT_LIST);

    /// Bound to a table the validator does not know.
    #[derive(Debug, Clone, Copy)]
    struct Stray(MeasurementCore);

    impl Dimension for Stray {
        const NAME: &'static str = "Stray";

        fn unit_table() -> &'static UnitTable {
            &STRAY_UNITS
        }

        fn from_core(core: MeasurementCore) -> Self {
            Self(core)
        }

        fn core(&self) -> &MeasurementCore {
            &self.0
        }
    }

    #[test]
    fn core_derives_standard_quantity() {
        let core = MeasurementCore::new(100.0, "cm", &LENGTH_UNITS).unwrap();
        assert_eq!(core.quantity(), 100.0);
        assert_eq!(core.unit(), "cm");
        assert_eq!(core.standard_unit(), "m");
        assert_eq!(core.standard_unit_quantity(), 1.0);
        assert!(core.units().is(&LENGTH_UNITS));
    }

    #[test]
    fn core_quantity_in_other_unit() {
        let core = MeasurementCore::new(100.0, "cm", &LENGTH_UNITS).unwrap();
        assert_eq!(core.quantity_in("mm").unwrap(), 1000.0);
        assert_eq!(core.quantity_in("m").unwrap(), 1.0);
        assert!(core.quantity_in("s").is_err());
    }

    #[test]
    fn unknown_table_aborts_construction() {
        let err = Stray::from_quantity(1.0, "a").unwrap_err();
        assert!(matches!(err, MeasurementError::InvalidUnits(_)));
    }

    #[test]
    fn table_is_checked_before_quantity() {
        let err = Stray::from_quantity(-1.0, "zz").unwrap_err();
        assert!(matches!(err, MeasurementError::InvalidUnits(_)));
    }

    #[test]
    fn quantity_is_checked_before_unit() {
        let err = Length::new(0.0, "xx").unwrap_err();
        assert!(matches!(err, MeasurementError::Range(_)));
    }

    static FLAT_UNIT_LIST: [Unit; 2] = [Unit::new("x", 2.0), Unit::new("y", 4.0)];
    static FLAT_UNITS: UnitTable = UnitTable::new("flat", &FLAT_UNIT_LIST);
    static ONLY_FLAT: [&UnitTable; 1] = [&FLAT_UNITS];

    #[test]
    fn table_without_standard_unit_is_a_defect() {
        let validator = Validator::with_tables(&ONLY_FLAT);
        let err = MeasurementCore::with_validator(&validator, 1.0, "x", &FLAT_UNITS).unwrap_err();
        assert_eq!(err, MeasurementError::MissingStandardUnit("flat"));
    }

    #[test]
    fn overflowing_standard_quantity_is_out_of_range() {
        assert!(matches!(
            Length::new(1e308, "km"),
            Err(MeasurementError::Range(_))
        ));
        assert!(matches!(
            MeasurementCore::new(1.5e308, "km", &LENGTH_UNITS),
            Err(MeasurementError::Range(_))
        ));
        // Fits in metres but not in millimetres.
        assert!(matches!(
            Length::new(1e308, "m"),
            Err(MeasurementError::Range(_))
        ));
    }

    #[test]
    fn vanishing_standard_quantity_is_out_of_range() {
        assert!(matches!(
            Length::new(1e-320, "mm"),
            Err(MeasurementError::Range(_))
        ));
    }

    #[test]
    fn extreme_but_representable_lengths_convert_everywhere() {
        let huge = Length::new(1e300, "km").unwrap();
        let tiny = Length::new(1e-300, "mm").unwrap();

        for unit in LENGTH_UNITS.abbreviations() {
            assert!(huge.convert_to(unit).is_ok(), "{unit}");
            assert!(tiny.convert_to(unit).is_ok(), "{unit}");
        }
        assert!(huge.is_equal_to(&huge.convert_to(huge.unit()).unwrap()).unwrap());
        assert!(huge.is_greater_than(&Length::new(1e299, "km").unwrap()).unwrap());
    }

    #[test]
    fn quantity_in_rejects_unrepresentable_result() {
        let metre = LENGTH_UNITS.find("m").unwrap();
        let core = MeasurementCore {
            quantity: f64::MAX,
            unit: metre,
            standard_unit: metre,
            standard_unit_quantity: f64::MAX,
            units: &LENGTH_UNITS,
        };
        assert!(matches!(
            core.quantity_in("mm"),
            Err(MeasurementError::Range(_))
        ));
    }

    #[test]
    fn missing_render_is_not_implemented() {
        let value = Unrendered::from_quantity(1.0, "m").unwrap();
        assert!(matches!(
            value.describe(),
            Err(MeasurementError::NotImplemented(_))
        ));
    }

    #[test]
    fn same_table_different_type_is_a_mismatch() {
        let unrendered = Unrendered::from_quantity(1.0, "m").unwrap();
        let length = Length::new(1.0, "m").unwrap();
        assert!(matches!(
            length.is_equal_to(&unrendered),
            Err(MeasurementError::TypeMismatch(_))
        ));
    }

    #[test]
    fn dyn_view_reads_the_core() {
        let time = Time::new(90.0, "min").unwrap();
        let view: &dyn Measurement = &time;
        assert_eq!(view.kind(), "Time");
        assert_eq!(view.quantity(), 90.0);
        assert_eq!(view.unit(), "min");
        assert_eq!(view.standard_unit(), "s");
        assert_eq!(view.standard_unit_quantity(), 5400.0);
    }

    #[test]
    fn comparisons_use_standard_quantity() {
        let a = Length::new(100.0, "cm").unwrap();
        let b = Length::new(1.0, "m").unwrap();
        let c = Length::new(1.5, "km").unwrap();

        assert!(a.is_equal_to(&b).unwrap());
        assert!(a.is_less_than(&c).unwrap());
        assert!(c.is_greater_than(&b).unwrap());
        assert!(!a.is_greater_than(&b).unwrap());
    }

    #[test]
    fn operator_traits_follow_standard_quantity() {
        let a = Length::new(100.0, "cm").unwrap();
        let b = Length::new(1.0, "m").unwrap();
        let c = Length::new(12.0, "in").unwrap();

        assert_eq!(a, b);
        assert!(c < a);
        assert!(b > c);
    }
}
