//! Length.
//!
//! The standard unit is the metre. Imperial units use their international
//! definitions (the inch is exactly `0.0254 m`), so every ratio has a short
//! finite decimal expansion.
//!
//! ```rust
//! use measurements::{Dimension, Length};
//!
//! let length = Length::new(100.0, "cm")?;
//! assert_eq!(length.to_string(), "100cm (1m)");
//! assert_eq!(length.convert_to("mm")?.to_string(), "1000mm (1m)");
//! # Ok::<(), measurements::MeasurementError>(())
//! ```

use crate::error::MeasurementResult;
use crate::measurement::{Dimension, MeasurementCore};
use crate::unit::{Unit, UnitTable};

static LENGTH_UNIT_LIST: [Unit; 9] = [
    Unit::new("mm", 0.001),
    Unit::new("cm", 0.01),
    Unit::new("dm", 0.1),
    Unit::new("m", 1.0),
    Unit::new("km", 1000.0),
    Unit::new("in", 0.0254),
    Unit::new("ft", 0.3048),
    Unit::new("yd", 0.9144),
    Unit::new("mi", 1609.344),
];

/// Length units, relative to the metre.
pub static LENGTH_UNITS: UnitTable = UnitTable::new("length", &LENGTH_UNIT_LIST);

/// A length.
#[derive(Debug, Clone, Copy)]
pub struct Length(MeasurementCore);

impl Length {
    /// Creates a length of `quantity` in `unit`.
    pub fn new(quantity: f64, unit: &str) -> MeasurementResult<Self> {
        Self::from_quantity(quantity, unit)
    }
}

impl Dimension for Length {
    const NAME: &'static str = "Length";

    fn unit_table() -> &'static UnitTable {
        &LENGTH_UNITS
    }

    fn from_core(core: MeasurementCore) -> Self {
        Self(core)
    }

    fn core(&self) -> &MeasurementCore {
        &self.0
    }

    fn render(&self) -> MeasurementResult<String> {
        Ok(format!(
            "{}{} ({}{})",
            self.0.quantity(),
            self.0.unit(),
            self.0.standard_unit_quantity(),
            self.0.standard_unit()
        ))
    }
}

crate::impl_dimension_traits!(Length);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeasurementError;
    use crate::measurement::Measurement;

    #[test]
    fn standard_unit_is_metre() {
        let length = Length::new(100.0, "cm").unwrap();
        assert_eq!(length.standard_unit(), "m");
        assert_eq!(length.standard_unit_quantity(), 1.0);
    }

    #[test]
    fn convert_between_metric_units() {
        let length = Length::new(100.0, "cm").unwrap();
        let converted = length.convert_to("mm").unwrap();
        assert_eq!(converted.unit(), "mm");
        assert_eq!(converted.quantity(), 1000.0);
    }

    #[test]
    fn convert_between_imperial_units() {
        let mile = Length::new(1.0, "mi").unwrap();
        assert_eq!(mile.convert_to("ft").unwrap().quantity(), 5280.0);
        assert_eq!(mile.convert_to("yd").unwrap().quantity(), 1760.0);

        let foot = Length::new(1.0, "ft").unwrap();
        assert_eq!(foot.convert_to("in").unwrap().quantity(), 12.0);
    }

    #[test]
    fn convert_to_standard() {
        let length = Length::new(1.5, "km").unwrap().convert_to_standard().unwrap();
        assert_eq!(length.unit(), "m");
        assert_eq!(length.quantity(), 1500.0);
    }

    #[test]
    fn render_shows_both_quantities() {
        assert_eq!(Length::new(100.0, "cm").unwrap().to_string(), "100cm (1m)");
        assert_eq!(Length::new(250.0, "mm").unwrap().to_string(), "250mm (0.25m)");
    }

    #[test]
    fn rejects_unknown_unit() {
        let err = Length::new(100.0, "xx").unwrap_err();
        assert!(matches!(err, MeasurementError::InvalidUnit { .. }));
        assert!(err.to_string().contains("mm, cm, dm, m, km"));
    }
}
