//! Speed.
//!
//! The standard unit is the kilometre per hour, which keeps every ratio a
//! finite decimal (`1 m/s = 3.6 km/h`). Speeds render with a space before
//! the compound unit: `100 m/s (360 km/h)`.

use crate::error::MeasurementResult;
use crate::measurement::{Dimension, MeasurementCore};
use crate::unit::{Unit, UnitTable};

static SPEED_UNIT_LIST: [Unit; 5] = [
    Unit::new("km/h", 1.0),
    Unit::new("m/s", 3.6),
    Unit::new("mph", 1.609344),
    Unit::new("kn", 1.852),
    Unit::new("ft/s", 1.09728),
];

/// Speed units, relative to the kilometre per hour.
pub static SPEED_UNITS: UnitTable = UnitTable::new("speed", &SPEED_UNIT_LIST);

/// A speed.
#[derive(Debug, Clone, Copy)]
pub struct Speed(MeasurementCore);

impl Speed {
    /// Creates a speed of `quantity` in `unit`.
    pub fn new(quantity: f64, unit: &str) -> MeasurementResult<Self> {
        Self::from_quantity(quantity, unit)
    }
}

impl Dimension for Speed {
    const NAME: &'static str = "Speed";

    fn unit_table() -> &'static UnitTable {
        &SPEED_UNITS
    }

    fn from_core(core: MeasurementCore) -> Self {
        Self(core)
    }

    fn core(&self) -> &MeasurementCore {
        &self.0
    }

    fn render(&self) -> MeasurementResult<String> {
        Ok(format!(
            "{} {} ({} {})",
            self.0.quantity(),
            self.0.unit(),
            self.0.standard_unit_quantity(),
            self.0.standard_unit()
        ))
    }
}

crate::impl_dimension_traits!(Speed);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Measurement;

    #[test]
    fn metres_per_second_to_kilometres_per_hour() {
        let speed = Speed::new(10.0, "m/s").unwrap();
        assert_eq!(speed.standard_unit(), "km/h");
        assert_eq!(speed.standard_unit_quantity(), 36.0);
        assert_eq!(speed.convert_to_standard().unwrap().quantity(), 36.0);
    }

    #[test]
    fn knots_and_mph_compare_by_standard_quantity() {
        let knot = Speed::new(1.0, "kn").unwrap();
        let mph = Speed::new(1.0, "mph").unwrap();
        assert!(knot.is_greater_than(&mph).unwrap());
        assert_eq!(knot.standard_unit_quantity(), 1.852);
    }

    #[test]
    fn render_separates_units_with_spaces() {
        let speed = Speed::new(100.0, "m/s").unwrap();
        assert_eq!(speed.to_string(), "100 m/s (360 km/h)");
    }
}
