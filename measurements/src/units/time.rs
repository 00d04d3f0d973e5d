//! Time.
//!
//! The standard unit is the second. Days are the civil `86_400 s`.

use crate::error::MeasurementResult;
use crate::measurement::{Dimension, MeasurementCore};
use crate::unit::{Unit, UnitTable};

static TIME_UNIT_LIST: [Unit; 6] = [
    Unit::new("ms", 0.001),
    Unit::new("s", 1.0),
    Unit::new("min", 60.0),
    Unit::new("h", 3600.0),
    Unit::new("d", 86_400.0),
    Unit::new("w", 604_800.0),
];

/// Time units, relative to the second.
pub static TIME_UNITS: UnitTable = UnitTable::new("time", &TIME_UNIT_LIST);

/// A duration.
#[derive(Debug, Clone, Copy)]
pub struct Time(MeasurementCore);

impl Time {
    /// Creates a duration of `quantity` in `unit`.
    pub fn new(quantity: f64, unit: &str) -> MeasurementResult<Self> {
        Self::from_quantity(quantity, unit)
    }
}

impl Dimension for Time {
    const NAME: &'static str = "Time";

    fn unit_table() -> &'static UnitTable {
        &TIME_UNITS
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

crate::impl_dimension_traits!(Time);
