//! Immutable physical measurements with decimal-safe unit conversion.
//!
//! A measurement is a positive quantity in a unit of one dimension. On
//! construction it is validated and its quantity in the dimension's standard
//! unit is derived; conversion, comparison and merging all go through that
//! standard-unit quantity.
//!
//! Built-in dimensions:
//!
//! | Type       | Standard unit | Units                                   |
//! |------------|---------------|-----------------------------------------|
//! | [`Length`] | `m`           | mm, cm, dm, m, km, in, ft, yd, mi       |
//! | [`Time`]   | `s`           | ms, s, min, h, d, w                     |
//! | [`Speed`]  | `km/h`        | km/h, m/s, mph, kn, ft/s                |
//!
//! Unit arithmetic scales both operands to integers before multiplying or
//! dividing (see [`decimal`]), so `Length::new(100.0, "cm")` is exactly one
//! metre rather than `1.0000000000000002`.
//!
//! # Examples
//!
//! ```
//! use measurements::{Dimension, Length, Measurement, Merge, Time};
//!
//! let length = Length::new(100.0, "cm")?;
//! assert_eq!(length.standard_unit_quantity(), 1.0);
//! assert_eq!(length.to_string(), "100cm (1m)");
//!
//! let merged = length.merge_with_into(&Length::new(50.0, "cm")?, "m")?;
//! assert_eq!(merged.quantity(), 1.5);
//!
//! // Different dimensions never compare.
//! let time = Time::new(1.0, "s")?;
//! assert!(length.is_equal_to(&time).is_err());
//! # Ok::<(), measurements::MeasurementError>(())
//! ```
//!
//! Invalid input is reported, never clamped:
//!
//! ```
//! use measurements::{Length, MeasurementError};
//!
//! assert!(matches!(Length::new(-5.0, "m"), Err(MeasurementError::Range(_))));
//! assert!(matches!(Length::new(100.0, "xx"), Err(MeasurementError::InvalidUnit { .. })));
//! ```

pub mod any;
pub mod config;
pub mod decimal;
pub mod error;
pub mod measurement;
pub mod merge;
pub mod serde_support;
pub mod unit;
pub mod units;
pub mod validator;

pub use any::{AnyMeasurement, MeasurementRecord};
pub use config::{MeasurementConfig, PreferredUnits};
pub use error::{MeasurementError, MeasurementResult};
pub use measurement::{Dimension, Measurement, MeasurementCore};
pub use merge::Merge;
pub use unit::{Unit, UnitTable};
pub use units::{
    Length, Speed, Time, KNOWN_UNIT_TABLES, LENGTH_UNITS, SPEED_UNITS, TIME_UNITS,
};
pub use validator::Validator;
