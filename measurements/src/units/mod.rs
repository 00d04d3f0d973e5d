//! Built-in dimensions, grouped one per module.
//!
//! Each module defines the dimension's static [`UnitTable`] and the concrete
//! measurement type bound to it.

use crate::unit::UnitTable;

pub mod length;
pub mod speed;
pub mod time;

pub use length::{Length, LENGTH_UNITS};
pub use speed::{Speed, SPEED_UNITS};
pub use time::{Time, TIME_UNITS};

/// The unit tables recognized by [`crate::Validator::new`].
pub static KNOWN_UNIT_TABLES: [&UnitTable; 3] = [&LENGTH_UNITS, &TIME_UNITS, &SPEED_UNITS];
