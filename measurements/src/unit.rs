//! Unit records and unit tables.

use std::fmt;

/// A unit of one dimension.
///
/// * `abbr` is the printable abbreviation (e.g. `"m"` or `"km"`).
/// * `ratio` converts one of this unit into the dimension's standard unit.
///   Example: with metres standard, `km` has `ratio == 1000.0` because
///   `1 km = 1000 m`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    abbr: &'static str,
    ratio: f64,
}

impl Unit {
    /// Creates a unit record.
    pub const fn new(abbr: &'static str, ratio: f64) -> Self {
        Self { abbr, ratio }
    }

    /// Printable abbreviation.
    #[inline]
    pub const fn abbr(&self) -> &'static str {
        self.abbr
    }

    /// Unit-to-standard conversion factor.
    #[inline]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Whether this is the standard unit of its table.
    #[inline]
    pub fn is_standard(&self) -> bool {
        self.ratio == 1.0
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr)
    }
}

/// Ordered collection of the units of one dimension.
///
/// # Invariants
///
/// - Abbreviations are unique within the table.
/// - Exactly one unit has `ratio == 1.0`; it is the standard unit.
///
/// Tables are compared by identity, so every table must live in a `static`
/// (a `const` is inlined at each use and has no stable address).
#[derive(Debug)]
pub struct UnitTable {
    name: &'static str,
    units: &'static [Unit],
}

impl UnitTable {
    /// Creates a unit table for the dimension `name`.
    pub const fn new(name: &'static str, units: &'static [Unit]) -> Self {
        Self { name, units }
    }

    /// Name of the dimension this table belongs to.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// All units, in declaration order.
    pub const fn units(&self) -> &'static [Unit] {
        self.units
    }

    /// Iterates the unit abbreviations, in declaration order.
    pub fn abbreviations(&self) -> impl Iterator<Item = &'static str> {
        self.units.iter().map(Unit::abbr)
    }

    /// Looks up a unit by abbreviation.
    pub fn find(&self, abbr: &str) -> Option<&'static Unit> {
        self.units.iter().find(|unit| unit.abbr == abbr)
    }

    /// The ratio-1 unit, if the table has one.
    pub fn standard_unit(&self) -> Option<&'static Unit> {
        self.units.iter().find(|unit| unit.is_standard())
    }

    /// Identity comparison.
    #[inline]
    pub fn is(&self, other: &UnitTable) -> bool {
        std::ptr::eq(self, other)
    }
}
