//! Decimal-safe scaling of quantities by unit ratios.
//!
//! Multiplying or dividing decimal fractions in binary floating point drifts:
//! `100.0 * 0.01` is fine, but `1.1 * 100.0` is `110.00000000000001`. Both
//! operands are therefore rescaled to integers before they are combined and
//! the scale is undone afterwards:
//!
//! ```text
//! scaled_mul(q, r) = ((q * fq) * (r * fr)) / (fq * fr)
//! scaled_div(s, r) = ((s * fs) / (r * fr)) / (fs / fr)
//! ```
//!
//! where `fx = 10^d` and `d` is the number of digits after the decimal point
//! in the shortest textual form of `x`.
//!
//! # Precision limit
//!
//! The scale is read off the text of the value, so a value that is already a
//! rounded binary approximation (e.g. the result of an earlier division,
//! `0.1 + 0.2 == 0.30000000000000004`) keeps its error. Only operands with
//! a short, finite decimal expansion are combined exactly.

use log::{trace, warn};

/// Number of digits after the decimal point in the shortest textual form of `value`.
///
/// ```rust
/// use measurements::decimal::decimal_places;
///
/// assert_eq!(decimal_places(100.0), 0);
/// assert_eq!(decimal_places(0.01), 2);
/// assert_eq!(decimal_places(1e-7), 7);
/// ```
pub fn decimal_places(value: f64) -> i32 {
    let text = value.to_string();
    text.split_once('.')
        .map_or(0, |(_, fraction)| fraction.len() as i32)
}

/// The power of ten that turns `value` into an integer.
pub fn float_factor(value: f64) -> f64 {
    10f64.powi(decimal_places(value))
}

/// `quantity * ratio`, computed on integer-rescaled operands.
pub fn scaled_mul(quantity: f64, ratio: f64) -> f64 {
    let quantity_factor = float_factor(quantity);
    let ratio_factor = float_factor(ratio);

    if !(quantity_factor * ratio_factor).is_finite() {
        warn!(
            "Decimal rescaling of {} * {} overflows, multiplying directly",
            quantity, ratio
        );
        return quantity * ratio;
    }

    let result = (quantity * quantity_factor) * (ratio * ratio_factor)
        / (quantity_factor * ratio_factor);
    trace!(
        "scaled_mul({}, {}) = {} (factors {}, {})",
        quantity,
        ratio,
        result,
        quantity_factor,
        ratio_factor
    );
    result
}

/// `standard_quantity / ratio`, computed on integer-rescaled operands.
pub fn scaled_div(standard_quantity: f64, ratio: f64) -> f64 {
    let quantity_factor = float_factor(standard_quantity);
    let ratio_factor = float_factor(ratio);

    if !(quantity_factor * ratio_factor).is_finite() {
        warn!(
            "Decimal rescaling of {} / {} overflows, dividing directly",
            standard_quantity, ratio
        );
        return standard_quantity / ratio;
    }

    let result = ((standard_quantity * quantity_factor) / (ratio * ratio_factor))
        / (quantity_factor / ratio_factor);
    trace!(
        "scaled_div({}, {}) = {} (factors {}, {})",
        standard_quantity,
        ratio,
        result,
        quantity_factor,
        ratio_factor
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_places_of_integers_is_zero() {
        assert_eq!(decimal_places(1.0), 0);
        assert_eq!(decimal_places(1000.0), 0);
        assert_eq!(decimal_places(1e21), 0);
    }

    #[test]
    fn decimal_places_counts_fraction_digits() {
        assert_eq!(decimal_places(0.5), 1);
        assert_eq!(decimal_places(0.001), 3);
        assert_eq!(decimal_places(1609.344), 3);
        assert_eq!(decimal_places(-2.25), 2);
    }

    #[test]
    fn decimal_places_keeps_binary_noise() {
        assert_eq!(decimal_places(0.1 + 0.2), 17);
    }

    #[test]
    fn float_factor_is_power_of_ten() {
        assert_eq!(float_factor(42.0), 1.0);
        assert_eq!(float_factor(0.01), 100.0);
        assert_eq!(float_factor(0.0254), 10_000.0);
    }

    #[test]
    fn scaled_mul_centimetres_to_metres() {
        assert_eq!(scaled_mul(100.0, 0.01), 1.0);
        assert_eq!(scaled_mul(50.0, 0.01), 0.5);
        assert_eq!(scaled_mul(250.0, 0.001), 0.25);
    }

    #[test]
    fn scaled_mul_avoids_naive_drift() {
        assert_ne!(1.1 * 100.0, 110.0);
        assert_eq!(scaled_mul(1.1, 100.0), 110.0);
        assert_ne!(2.3 * 3.0, 6.9);
        assert_eq!(scaled_mul(2.3, 3.0), 6.9);
    }

    #[test]
    fn scaled_div_metres_to_millimetres() {
        assert_eq!(scaled_div(1.0, 0.001), 1000.0);
        assert_eq!(scaled_div(0.25, 0.01), 25.0);
        assert_eq!(scaled_div(1609.344, 0.3048), 5280.0);
    }

    #[test]
    fn scaled_div_by_one_is_identity_for_short_decimals() {
        assert_eq!(scaled_div(1.5, 1.0), 1.5);
        assert_eq!(scaled_div(7200.0, 1.0), 7200.0);
    }

    #[test]
    fn overflowing_factor_falls_back_to_plain_arithmetic() {
        let tiny = 1e-310;
        assert_eq!(scaled_mul(tiny, 0.01), tiny * 0.01);
        assert_eq!(scaled_div(tiny, 0.01), tiny / 0.01);
    }
}
