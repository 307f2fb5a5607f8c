//! Fixed-point rendering of `f64` magnitudes.
//!
//! Two rounding inputs are offered, both rounding half away from zero:
//! [`fixed_digits`] rounds the exact binary value of the float, so
//! `100.49999999999999` (the product of `1.005 * 100`) stays below the
//! midpoint; [`shortest_fixed_digits`] rounds the shortest decimal that
//! round-trips to the float, so `1.005` rounds up to `1.01`.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Renders `magnitude` with exactly `precision` fraction digits, using `.` as
/// the decimal point and no grouping.
///
/// The sign is ignored; callers decide how negative values are presented.
pub fn fixed_digits(magnitude: f64, precision: u32) -> String {
    let magnitude = magnitude.abs();
    match Decimal::from_f64_retain(magnitude) {
        Some(value) => {
            let rounded =
                value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
            pad_fraction(&rounded.abs().to_string(), precision as usize)
        }
        // Past the decimal range every f64 is integral, so the float's own
        // expansion is exact.
        None => format!("{:.*}", precision as usize, magnitude),
    }
}

/// Renders `magnitude` with exactly `precision` fraction digits after rounding
/// its shortest round-trip decimal form.
///
/// The sign is ignored; callers decide how negative values are presented.
pub fn shortest_fixed_digits(magnitude: f64, precision: u32) -> String {
    let shortest = magnitude.abs().to_string();
    match Decimal::from_str(&shortest) {
        Ok(value) => {
            let rounded =
                value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
            pad_fraction(&rounded.abs().to_string(), precision as usize)
        }
        // Out of decimal range: integral magnitudes keep their shortest digits.
        Err(_) if !shortest.contains('.') => pad_fraction(&shortest, precision as usize),
        Err(_) => fixed_digits(magnitude, precision),
    }
}

fn pad_fraction(rendered: &str, precision: usize) -> String {
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (rendered, ""),
    };
    if precision == 0 {
        return int_part.to_string();
    }
    let mut out = String::with_capacity(int_part.len() + precision + 1);
    out.push_str(int_part);
    out.push('.');
    out.extend(frac_part.chars().take(precision));
    for _ in frac_part.len()..precision {
        out.push('0');
    }
    out
}

/// Splits a rendered magnitude into its integer and fraction digits.
pub fn split_digits(rendered: &str) -> (&str, Option<&str>) {
    match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered, None),
    }
}
