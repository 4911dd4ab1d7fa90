//! Fixed-point decimal text for the BMI field and the probability meter.
//!
//! `format!("{:.N}")` rounds an exactly representable halfway value to even
//! (`25.125` → `25.12`). The page shows these values the way a browser's
//! `Number.prototype.toFixed` does, which rounds such ties away from zero (`25.13`).

/// Fractional digits in the exact decimal expansion of the smallest subnormal `f64`.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Formats `value` with `digits` fractional digits, rounding exact ties away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || !is_exact_tie(value, digits) {
        return format!("{value:.digits$}");
    }

    // An exact tie scaled by 10^digits is `m + 0.5`, which the multiply reproduces exactly.
    let scale = 10f64.powi(digits as i32);
    let rounded = ((value.abs() * scale).ceil() / scale).copysign(value);
    format!("{rounded:.digits$}")
}

/// True when the digits dropped at `digits` precision are exactly `5000…`.
fn is_exact_tie(value: f64, digits: usize) -> bool {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };
    let Some(dropped) = fraction.get(digits..) else {
        return false;
    };
    let mut dropped = dropped.bytes();
    dropped.next() == Some(b'5') && dropped.all(|digit| digit == b'0')
}
