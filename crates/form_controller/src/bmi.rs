//! Body-mass-index derivation for the height/weight inputs.

use crate::decimal::to_fixed;

/// Lenient numeric parse of a free-text input: leading whitespace is skipped and the
/// longest numeric prefix wins, so `"180cm"` reads as 180. Returns `None` when no
/// digits lead the text.
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

/// `weight / (height/100)^2` for height in centimeters and weight in kilograms.
/// `None` when either input is non-numeric or not strictly positive.
pub fn compute_bmi(height_cm: &str, weight_kg: &str) -> Option<f64> {
    let height_cm = parse_leading_float(height_cm)?;
    let weight_kg = parse_leading_float(weight_kg)?;
    if !(height_cm > 0.0 && weight_kg > 0.0) {
        return None;
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    bmi.is_finite().then_some(bmi)
}

/// Two decimals, exact ties rounded up (`25.125` → `25.13`).
pub fn format_bmi(bmi: f64) -> String {
    to_fixed(bmi, 2)
}

/// Text to write into the BMI field: two decimals, or empty when underivable.
pub fn bmi_field_text(height_cm: &str, weight_kg: &str) -> String {
    compute_bmi(height_cm, weight_kg)
        .map(format_bmi)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn derives_bmi_with_two_decimals() {
        assert_eq!(bmi_field_text("180", "81"), "25.00");
        assert_eq!(bmi_field_text("170", "65"), "22.49");
        assert_eq!(bmi_field_text("152.4", "95"), "40.90");
    }

    #[test]
    fn exact_ties_round_up() {
        assert_eq!(bmi_field_text("200", "100.5"), "25.13");
        assert_eq!(bmi_field_text("100", "20.125"), "20.13");
    }

    #[test]
    fn clears_on_non_positive_or_non_numeric_input() {
        assert_eq!(bmi_field_text("0", "70"), "");
        assert_eq!(bmi_field_text("-170", "70"), "");
        assert_eq!(bmi_field_text("170", "0"), "");
        assert_eq!(bmi_field_text("170", "-1"), "");
        assert_eq!(bmi_field_text("", "70"), "");
        assert_eq!(bmi_field_text("tall", "70"), "");
        assert_eq!(bmi_field_text("170", "."), "");
    }

    #[test]
    fn parses_numeric_prefix_like_a_browser() {
        assert_eq!(parse_leading_float("  180cm"), Some(180.0));
        assert_eq!(parse_leading_float("72.5kg"), Some(72.5));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("5."), Some(5.0));
        assert_eq!(parse_leading_float("1e2"), Some(100.0));
        assert_eq!(parse_leading_float("1e"), Some(1.0));
        assert_eq!(parse_leading_float("-3"), Some(-3.0));
        assert_eq!(parse_leading_float("+"), None);
        assert_eq!(parse_leading_float("abc"), None);
    }

    proptest! {
        #[test]
        fn matches_rounded_formula(height in 50.0f64..250.0, weight in 20.0f64..300.0) {
            let expected = weight / ((height / 100.0) * (height / 100.0));
            let text = bmi_field_text(&height.to_string(), &weight.to_string());
            let rendered: f64 = text.parse().expect("numeric bmi");
            prop_assert!(
                (rendered - expected).abs() <= 0.005 + 1e-9,
                "height={} weight={} text={}", height, weight, text
            );
            prop_assert_eq!(text.split('.').nth(1).map(str::len), Some(2));
        }

        #[test]
        fn non_positive_input_clears(height in -250.0f64..=0.0, weight in 20.0f64..300.0) {
            prop_assert_eq!(bmi_field_text(&height.to_string(), &weight.to_string()), "");
            prop_assert_eq!(bmi_field_text(&weight.to_string(), &height.to_string()), "");
        }
    }
}
