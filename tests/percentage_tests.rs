use won_format::{to_percentage, FormatError, PercentageFormatter};

#[test]
fn zero_renders_two_decimals() {
    assert_eq!(to_percentage(0), "0.00%");
}

#[test]
fn half_is_fifty_percent() {
    assert_eq!(to_percentage(0.5), "50.00%");
    assert_eq!(to_percentage(1), "100.00%");
}

#[test]
fn near_midpoint_rounds_on_the_scaled_float() {
    // 1.005 * 100 == 100.49999999999999 in binary64
    assert_eq!(to_percentage(1.005), "100.50%");
}

#[test]
fn negative_fractions_keep_their_sign() {
    assert_eq!(to_percentage(-0.1234), "-12.34%");
    assert_eq!(to_percentage(-0.05), "-5.00%");
}

#[test]
fn fractions_above_one_are_scaled() {
    assert_eq!(to_percentage(12.5), "1250.00%");
}

#[test]
fn repeated_calls_are_identical() {
    for value in [0.0, 0.5, 1.005, -0.1234, f64::INFINITY] {
        let first = to_percentage(value);
        for _ in 0..5 {
            assert_eq!(to_percentage(value), first);
        }
    }
}

#[test]
fn strict_formatting_rejects_nan() {
    let formatter = PercentageFormatter::default();
    let err = formatter.try_format(f64::NAN).unwrap_err();
    assert!(matches!(err, FormatError::NonFinite(_)));
    assert!(err.to_string().contains("non-finite"));
}

#[test]
fn invalid_precision_reports_the_limit() {
    let err = PercentageFormatter::new(25).unwrap_err();
    assert_eq!(err.to_string(), "Invalid precision: 25 (maximum is 20)");
}
