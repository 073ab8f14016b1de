//! Tests for two-decimal report rounding

#[cfg(test)]
mod tests {
    use uiload::math::rounding::{round_report, round_to};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // Tests ordinary values round to two decimals
    // Verified by truncating instead of rounding
    #[test]
    fn test_round_report_two_decimals() {
        assert!(close(round_report(153.4666), 153.47));
        assert!(close(round_report(2.0 / 3.0), 0.67));
        assert!(close(round_report(0.1 + 0.2), 0.3));
        assert!(close(round_report(42.0), 42.0));
    }

    // Tests exact ties go to the even neighbor
    // Verified by rounding ties away from zero
    #[test]
    fn test_exact_ties_round_to_even() {
        assert!(close(round_report(0.125), 0.12));
        assert!(close(round_report(0.375), 0.38));
        assert!(close(round_to(2.5_f64, 0), 2.0));
    }

    // Tests rounding follows the stored value, not the value scaled by 100
    // Verified by rounding `value * 100.0` to the nearest even integer
    #[test]
    fn test_rounds_stored_decimal_expansion() {
        // 0.645 is stored just above the half, 0.015 and 0.435 just below
        assert!(close(round_report(0.645), 0.65));
        assert!(close(round_report(0.015), 0.01));
        assert!(close(round_report(0.435), 0.43));
        assert!(close(round_report(2.675), 2.67));
    }

    // Tests non-finite values pass through
    // Verified by mapping NaN to zero
    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_report(f64::NAN).is_nan());
        assert!(round_report(f64::INFINITY).is_infinite());
    }

    // Tests the generic version on f32
    // Verified by fixing the factor at 100
    #[test]
    fn test_round_to_f32() {
        assert!((round_to(1.234_56_f32, 3) - 1.235).abs() < 1e-6);
    }
}
