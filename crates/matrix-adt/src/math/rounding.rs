/// Round to two decimal places.
///
/// Rounding works on the exact decimal value of `value`, with exact ties
/// going to the even digit (`0.125 -> 0.12`, `0.375 -> 0.38`). Non-finite
/// inputs are returned unchanged.
#[inline]
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(-1.236), -1.24);
        assert_eq!(round2(0.5), 0.5);
        assert_eq!(round2(2.0_f64.sqrt()), 1.41);
    }

    #[test]
    fn exact_ties_go_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(-0.125), -0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(0.625), 0.62);
    }

    #[test]
    fn rounds_on_the_stored_binary_value() {
        // 2.675 and 1.005 sit just below the tie in binary
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(1.005), 1.0);
        assert_eq!(round2(0.005), 0.01);
    }

    #[test]
    fn passes_through_non_finite() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
        assert_eq!(round2(f64::MAX), f64::MAX);
    }
}
