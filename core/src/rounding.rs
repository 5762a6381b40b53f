//! Float-to-integer rounding with a pinned tie-breaking rule.
//!
//! Round-to-nearest where halfway cases go away from zero (2.5 becomes
//! 3, -2.5 becomes -3). The tie-breaking rule is part of the contract
//! because callers can observe it; it is exactly what `f64::round`
//! guarantees, so these helpers only pin it down and handle the
//! conversion. Values outside the target range saturate (NaN maps
//! to 0).

/// Round to the nearest `i32`, halves away from zero.
#[inline]
pub fn round_to_i32(value: f64) -> i32 {
    value.round() as i32
}

/// Round to the nearest `i64`, halves away from zero.
#[inline]
pub fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}

/// `f32` variant of [`round_to_i32`].
#[inline]
pub fn round_f32_to_i32(value: f32) -> i32 {
    value.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(round_to_i32(0.5), 1);
        assert_eq!(round_to_i32(-0.5), -1);
        assert_eq!(round_to_i32(2.5), 3);
        assert_eq!(round_to_i32(-2.5), -3);
        assert_eq!(round_f32_to_i32(1.5), 2);
    }

    #[test]
    fn test_nearest() {
        assert_eq!(round_to_i32(2.4), 2);
        assert_eq!(round_to_i32(2.6), 3);
        assert_eq!(round_to_i32(-2.4), -2);
        assert_eq!(round_to_i64(1e12 + 0.4), 1_000_000_000_000);
    }

    #[test]
    fn test_saturation() {
        assert_eq!(round_to_i32(f64::INFINITY), i32::MAX);
        assert_eq!(round_to_i32(f64::NEG_INFINITY), i32::MIN);
        assert_eq!(round_to_i32(1e100), i32::MAX);
        assert_eq!(round_to_i32(f64::NAN), 0);
    }
}
