//! histogram::rounding — snap values onto multiples of an increment.
//!
//! These helpers map a value to a multiple of `incr`: nearest, up, or down.
//! Binning always uses [`incr_round_dn`], so a bucket key is the inclusive
//! lower edge of its bucket; the other two are provided for callers that
//! bucket with [`histogram`](crate::histogram::binner::histogram) directly.
//!
//! No validation is done here; `incr` is expected to be finite and > 0.

/// Round `num` to the nearest multiple of `incr` (halves away from zero).
#[inline]
pub fn incr_round(num: f64, incr: f64) -> f64 {
    (num / incr).round() * incr
}

/// Round `num` up to a multiple of `incr`.
#[inline]
pub fn incr_round_up(num: f64, incr: f64) -> f64 {
    (num / incr).ceil() * incr
}

/// Round `num` down (toward −∞) to a multiple of `incr`.
#[inline]
pub fn incr_round_dn(num: f64, incr: f64) -> f64 {
    (num / incr).floor() * incr
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // Rounding down goes toward negative infinity, never toward zero.
    fn incr_round_dn_floors_positive_and_negative_values() {
        assert_relative_eq!(incr_round_dn(3.0, 5.0), 0.0);
        assert_relative_eq!(incr_round_dn(10.0, 5.0), 10.0);
        assert_relative_eq!(incr_round_dn(14.999, 5.0), 10.0);
        assert_relative_eq!(incr_round_dn(-0.5, 5.0), -5.0);
        assert_relative_eq!(incr_round_dn(-5.0, 5.0), -5.0);
    }

    #[test]
    fn incr_round_up_ceils_to_increment() {
        assert_relative_eq!(incr_round_up(3.0, 5.0), 5.0);
        assert_relative_eq!(incr_round_up(10.0, 5.0), 10.0);
        assert_relative_eq!(incr_round_up(-7.0, 5.0), -5.0);
    }

    #[test]
    fn incr_round_picks_nearest_multiple() {
        assert_relative_eq!(incr_round(12.0, 5.0), 10.0);
        assert_relative_eq!(incr_round(12.5, 5.0), 15.0);
        assert_relative_eq!(incr_round(0.26, 0.25), 0.25);
    }
}
