//! Noise primitives and interpolation helpers.
//!
//! Pure functions with no state; [`PerlinNoise`] is the only noise
//! kernel this backend carries.

mod perlin;

pub use perlin::{build_permutation, PerlinNoise};

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Quintic fade curve used to smooth lattice transitions.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Round with halves going toward positive infinity.
///
/// Normalization rounds like `Math.round`: -0.5 rounds to 0, not -1.
/// `f64::round` sends halves away from zero instead, which would shift
/// quantized output for existing seeds wherever the intermediate rescale
/// dips below zero.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_fade_fixed_points() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert_eq!(fade(0.5), 0.5);
    }

    #[test]
    fn test_fade_is_monotone_on_unit_interval() {
        let mut prev = fade(0.0);
        for i in 1..=100 {
            let v = fade(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_round_half_up_matches_js_round() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(1.4), 1.0);
        assert_eq!(round_half_up(1.5), 2.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(-1.6), -2.0);
    }
}
