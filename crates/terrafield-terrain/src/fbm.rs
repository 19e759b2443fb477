//! Per-pass FBM layer generation.
//!
//! One layer sums octaves of gradient noise per cell, squares the sum,
//! and rescales the grid into the configured range. Several steps here
//! are deliberately idiosyncratic and locked down by seed compatibility;
//! see the comments inline and the regression tests in
//! `tests/test_terrain.rs`.

use crate::field::NoiseField;
use crate::noise::{round_half_up, PerlinNoise};

/// Generate one FBM layer.
///
/// For each cell `(i, j)`, octaves are sampled at
/// `(i * frequency * scale, j * frequency * scale)` with the amplitude
/// halving schedule set by `persistence` and the frequency doubling each
/// octave. The octave counter runs while `k < octave_count`, so a
/// fractional count of 1.2 runs two octaves. The cell stores the
/// *square* of the octave sum, which skews the distribution toward the
/// sign of the sum and gives the terrain its peak/valley asymmetry.
///
/// The returned layer is already rescaled (see `normalize_layer`).
/// A degenerate layer where max equals min divides by zero and yields
/// non-finite samples; that propagates to the caller rather than being
/// clamped here.
pub fn generate_layer(
    width: u32,
    height: u32,
    octave_count: f64,
    persistence: f64,
    scale: f64,
    seed: i32,
    min_noise: i32,
    max_noise: i32,
) -> NoiseField {
    let perlin = PerlinNoise::new(seed);
    let mut layer = NoiseField::new(width, height);

    for i in 0..width {
        for j in 0..height {
            let mut amplitude = 1.0;
            let mut frequency = 1.0;
            let mut total = 0.0;

            let mut k = 0u32;
            while f64::from(k) < octave_count {
                let sample_x = f64::from(i) * frequency * scale;
                let sample_y = f64::from(j) * frequency * scale;

                total += perlin.sample(sample_x, sample_y) * amplitude;

                amplitude *= persistence;
                frequency *= 2.0;
                k += 1;
            }

            layer.set(i, j, total * total);
        }
    }

    normalize_layer(&mut layer, min_noise, max_noise);
    layer
}

/// Rescale a layer in place into the configured range.
///
/// Two quirks are load-bearing:
///
/// 1. The min/max fold starts both accumulators at zero. Layer values
///    are squares, so the effective minimum is always zero even when the
///    smallest sample is positive.
/// 2. The multiplication binds to `max_noise` alone; the `min_noise`
///    subtraction and the trailing addition cancel, so the rescale is
///    effectively `round(normalized * max_noise)`. The final compositor
///    normalization uses the full-span formula instead. Regrouping this
///    one would change every field generated from existing seeds.
fn normalize_layer(layer: &mut NoiseField, min_noise: i32, max_noise: i32) {
    let mut max = 0.0f64;
    let mut min = 0.0f64;
    for &v in layer.values() {
        if v > max {
            max = v;
        }
        if v < min {
            min = v;
        }
    }

    let min_n = f64::from(min_noise);
    let max_n = f64::from(max_noise);
    for v in layer.values_mut() {
        *v = round_half_up((*v - min) / (max - min) * max_n - min_n) + min_n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_shape() {
        let layer = generate_layer(7, 3, 1.2, 0.5, 0.1, 42, 1, 100);
        assert_eq!(layer.width(), 7);
        assert_eq!(layer.height(), 3);
        assert_eq!(layer.values().len(), 21);
    }

    #[test]
    fn test_layer_deterministic() {
        let a = generate_layer(8, 8, 2.4, 0.5, 0.05, 1234, 1, 100);
        let b = generate_layer(8, 8, 2.4, 0.5, 0.05, 1234, 1, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fractional_octave_count_rounds_up() {
        // k < 1.2 admits k = 0 and k = 1: two octaves. With 1.0 the
        // second octave is gone, so the layers must differ.
        let two_octaves = generate_layer(8, 8, 1.2, 0.5, 0.1, 42, 1, 100);
        let one_octave = generate_layer(8, 8, 1.0, 0.5, 0.1, 42, 1, 100);
        assert_ne!(two_octaves, one_octave);

        // ...and 1.2 is indistinguishable from an explicit 2.
        let exactly_two = generate_layer(8, 8, 2.0, 0.5, 0.1, 42, 1, 100);
        assert_eq!(two_octaves, exactly_two);
    }

    #[test]
    fn test_layer_values_are_integral() {
        let layer = generate_layer(8, 8, 1.2, 0.5, 0.1, 42, 1, 100);
        for &v in layer.values() {
            assert_eq!(v, v.trunc(), "rescaled samples are whole-valued floats");
        }
    }

    #[test]
    fn test_degenerate_layer_goes_non_finite() {
        // Zero scale samples every octave at the lattice origin, so the
        // sum is constant and the rescale divides by zero.
        let layer = generate_layer(4, 4, 1.2, 0.5, 0.0, 42, 1, 100);
        assert!(layer.values().iter().any(|v| !v.is_finite()));
    }
}
