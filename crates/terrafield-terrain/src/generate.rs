//! Multi-pass terrain composition.
//!
//! The compositor runs the FBM layer generator once per pass with an
//! escalating octave count, a coarsening scale, and an exponentially
//! decaying weight, accumulates the weighted layers, and quantizes the
//! accumulated field into the configured range.

use thiserror::Error;

use terrafield_spec::TerrainConfig;

use crate::fbm::generate_layer;
use crate::field::{HeightMap, NoiseField};
use crate::noise::round_half_up;

/// Octave count added per pass: pass `n` runs with `n * 1.2` octaves.
pub const OCTAVES_PER_PASS: f64 = 1.2;

/// Fixed amplitude decay between octaves within a layer.
pub const PERSISTENCE: f64 = 0.5;

/// Errors from terrain generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The accumulated field was constant (or non-finite), so it cannot
    /// be normalized into the output range. Typical causes: a 1x1 grid
    /// or a zero scale; both are flagged by config validation.
    #[error(
        "degenerate {width}x{height} field: all samples equal after {passes} pass(es), \
         normalization has no span"
    )]
    DegenerateField {
        /// Field width in cells.
        width: u32,
        /// Field height in cells.
        height: u32,
        /// Number of passes that were composed.
        passes: u32,
    },
}

/// Generate a quantized terrain field from a config and seed.
///
/// Runs `config.passes` layer generations. Pass `n` (1-based) uses
/// `n * 1.2` octaves, persistence 0.5, scale `scale_size * n`, seed
/// `seed + n` (a fresh permutation table per pass prevents the layers
/// from sharing localized features), and contributes with weight
/// `1 / octave_weight^n`.
///
/// The accumulated field is normalized with the full-span formula and
/// rounded half-up into `[min_noise_value, max_noise_value]`. This
/// deliberately differs from the per-layer rescale inside
/// [`generate_layer`]; the two must not be unified.
///
/// The config is trusted: callers validate with
/// [`terrafield_spec::validate_config`] first. The only runtime failure
/// is [`GenerateError::DegenerateField`], returned instead of quantizing
/// non-finite samples into garbage integers.
pub fn generate_terrain(config: &TerrainConfig, seed: i32) -> Result<HeightMap, GenerateError> {
    let width = config.width;
    let height = config.height;
    let mut result = NoiseField::new(width, height);

    for pass in 1..=config.passes {
        let octave_count = f64::from(pass) * OCTAVES_PER_PASS;
        let scale = config.scale_size * f64::from(pass);
        let pass_seed = seed.wrapping_add(pass as i32);

        let layer = generate_layer(
            width,
            height,
            octave_count,
            PERSISTENCE,
            scale,
            pass_seed,
            config.min_noise_value,
            config.max_noise_value,
        );

        let weight = 1.0 / config.octave_weight.powf(f64::from(pass));
        for (acc, &v) in result.values_mut().iter_mut().zip(layer.values()) {
            *acc += v * weight;
        }
    }

    quantize(&result, config).ok_or(GenerateError::DegenerateField {
        width,
        height,
        passes: config.passes,
    })
}

/// Normalize the accumulated field into the output range.
///
/// Unlike the per-layer fold, min and max start from the first sample.
/// Returns `None` when the span is empty or non-finite.
fn quantize(result: &NoiseField, config: &TerrainConfig) -> Option<HeightMap> {
    let values = result.values();
    let first = *values.first()?;
    let mut max = first;
    let mut min = first;
    for &v in &values[1..] {
        if v > max {
            max = v;
        }
        if v < min {
            min = v;
        }
    }

    if !min.is_finite() || !max.is_finite() || max == min {
        return None;
    }

    let min_n = f64::from(config.min_noise_value);
    let max_n = f64::from(config.max_noise_value);
    let data = values
        .iter()
        .map(|&v| round_half_up((v - min) / (max - min) * (max_n - min_n) + min_n) as i32)
        .collect();

    Some(HeightMap::from_data(result.width(), result.height(), data))
}
