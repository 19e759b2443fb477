//! Config validation.
//!
//! The noise core performs no validation of its own and will happily
//! produce non-finite output for degenerate inputs, so every config must
//! pass through [`validate_config`] before reaching it.

use crate::config::TerrainConfig;
use crate::error::{
    ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};

/// Validates a terrain config against the core's preconditions.
///
/// Errors cover the hard preconditions (dimensions, passes, noise range,
/// octave weight, scale finiteness). Warnings flag configurations that are
/// accepted but produce degenerate fields: a zero scale samples the noise
/// at a single point per octave, and a 1x1 grid has an empty value span,
/// so final normalization divides by zero in both cases.
pub fn validate_config(config: &TerrainConfig) -> ValidationResult {
    let mut result = ValidationResult::new();

    if config.width < 1 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidWidth,
            "width must be at least 1",
            "width",
        ));
    }
    if config.height < 1 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidHeight,
            "height must be at least 1",
            "height",
        ));
    }
    if config.passes < 1 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidPasses,
            "passes must be at least 1",
            "passes",
        ));
    }
    if config.max_noise_value <= config.min_noise_value {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvertedNoiseRange,
            format!(
                "maxNoiseValue ({}) must be greater than minNoiseValue ({})",
                config.max_noise_value, config.min_noise_value
            ),
            "maxNoiseValue",
        ));
    }
    if !(config.octave_weight > 1.0) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidOctaveWeight,
            format!("octaveWeight ({}) must be greater than 1", config.octave_weight),
            "octaveWeight",
        ));
    }
    if !config.scale_size.is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonFiniteScale,
            "scaleSize must be a finite number",
            "scaleSize",
        ));
    }

    if config.scale_size == 0.0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::ZeroScale,
            "a zero scaleSize produces a constant field and fails normalization",
            "scaleSize",
        ));
    }
    if config.width == 1 && config.height == 1 {
        result.add_warning(ValidationWarning::new(
            WarningCode::DegenerateGrid,
            "a 1x1 grid has no value span and fails normalization",
        ));
    }

    result
}
