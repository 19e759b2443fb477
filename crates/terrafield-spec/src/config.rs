//! The terrain generation config type and builder.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Immutable terrain generation configuration.
///
/// Field names serialize in camelCase to stay compatible with the JSON
/// config files consumed by the generator (`config.json` style).
///
/// The numeric fields are the eight parameters the noise core consumes;
/// `use_custom_seed`/`custom_seed` control seed resolution and
/// `add_image_data` controls the caption strip in the rendered PNG, both
/// of which are handled by the CLI layer, never by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerrainConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Number of compositor passes.
    pub passes: u32,
    /// Base spatial frequency of the noise.
    pub scale_size: f64,
    /// Decay base for per-pass weights (must be > 1).
    pub octave_weight: f64,
    /// Lower bound of the output quantization range.
    pub min_noise_value: i32,
    /// Upper bound of the output quantization range (must be > min).
    pub max_noise_value: i32,
    /// Use `custom_seed` instead of a randomly drawn seed.
    #[serde(default)]
    pub use_custom_seed: bool,
    /// The fixed seed used when `use_custom_seed` is set.
    #[serde(default)]
    pub custom_seed: i32,
    /// Append a seed/passes caption strip to the rendered image.
    #[serde(default)]
    pub add_image_data: bool,
}

impl TerrainConfig {
    /// Creates a builder with the given grid dimensions.
    pub fn builder(width: u32, height: u32) -> TerrainConfigBuilder {
        TerrainConfigBuilder::new(width, height)
    }

    /// Converts the config to a JSON value (used for canonical hashing).
    pub fn to_value(&self) -> Result<serde_json::Value, SpecError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Parses a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Builder for [`TerrainConfig`].
#[derive(Debug, Clone)]
pub struct TerrainConfigBuilder {
    config: TerrainConfig,
}

impl TerrainConfigBuilder {
    fn new(width: u32, height: u32) -> Self {
        Self {
            config: TerrainConfig {
                width,
                height,
                passes: 1,
                scale_size: 0.1,
                octave_weight: 2.0,
                min_noise_value: 1,
                max_noise_value: 100,
                use_custom_seed: false,
                custom_seed: 0,
                add_image_data: false,
            },
        }
    }

    /// Sets the number of compositor passes.
    pub fn passes(mut self, passes: u32) -> Self {
        self.config.passes = passes;
        self
    }

    /// Sets the base spatial frequency.
    pub fn scale_size(mut self, scale_size: f64) -> Self {
        self.config.scale_size = scale_size;
        self
    }

    /// Sets the per-pass weight decay base.
    pub fn octave_weight(mut self, octave_weight: f64) -> Self {
        self.config.octave_weight = octave_weight;
        self
    }

    /// Sets the output quantization range.
    pub fn noise_range(mut self, min: i32, max: i32) -> Self {
        self.config.min_noise_value = min;
        self.config.max_noise_value = max;
        self
    }

    /// Sets a fixed seed (enables `use_custom_seed`).
    pub fn custom_seed(mut self, seed: i32) -> Self {
        self.config.use_custom_seed = true;
        self.config.custom_seed = seed;
        self
    }

    /// Enables the caption strip in the rendered image.
    pub fn add_image_data(mut self, add: bool) -> Self {
        self.config.add_image_data = add;
        self
    }

    /// Builds the config.
    pub fn build(self) -> TerrainConfig {
        self.config
    }
}
