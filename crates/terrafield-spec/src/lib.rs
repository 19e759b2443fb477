//! Terrafield Config Library
//!
//! Types, validation, and hashing for Terrafield terrain generation
//! configs. Configs are JSON documents that supply the grid dimensions,
//! pass count, seed policy, and output quantization range consumed by the
//! noise core in `terrafield-terrain`.
//!
//! # Example
//!
//! ```
//! use terrafield_spec::{TerrainConfig, validate_config, canonical_config_hash};
//!
//! let config = TerrainConfig::builder(256, 256)
//!     .passes(3)
//!     .scale_size(0.015)
//!     .octave_weight(2.0)
//!     .noise_range(1, 100)
//!     .custom_seed(123456789)
//!     .build();
//!
//! let result = validate_config(&config);
//! assert!(result.is_ok());
//!
//! let hash = canonical_config_hash(&config).unwrap();
//! println!("config hash: {}", hash);
//! ```
//!
//! # Modules
//!
//! - [`config`]: The config type and builder
//! - [`error`]: Error and warning types for validation
//! - [`validation`]: Config validation
//! - [`hash`]: Canonical hashing

pub mod config;
pub mod error;
pub mod hash;
pub mod validation;

pub use config::{TerrainConfig, TerrainConfigBuilder};
pub use error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use hash::{canonical_config_hash, canonical_value_hash, canonicalize_json};
pub use validation::validate_config;
