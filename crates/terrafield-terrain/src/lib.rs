//! Terrafield Terrain Generation Backend
//!
//! Deterministic, seed-reproducible terrain noise fields built from
//! layered fractal-Brownian-motion Perlin noise. The same config and
//! seed always produce the identical quantized field.
//!
//! # Pipeline
//!
//! ```text
//! generate_terrain
//!   -> per pass: generate_layer          (fresh permutation per pass)
//!        -> per cell, per octave: PerlinNoise::sample
//!             -> permutation table       (built from Mulberry32)
//! ```
//!
//! # Example
//!
//! ```
//! use terrafield_spec::TerrainConfig;
//! use terrafield_terrain::generate_terrain;
//!
//! let config = TerrainConfig::builder(64, 64)
//!     .passes(3)
//!     .scale_size(0.05)
//!     .octave_weight(2.0)
//!     .noise_range(1, 100)
//!     .build();
//!
//! let map = generate_terrain(&config, 123456789).unwrap();
//! assert_eq!(map.len(), 64 * 64);
//! ```
//!
//! # Determinism
//!
//! - mulberry32 drives all randomness; no external RNG reaches the core
//! - permutation tables are rebuilt per pass from `seed + pass`
//! - normalization rounds halves toward positive infinity
//! - the computation is single-threaded and purely CPU-bound, with no
//!   I/O and no shared state between invocations

pub mod fbm;
pub mod field;
pub mod generate;
pub mod noise;
pub mod rng;

pub use fbm::generate_layer;
pub use field::{HeightMap, NoiseField};
pub use generate::{generate_terrain, GenerateError, OCTAVES_PER_PASS, PERSISTENCE};
pub use noise::{build_permutation, fade, lerp, round_half_up, PerlinNoise};
pub use rng::Mulberry32;
