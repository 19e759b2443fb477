//! Config file loading with source provenance.

use std::fs;
use std::path::Path;

use terrafield_spec::{SpecError, TerrainConfig};

/// Result of loading a config file.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed config.
    pub config: TerrainConfig,
    /// BLAKE3 hash of the source file content (hex string).
    pub source_hash: String,
}

/// Loads a JSON config file and hashes its raw content.
///
/// The source hash covers the bytes on disk, so formatting changes show
/// up in provenance output even when the parsed config is unchanged;
/// [`terrafield_spec::canonical_config_hash`] is the formatting-independent
/// counterpart.
pub fn load_config(path: &Path) -> Result<LoadResult, SpecError> {
    let raw = fs::read_to_string(path)?;
    let source_hash = blake3::hash(raw.as_bytes()).to_hex().to_string();
    let config = TerrainConfig::from_json(&raw)?;
    Ok(LoadResult {
        config,
        source_hash,
    })
}
