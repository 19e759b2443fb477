//! Canonical config hashing.
//!
//! Two runs with the same config and seed must be reproducible, so
//! reports and filenames carry a canonical hash of the config:
//!
//! ```text
//! config_hash = hex(BLAKE3(canonical_json(config)))
//! ```
//!
//! Canonical JSON sorts object keys lexicographically and emits no
//! whitespace, so the hash is independent of field order in the source
//! file.

use crate::config::TerrainConfig;
use crate::error::SpecError;

/// Computes the canonical BLAKE3 hash of a config.
///
/// Returns a 64-character lowercase hexadecimal string.
///
/// # Example
/// ```
/// use terrafield_spec::{TerrainConfig, canonical_config_hash};
///
/// let config = TerrainConfig::builder(64, 64).custom_seed(42).build();
/// let hash = canonical_config_hash(&config).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_config_hash(config: &TerrainConfig) -> Result<String, SpecError> {
    let value = config.to_value()?;
    canonical_value_hash(&value)
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> Result<String, SpecError> {
    let canonical = canonicalize_json(value);
    let hash = blake3::hash(canonical.as_bytes());
    Ok(hash.to_hex().to_string())
}

/// Canonicalizes a JSON value: keys sorted, no whitespace.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => {
            serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
        }
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut sorted_keys: Vec<&String> = obj.keys().collect();
            sorted_keys.sort();
            let items: Vec<String> = sorted_keys
                .iter()
                .map(|k| {
                    format!(
                        "{}:{}",
                        serde_json::to_string(k).unwrap_or_else(|_| format!("\"{}\"", k)),
                        canonicalize_json(&obj[*k])
                    )
                })
                .collect();
            format!("{{{}}}", items.join(","))
        }
    }
}
