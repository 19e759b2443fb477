//! Seed resolution.
//!
//! The core treats the seed as an opaque 32-bit integer; deciding where
//! it comes from lives here. Precedence: an explicit `--seed` flag, then
//! the config's `customSeed` (when `useCustomSeed` is set), then a fresh
//! random draw.

use rand::Rng;

use terrafield_spec::TerrainConfig;

/// Draws a random nine-digit seed.
///
/// Nine digits keeps generated filenames readable and matches the seed
/// space the generator has always stamped into them.
pub fn random_seed() -> i32 {
    rand::thread_rng().gen_range(100_000_000..1_000_000_000)
}

/// Resolves the seed for a generation run.
pub fn resolve_seed(cli_seed: Option<i32>, config: &TerrainConfig) -> i32 {
    match cli_seed {
        Some(seed) => seed,
        None if config.use_custom_seed => config.custom_seed,
        None => random_seed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_seed_has_nine_digits() {
        for _ in 0..100 {
            let seed = random_seed();
            assert!((100_000_000..1_000_000_000).contains(&seed));
        }
    }

    #[test]
    fn test_cli_seed_wins() {
        let config = TerrainConfig::builder(4, 4).custom_seed(7).build();
        assert_eq!(resolve_seed(Some(42), &config), 42);
    }

    #[test]
    fn test_custom_seed_used_when_enabled() {
        let config = TerrainConfig::builder(4, 4).custom_seed(7).build();
        assert_eq!(resolve_seed(None, &config), 7);
    }

    #[test]
    fn test_random_seed_when_no_policy() {
        let config = TerrainConfig::builder(4, 4).build();
        let seed = resolve_seed(None, &config);
        assert!((100_000_000..1_000_000_000).contains(&seed));
    }
}
