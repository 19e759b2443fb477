//! End-to-end terrain generation tests: determinism, shape, output range,
//! pass composition, and the historical per-layer rescale behavior.

use terrafield_spec::{validate_config, TerrainConfig};
use terrafield_terrain::{generate_layer, generate_terrain, GenerateError};

fn small_config() -> TerrainConfig {
    TerrainConfig::builder(4, 4)
        .passes(1)
        .scale_size(0.1)
        .octave_weight(2.0)
        .noise_range(1, 100)
        .build()
}

// ============================================================================
// Determinism and shape
// ============================================================================

/// Same config and seed, twice: identical fields.
#[test]
fn test_generation_deterministic() {
    let config = TerrainConfig::builder(32, 24)
        .passes(3)
        .scale_size(0.02)
        .octave_weight(2.0)
        .noise_range(1, 100)
        .build();

    let a = generate_terrain(&config, 123_456_789).unwrap();
    let b = generate_terrain(&config, 123_456_789).unwrap();
    assert_eq!(a, b);
}

/// Output length is always width * height.
#[test]
fn test_output_shape() {
    for (w, h) in [(4, 4), (16, 9), (1, 64), (33, 7)] {
        let config = TerrainConfig::builder(w, h)
            .passes(2)
            .scale_size(0.05)
            .build();
        let map = generate_terrain(&config, 7).unwrap();
        assert_eq!(map.len(), (w * h) as usize);
        assert_eq!(map.width(), w);
        assert_eq!(map.height(), h);
    }
}

/// Different seeds produce different fields.
#[test]
fn test_seed_changes_output() {
    let config = small_config();
    let a = generate_terrain(&config, 42).unwrap();
    let b = generate_terrain(&config, 43).unwrap();
    assert_ne!(a, b);
}

// ============================================================================
// Output range
// ============================================================================

/// Non-degenerate fields are quantized into [min, max].
#[test]
fn test_output_within_configured_range() {
    let config = TerrainConfig::builder(32, 32)
        .passes(2)
        .scale_size(0.03)
        .octave_weight(2.0)
        .noise_range(-50, 200)
        .build();

    let map = generate_terrain(&config, 999).unwrap();
    let (min, max) = map.value_range().unwrap();
    assert!(min >= -50, "value below configured minimum: {min}");
    assert!(max <= 200, "value above configured maximum: {max}");
    // The normalization pins both endpoints.
    assert_eq!(min, -50);
    assert_eq!(max, 200);
}

// ============================================================================
// Scenario A: 4x4, one pass, seed 42
// ============================================================================

#[test]
fn test_small_grid_single_pass() {
    let config = small_config();

    let map = generate_terrain(&config, 42).unwrap();
    assert_eq!(map.len(), 16);

    let again = generate_terrain(&config, 42).unwrap();
    assert_eq!(map, again, "repeat run must reproduce the field");

    let (min, max) = map.value_range().unwrap();
    assert!(max > min, "field must not be constant for this seed");
    assert!(min >= 1 && max <= 100);
}

// ============================================================================
// Scenario B: passes = 0 is a caller-side rejection
// ============================================================================

#[test]
fn test_zero_passes_rejected_by_validation() {
    let mut config = small_config();
    config.passes = 0;
    assert!(
        !validate_config(&config).is_ok(),
        "validation must reject passes = 0 before the core runs"
    );
}

// ============================================================================
// Scenario C: pass count changes the field
// ============================================================================

#[test]
fn test_pass_count_changes_output() {
    let base = TerrainConfig::builder(16, 16)
        .scale_size(0.05)
        .octave_weight(2.0)
        .noise_range(1, 100)
        .build();

    let one = generate_terrain(&TerrainConfig { passes: 1, ..base.clone() }, 42).unwrap();
    let two = generate_terrain(&TerrainConfig { passes: 2, ..base.clone() }, 42).unwrap();
    let three = generate_terrain(&TerrainConfig { passes: 3, ..base }, 42).unwrap();

    assert_ne!(one, two);
    assert_ne!(two, three);
    assert_ne!(one, three);
}

// ============================================================================
// Scenario D: degenerate 1x1 grid
// ============================================================================

#[test]
fn test_unit_grid_reports_degenerate_field() {
    let config = TerrainConfig::builder(1, 1)
        .scale_size(0.1)
        .build();

    match generate_terrain(&config, 42) {
        Err(GenerateError::DegenerateField { width: 1, height: 1, passes: 1 }) => {}
        other => panic!("expected DegenerateField, got {other:?}"),
    }
}

// ============================================================================
// Historical per-layer rescale behavior
// ============================================================================

/// The per-layer rescale is `round(normalized * max)`: the configured
/// minimum cancels out of the formula entirely. This documents current
/// behavior; it is not an endorsement of it.
#[test]
fn test_layer_rescale_ignores_minimum() {
    let a = generate_layer(8, 8, 1.2, 0.5, 0.1, 42, 0, 100);
    let b = generate_layer(8, 8, 1.2, 0.5, 0.1, 42, 25, 100);
    let c = generate_layer(8, 8, 1.2, 0.5, 0.1, 42, -40, 100);
    assert_eq!(a.values(), b.values());
    assert_eq!(a.values(), c.values());
}

/// With the minimum cancelled, layer values land in [0, max] rather than
/// [min, max]; the zero floor comes from the squared octave sums.
#[test]
fn test_layer_rescale_spans_zero_to_max() {
    let layer = generate_layer(16, 16, 1.2, 0.5, 0.1, 42, 25, 50);
    let min = layer.values().iter().cloned().fold(f64::MAX, f64::min);
    let max = layer.values().iter().cloned().fold(f64::MIN, f64::max);

    assert_eq!(min, 0.0, "layer minimum rescales to zero, below the configured 25");
    assert_eq!(max, 50.0, "layer maximum rescales to the configured maximum");
}
