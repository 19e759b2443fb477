//! Deterministic mulberry32 PRNG.
//!
//! All terrain generation MUST draw randomness from this generator to
//! keep output reproducible. The exact update formula is part of the
//! compatibility contract: any change reshuffles every permutation table
//! and therefore every field generated from existing seeds.

/// Mulberry32 pseudo-random number generator.
///
/// A 32-bit state advanced by XOR-shifts and two wrapping 32-bit
/// multiplications per step. The seed constant `0x6D2B79F5` is folded in
/// once at construction, not once per step; that matches the historical
/// generator this one reproduces and must not be "corrected" to the
/// textbook variant.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a new generator from a 32-bit seed.
    pub fn new(seed: i32) -> Self {
        Self {
            state: (seed as u32).wrapping_add(0x6D2B_79F5),
        }
    }

    /// Advance the generator and return a float in `[0, 1)`.
    ///
    /// The folded 32-bit output is divided by 2^32 to normalize.
    pub fn next_f64(&mut self) -> f64 {
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        self.state = t;
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }
}
