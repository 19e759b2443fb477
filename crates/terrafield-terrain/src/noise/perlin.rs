//! 2D gradient noise sampler.
//!
//! Classic permutation-table Perlin noise with one deliberate quirk: the
//! gradient selector keeps all 16 hash cases, including the degenerate
//! ones the canonical 12-gradient table folds away. Together with the
//! empirical output scale this defines the exact values existing seeds
//! reproduce, so neither may change.

use super::{fade, lerp};
use crate::rng::Mulberry32;

/// Output scale applied to the interpolated gradient value. Empirical
/// amplitude normalization; keeps samples in roughly `[-1, 1]`.
const AMPLITUDE_SCALE: f64 = 0.507;

/// Builds the doubled permutation table for a seed.
///
/// The values 0..=255 are shuffled with a Fisher-Yates pass driven by the
/// mulberry32 stream (`j = floor(next() * (i + 1))`, walking `i` from 255
/// down to 1) and the shuffled block is then repeated, so entry `i + 256`
/// always equals entry `i`. The doubling lets corner hashing index
/// `table[xi + 1] + yi + 1` without wrapping.
pub fn build_permutation(seed: i32) -> [u8; 512] {
    let mut rng = Mulberry32::new(seed);
    let mut source: Vec<u8> = (0..=255).collect();

    for i in (1..256).rev() {
        let j = (rng.next_f64() * (i as f64 + 1.0)).floor() as usize;
        source.swap(i, j);
    }

    let mut perm = [0u8; 512];
    perm[..256].copy_from_slice(&source);
    perm[256..].copy_from_slice(&source);
    perm
}

/// 2D gradient noise generator.
#[derive(Clone)]
pub struct PerlinNoise {
    /// Permutation table (256 values, doubled for wrapping).
    perm: [u8; 512],
}

impl PerlinNoise {
    /// Create a new generator with the given seed.
    pub fn new(seed: i32) -> Self {
        Self {
            perm: build_permutation(seed),
        }
    }

    #[inline]
    fn at(&self, idx: usize) -> usize {
        self.perm[idx] as usize
    }

    /// Sample the noise at a 2D coordinate.
    ///
    /// Returns a value in approximately `[-1, 1]`. Pure function of the
    /// coordinate and the table contents.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Wrap lattice coordinates to the permutation size.
        let xi = ((x.floor() as i32) & 255) as usize;
        let yi = ((y.floor() as i32) & 255) as usize;

        let xf = x - x.floor();
        let yf = y - y.floor();

        let u = fade(xf);
        let v = fade(yf);

        // Hash the four surrounding lattice corners.
        let aaa = self.at(self.at(xi) + yi);
        let aba = self.at(self.at(xi) + yi + 1);
        let baa = self.at(self.at(xi + 1) + yi);
        let bba = self.at(self.at(xi + 1) + yi + 1);

        // Gradient dot products at the corners.
        let n0 = grad(aaa, xf, yf);
        let n1 = grad(baa, xf - 1.0, yf);
        let n2 = grad(aba, xf, yf - 1.0);
        let n3 = grad(bba, xf - 1.0, yf - 1.0);

        // Interpolate along x, then y.
        let nx0 = lerp(n0, n1, u);
        let nx1 = lerp(n2, n3, u);

        lerp(nx0, nx1, v) * AMPLITUDE_SCALE
    }
}

/// Gradient selection over 16 hash cases.
///
/// `h == 12` and `h == 14` reuse the x component and four cases zero the
/// second term entirely. Not the canonical 12-gradient table; the branch
/// conditions are load-bearing for seed compatibility.
#[inline]
fn grad(hash: usize, x: f64, y: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        0.0
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}
