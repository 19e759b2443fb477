//! Flat 2D field types.
//!
//! Both field types share one indexing convention:
//!
//! ```text
//! index = x * height + y
//! ```
//!
//! x varies slowest, so the layout is column-major in effect. Every
//! consumer (layer generation, accumulation, rendering) goes through
//! these accessors instead of re-deriving the arithmetic, which is the
//! classic way to pick up a transposition bug.

/// A floating-point noise field of `width * height` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    width: u32,
    height: u32,
    data: Vec<f64>,
}

impl NoiseField {
    /// Create a zero-filled field.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![0.0; size],
        }
    }

    /// Field width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Field height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        x as usize * self.height as usize + y as usize
    }

    /// Get the sample at `(x, y)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.data[self.index(x, y)]
    }

    /// Set the sample at `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// All samples in index order.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access to all samples in index order.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

/// The final quantized terrain field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    width: u32,
    height: u32,
    data: Vec<i32>,
}

impl HeightMap {
    /// Create a height map from quantized samples.
    ///
    /// # Panics
    /// Panics if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<i32>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize,
            "height map data must hold width * height samples"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Map width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the value at `(x, y)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> i32 {
        debug_assert!(x < self.width && y < self.height);
        self.data[x as usize * self.height as usize + y as usize]
    }

    /// All values in index order.
    pub fn values(&self) -> &[i32] {
        &self.data
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for an empty map (zero-area grid).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Smallest and largest value, or `None` for an empty map.
    pub fn value_range(&self) -> Option<(i32, i32)> {
        let first = *self.data.first()?;
        let mut min = first;
        let mut max = first;
        for &v in &self.data[1..] {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        Some((min, max))
    }
}
