//! Synthetic replacement pixel content.
//!
//! Real anatomical pixel data is overwritten with a deterministic test
//! pattern that varies only by slice parity and row banding, so scrubbed
//! series remain visually distinguishable slice-to-slice without carrying
//! any patient content.

/// A grid of signed 16-bit samples with the same shape as the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripePattern {
    rows: u32,
    columns: u32,
    values: Vec<i16>,
}

impl StripePattern {
    /// Number of rows in the grid.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns in the grid.
    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Samples in row-major order.
    #[must_use]
    pub fn values(&self) -> &[i16] {
        &self.values
    }

    /// Raw little-endian bytes, suitable for a 16-bit pixel buffer.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.values.len() * 2);
        for value in &self.values {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }
}

/// Generates the replacement pattern for the slice at `index`.
///
/// Even indexes produce horizontal bands: rows with `row % 10 < 5` are
/// `-2048`, the rest are `0`. Odd indexes produce a uniform `-1024` grid.
/// The pattern is a pure function of shape and index.
#[must_use]
pub fn generate_stripe(rows: u32, columns: u32, index: i32) -> StripePattern {
    let mut values = Vec::with_capacity(rows as usize * columns as usize);
    for row in 0..rows {
        let value = if index % 2 == 0 {
            if row % 10 < 5 { -2048 } else { 0 }
        } else {
            -1024
        };
        values.extend(std::iter::repeat_n(value, columns as usize));
    }
    StripePattern {
        rows,
        columns,
        values,
    }
}
