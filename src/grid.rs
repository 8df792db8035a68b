//! The 2D grid data model.
//!
//! A [`Grid2`] is a dense rectangular buffer of f32 cell values with
//! dimensions fixed at creation. Radar and model fields reserve two sentinel
//! values that every consumer must keep distinct: a cell that was never
//! covered by the instrument ([`DATA_UNAVAILABLE`]) and a cell that was
//! scanned but produced no valid measurement ([`MISSING_DATA`]).

use ndarray::Array2;

use crate::error::{RegridError, Result};

/// Sentinel: the cell was inside coverage but holds no valid measurement.
pub const MISSING_DATA: f32 = -99900.0;

/// Sentinel: the cell is outside coverage; no data ever existed here.
pub const DATA_UNAVAILABLE: f32 = -99903.0;

/// True if the value is the missing-data sentinel.
#[inline]
pub fn is_missing(value: f32) -> bool {
    value == MISSING_DATA
}

/// True if the value is the unavailable sentinel.
#[inline]
pub fn is_unavailable(value: f32) -> bool {
    value == DATA_UNAVAILABLE
}

/// True if the value is either reserved sentinel.
#[inline]
pub fn is_sentinel(value: f32) -> bool {
    is_missing(value) || is_unavailable(value)
}

/// A dense 2D scalar grid.
///
/// Cells are addressed as (x, y) with x in `0..width` and y in `0..height`.
/// The backing storage is row-major: row y, column x.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2 {
    data: Array2<f32>,
}

impl Grid2 {
    /// Create a grid filled with a single value.
    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            data: Array2::from_elem((height, width), value),
        }
    }

    /// Create a grid with every cell marked unavailable.
    pub fn unavailable(width: usize, height: usize) -> Self {
        Self::filled(width, height, DATA_UNAVAILABLE)
    }

    /// Create a grid from a row-major vector of cell values.
    pub fn from_vec(width: usize, height: usize, values: Vec<f32>) -> Result<Self> {
        if values.len() != width * height {
            return Err(RegridError::Grid {
                message: format!(
                    "Cell count mismatch: got {} values for a {}x{} grid",
                    values.len(),
                    width,
                    height
                ),
            });
        }
        let data = Array2::from_shape_vec((height, width), values).map_err(|e| RegridError::Grid {
            message: format!("Failed to shape grid buffer: {}", e),
        })?;
        Ok(Self { data })
    }

    /// Grid width (number of columns).
    #[inline]
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// Grid height (number of rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Read the cell at (x, y). Indices must already be in range.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[(y, x)]
    }

    /// Write the cell at (x, y).
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        self.data[(y, x)] = value;
    }

    /// Borrow the backing ndarray.
    pub fn as_array(&self) -> &Array2<f32> {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_dimensions() {
        let grid = Grid2::filled(4, 3, 1.5);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(3, 2), 1.5);
    }

    #[test]
    fn test_from_vec_row_major() {
        let grid = Grid2::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        // Row 0 is the first three values
        assert_eq!(grid.get(0, 0), 1.0);
        assert_eq!(grid.get(2, 0), 3.0);
        assert_eq!(grid.get(0, 1), 4.0);
        assert_eq!(grid.get(2, 1), 6.0);
    }

    #[test]
    fn test_from_vec_size_mismatch() {
        let result = Grid2::from_vec(3, 2, vec![1.0, 2.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut grid = Grid2::unavailable(2, 2);
        assert!(is_unavailable(grid.get(1, 1)));
        grid.set(1, 1, 42.0);
        assert_eq!(grid.get(1, 1), 42.0);
    }

    #[test]
    fn test_sentinels_are_distinct() {
        assert_ne!(MISSING_DATA, DATA_UNAVAILABLE);
        assert!(is_missing(MISSING_DATA));
        assert!(!is_missing(DATA_UNAVAILABLE));
        assert!(is_unavailable(DATA_UNAVAILABLE));
        assert!(!is_unavailable(MISSING_DATA));
        assert!(is_sentinel(MISSING_DATA));
        assert!(is_sentinel(DATA_UNAVAILABLE));
        assert!(!is_sentinel(0.0));
    }
}
