//! Grid fixtures for integration tests.

use std::sync::Arc;

use regrid::{Grid2, DATA_UNAVAILABLE, MISSING_DATA};

/// A grid whose cell (x, y) holds `y * width + x`.
pub fn ramp_grid(width: usize, height: usize) -> Arc<Grid2> {
    let values = (0..width * height).map(|v| v as f32).collect();
    Arc::new(Grid2::from_vec(width, height, values).unwrap())
}

/// A reflectivity-like field: a bright core over a weak background, with a
/// missing stripe and an unavailable corner.
pub fn storm_grid() -> Arc<Grid2> {
    let mut grid = Grid2::filled(8, 8, 5.0);
    for y in 3..6 {
        for x in 3..6 {
            grid.set(x, y, 45.0);
        }
    }
    for y in 0..8 {
        grid.set(6, y, MISSING_DATA);
    }
    grid.set(0, 0, DATA_UNAVAILABLE);
    grid.set(1, 0, DATA_UNAVAILABLE);
    grid.set(0, 1, DATA_UNAVAILABLE);
    Arc::new(grid)
}
