//! Cressman (inverse-distance) sampling over a configurable window.
//!
//! Keeps the same spatial/memory split as the bilinear sampler but weighs
//! each cell by `1 / dist` in unwrapped coordinate space. An exact cell hit
//! (distance below machine epsilon) short-circuits to that cell's raw value,
//! which also keeps the divide out of reach of zero.

use std::sync::Arc;

use super::{parse_param, Sampler, SamplerCore};
use crate::boundary::BoundaryMode;
use crate::grid::{is_missing, is_unavailable, Grid2, DATA_UNAVAILABLE, MISSING_DATA};

const DEFAULT_WINDOW: usize = 3;

/// Cressman inverse-distance sampler.
#[derive(Debug)]
pub struct CressmanSampler {
    core: SamplerCore,
    window_width: usize,
    window_height: usize,
}

impl CressmanSampler {
    pub fn new(window_width: usize, window_height: usize) -> Self {
        Self {
            core: SamplerCore::default(),
            window_width,
            window_height,
        }
    }

    /// Build from positional stage parameters `width:height`, both default 3.
    pub fn from_params(params: &[&str]) -> Self {
        let width = parse_param(params, 0, "cressman", "width", DEFAULT_WINDOW);
        let height = parse_param(params, 1, "cressman", "height", DEFAULT_WINDOW);
        Self::new(width, height)
    }

    #[cfg(test)]
    pub(crate) fn window(&self) -> (usize, usize) {
        (self.window_width, self.window_height)
    }
}

impl Default for CressmanSampler {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW, DEFAULT_WINDOW)
    }
}

impl Sampler for CressmanSampler {
    fn set_source(&mut self, source: Option<Arc<Grid2>>) {
        self.core.set_source(source);
    }

    fn set_boundary_x(&mut self, mode: BoundaryMode) {
        self.core.set_boundary_x(mode);
    }

    fn set_boundary_y(&mut self, mode: BoundaryMode) {
        self.core.set_boundary_y(mode);
    }

    #[inline]
    fn sample_at_index(&self, i: i64, j: i64) -> Option<f32> {
        self.core.sample_at_index(i, j)
    }

    fn sample_at(&self, u: f64, v: f64) -> Option<f32> {
        if !self.core.has_source() {
            return None;
        }

        let anchor_x = u.trunc() as i64;
        let anchor_y = v.trunc() as i64;
        let start_x = anchor_x - (self.window_width / 2) as i64;
        let start_y = anchor_y - (self.window_height / 2) as i64;

        let mut weight_sum = 0.0f64;
        let mut value_sum = 0.0f64;
        let mut saw_missing = false;

        for row in 0..self.window_height as i64 {
            let cell_y = start_y + row;
            let dy = cell_y as f64 - v;
            let Some(mem_y) = self.core.boundary_y().resolve(cell_y, self.core.height()) else {
                continue;
            };
            for col in 0..self.window_width as i64 {
                let cell_x = start_x + col;
                let dx = cell_x as f64 - u;
                let Some(mem_x) = self.core.boundary_x().resolve(cell_x, self.core.width()) else {
                    continue;
                };
                let Some(value) = self.core.read(mem_x, mem_y) else {
                    continue;
                };

                let dist = (dx * dx + dy * dy).sqrt();
                if dist < f64::EPSILON {
                    // Exact hit: the cell's raw value, no averaging
                    return Some(value);
                }
                if is_unavailable(value) {
                    continue;
                }
                if is_missing(value) {
                    saw_missing = true;
                    continue;
                }
                let weight = 1.0 / dist;
                weight_sum += weight;
                value_sum += weight * value as f64;
            }
        }

        if weight_sum > 0.0 {
            Some((value_sum / weight_sum) as f32)
        } else if saw_missing {
            Some(MISSING_DATA)
        } else {
            Some(DATA_UNAVAILABLE)
        }
    }

    fn describe(&self) -> String {
        format!("cressman(width={}, height={})", self.window_width, self.window_height)
    }
}
