//! Bilinear sampling over a configurable window.
//!
//! Each cell in a `width x height` window around the query point contributes
//! with weight `(1 - |dx|) * (1 - |dy|)`, where dx and dy are measured from
//! the true query point in unwrapped coordinate space. The window is anchored
//! at the truncated integer part of the coordinate.
//!
//! Two notions of position are kept apart: the spatial offset drives the
//! weight, the memory index (run through the boundary resolvers, so it may
//! wrap or clamp) drives the buffer read. A wrapped cell therefore keeps the
//! weight of its true geometric position.

use std::sync::Arc;

use super::{parse_param, Sampler, SamplerCore};
use crate::boundary::BoundaryMode;
use crate::grid::{is_missing, is_unavailable, Grid2, DATA_UNAVAILABLE, MISSING_DATA};

const DEFAULT_WINDOW: usize = 3;

/// Bilinear sampler with a configurable window.
#[derive(Debug)]
pub struct BilinearSampler {
    core: SamplerCore,
    window_width: usize,
    window_height: usize,
}

impl BilinearSampler {
    pub fn new(window_width: usize, window_height: usize) -> Self {
        Self {
            core: SamplerCore::default(),
            window_width,
            window_height,
        }
    }

    /// Build from positional stage parameters `width:height`, both default 3.
    pub fn from_params(params: &[&str]) -> Self {
        let width = parse_param(params, 0, "bilinear", "width", DEFAULT_WINDOW);
        let height = parse_param(params, 1, "bilinear", "height", DEFAULT_WINDOW);
        Self::new(width, height)
    }
}

impl Default for BilinearSampler {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW, DEFAULT_WINDOW)
    }
}

impl Sampler for BilinearSampler {
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
            let wy = 1.0 - (cell_y as f64 - v).abs();
            if wy <= 0.0 {
                continue;
            }
            let Some(mem_y) = self.core.boundary_y().resolve(cell_y, self.core.height()) else {
                continue;
            };
            for col in 0..self.window_width as i64 {
                let cell_x = start_x + col;
                let wx = 1.0 - (cell_x as f64 - u).abs();
                if wx <= 0.0 {
                    continue;
                }
                let Some(mem_x) = self.core.boundary_x().resolve(cell_x, self.core.width()) else {
                    continue;
                };
                let Some(value) = self.core.read(mem_x, mem_y) else {
                    continue;
                };
                if is_unavailable(value) {
                    continue;
                }
                if is_missing(value) {
                    saw_missing = true;
                    continue;
                }
                let weight = wx * wy;
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
        format!("bilinear(width={}, height={})", self.window_width, self.window_height)
    }
}
