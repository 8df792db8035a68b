//! Nearest neighbor sampling.
//!
//! Rounds the query coordinate to the nearest cell and returns that cell's
//! raw value. The simplest and fastest sampler, and the default chain head
//! when a pipeline specification names no sampler.

use std::sync::Arc;

use super::{Sampler, SamplerCore};
use crate::boundary::BoundaryMode;
use crate::grid::Grid2;

/// Nearest neighbor sampler.
#[derive(Debug, Default)]
pub struct NearestNeighborSampler {
    core: SamplerCore,
}

impl NearestNeighborSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from positional stage parameters. Nearest neighbor takes none;
    /// anything passed is ignored.
    pub fn from_params(_params: &[&str]) -> Self {
        Self::default()
    }
}

impl Sampler for NearestNeighborSampler {
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
        // f64::round is round-half-away-from-zero
        self.sample_at_index(u.round() as i64, v.round() as i64)
    }

    fn describe(&self) -> String {
        "nearest".to_string()
    }
}
