//! Grid samplers.
//!
//! A sampler is the head of a processing chain: it produces a value from raw
//! grid data given either an integer cell index or a continuous coordinate.
//! Filters (see [`crate::filter`]) decorate a sampler and post-process its
//! output through the same trait.

pub mod bilinear;
pub mod cressman;
pub mod nearest;

use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use crate::boundary::BoundaryMode;
use crate::grid::Grid2;

pub use bilinear::BilinearSampler;
pub use cressman::CressmanSampler;
pub use nearest::NearestNeighborSampler;

/// Capability set shared by every stage of a sampling chain.
///
/// Configuration calls (`set_source`, `set_boundary_*`) are forwarded all the
/// way upstream by filters, so configuring the chain head configures the
/// whole chain.
pub trait Sampler {
    /// Rebind the source grid. `None` clears the source; subsequent samples
    /// fail gracefully until a grid is bound again.
    fn set_source(&mut self, source: Option<Arc<Grid2>>);

    /// Select the boundary policy for the X axis.
    fn set_boundary_x(&mut self, mode: BoundaryMode);

    /// Select the boundary policy for the Y axis.
    fn set_boundary_y(&mut self, mode: BoundaryMode);

    /// Sample by integer cell index. Both indices are resolved through the
    /// configured boundary modes; `None` means the cell could not be read.
    /// This is the hot path of the 1:1 remap loop.
    fn sample_at_index(&self, i: i64, j: i64) -> Option<f32>;

    /// Sample at a continuous source coordinate.
    ///
    /// For integer coordinates this agrees with [`Sampler::sample_at_index`]
    /// for every concrete sampler.
    fn sample_at(&self, u: f64, v: f64) -> Option<f32>;

    /// One-line description of this stage (and its upstream, for filters).
    fn describe(&self) -> String;
}

/// Source binding and boundary state embedded by every concrete sampler.
#[derive(Debug, Clone, Default)]
pub struct SamplerCore {
    source: Option<Arc<Grid2>>,
    width: usize,
    height: usize,
    boundary_x: BoundaryMode,
    boundary_y: BoundaryMode,
}

impl SamplerCore {
    pub fn set_source(&mut self, source: Option<Arc<Grid2>>) {
        match &source {
            Some(grid) => {
                self.width = grid.width();
                self.height = grid.height();
            }
            None => {
                self.width = 0;
                self.height = 0;
            }
        }
        self.source = source;
    }

    pub fn set_boundary_x(&mut self, mode: BoundaryMode) {
        self.boundary_x = mode;
    }

    pub fn set_boundary_y(&mut self, mode: BoundaryMode) {
        self.boundary_y = mode;
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn boundary_x(&self) -> BoundaryMode {
        self.boundary_x
    }

    pub fn boundary_y(&self) -> BoundaryMode {
        self.boundary_y
    }

    /// Resolve both axes; either failing fails the cell.
    #[inline]
    pub fn resolve(&self, i: i64, j: i64) -> Option<(usize, usize)> {
        let x = self.boundary_x.resolve(i, self.width)?;
        let y = self.boundary_y.resolve(j, self.height)?;
        Some((x, y))
    }

    /// Read a cell whose indices have already been resolved.
    #[inline]
    pub fn read(&self, x: usize, y: usize) -> Option<f32> {
        self.source.as_ref().map(|grid| grid.get(x, y))
    }

    /// Raw indexed sample: resolve then read, no coordinate math.
    #[inline]
    pub fn sample_at_index(&self, i: i64, j: i64) -> Option<f32> {
        let (x, y) = self.resolve(i, j)?;
        self.read(x, y)
    }
}

/// Parse one positional stage parameter, keeping the default on failure.
///
/// Malformed parameters are a recoverable configuration problem: they are
/// logged and the stage keeps its default rather than aborting the pipeline.
pub(crate) fn parse_param<T>(params: &[&str], position: usize, stage: &str, name: &str, default: T) -> T
where
    T: FromStr + Copy,
    T::Err: Display,
{
    match params.get(position) {
        None => default,
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(
                    stage = stage,
                    param = name,
                    raw = *raw,
                    error = %e,
                    "Malformed stage parameter, keeping default"
                );
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid2, DATA_UNAVAILABLE};

    fn ramp_grid() -> Arc<Grid2> {
        // 3x3 grid with values 1..9, row-major
        Arc::new(Grid2::from_vec(3, 3, (1..=9).map(|v| v as f32).collect()).unwrap())
    }

    #[test]
    fn test_core_rebind_recomputes_dimensions() {
        let mut core = SamplerCore::default();
        assert_eq!(core.width(), 0);
        core.set_source(Some(ramp_grid()));
        assert_eq!((core.width(), core.height()), (3, 3));
        core.set_source(None);
        assert_eq!((core.width(), core.height()), (0, 0));
    }

    #[test]
    fn test_core_sample_without_source_fails() {
        let core = SamplerCore::default();
        assert_eq!(core.sample_at_index(0, 0), None);
    }

    #[test]
    fn test_core_indexed_sample() {
        let mut core = SamplerCore::default();
        core.set_source(Some(ramp_grid()));
        assert_eq!(core.sample_at_index(0, 0), Some(1.0));
        assert_eq!(core.sample_at_index(2, 2), Some(9.0));
        assert_eq!(core.sample_at_index(3, 0), None);
        assert_eq!(core.sample_at_index(0, -1), None);
    }

    #[test]
    fn test_core_axes_resolve_independently() {
        let mut core = SamplerCore::default();
        core.set_source(Some(ramp_grid()));
        core.set_boundary_x(BoundaryMode::Wrap);
        // X wraps, Y still rejects
        assert_eq!(core.sample_at_index(3, 0), Some(1.0));
        assert_eq!(core.sample_at_index(3, 3), None);
        core.set_boundary_y(BoundaryMode::Clamp);
        assert_eq!(core.sample_at_index(3, 3), Some(7.0));
    }

    #[test]
    fn test_parse_param_defaults() {
        assert_eq!(parse_param::<usize>(&[], 0, "bilinear", "width", 3), 3);
        assert_eq!(parse_param::<usize>(&["5"], 0, "bilinear", "width", 3), 5);
        assert_eq!(parse_param::<usize>(&["bogus"], 0, "bilinear", "width", 3), 3);
        assert_eq!(parse_param::<f64>(&["50", "5", "0.25"], 2, "percent", "minFill", 0.33), 0.25);
    }

    #[test]
    fn test_core_read_sentinel_passthrough() {
        let mut core = SamplerCore::default();
        core.set_source(Some(Arc::new(Grid2::unavailable(2, 2))));
        assert_eq!(core.sample_at_index(1, 1), Some(DATA_UNAVAILABLE));
    }
}
