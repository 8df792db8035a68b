//! Threshold filter.
//!
//! Clamps values above `max` to `max` and replaces values below `min` with
//! the missing-data sentinel. Reserved sentinel values pass through
//! untouched so the unavailable/missing distinction survives the filter.

use std::sync::Arc;

use crate::boundary::BoundaryMode;
use crate::grid::{is_sentinel, Grid2, MISSING_DATA};
use crate::sampler::{parse_param, Sampler};

const DEFAULT_MIN: f32 = 0.0;
const DEFAULT_MAX: f32 = 100.0;

/// Value-range filter over an upstream sampler.
pub struct ThresholdFilter {
    upstream: Box<dyn Sampler>,
    min: f32,
    max: f32,
}

impl ThresholdFilter {
    pub fn new(upstream: Box<dyn Sampler>, min: f32, max: f32) -> Self {
        Self { upstream, min, max }
    }

    /// Build from positional stage parameters `min:max`, defaults 0:100.
    pub fn from_params(upstream: Box<dyn Sampler>, params: &[&str]) -> Self {
        let min = parse_param(params, 0, "threshold", "min", DEFAULT_MIN);
        let max = parse_param(params, 1, "threshold", "max", DEFAULT_MAX);
        Self::new(upstream, min, max)
    }

    fn apply(&self, value: f32) -> f32 {
        if is_sentinel(value) {
            value
        } else if value > self.max {
            self.max
        } else if value < self.min {
            MISSING_DATA
        } else {
            value
        }
    }
}

impl Sampler for ThresholdFilter {
    fn set_source(&mut self, source: Option<Arc<Grid2>>) {
        self.upstream.set_source(source);
    }

    fn set_boundary_x(&mut self, mode: BoundaryMode) {
        self.upstream.set_boundary_x(mode);
    }

    fn set_boundary_y(&mut self, mode: BoundaryMode) {
        self.upstream.set_boundary_y(mode);
    }

    fn sample_at_index(&self, i: i64, j: i64) -> Option<f32> {
        self.upstream.sample_at_index(i, j).map(|v| self.apply(v))
    }

    fn sample_at(&self, u: f64, v: f64) -> Option<f32> {
        self.upstream.sample_at(u, v).map(|v| self.apply(v))
    }

    fn describe(&self) -> String {
        format!(
            "threshold(min={}, max={}) <- {}",
            self.min,
            self.max,
            self.upstream.describe()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid2, DATA_UNAVAILABLE};
    use crate::sampler::NearestNeighborSampler;

    fn filter_over(values: Vec<f32>, min: f32, max: f32) -> ThresholdFilter {
        let width = values.len();
        let grid = Grid2::from_vec(width, 1, values).unwrap();
        let mut filter =
            ThresholdFilter::new(Box::new(NearestNeighborSampler::new()), min, max);
        filter.set_source(Some(Arc::new(grid)));
        filter
    }

    #[test]
    fn test_clamp_above_max() {
        let filter = filter_over(vec![60.0], 18.0, 50.0);
        assert_eq!(filter.sample_at_index(0, 0), Some(50.0));
    }

    #[test]
    fn test_below_min_becomes_missing() {
        let filter = filter_over(vec![10.0], 18.0, 50.0);
        assert_eq!(filter.sample_at_index(0, 0), Some(MISSING_DATA));
    }

    #[test]
    fn test_in_range_passes_through() {
        let filter = filter_over(vec![30.0], 18.0, 50.0);
        assert_eq!(filter.sample_at_index(0, 0), Some(30.0));
        assert_eq!(filter.sample_at(0.0, 0.0), Some(30.0));
    }

    #[test]
    fn test_sentinels_pass_through() {
        let filter = filter_over(vec![MISSING_DATA, DATA_UNAVAILABLE], 18.0, 50.0);
        assert_eq!(filter.sample_at_index(0, 0), Some(MISSING_DATA));
        assert_eq!(filter.sample_at_index(1, 0), Some(DATA_UNAVAILABLE));
    }

    #[test]
    fn test_upstream_failure_propagates() {
        let filter = filter_over(vec![30.0], 18.0, 50.0);
        assert_eq!(filter.sample_at_index(5, 0), None);
    }

    #[test]
    fn test_from_params_defaults() {
        let filter =
            ThresholdFilter::from_params(Box::new(NearestNeighborSampler::new()), &[]);
        assert_eq!(filter.describe(), "threshold(min=0, max=100) <- nearest");
        let filter = ThresholdFilter::from_params(
            Box::new(NearestNeighborSampler::new()),
            &["18", "oops"],
        );
        assert_eq!(filter.describe(), "threshold(min=18, max=100) <- nearest");
    }
}
