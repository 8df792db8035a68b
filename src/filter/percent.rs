//! Percentile (generalized median) filter.
//!
//! For each destination query, gathers upstream values over a
//! `(2*halfX + 1) x (2*halfY + 1)` neighborhood and returns the requested
//! order statistic. The window must reach a configurable fill fraction of
//! valid values, otherwise the result is the missing-data sentinel.
//!
//! The rank element is found with a partial selection
//! (`select_nth_unstable_by`), not a full sort.

use std::sync::Arc;

use crate::boundary::BoundaryMode;
use crate::grid::{is_sentinel, Grid2, MISSING_DATA};
use crate::sampler::{parse_param, Sampler};

const DEFAULT_PERCENTILE: f64 = 50.0;
const DEFAULT_HALF: usize = 5;
const DEFAULT_MIN_FILL: f64 = 0.33;

/// Windowed percentile filter over an upstream sampler.
pub struct PercentFilter {
    upstream: Box<dyn Sampler>,
    percentile: f64,
    half_x: usize,
    half_y: usize,
    min_fill: f64,
}

impl PercentFilter {
    pub fn new(
        upstream: Box<dyn Sampler>,
        percentile: f64,
        half_x: usize,
        min_fill: f64,
        half_y: usize,
    ) -> Self {
        Self {
            upstream,
            percentile,
            half_x,
            half_y,
            min_fill,
        }
    }

    /// Build from positional stage parameters
    /// `percentile:halfX:minFill:halfY`, defaults `50:5:0.33` with halfY
    /// defaulting to whatever halfX resolved to.
    pub fn from_params(upstream: Box<dyn Sampler>, params: &[&str]) -> Self {
        let percentile = parse_param(params, 0, "percent", "percentile", DEFAULT_PERCENTILE);
        let half_x = parse_param(params, 1, "percent", "halfX", DEFAULT_HALF);
        let min_fill = parse_param(params, 2, "percent", "minFill", DEFAULT_MIN_FILL);
        let half_y = parse_param(params, 3, "percent", "halfY", half_x);
        Self::new(upstream, percentile, half_x, min_fill, half_y)
    }

    fn window_area(&self) -> usize {
        (2 * self.half_x + 1) * (2 * self.half_y + 1)
    }

    /// Select the configured order statistic from the gathered values.
    fn select(&self, mut values: Vec<f32>) -> Option<f32> {
        let required = (self.min_fill * self.window_area() as f64).round() as usize;
        if values.len() <= required {
            return Some(MISSING_DATA);
        }
        let rank = ((values.len() as f64 * self.percentile / 100.0).floor() as usize)
            .min(values.len() - 1);
        let (_, nth, _) = values.select_nth_unstable_by(rank, |a, b| a.total_cmp(b));
        Some(*nth)
    }

    fn gather<F>(&self, sample: F) -> Vec<f32>
    where
        F: Fn(i64, i64) -> Option<f32>,
    {
        let mut values = Vec::with_capacity(self.window_area());
        for dy in -(self.half_y as i64)..=self.half_y as i64 {
            for dx in -(self.half_x as i64)..=self.half_x as i64 {
                if let Some(value) = sample(dx, dy) {
                    if !is_sentinel(value) {
                        values.push(value);
                    }
                }
            }
        }
        values
    }
}

impl Sampler for PercentFilter {
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
        let values = self.gather(|dx, dy| self.upstream.sample_at_index(i + dx, j + dy));
        self.select(values)
    }

    fn sample_at(&self, u: f64, v: f64) -> Option<f32> {
        let values = self.gather(|dx, dy| self.upstream.sample_at(u + dx as f64, v + dy as f64));
        self.select(values)
    }

    fn describe(&self) -> String {
        format!(
            "percent(percentile={}, halfX={}, minFill={}, halfY={}) <- {}",
            self.percentile,
            self.half_x,
            self.min_fill,
            self.half_y,
            self.upstream.describe()
        )
    }
}
