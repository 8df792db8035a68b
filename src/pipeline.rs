//! Pipeline configuration parsing.
//!
//! A pipeline specification is a comma-separated list of stages, each
//! `name[:param1[:param2...]]`, e.g. `"cressman:3:3,threshold:18:50"`. The
//! first stage names the sampler at the head of the chain; every later stage
//! names a filter wrapped around the current head.
//!
//! Parsing degrades rather than fails: an unknown first-stage name falls back
//! to nearest neighbor (and the segment is re-tried as a filter), an unknown
//! filter is skipped with a logged diagnostic, and malformed parameters keep
//! their defaults. A pipeline is always produced.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::filter::{PercentFilter, ThresholdFilter};
use crate::sampler::{BilinearSampler, CressmanSampler, NearestNeighborSampler, Sampler};

/// Factory for a chain-head sampler, given its positional parameters.
pub type SamplerFactory = fn(&[&str]) -> Box<dyn Sampler>;

/// Factory for a filter stage, given its upstream and positional parameters.
pub type FilterFactory = fn(Box<dyn Sampler>, &[&str]) -> Box<dyn Sampler>;

struct SamplerEntry {
    factory: SamplerFactory,
    usage: &'static str,
}

struct FilterEntry {
    factory: FilterFactory,
    usage: &'static str,
}

/// Name-keyed factory tables for samplers and filters.
///
/// Lookups are case-insensitive. The registry is constructed explicitly and
/// handed to a [`PipelineBuilder`]; [`default_registry`] serves the common
/// case of the built-in stages.
pub struct Registry {
    samplers: HashMap<String, SamplerEntry>,
    filters: HashMap<String, FilterEntry>,
}

impl Registry {
    /// An empty registry with no stages.
    pub fn new() -> Self {
        Self {
            samplers: HashMap::new(),
            filters: HashMap::new(),
        }
    }

    /// A registry holding the built-in samplers and filters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_sampler(
            "nearest",
            "-- Nearest neighbor sampling.",
            |params| Box::new(NearestNeighborSampler::from_params(params)),
        );
        registry.register_sampler(
            "bilinear",
            "{width=3}:{height=3} -- Bilinear interpolation.",
            |params| Box::new(BilinearSampler::from_params(params)),
        );
        registry.register_sampler(
            "cressman",
            "{width=3}:{height=3} -- Cressman inverse-distance interpolation.",
            |params| Box::new(CressmanSampler::from_params(params)),
        );
        registry.register_filter(
            "threshold",
            "{min=0}:{max=100} -- Clamp above max, below min becomes missing.",
            |upstream, params| Box::new(ThresholdFilter::from_params(upstream, params)),
        );
        registry.register_filter(
            "percent",
            "{percentile=50}:{halfX=5}:{minFill=0.33}:{halfY=halfX} -- Windowed percentile.",
            |upstream, params| Box::new(PercentFilter::from_params(upstream, params)),
        );
        registry
    }

    /// Register a sampler under a (case-normalized) name.
    pub fn register_sampler(&mut self, name: &str, usage: &'static str, factory: SamplerFactory) {
        self.samplers
            .insert(name.to_lowercase(), SamplerEntry { factory, usage });
    }

    /// Register a filter under a (case-normalized) name.
    pub fn register_filter(&mut self, name: &str, usage: &'static str, factory: FilterFactory) {
        self.filters
            .insert(name.to_lowercase(), FilterEntry { factory, usage });
    }

    /// Human-readable listing of every registered stage, for CLI help.
    pub fn help(&self) -> String {
        let mut out = String::from("Samplers:\n");
        let mut names: Vec<&String> = self.samplers.keys().collect();
        names.sort();
        for name in names {
            out.push_str(&format!("  {}: {}\n", name, self.samplers[name].usage));
        }
        out.push_str("Filters:\n");
        let mut names: Vec<&String> = self.filters.keys().collect();
        names.sort();
        for name in names {
            out.push_str(&format!("  {}: {}\n", name, self.filters[name].usage));
        }
        out
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

static DEFAULT_REGISTRY: Lazy<Registry> = Lazy::new(Registry::with_defaults);

/// The process-wide registry of built-in stages.
pub fn default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// Builds a sampling chain from a pipeline specification string.
pub struct PipelineBuilder<'r> {
    registry: &'r Registry,
}

impl PipelineBuilder<'static> {
    /// A builder over the built-in registry.
    pub fn new() -> Self {
        Self {
            registry: default_registry(),
        }
    }
}

impl Default for PipelineBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> PipelineBuilder<'r> {
    /// A builder over an explicitly constructed registry.
    pub fn with_registry(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Parse a pipeline specification into a chain head.
    ///
    /// The first stage resolves against the sampler table; if it does not
    /// match, a nearest neighbor head is inserted and the segment is re-tried
    /// against the filter table. Unresolvable filter stages are skipped with
    /// a diagnostic. An empty specification yields a bare nearest neighbor.
    pub fn build(&self, spec: &str) -> Box<dyn Sampler> {
        let mut head: Option<Box<dyn Sampler>> = None;

        for stage in spec.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let parts: Vec<&str> = stage.split(':').map(str::trim).collect();
            let name = parts[0].to_lowercase();
            let params = &parts[1..];

            if head.is_none() {
                if let Some(entry) = self.registry.samplers.get(&name) {
                    head = Some((entry.factory)(params));
                    continue;
                }
                // Not a sampler: insert the default head and treat this
                // whole segment as the first filter stage
                debug!(
                    stage = stage,
                    "First stage is not a registered sampler, defaulting to nearest neighbor"
                );
                head = Some(Box::new(NearestNeighborSampler::new()));
            }

            match self.registry.filters.get(&name) {
                Some(entry) => {
                    let upstream = head.take().unwrap_or_else(|| {
                        Box::new(NearestNeighborSampler::new())
                    });
                    head = Some((entry.factory)(upstream, params));
                }
                None => {
                    warn!(stage = stage, "Unknown pipeline stage, skipping");
                }
            }
        }

        head.unwrap_or_else(|| Box::new(NearestNeighborSampler::new()))
    }
}
