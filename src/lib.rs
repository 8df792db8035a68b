//! # regrid
//!
//! A configurable sampling and remapping pipeline for 2D meteorological
//! grids.
//!
//! This library resamples scalar grids (radar reflectivity, gridded model
//! fields) from one coordinate layout to another through a chain of
//! configurable stages: one sampler followed by any number of post-filters,
//! built from a textual pipeline specification.
//!
//! ## Key pieces
//!
//! - **Samplers**: nearest neighbor, windowed bilinear, and Cressman
//!   inverse-distance interpolation, all with per-axis boundary policies
//! - **Filters**: value thresholding and windowed percentile (generalized
//!   median), stacked as decorators over the sampler
//! - **Pipeline language**: `"cressman:3:3,threshold:18:50"` style strings
//!   resolved through an extensible stage registry
//! - **Remap loop**: drives a chain over every destination cell, with a
//!   pure-integer fast path for 1:1 transfers
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use regrid::{Grid2, PipelineBuilder, remap};
//!
//! let source = Arc::new(Grid2::filled(8, 8, 21.5));
//! let mut dest = Grid2::unavailable(8, 8);
//! let mut chain = PipelineBuilder::new().build("bilinear:3:3,threshold:18:50");
//! remap(chain.as_mut(), &source, &mut dest, None);
//! assert_eq!(dest.get(4, 4), 21.5);
//! ```
//!
//! Missing-data semantics are strict throughout: a cell that was scanned but
//! holds no valid measurement (`MISSING_DATA`) is never conflated with a cell
//! outside coverage (`DATA_UNAVAILABLE`).

pub mod boundary;
pub mod config;
pub mod error;
pub mod filter;
pub mod grid;
pub mod logging;
pub mod pipeline;
pub mod remap;
pub mod sampler;

pub use boundary::BoundaryMode;
pub use config::{Args, Config, RemapConfig};
pub use error::{RegridError, Result};
pub use grid::{is_missing, is_sentinel, is_unavailable, Grid2, DATA_UNAVAILABLE, MISSING_DATA};
pub use logging::{init_tracing, log_error, log_remap_stats, log_timed_operation};
pub use pipeline::{default_registry, PipelineBuilder, Registry};
pub use remap::{remap, CoordMapper, IdentityMapper};
pub use sampler::{
    BilinearSampler, CressmanSampler, NearestNeighborSampler, Sampler, SamplerCore,
};
pub use filter::{PercentFilter, ThresholdFilter};
