//! Post-processing filters.
//!
//! A filter decorates an upstream [`Sampler`](crate::sampler::Sampler): it
//! implements the same trait, forwards all configuration calls upstream
//! unchanged, and overrides the two sampling calls to post-process the
//! upstream result. Filters never touch the raw grid themselves.

pub mod percent;
pub mod threshold;

pub use percent::PercentFilter;
pub use threshold::ThresholdFilter;
