//! Logging utilities for regrid.
//!
//! This module provides structured logging helpers so that pipeline builds
//! and remap runs leave searchable, analyzable traces in production logs.

use std::time::Instant;
use tracing::{debug, error, info};

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();

    debug!(operation = operation, "Starting operation");

    let result = f();

    info!(
        operation = operation,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log summary statistics for a completed remap run
pub fn log_remap_stats(
    pipeline: &str,
    src_dims: (usize, usize),
    dst_dims: (usize, usize),
    unavailable_cells: usize,
) {
    info!(
        operation = "remap",
        pipeline = pipeline,
        src_width = src_dims.0,
        src_height = src_dims.1,
        dst_width = dst_dims.0,
        dst_height = dst_dims.1,
        unavailable_cells = unavailable_cells,
        "Remap run finished"
    );
}

/// Log an error with context
pub fn log_error(error: &crate::error::RegridError, context: &str) {
    error!(
        error = %error,
        context = context,
        "Error occurred"
    );
}
