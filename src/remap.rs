//! The remap process loop.
//!
//! Drives a sampling chain over every destination cell. When source and
//! destination have identical dimensions and no coordinate mapper is
//! supplied, the loop stays on the integer-index fast path with no floating
//! point coordinate math at all.

use std::sync::Arc;

use tracing::debug;

use crate::grid::{Grid2, DATA_UNAVAILABLE};
use crate::sampler::Sampler;

/// Maps a destination cell (i, j) to a continuous source coordinate.
///
/// Supplied by higher-level remapping logic (reprojection, navigation) per
/// invocation; `None` marks the destination cell as outside the mapping.
pub trait CoordMapper {
    fn map(&self, i: usize, j: usize) -> Option<(f64, f64)>;
}

/// The 1:1 mapper: destination cell (i, j) reads source coordinate (i, j).
pub struct IdentityMapper;

impl CoordMapper for IdentityMapper {
    fn map(&self, i: usize, j: usize) -> Option<(f64, f64)> {
        Some((i as f64, j as f64))
    }
}

/// Remap `source` onto `dest` through a sampling chain.
///
/// The source is rebound into the chain first, so one chain can serve many
/// invocations. Cells the chain cannot produce (boundary rejection, invalid
/// mapper cell) are written as [`DATA_UNAVAILABLE`].
pub fn remap(
    chain: &mut dyn Sampler,
    source: &Arc<Grid2>,
    dest: &mut Grid2,
    mapper: Option<&dyn CoordMapper>,
) {
    chain.set_source(Some(Arc::clone(source)));

    let (src_w, src_h) = (source.width(), source.height());
    let (dst_w, dst_h) = (dest.width(), dest.height());
    let fast_path = mapper.is_none() && src_w == dst_w && src_h == dst_h;
    let mut unavailable = 0usize;

    if fast_path {
        for j in 0..dst_h {
            for i in 0..dst_w {
                match chain.sample_at_index(i as i64, j as i64) {
                    Some(value) => dest.set(i, j, value),
                    None => {
                        dest.set(i, j, DATA_UNAVAILABLE);
                        unavailable += 1;
                    }
                }
            }
        }
    } else {
        // Default linear stretch when no mapper is supplied
        let stretch_x = src_w as f64 / dst_w.max(1) as f64;
        let stretch_y = src_h as f64 / dst_h.max(1) as f64;
        for j in 0..dst_h {
            for i in 0..dst_w {
                let coord = match mapper {
                    Some(m) => m.map(i, j),
                    None => Some((i as f64 * stretch_x, j as f64 * stretch_y)),
                };
                match coord.and_then(|(u, v)| chain.sample_at(u, v)) {
                    Some(value) => dest.set(i, j, value),
                    None => {
                        dest.set(i, j, DATA_UNAVAILABLE);
                        unavailable += 1;
                    }
                }
            }
        }
    }

    debug!(
        src_width = src_w,
        src_height = src_h,
        dst_width = dst_w,
        dst_height = dst_h,
        cells = dst_w * dst_h,
        unavailable = unavailable,
        fast_path = fast_path,
        "Remap complete"
    );
}
