//! Boundary resolution for grid indices.
//!
//! Each axis of a sampler carries its own [`BoundaryMode`] deciding what
//! happens when a requested index falls outside `0..max`: reject it, wrap it
//! around (toroidal grids such as global longitude), or clamp it to the edge.
//! Resolution never produces an index outside the backing buffer.

use std::str::FromStr;

use crate::error::RegridError;

/// Policy for out-of-range indices, configured independently per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryMode {
    /// Reject out-of-range indices.
    #[default]
    None,
    /// Toroidal modulo wrap.
    Wrap,
    /// Saturate to `[0, max - 1]`.
    Clamp,
}

impl BoundaryMode {
    /// Resolve an index against an axis of length `max`.
    ///
    /// Returns the in-range index to read, or `None` if this mode rejects the
    /// input. `max == 0` (no source bound) always rejects.
    #[inline]
    pub fn resolve(self, index: i64, max: usize) -> Option<usize> {
        if max == 0 {
            return None;
        }
        match self {
            BoundaryMode::None => {
                if index >= 0 && (index as usize) < max {
                    Some(index as usize)
                } else {
                    None
                }
            }
            BoundaryMode::Wrap => {
                let m = max as i64;
                Some(((index % m + m) % m) as usize)
            }
            BoundaryMode::Clamp => Some(index.clamp(0, max as i64 - 1) as usize),
        }
    }
}

impl FromStr for BoundaryMode {
    type Err = RegridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(BoundaryMode::None),
            "wrap" => Ok(BoundaryMode::Wrap),
            "clamp" => Ok(BoundaryMode::Clamp),
            _ => Err(RegridError::InvalidParameter {
                param: "boundary".to_string(),
                message: format!("Unknown boundary mode: {}. Must be one of: none, wrap, clamp", s),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_rejects_out_of_range() {
        assert_eq!(BoundaryMode::None.resolve(0, 5), Some(0));
        assert_eq!(BoundaryMode::None.resolve(4, 5), Some(4));
        assert_eq!(BoundaryMode::None.resolve(5, 5), None);
        assert_eq!(BoundaryMode::None.resolve(-1, 5), None);
    }

    #[test]
    fn test_wrap_always_in_range() {
        for i in -100i64..100 {
            let resolved = BoundaryMode::Wrap.resolve(i, 7).unwrap();
            assert!(resolved < 7, "wrap({}) = {} out of range", i, resolved);
        }
        assert_eq!(BoundaryMode::Wrap.resolve(-1, 5), Some(4));
        assert_eq!(BoundaryMode::Wrap.resolve(5, 5), Some(0));
        assert_eq!(BoundaryMode::Wrap.resolve(-11, 5), Some(4));
    }

    #[test]
    fn test_wrap_is_periodic() {
        // resolve(i + k*max, max) == resolve(i, max)
        for i in -10i64..10 {
            for k in -3i64..4 {
                assert_eq!(
                    BoundaryMode::Wrap.resolve(i + k * 6, 6),
                    BoundaryMode::Wrap.resolve(i, 6),
                    "periodicity failed for i={}, k={}",
                    i,
                    k
                );
            }
        }
    }

    #[test]
    fn test_clamp_saturates() {
        assert_eq!(BoundaryMode::Clamp.resolve(-3, 5), Some(0));
        assert_eq!(BoundaryMode::Clamp.resolve(2, 5), Some(2));
        assert_eq!(BoundaryMode::Clamp.resolve(9, 5), Some(4));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        for i in -20i64..20 {
            let once = BoundaryMode::Clamp.resolve(i, 8).unwrap();
            let twice = BoundaryMode::Clamp.resolve(once as i64, 8).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_empty_axis_rejects_all_modes() {
        assert_eq!(BoundaryMode::None.resolve(0, 0), None);
        assert_eq!(BoundaryMode::Wrap.resolve(0, 0), None);
        assert_eq!(BoundaryMode::Clamp.resolve(0, 0), None);
    }

    #[test]
    fn test_parse_boundary_mode() {
        assert_eq!("wrap".parse::<BoundaryMode>().unwrap(), BoundaryMode::Wrap);
        assert_eq!("Clamp".parse::<BoundaryMode>().unwrap(), BoundaryMode::Clamp);
        assert_eq!("NONE".parse::<BoundaryMode>().unwrap(), BoundaryMode::None);
        assert!("mirror".parse::<BoundaryMode>().is_err());
    }
}
