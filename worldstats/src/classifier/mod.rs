//! Facing-region classification for a rotating globe
//!
//! Maps a longitude-like angle to the coarse region facing the viewer and
//! reports changes edge-triggered.
//!
//! # Partition
//!
//! ```text
//! normalized angle   [-180 ──── -170 ──────── -30 ──────── 60 ──────── 150 ──── 180)
//! region              Oceania │   America     │   Africa   │   Asia     │ Oceania
//! ```
//!
//! Lower bounds are inclusive; each upper bound belongs to the next
//! interval. Every finite angle maps to exactly one named region, so
//! [`FacingRegion::Unknown`] only appears for NaN or infinite input.

mod spin;
mod tracker;

pub use spin::{GlobeSpin, DEFAULT_SPIN_SPEED};
pub use tracker::RegionTracker;

use std::fmt;

/// Coarse region facing the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacingRegion {
    America,
    Africa,
    Asia,
    Oceania,
    /// Catch-all for angles that cannot be classified.
    Unknown,
}

impl FacingRegion {
    pub fn label(&self) -> &'static str {
        match self {
            FacingRegion::America => "America",
            FacingRegion::Africa => "Africa",
            FacingRegion::Asia => "Asia",
            FacingRegion::Oceania => "Oceania",
            FacingRegion::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FacingRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reduce any angle in degrees into `[-180, 180)`.
///
/// Non-finite input stays non-finite.
pub fn normalize_longitude(angle: f64) -> f64 {
    let mut shifted = (angle + 180.0).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if shifted >= 360.0 {
        shifted -= 360.0;
    }
    shifted - 180.0
}

/// Classify an angle in degrees (any range) into a facing region.
pub fn classify(angle: f64) -> FacingRegion {
    let longitude = normalize_longitude(angle);

    if !longitude.is_finite() {
        FacingRegion::Unknown
    } else if longitude < -170.0 {
        FacingRegion::Oceania
    } else if longitude < -30.0 {
        FacingRegion::America
    } else if longitude < 60.0 {
        FacingRegion::Africa
    } else if longitude < 150.0 {
        FacingRegion::Asia
    } else {
        FacingRegion::Oceania
    }
}
