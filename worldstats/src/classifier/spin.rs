//! Constant-speed globe rotation.

/// Default rotation speed in radians per second.
pub const DEFAULT_SPIN_SPEED: f64 = 0.1;

/// A globe spinning about its vertical axis.
///
/// Produces the longitude facing the viewer after each animation step, which
/// feeds [`RegionTracker::observe`](super::RegionTracker::observe).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobeSpin {
    /// Accumulated rotation in radians.
    rotation: f64,
    /// Radians per second.
    speed: f64,
}

impl GlobeSpin {
    pub fn new(speed: f64) -> Self {
        Self {
            rotation: 0.0,
            speed,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Longitude facing the viewer for the current rotation, in `[0, 360)`.
    ///
    /// A rotation of zero faces longitude 90.
    pub fn facing_longitude(&self) -> f64 {
        wrap_degrees(-self.rotation.to_degrees() + 90.0)
    }

    /// Rotate by `delta_secs` worth of motion and return the new facing
    /// longitude.
    pub fn advance(&mut self, delta_secs: f64) -> f64 {
        self.rotation += delta_secs * self.speed;
        self.facing_longitude()
    }
}

/// Reduce degrees into `[0, 360)`.
fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= 360.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

impl Default for GlobeSpin {
    fn default() -> Self {
        Self::new(DEFAULT_SPIN_SPEED)
    }
}
