//! Edge-triggered facing-region tracking.

use super::{classify, FacingRegion};

/// Emits the facing region only when it differs from the last one emitted.
///
/// The tracker owns its only state, the last emitted label. It starts empty,
/// so the first observation always emits.
#[derive(Debug, Clone, Default)]
pub struct RegionTracker {
    last: Option<FacingRegion>,
}

impl RegionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last emitted region, if any.
    pub fn last(&self) -> Option<FacingRegion> {
        self.last
    }

    /// Classify `angle` and return the region if it changed.
    ///
    /// # Returns
    ///
    /// `Some(region)` on the first observation and on every transition,
    /// `None` while the region stays the same.
    pub fn observe(&mut self, angle: f64) -> Option<FacingRegion> {
        let region = classify(angle);
        if self.last == Some(region) {
            return None;
        }

        tracing::debug!(
            from = ?self.last,
            to = %region,
            angle = angle,
            "Facing region changed"
        );
        self.last = Some(region);
        Some(region)
    }

    /// Like [`observe`](Self::observe), invoking `on_change` on transitions.
    ///
    /// Returns `true` if the callback ran.
    pub fn observe_with<F>(&mut self, angle: f64, on_change: F) -> bool
    where
        F: FnOnce(FacingRegion),
    {
        match self.observe(angle) {
            Some(region) => {
                on_change(region);
                true
            }
            None => false,
        }
    }

    /// Forget the last emitted region.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_emits() {
        let mut tracker = RegionTracker::new();
        assert_eq!(tracker.last(), None);
        assert_eq!(tracker.observe(0.0), Some(FacingRegion::Africa));
        assert_eq!(tracker.last(), Some(FacingRegion::Africa));
    }

    #[test]
    fn test_edge_trigger_sequence() {
        let mut tracker = RegionTracker::new();
        let emitted: Vec<FacingRegion> = [0.0, 10.0, 59.0, 61.0, 100.0, -100.0]
            .into_iter()
            .filter_map(|angle| tracker.observe(angle))
            .collect();

        assert_eq!(
            emitted,
            vec![
                FacingRegion::Africa,
                FacingRegion::Asia,
                FacingRegion::America
            ]
        );
    }

    #[test]
    fn test_observe_with_callback() {
        let mut tracker = RegionTracker::new();
        let mut seen = Vec::new();

        assert!(tracker.observe_with(100.0, |r| seen.push(r)));
        assert!(!tracker.observe_with(120.0, |r| seen.push(r)));
        assert!(tracker.observe_with(155.0, |r| seen.push(r)));

        assert_eq!(seen, vec![FacingRegion::Asia, FacingRegion::Oceania]);
    }

    #[test]
    fn test_unknown_is_a_distinct_state() {
        let mut tracker = RegionTracker::new();
        tracker.observe(0.0);
        assert_eq!(tracker.observe(f64::NAN), Some(FacingRegion::Unknown));
        assert_eq!(tracker.observe(f64::NAN), None);
        assert_eq!(tracker.observe(0.0), Some(FacingRegion::Africa));
    }

    #[test]
    fn test_reset() {
        let mut tracker = RegionTracker::new();
        tracker.observe(0.0);
        tracker.reset();
        assert_eq!(tracker.observe(0.0), Some(FacingRegion::Africa));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_emits_exactly_on_label_changes(
                angles in proptest::collection::vec(-720.0..720.0_f64, 0..100)
            ) {
                let mut tracker = RegionTracker::new();
                let mut previous: Option<FacingRegion> = None;

                for angle in angles {
                    let region = classify(angle);
                    let emitted = tracker.observe(angle);
                    if previous == Some(region) {
                        prop_assert_eq!(emitted, None);
                    } else {
                        prop_assert_eq!(emitted, Some(region));
                    }
                    previous = Some(region);
                }
            }
        }
    }
}
