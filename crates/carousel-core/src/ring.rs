//! Ring geometry: angular spacing, stops and which item faces front.

use crate::constants::FULL_TURN_DEG;

/// Validated, immutable description of the ring.
///
/// Built by [`CarouselConfig::validate`](crate::CarouselConfig::validate); the
/// item count is fixed for the lifetime of an engine.
#[derive(Clone, Debug, PartialEq)]
pub struct RingGeometry {
    pub item_count: usize,
    pub radius: f64,
    pub min_brightness: f64,
    pub max_brightness: f64,
    pub max_tilt_deg: f64,
    pub front_zone: f64,
    pub perspective: f64,
}

impl RingGeometry {
    #[inline]
    pub fn angle_per_item(&self) -> f64 {
        FULL_TURN_DEG / self.item_count as f64
    }

    /// Angle of `index` on the ring when rotation is zero.
    #[inline]
    pub fn base_angle(&self, index: usize) -> f64 {
        index as f64 * self.angle_per_item()
    }

    /// Closest multiple of the per-item spacing.
    ///
    /// Ties (exactly half-way between two stops) round away from zero.
    #[inline]
    pub fn nearest_stop(&self, rotation: f64) -> f64 {
        let step = self.angle_per_item();
        (rotation / step).round() * step
    }

    /// Index of the item that sits at the front when the ring rests at the
    /// stop nearest to `rotation`.
    pub fn front_index(&self, rotation: f64) -> usize {
        let stop = (rotation / self.angle_per_item()).round();
        let n = self.item_count as f64;
        ((-stop).rem_euclid(n) as usize).min(self.item_count - 1)
    }

    /// The rotation closest to `from` at which item `index` faces front.
    ///
    /// Exactly half a turn away is resolved toward the lower rotation.
    pub fn stop_for_index(&self, index: usize, from: f64) -> f64 {
        assert!(
            index < self.item_count,
            "item index {index} out of range for a ring of {}",
            self.item_count
        );
        // Item `index` is front whenever rotation + base_angle is a whole turn.
        let aligned = -self.base_angle(index);
        let turns = ((from - aligned) / FULL_TURN_DEG).round();
        let candidate = aligned + turns * FULL_TURN_DEG;
        if candidate - from >= FULL_TURN_DEG / 2.0 {
            candidate - FULL_TURN_DEG
        } else {
            candidate
        }
    }
}

/// Reduce an angle in degrees to `[0, 360)`.
#[inline]
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(FULL_TURN_DEG);
    // rem_euclid rounds tiny negative inputs up to exactly one full turn
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}
