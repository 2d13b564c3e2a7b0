//! Per-item visual frame derived from the shared rotation.
//!
//! Everything here is a pure function of `(rotation, index, ring)`. Callers
//! recompute frames whenever rotation changes; nothing is cached.

use crate::constants::{FLIP_DEG, SCALE_BASE, SCALE_SPAN};
use crate::ring::{wrap_degrees, RingGeometry};
use glam::{DVec2, DVec3};

/// Visual parameters for one item at one rotation value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemFrame {
    pub index: usize,
    /// Angular position on the ring in `[0, 360)`; 0 is straight at the viewer.
    pub angle_deg: f64,
    pub x: f64,
    pub z: f64,
    pub scale: f64,
    pub brightness: f64,
    /// Y-axis rotation in degrees, including the back-face flip on the right half.
    pub tilt_deg: f64,
    pub stack_order: i32,
    pub is_front: bool,
}

/// An item's footprint after the perspective divide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedItem {
    pub screen_x: f64,
    pub apparent_scale: f64,
}

impl ItemFrame {
    #[inline]
    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, 0.0, self.z)
    }

    /// Project through a viewer `perspective` units in front of the ring
    /// centre, the way CSS `perspective` does.
    pub fn project(&self, perspective: f64) -> ProjectedItem {
        let factor = perspective / (perspective - self.z);
        ProjectedItem {
            screen_x: self.x * factor,
            apparent_scale: self.scale * factor,
        }
    }
}

/// Compute the frame of item `index` for the given global `rotation`.
///
/// # Panics
/// If `index` is not below `ring.item_count`.
pub fn compute_frame(rotation: f64, index: usize, ring: &RingGeometry) -> ItemFrame {
    assert!(
        index < ring.item_count,
        "item index {index} out of range for a ring of {}",
        ring.item_count
    );
    let angle_deg = wrap_degrees(rotation + ring.base_angle(index));
    // (cos, sin) of the angle; cos drives depth, sin drives the lateral offset
    let dir = DVec2::from_angle(angle_deg.to_radians());
    let radius = ring.radius;
    let x = dir.y * radius;
    let z = dir.x * radius;

    let scale = SCALE_BASE + SCALE_SPAN * dir.x;

    let depth_t = ((z + radius) / (2.0 * radius)).clamp(0.0, 1.0);
    let brightness = ring.min_brightness + depth_t * (ring.max_brightness - ring.min_brightness);

    let lateral = x / radius;
    let mut tilt_deg = lateral * ring.max_tilt_deg;
    if x > 0.0 {
        tilt_deg += lateral.min(1.0) * FLIP_DEG;
    }

    ItemFrame {
        index,
        angle_deg,
        x,
        z,
        scale,
        brightness,
        tilt_deg,
        stack_order: z.round() as i32,
        is_front: z > radius * ring.front_zone,
    }
}

/// Indices ordered back-to-front: ascending stack order, lower index first on ties.
pub fn render_order(frames: &[ItemFrame]) -> Vec<usize> {
    let mut order: Vec<(i32, usize)> = frames.iter().map(|f| (f.stack_order, f.index)).collect();
    order.sort_unstable();
    order.into_iter().map(|(_, i)| i).collect()
}
