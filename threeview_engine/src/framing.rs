//! Framing engine
//!
//! Derives the camera pose, clip planes and key light placement that fit a
//! loaded asset in view. Pure arithmetic: callers guarantee a positive
//! bounding sphere radius.

use glam::Vec3;
use crate::scene::AABB;

/// Axis the camera is pushed back along, away from the asset center
pub const FORWARD_AXIS: Vec3 = Vec3::Z;

/// Near plane as a fraction of the bounding box diagonal
pub const NEAR_RATIO: f32 = 0.1;

/// Far plane as a multiple of the bounding box diagonal
pub const FAR_RATIO: f32 = 2.0;

/// Camera and light placement for one asset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingResult {
    pub camera_position: Vec3,
    pub look_at_target: Vec3,
    pub near: f32,
    pub far: f32,
    pub light_position: Vec3,
    /// Bounding sphere radius the framing was computed from
    pub radius: f32,
    /// Bounding box diagonal the clip planes were computed from
    pub size: f32,
}

impl FramingResult {
    /// Distance from the camera to the look-at target
    pub fn distance(&self) -> f32 {
        self.camera_position.distance(self.look_at_target)
    }
}

/// Compute the framing for an asset.
///
/// ```
/// use threeview_engine::glam::Vec3;
/// use threeview_engine::threeview::compute_framing;
/// use threeview_engine::threeview::scene::AABB;
///
/// let bounds = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
/// let framing = compute_framing(&bounds, bounds.bounding_sphere_radius());
/// assert!(framing.near < framing.far);
/// ```
pub fn compute_framing(bounding_box: &AABB, bounding_sphere_radius: f32) -> FramingResult {
    let center = bounding_box.center();
    let size = bounding_box.diagonal();
    let radius = bounding_sphere_radius;

    FramingResult {
        camera_position: center + FORWARD_AXIS * (2.0 * radius),
        look_at_target: center,
        near: NEAR_RATIO * size,
        far: FAR_RATIO * size,
        light_position: center + Vec3::new(-0.3 * radius, 2.0 * radius, radius),
        radius,
        size,
    }
}

#[cfg(test)]
#[path = "framing_tests.rs"]
mod tests;
