/// CameraState - perspective camera pose with derived matrices.
///
/// Invariant: `0 < near < far`. Matrices are computed on demand, so any
/// change to the pose or planes is reflected by the next draw.

use glam::{Mat4, Quat, Vec3};
use crate::error::{Error, Result};

/// Polar angle margin keeping orbit input away from the poles
const POLE_MARGIN: f32 = 0.01;

/// Perspective camera pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    position: Vec3,
    orientation: Quat,
    target: Vec3,
    near: f32,
    far: f32,
    aspect: f32,
    /// Vertical field of view in degrees
    fov: f32,
}

impl CameraState {
    /// Camera at `position` looking at `target`.
    ///
    /// # Errors
    ///
    /// `InvalidResource` if the clip planes violate `0 < near < far`.
    pub fn new(position: Vec3, target: Vec3, near: f32, far: f32, aspect: f32, fov: f32) -> Result<Self> {
        validate_planes(near, far)?;
        let mut state = Self {
            position,
            orientation: Quat::IDENTITY,
            target,
            near,
            far,
            aspect,
            fov,
        };
        state.look_at(target);
        Ok(state)
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Vertical field of view in degrees
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    // ===== POSE =====

    /// Aim the camera at `target` from its current position.
    ///
    /// A target at the camera position keeps the current orientation.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
        let direction = target - self.position;
        if direction.length_squared() <= f32::EPSILON {
            return;
        }
        // looking straight up or down needs another up vector
        let up = if direction.normalize().cross(Vec3::Y).length_squared() < 1e-6 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let view = Mat4::look_at_rh(self.position, target, up);
        let (_, rotation, _) = view.inverse().to_scale_rotation_translation();
        self.orientation = rotation.normalize();
    }

    /// Move to `position` and look at `target`.
    pub fn set_position_target(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.look_at(target);
    }

    /// Set the full pose as stored by a session record.
    pub fn set_pose(&mut self, position: Vec3, orientation: Quat, target: Vec3) {
        self.position = position;
        self.orientation = orientation.normalize();
        self.target = target;
    }

    /// # Errors
    ///
    /// `InvalidResource` if the planes violate `0 < near < far`; the
    /// previous planes are kept.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) -> Result<()> {
        validate_planes(near, far)?;
        self.near = near;
        self.far = far;
        Ok(())
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn set_fov(&mut self, fov: f32) {
        if fov > 0.0 && fov < 180.0 {
            self.fov = fov;
        }
    }

    /// Rotate around the target in spherical coordinates.
    ///
    /// Angles are radians; the polar angle is clamped away from the poles.
    pub fn orbit(&mut self, delta_azimuth: f32, delta_polar: f32) {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius < 1e-6 {
            return;
        }

        let mut theta = offset.z.atan2(offset.x);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta += delta_azimuth;
        phi = (phi + delta_polar).clamp(POLE_MARGIN, std::f32::consts::PI - POLE_MARGIN);

        let new_offset = Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        );
        self.position = self.target + new_offset;
        self.look_at(self.target);
    }

    /// Move along the view direction to `distance` from the target.
    pub fn set_distance(&mut self, distance: f32) {
        let direction = (self.position - self.target).normalize_or_zero();
        if direction == Vec3::ZERO || !(distance > 0.0) {
            return;
        }
        self.position = self.target + direction * distance;
    }

    /// Copy pose, clip planes and aspect from `other`; the field of view is kept.
    pub fn copy_transform_from(&mut self, other: &CameraState) {
        self.position = other.position;
        self.orientation = other.orientation;
        self.target = other.target;
        self.near = other.near;
        self.far = other.far;
        self.aspect = other.aspect;
    }

    /// True if position, orientation and target match within `1e-5`.
    pub fn same_transform(&self, other: &CameraState) -> bool {
        self.position.abs_diff_eq(other.position, 1e-5)
            && self.target.abs_diff_eq(other.target, 1e-5)
            && self.orientation.abs_diff_eq(other.orientation, 1e-5)
    }

    // ===== MATRICES =====

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position).inverse()
    }

    /// Right-handed perspective projection.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        let mut state = Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            orientation: Quat::IDENTITY,
            target: Vec3::ZERO,
            near: 0.1,
            far: 10.0,
            aspect: 1.0,
            fov: 55.0,
        };
        state.look_at(Vec3::ZERO);
        state
    }
}

fn validate_planes(near: f32, far: f32) -> Result<()> {
    if near > 0.0 && near < far && far.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidResource(format!("clip planes near={} far={} must satisfy 0 < near < far", near, far)))
    }
}

#[cfg(test)]
#[path = "camera_state_tests.rs"]
mod tests;
