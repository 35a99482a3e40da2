/// RenderCamera - passive data container handed to the renderer.
///
/// Built from a `CameraState` right before a draw. Holds only what the
/// backend needs and computes nothing after construction.

use glam::{Mat4, Vec3};
use crate::renderer::Viewport;
use super::CameraState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCamera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    viewport: Viewport,
    position: Vec3,
    near: f32,
    far: f32,
    aspect: f32,
}

impl RenderCamera {
    /// Snapshot `state` for a draw covering `viewport`.
    pub fn from_state(state: &CameraState, viewport: Viewport) -> Self {
        Self {
            view_matrix: state.view_matrix(),
            projection_matrix: state.projection_matrix(),
            viewport,
            position: state.position(),
            near: state.near(),
            far: state.far(),
            aspect: state.aspect(),
        }
    }

    // ===== GETTERS =====

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// World-space eye position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Near and far planes, used by the depth material override
    pub fn clip_planes(&self) -> (f32, f32) {
        (self.near, self.far)
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }
}

#[cfg(test)]
#[path = "render_camera_tests.rs"]
mod tests;
