/// CameraRig - the interactive camera plus one camera per view.
///
/// In `Shared` mode every view renders through the interactive camera. In
/// `Independent` mode each view renders through its own camera; only the
/// cameras flagged as mirroring follow the interactive one.

use glam::Vec3;
use crate::framing::FramingResult;
use crate::pipeline::ViewLockMode;
use crate::view::ViewKind;
use super::CameraState;

/// Radians of orbit per pixel of pointer movement
pub const DEFAULT_ORBIT_SENSITIVITY: f32 = 0.01;

/// Orbit distance limits before any asset is framed
pub const DEFAULT_MIN_DISTANCE: f32 = 0.01;
pub const DEFAULT_MAX_DISTANCE: f32 = 8.0;

/// Camera owned by one view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCamera {
    pub kind: ViewKind,
    pub state: CameraState,
    /// Follow the interactive camera in `Independent` mode
    pub mirrors_interactive: bool,
}

pub struct CameraRig {
    interactive: CameraState,
    views: Vec<ViewCamera>,
    min_distance: f32,
    max_distance: f32,
    orbit_sensitivity: f32,
}

impl CameraRig {
    /// Rig with no registered views.
    pub fn new(interactive: CameraState) -> Self {
        Self {
            interactive,
            views: Vec::new(),
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
            orbit_sensitivity: DEFAULT_ORBIT_SENSITIVITY,
        }
    }

    /// Register the camera for `kind`, starting from the interactive pose.
    ///
    /// The color view mirrors the interactive camera. Registering a kind
    /// twice keeps the first registration.
    pub fn register_view(&mut self, kind: ViewKind) {
        if self.views.iter().any(|v| v.kind == kind) {
            return;
        }
        self.views.push(ViewCamera {
            kind,
            state: self.interactive,
            mirrors_interactive: kind == ViewKind::Color,
        });
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    pub fn interactive(&self) -> &CameraState {
        &self.interactive
    }

    pub fn view_camera(&self, kind: ViewKind) -> Option<&ViewCamera> {
        self.views.iter().find(|v| v.kind == kind)
    }

    pub fn set_mirrors_interactive(&mut self, kind: ViewKind, mirrors: bool) {
        if let Some(view) = self.views.iter_mut().find(|v| v.kind == kind) {
            view.mirrors_interactive = mirrors;
        }
    }

    /// Orbit distance limits, replaced by each framing
    pub fn distance_limits(&self) -> (f32, f32) {
        (self.min_distance, self.max_distance)
    }

    /// Ignored unless `0 <= min <= max`.
    pub fn set_distance_limits(&mut self, min: f32, max: f32) {
        if min >= 0.0 && min <= max {
            self.min_distance = min;
            self.max_distance = max;
        }
    }

    pub fn set_orbit_sensitivity(&mut self, sensitivity: f32) {
        self.orbit_sensitivity = sensitivity;
    }

    /// Move every camera to the framing pose.
    ///
    /// Returns false without touching anything if no view is registered.
    pub fn apply_framing(&mut self, framing: &FramingResult) -> bool {
        if self.views.is_empty() {
            return false;
        }

        self.interactive.set_position_target(framing.camera_position, framing.look_at_target);
        // framing planes always satisfy near < far for a positive radius
        if self.interactive.set_clip_planes(framing.near, framing.far).is_err() {
            return false;
        }
        for view in &mut self.views {
            view.state.copy_transform_from(&self.interactive);
        }
        self.min_distance = framing.near;
        self.max_distance = framing.far;
        true
    }

    /// Bring per-view cameras in line with the interactive camera.
    ///
    /// `Shared` copies the interactive pose to every view camera so that
    /// switching back to `Independent` starts from the shared pose.
    /// `Independent` copies only to mirroring cameras.
    pub fn sync_independent_cameras(&mut self, mode: ViewLockMode) {
        for view in &mut self.views {
            if mode == ViewLockMode::Shared || view.mirrors_interactive {
                view.state.copy_transform_from(&self.interactive);
            }
        }
    }

    /// Camera a view renders through under `mode`.
    pub fn resolve(&self, kind: ViewKind, mode: ViewLockMode) -> &CameraState {
        match mode {
            ViewLockMode::Shared => &self.interactive,
            ViewLockMode::Independent => self
                .view_camera(kind)
                .map(|v| &v.state)
                .unwrap_or(&self.interactive),
        }
    }

    /// Aspect ratio of every camera
    pub fn set_aspect(&mut self, aspect: f32) {
        self.interactive.set_aspect(aspect);
        for view in &mut self.views {
            view.state.set_aspect(aspect);
        }
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.interactive.set_fov(fov);
        for view in &mut self.views {
            view.state.set_fov(fov);
        }
    }

    /// Orbit the interactive camera by a pointer delta in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.interactive.orbit(dx * self.orbit_sensitivity, -dy * self.orbit_sensitivity);
    }

    /// Orbit one view's own camera (only visible in `Independent` mode).
    pub fn orbit_view(&mut self, kind: ViewKind, dx: f32, dy: f32) {
        let sensitivity = self.orbit_sensitivity;
        if let Some(view) = self.views.iter_mut().find(|v| v.kind == kind) {
            view.state.orbit(dx * sensitivity, -dy * sensitivity);
        }
    }

    /// Scale the interactive camera distance, clamped to the framing limits.
    pub fn dolly(&mut self, factor: f32) {
        if !(factor > 0.0) {
            return;
        }
        let distance = (self.interactive.distance() * factor).clamp(self.min_distance, self.max_distance);
        self.interactive.set_distance(distance);
    }

    /// Capture the interactive pose.
    pub fn save_state(&self) -> CameraState {
        self.interactive
    }

    /// Restore a saved pose on the interactive and mirroring cameras.
    ///
    /// The current aspect is kept; the projection follows from the restored
    /// planes on the next draw.
    pub fn restore_state(&mut self, state: CameraState) {
        let aspect = self.interactive.aspect();
        self.interactive = state;
        self.interactive.set_aspect(aspect);
        for view in &mut self.views {
            if view.mirrors_interactive {
                view.state.copy_transform_from(&self.interactive);
            }
        }
    }

    /// Reset the interactive camera to `position` looking at `target`.
    pub fn reset(&mut self, position: Vec3, target: Vec3) {
        self.interactive.set_position_target(position, target);
    }
}

#[cfg(test)]
#[path = "camera_rig_tests.rs"]
mod tests;
