use glam::{Mat4, Vec3};
use crate::renderer::Viewport;
use super::*;

#[test]
fn test_from_state_snapshots_matrices() {
    let mut state = CameraState::default();
    state.set_aspect(16.0 / 9.0);
    let camera = RenderCamera::from_state(&state, Viewport::full(1920, 1080));

    assert_eq!(*camera.view_matrix(), state.view_matrix());
    assert_eq!(*camera.projection_matrix(), state.projection_matrix());
    assert_eq!(camera.view_projection_matrix(), state.projection_matrix() * state.view_matrix());
    assert_eq!(camera.viewport().width, 1920.0);
    assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 5.0));
    assert_eq!(camera.clip_planes(), (0.1, 10.0));
}

#[test]
fn test_snapshot_is_detached_from_state() {
    let mut state = CameraState::default();
    let camera = RenderCamera::from_state(&state, Viewport::full(64, 64));
    state.orbit(1.0, 0.0);

    assert_ne!(*camera.view_matrix(), state.view_matrix());
    assert_ne!(*camera.view_matrix(), Mat4::IDENTITY);
}
