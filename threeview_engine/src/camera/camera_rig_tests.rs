use glam::Vec3;
use crate::framing::compute_framing;
use crate::scene::AABB;
use super::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn rig_with_views() -> CameraRig {
    let mut rig = CameraRig::new(CameraState::default());
    for kind in ViewKind::ALL {
        rig.register_view(kind);
    }
    rig
}

fn framing() -> FramingResult {
    let bounds = AABB::new(Vec3::splat(-2.0), Vec3::splat(2.0));
    compute_framing(&bounds, bounds.bounding_sphere_radius())
}

// ============================================================================
// Tests: Framing
// ============================================================================

#[test]
fn test_apply_framing_without_views_is_noop() {
    let mut rig = CameraRig::new(CameraState::default());
    assert!(!rig.apply_framing(&framing()));
    assert_eq!(*rig.interactive(), CameraState::default());
}

#[test]
fn test_apply_framing_moves_every_camera() {
    let mut rig = rig_with_views();
    let framing = framing();
    assert!(rig.apply_framing(&framing));

    assert_eq!(rig.interactive().position(), framing.camera_position);
    assert_eq!(rig.interactive().target(), framing.look_at_target);
    assert_eq!(rig.interactive().near(), framing.near);
    assert_eq!(rig.interactive().far(), framing.far);
    for kind in ViewKind::ALL {
        let camera = rig.view_camera(kind).unwrap();
        assert!(camera.state.same_transform(rig.interactive()));
        assert_eq!(camera.state.far(), framing.far);
    }
    assert_eq!(rig.distance_limits(), (framing.near, framing.far));
}

#[test]
fn test_register_view_twice_is_ignored() {
    let mut rig = rig_with_views();
    rig.register_view(ViewKind::Depth);
    assert_eq!(rig.view_count(), 4);
    assert!(rig.view_camera(ViewKind::Color).unwrap().mirrors_interactive);
    assert!(!rig.view_camera(ViewKind::Depth).unwrap().mirrors_interactive);
}

// ============================================================================
// Tests: Lock modes
// ============================================================================

#[test]
fn test_independent_mode_only_drives_mirroring_camera() {
    let mut rig = rig_with_views();
    rig.apply_framing(&framing());
    rig.orbit(40.0, 10.0);
    rig.sync_independent_cameras(ViewLockMode::Independent);

    let color = rig.resolve(ViewKind::Color, ViewLockMode::Independent);
    let line = rig.resolve(ViewKind::Line, ViewLockMode::Independent);
    assert!(color.same_transform(rig.interactive()));
    assert!(!line.same_transform(rig.interactive()));
}

#[test]
fn test_shared_mode_resolves_to_interactive() {
    let mut rig = rig_with_views();
    rig.orbit(15.0, 0.0);
    for kind in ViewKind::ALL {
        assert!(std::ptr::eq(rig.resolve(kind, ViewLockMode::Shared), rig.interactive()));
    }
}

#[test]
fn test_lock_mode_round_trip_is_idempotent() {
    let mut rig = rig_with_views();
    rig.apply_framing(&framing());

    rig.sync_independent_cameras(ViewLockMode::Independent);
    rig.orbit(25.0, -5.0);
    rig.orbit_view(ViewKind::Normal, -60.0, 0.0);
    rig.sync_independent_cameras(ViewLockMode::Independent);
    rig.sync_independent_cameras(ViewLockMode::Shared);

    for kind in ViewKind::ALL {
        assert!(rig.view_camera(kind).unwrap().state.same_transform(rig.interactive()));
        assert!(rig.resolve(kind, ViewLockMode::Independent).same_transform(rig.interactive()));
    }
}

// ============================================================================
// Tests: Input
// ============================================================================

#[test]
fn test_unframed_rig_uses_default_limits() {
    let mut rig = rig_with_views();
    assert_eq!(rig.distance_limits(), (DEFAULT_MIN_DISTANCE, DEFAULT_MAX_DISTANCE));

    rig.dolly(100.0);
    assert!((rig.interactive().distance() - DEFAULT_MAX_DISTANCE).abs() < 1e-4);
}

#[test]
fn test_invalid_distance_limits_are_ignored() {
    let mut rig = rig_with_views();
    rig.set_distance_limits(3.0, 1.0);
    rig.set_distance_limits(-1.0, 1.0);
    assert_eq!(rig.distance_limits(), (DEFAULT_MIN_DISTANCE, DEFAULT_MAX_DISTANCE));

    rig.set_distance_limits(1.0, 2.0);
    rig.dolly(0.01);
    assert!((rig.interactive().distance() - 1.0).abs() < 1e-4);
}

#[test]
fn test_dolly_is_clamped_to_framing_limits() {
    let mut rig = rig_with_views();
    let framing = framing();
    rig.apply_framing(&framing);

    rig.dolly(1000.0);
    assert!((rig.interactive().distance() - framing.far).abs() < 1e-4);
    rig.dolly(0.0001);
    assert!((rig.interactive().distance() - framing.near).abs() < 1e-4);
}

#[test]
fn test_set_aspect_reaches_every_camera() {
    let mut rig = rig_with_views();
    rig.set_aspect(2.5);
    assert_eq!(rig.interactive().aspect(), 2.5);
    for kind in ViewKind::ALL {
        assert_eq!(rig.view_camera(kind).unwrap().state.aspect(), 2.5);
    }
}

// ============================================================================
// Tests: Persistence
// ============================================================================

#[test]
fn test_save_restore_round_trip() {
    let mut rig = rig_with_views();
    rig.apply_framing(&framing());
    rig.orbit(12.0, 7.0);
    let saved = rig.save_state();

    let mut other = rig_with_views();
    other.set_aspect(3.0);
    other.restore_state(saved);

    assert!(other.interactive().same_transform(&saved));
    assert_eq!(other.interactive().near(), saved.near());
    assert_eq!(other.interactive().aspect(), 3.0);
    assert!(other.view_camera(ViewKind::Color).unwrap().state.same_transform(&saved));
}
