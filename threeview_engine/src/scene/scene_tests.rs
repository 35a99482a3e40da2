/// Tests for Scene
///
/// Model replacement, helper lifecycle and clearing.

use super::*;
use crate::scene::EnvironmentMapping;
use glam::{Mat4, Quat, Vec3};

// ============================================================================
// Helper Functions
// ============================================================================

fn unit_box() -> AABB {
    AABB::new(Vec3::splat(-0.5), Vec3::splat(0.5))
}

fn model(name: &str) -> SceneNode {
    SceneNode::model(name, Mat4::IDENTITY, unit_box(), 2)
}

// ============================================================================
// Tests: Model
// ============================================================================

#[test]
fn test_new_scene_is_empty() {
    let scene = Scene::new();
    assert_eq!(scene.node_count(), 0);
    assert!(scene.model().is_none());
    assert!(scene.model_bounds().is_none());
    assert_eq!(scene.key_light().intensity, 0.0);
}

#[test]
fn test_set_model_replaces_previous() {
    let mut scene = Scene::new();
    let first = scene.set_model(model("a.glb"));
    let second = scene.set_model(model("b.glb"));

    assert_eq!(scene.model_count(), 1);
    assert!(scene.node(first).is_none());
    assert_eq!(scene.node(second).unwrap().name, "b.glb");
    assert_eq!(scene.model_key(), Some(second));
}

#[test]
fn test_set_model_moves_root_to_origin() {
    let mut scene = Scene::new();
    let transform = Mat4::from_scale_rotation_translation(
        Vec3::splat(2.0),
        Quat::IDENTITY,
        Vec3::new(5.0, -3.0, 1.0),
    );
    scene.set_model(SceneNode::model("moved", transform, unit_box(), 1));

    let bounds = scene.model_bounds().unwrap();
    assert_eq!(bounds.center(), Vec3::ZERO);
    assert_eq!(bounds.size(), Vec3::splat(2.0));
}

#[test]
fn test_remove_model() {
    let mut scene = Scene::new();
    assert!(!scene.remove_model());
    scene.set_model(model("a"));
    assert!(scene.remove_model());
    assert_eq!(scene.model_count(), 0);
}

// ============================================================================
// Tests: Helpers
// ============================================================================

#[test]
fn test_helpers_are_separate_from_model() {
    let mut scene = Scene::new();
    scene.set_model(model("a"));
    scene.add_helper(SceneNode::bounds_helper("box", unit_box()));

    assert_eq!(scene.model_count(), 1);
    assert_eq!(scene.helper_count(), 1);
    assert_eq!(scene.visible_nodes(false).count(), 1);
    assert_eq!(scene.visible_nodes(true).count(), 2);
}

#[test]
fn test_add_helper_forces_helper_kind() {
    let mut scene = Scene::new();
    let key = scene.add_helper(model("sneaky"));
    assert_eq!(scene.node(key).unwrap().kind, SceneNodeKind::Helper);
    assert_eq!(scene.model_count(), 0);
}

#[test]
fn test_clear_removes_everything() {
    let mut scene = Scene::new();
    scene.set_model(model("a"));
    scene.add_helper(SceneNode::bounds_helper("box", unit_box()));
    scene.set_clips(vec![AnimationClip { name: "idle".to_string(), duration: 1.5 }]);

    scene.clear();

    assert_eq!(scene.node_count(), 0);
    assert_eq!(scene.helper_count(), 0);
    assert!(scene.clips().is_empty());
    assert_eq!(*scene.key_light(), KeyLight::default());
}

#[test]
fn test_environment_survives_clear() {
    let mut scene = Scene::new();
    assert!(scene.environment().is_none());

    let previous = scene.set_environment(Some(EnvironmentMap::equirectangular("clear.hdr", 1024, 512)));
    assert!(previous.is_none());
    scene.set_model(model("a"));
    scene.clear();

    let environment = scene.environment().unwrap();
    assert_eq!(environment.name, "clear.hdr");
    assert_eq!(environment.mapping, EnvironmentMapping::EquirectangularReflection);
}
