/// Scene - the single active model plus helper overlays.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. At most one node
/// of kind `Model` exists at any time; inserting a model removes the
/// previous one.

use glam::{Mat4, Vec3};
use slotmap::{new_key_type, SlotMap};
use super::{AABB, EnvironmentMap, KeyLight};

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a node within a Scene.
    ///
    /// A key becomes invalid only when its own node is removed.
    pub struct SceneNodeKey;
}

// ===== NODES =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneNodeKind {
    /// Loaded asset root
    Model,
    /// Debug overlay, drawn only in the color view
    Helper,
}

/// One top-level scene node
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub kind: SceneNodeKind,
    /// Local to world transform
    pub transform: Mat4,
    /// Bounds in local space
    pub bounds: AABB,
    pub mesh_count: usize,
    pub cast_shadow: bool,
}

impl SceneNode {
    pub fn model(name: impl Into<String>, transform: Mat4, bounds: AABB, mesh_count: usize) -> Self {
        Self {
            name: name.into(),
            kind: SceneNodeKind::Model,
            transform,
            bounds,
            mesh_count,
            cast_shadow: false,
        }
    }

    /// Wireframe box overlay
    pub fn bounds_helper(name: impl Into<String>, bounds: AABB) -> Self {
        Self {
            name: name.into(),
            kind: SceneNodeKind::Helper,
            transform: Mat4::IDENTITY,
            bounds,
            mesh_count: 0,
            cast_shadow: false,
        }
    }

    /// Bounds in world space
    pub fn world_bounds(&self) -> AABB {
        self.bounds.transformed(&self.transform)
    }
}

/// Named animation clip shipped with the model
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    /// Duration in seconds
    pub duration: f32,
}

// ===== SCENE =====

/// A renderable scene
pub struct Scene {
    nodes: SlotMap<SceneNodeKey, SceneNode>,
    model: Option<SceneNodeKey>,
    helpers: Vec<SceneNodeKey>,
    clips: Vec<AnimationClip>,
    key_light: KeyLight,
    environment: Option<EnvironmentMap>,
    helpers_enabled: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            model: None,
            helpers: Vec::new(),
            clips: Vec::new(),
            key_light: KeyLight::default(),
            environment: None,
            helpers_enabled: true,
        }
    }

    /// Insert `node` as the active model, removing the previous one.
    ///
    /// The model root is moved to the origin; rotation and scale are kept.
    pub fn set_model(&mut self, mut node: SceneNode) -> SceneNodeKey {
        self.remove_model();

        let (scale, rotation, _) = node.transform.to_scale_rotation_translation();
        node.transform = Mat4::from_scale_rotation_translation(scale, rotation, Vec3::ZERO);
        node.kind = SceneNodeKind::Model;

        let key = self.nodes.insert(node);
        self.model = Some(key);
        key
    }

    /// Remove the active model. Returns false if there was none.
    pub fn remove_model(&mut self) -> bool {
        match self.model.take() {
            Some(key) => self.nodes.remove(key).is_some(),
            None => false,
        }
    }

    pub fn model(&self) -> Option<&SceneNode> {
        self.model.and_then(|key| self.nodes.get(key))
    }

    pub fn model_key(&self) -> Option<SceneNodeKey> {
        self.model
    }

    /// World-space bounds of the active model
    pub fn model_bounds(&self) -> Option<AABB> {
        self.model().map(SceneNode::world_bounds)
    }

    pub fn model_count(&self) -> usize {
        self.nodes.values().filter(|n| n.kind == SceneNodeKind::Model).count()
    }

    /// Add a helper overlay
    pub fn add_helper(&mut self, mut node: SceneNode) -> SceneNodeKey {
        node.kind = SceneNodeKind::Helper;
        let key = self.nodes.insert(node);
        self.helpers.push(key);
        key
    }

    pub fn clear_helpers(&mut self) {
        for key in self.helpers.drain(..) {
            self.nodes.remove(key);
        }
    }

    pub fn helper_count(&self) -> usize {
        self.helpers.len()
    }

    /// Whether helpers are drawn at all (they never appear outside the color view)
    pub fn helpers_enabled(&self) -> bool {
        self.helpers_enabled
    }

    pub fn set_helpers_enabled(&mut self, enabled: bool) {
        self.helpers_enabled = enabled;
    }

    /// Get a node by key
    pub fn node(&self, key: SceneNodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes drawn by a scene pass
    pub fn visible_nodes(&self, include_helpers: bool) -> impl Iterator<Item = &SceneNode> + '_ {
        self.nodes
            .values()
            .filter(move |n| n.kind == SceneNodeKind::Model || include_helpers)
    }

    pub fn clips(&self) -> &[AnimationClip] {
        &self.clips
    }

    pub fn set_clips(&mut self, clips: Vec<AnimationClip>) {
        self.clips = clips;
    }

    pub fn key_light(&self) -> &KeyLight {
        &self.key_light
    }

    pub fn set_key_light(&mut self, light: KeyLight) {
        self.key_light = light;
    }

    pub fn environment(&self) -> Option<&EnvironmentMap> {
        self.environment.as_ref()
    }

    /// Replace the environment map, returning the previous one
    pub fn set_environment(&mut self, environment: Option<EnvironmentMap>) -> Option<EnvironmentMap> {
        std::mem::replace(&mut self.environment, environment)
    }

    /// Remove the model, every helper and the clips; switch the key light off.
    ///
    /// The environment map belongs to the viewer, not the model, and is kept.
    pub fn clear(&mut self) {
        self.remove_model();
        self.clear_helpers();
        self.clips.clear();
        self.key_light = KeyLight::default();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
