//! Scene module
//!
//! Holds the single active model, helper overlays and the key light that
//! every view renders.

mod aabb;
mod environment;
mod material;
mod light;
mod scene;

pub use aabb::AABB;
pub use environment::{EnvironmentMap, EnvironmentMapping};
pub use material::MaterialOverride;
pub use light::{KeyLight, ShadowSettings};
pub use scene::{Scene, SceneNode, SceneNodeKey, SceneNodeKind, AnimationClip};
