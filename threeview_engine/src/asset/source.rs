/// Asset decoding and preparation collaborators.

use glam::Mat4;
use crate::error::{Error, Result};
use crate::scene::{AnimationClip, EnvironmentMap, AABB};

/// Decoded mesh with its local bounds
#[derive(Debug, Clone, PartialEq)]
pub struct MeshNode {
    pub name: String,
    /// Transform relative to the asset root
    pub transform: Mat4,
    pub bounds: AABB,
    pub morph_target_count: usize,
    pub skinned: bool,
    pub cast_shadow: bool,
}

impl MeshNode {
    pub fn new(name: impl Into<String>, transform: Mat4, bounds: AABB) -> Self {
        Self {
            name: name.into(),
            transform,
            bounds,
            morph_target_count: 0,
            skinned: false,
            cast_shadow: false,
        }
    }
}

/// Decoded scene graph and animation clips of one asset
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAsset {
    pub name: String,
    pub root_transform: Mat4,
    pub nodes: Vec<MeshNode>,
    pub clips: Vec<AnimationClip>,
}

impl DecodedAsset {
    /// Bounds of every mesh in root space. `None` for an asset without
    /// meshes or with degenerate bounds.
    pub fn bounds(&self) -> Option<AABB> {
        let bounds = self
            .nodes
            .iter()
            .map(|node| node.bounds.transformed(&node.transform))
            .reduce(|a, b| a.union(&b))?;
        if bounds.is_valid() { Some(bounds) } else { None }
    }
}

/// Flags the orchestrator reads after preparation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssetFeatures {
    pub has_morph_targets: bool,
    pub has_skeleton: bool,
}

/// Supplies decoded assets from bytes or a URL
pub trait AssetSource: Send {
    /// Decode an in-memory file
    ///
    /// # Errors
    ///
    /// `DecodeFailure` for malformed data.
    fn decode(&mut self, bytes: &[u8], name: &str) -> Result<DecodedAsset>;

    /// Fetch and decode a file by URL
    fn fetch(&mut self, url: &str) -> Result<DecodedAsset>;

    /// Fetch and decode an HDR environment image by URL
    ///
    /// Sources without image support keep the default, which fails with
    /// `DecodeFailure`.
    fn fetch_environment(&mut self, url: &str) -> Result<EnvironmentMap> {
        Err(Error::DecodeFailure(format!("no environment decoder for '{}'", url)))
    }
}

/// Normalizes a decoded asset in place and reports its features
pub trait AssetPreparer: Send {
    fn prepare(&mut self, asset: &mut DecodedAsset) -> AssetFeatures;
}

/// Enables shadow casting on every mesh and reports morph targets and
/// skinning from the decoded meshes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPreparer;

impl AssetPreparer for DefaultPreparer {
    fn prepare(&mut self, asset: &mut DecodedAsset) -> AssetFeatures {
        let mut features = AssetFeatures::default();
        for node in &mut asset.nodes {
            node.cast_shadow = true;
            features.has_morph_targets |= node.morph_target_count > 0;
            features.has_skeleton |= node.skinned;
        }
        features
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
