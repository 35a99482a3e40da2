/// Pipeline stages, passes and uniform blocks.

use std::fmt;
use std::sync::Arc;
use bytemuck::{Pod, Zeroable};
use crate::renderer::{RenderTarget, Shader};

/// Stage of the line pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    /// Base scene render into the pipeline's own target
    ScenePass,
    /// Luminosity-weighted grayscale
    Grayscale,
    Exposure,
    /// Shared Sobel / Prewitt / Scharr kernel stage
    SobelFamily,
    /// Gradient plus non-maximum suppression
    Canny,
    Threshold,
}

// ===== UNIFORMS =====

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ExposureUniforms {
    pub exposure: f32,
    pub _pad: [f32; 3],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct EdgeUniforms {
    /// Texel resolution of the sampled target
    pub resolution: [f32; 2],
    /// 0 Sobel, 1 Prewitt, 2 Scharr; unused by Canny
    pub kernel: u32,
    pub _pad: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ThresholdUniforms {
    pub threshold: f32,
    pub _pad: [f32; 3],
}

/// Uniform block of one pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StageUniforms {
    None,
    Exposure(ExposureUniforms),
    Edge(EdgeUniforms),
    Threshold(ThresholdUniforms),
}

impl StageUniforms {
    pub fn exposure(exposure: f32) -> Self {
        StageUniforms::Exposure(ExposureUniforms { exposure, _pad: [0.0; 3] })
    }

    pub fn edge(resolution: [f32; 2], kernel: u32) -> Self {
        StageUniforms::Edge(EdgeUniforms { resolution, kernel, _pad: 0 })
    }

    pub fn threshold(threshold: f32) -> Self {
        StageUniforms::Threshold(ThresholdUniforms { threshold, _pad: [0.0; 3] })
    }

    /// Raw bytes uploaded to the shader
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            StageUniforms::None => &[],
            StageUniforms::Exposure(u) => bytemuck::bytes_of(u),
            StageUniforms::Edge(u) => bytemuck::bytes_of(u),
            StageUniforms::Threshold(u) => bytemuck::bytes_of(u),
        }
    }

    /// Resolution carried by resolution-aware stages
    pub fn resolution(&self) -> Option<[f32; 2]> {
        match self {
            StageUniforms::Edge(u) => Some(u.resolution),
            _ => None,
        }
    }
}

// ===== PASSES =====

/// One full-screen pass of a built stage
pub struct StagePass {
    pub(crate) label: String,
    pub(crate) shader: Arc<dyn Shader>,
    pub(crate) uniforms: StageUniforms,
    /// Intermediate target, `None` for the pass writing the view output
    pub(crate) target: Option<Arc<dyn RenderTarget>>,
}

impl StagePass {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn uniforms(&self) -> &StageUniforms {
        &self.uniforms
    }

    pub fn writes_output(&self) -> bool {
        self.target.is_none()
    }
}

impl fmt::Debug for StagePass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StagePass")
            .field("label", &self.label)
            .field("uniforms", &self.uniforms)
            .field("writes_output", &self.writes_output())
            .finish()
    }
}

/// A built stage: one or more passes
#[derive(Debug)]
pub struct Stage {
    pub(crate) kind: StageKind,
    pub(crate) passes: Vec<StagePass>,
}

impl Stage {
    pub fn kind(&self) -> StageKind {
        self.kind
    }

    pub fn passes(&self) -> &[StagePass] {
        &self.passes
    }
}
