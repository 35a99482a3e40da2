/// Renderer trait - backend factory and draw interface

use std::sync::Arc;

use crate::camera::RenderCamera;
use crate::error::Result;
use crate::renderer::{RenderSettings, RenderTarget, RenderTargetDesc, Shader, ShaderDesc};
use crate::scene::{MaterialOverride, Scene};

/// Per-call scene draw arguments
///
/// Everything that differs between views is passed here instead of being
/// written into the scene before the draw and restored after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    /// Replace every mesh material with this one for the draw
    pub material_override: Option<MaterialOverride>,
    /// Draw helper overlays (bounding boxes, light gizmo)
    pub include_helpers: bool,
    /// Clear color of the target
    pub clear_color: [f32; 4],
    /// Tone mapping, exposure and shadow maps of the view
    pub render_settings: RenderSettings,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            material_override: None,
            include_helpers: false,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            render_settings: RenderSettings::default(),
        }
    }
}

/// Renderer statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RendererStats {
    /// Scene draws since the renderer was created
    pub scene_draws: u32,
    /// Full-screen passes since the renderer was created
    pub fullscreen_passes: u32,
    /// Render targets currently alive
    pub live_render_targets: u32,
}

// ============================================================================
// Renderer trait
// ============================================================================

/// Main renderer trait
///
/// Central factory interface for GPU resources plus the two draw entry
/// points the orchestrator needs. Implemented by backend-specific renderers.
pub trait Renderer: Send + Sync {
    /// Create an offscreen render target
    ///
    /// # Arguments
    ///
    /// * `desc` - Render target descriptor
    fn create_render_target(&mut self, desc: &RenderTargetDesc) -> Result<Arc<dyn RenderTarget>>;

    /// Create a full-screen shader
    ///
    /// # Errors
    ///
    /// `ShaderBuildFailure` if the source fails to compile or link.
    fn create_shader(&mut self, desc: &ShaderDesc) -> Result<Arc<dyn Shader>>;

    /// Render the scene into `target` through `camera`
    fn draw_scene(
        &mut self,
        target: &Arc<dyn RenderTarget>,
        scene: &Scene,
        camera: &RenderCamera,
        params: &DrawParams,
    ) -> Result<()>;

    /// Run a full-screen pass sampling `input` and writing `output`
    ///
    /// # Arguments
    ///
    /// * `uniforms` - Raw uniform block bytes for the shader
    fn draw_fullscreen(
        &mut self,
        shader: &Arc<dyn Shader>,
        input: &Arc<dyn RenderTarget>,
        output: &Arc<dyn RenderTarget>,
        uniforms: &[u8],
    ) -> Result<()>;

    /// Read back the target as tightly packed RGBA8 rows
    fn read_pixels(&self, target: &Arc<dyn RenderTarget>) -> Result<Vec<u8>>;

    /// Get statistics about the renderer
    fn stats(&self) -> RendererStats;
}
