/// Mock Renderer for unit tests (no GPU required)
///
/// Records every call and counts live render targets and shaders through
/// drop hooks, so tests can assert resource ownership after the renderer
/// has been moved behind `Arc<Mutex<dyn Renderer>>`.

use std::sync::{Arc, Mutex, MutexGuard};
use glam::Vec3;

use crate::camera::RenderCamera;
use crate::error::{Error, Result};
use crate::renderer::{
    DrawParams, RenderSettings, RenderTarget, RenderTargetDesc, Renderer, RendererStats, Shader,
    ShaderDesc, TextureFormat,
};
use crate::scene::{MaterialOverride, Scene};

// ============================================================================
// Recorded calls
// ============================================================================

/// One recorded `draw_scene` call
#[derive(Debug, Clone, PartialEq)]
pub struct MockDraw {
    pub target: String,
    pub width: u32,
    pub height: u32,
    pub camera_position: Vec3,
    pub aspect: f32,
    pub material_override: Option<MaterialOverride>,
    pub include_helpers: bool,
    pub clear_color: [f32; 4],
    pub render_settings: RenderSettings,
    /// Name of the scene environment map
    pub environment: Option<String>,
    pub model_count: usize,
    pub helper_count: usize,
}

/// One recorded `draw_fullscreen` call
#[derive(Debug, Clone, PartialEq)]
pub struct MockPass {
    pub shader: String,
    pub input: String,
    pub output: String,
    pub uniforms: Vec<u8>,
}

#[derive(Debug, Default)]
struct MockState {
    events: Vec<String>,
    draws: Vec<MockDraw>,
    passes: Vec<MockPass>,
    live_targets: usize,
    live_shaders: usize,
    failing_shaders: Vec<String>,
    fail_draws: bool,
}

fn lock(state: &Arc<Mutex<MockState>>) -> MutexGuard<'_, MockState> {
    // a poisoned mock only happens after another assertion already failed
    match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

// ============================================================================
// Mock RenderTarget
// ============================================================================

pub struct MockRenderTarget {
    label: String,
    width: u32,
    height: u32,
    format: TextureFormat,
    state: Arc<Mutex<MockState>>,
}

impl RenderTarget for MockRenderTarget {
    fn label(&self) -> &str {
        &self.label
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> TextureFormat {
        self.format
    }
}

impl Drop for MockRenderTarget {
    fn drop(&mut self) {
        let mut state = lock(&self.state);
        state.live_targets -= 1;
        state.events.push(format!("release_target:{}", self.label));
    }
}

// ============================================================================
// Mock Shader
// ============================================================================

pub struct MockShader {
    label: String,
    state: Arc<Mutex<MockState>>,
}

impl Shader for MockShader {
    fn label(&self) -> &str {
        &self.label
    }
}

impl Drop for MockShader {
    fn drop(&mut self) {
        let mut state = lock(&self.state);
        state.live_shaders -= 1;
        state.events.push(format!("release_shader:{}", self.label));
    }
}

// ============================================================================
// Mock Renderer
// ============================================================================

pub struct MockRenderer {
    state: Arc<Mutex<MockState>>,
    stats: RendererStats,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
            stats: RendererStats::default(),
        }
    }

    /// Handle sharing the recorded state with this renderer
    pub fn probe(&self) -> MockProbe {
        MockProbe { state: self.state.clone() }
    }
}

impl Renderer for MockRenderer {
    fn create_render_target(&mut self, desc: &RenderTargetDesc) -> Result<Arc<dyn RenderTarget>> {
        if desc.width == 0 || desc.height == 0 {
            return Err(Error::InvalidDimension { width: desc.width, height: desc.height });
        }
        {
            let mut state = lock(&self.state);
            state.live_targets += 1;
            state.events.push(format!("create_target:{}:{}x{}", desc.label, desc.width, desc.height));
        }
        Ok(Arc::new(MockRenderTarget {
            label: desc.label.clone(),
            width: desc.width,
            height: desc.height,
            format: desc.format,
            state: self.state.clone(),
        }))
    }

    fn create_shader(&mut self, desc: &ShaderDesc) -> Result<Arc<dyn Shader>> {
        {
            let mut state = lock(&self.state);
            if state.failing_shaders.iter().any(|label| *label == desc.label) {
                state.events.push(format!("shader_failed:{}", desc.label));
                return Err(Error::ShaderBuildFailure(format!("mock refused '{}'", desc.label)));
            }
            state.live_shaders += 1;
            state.events.push(format!("create_shader:{}", desc.label));
        }
        Ok(Arc::new(MockShader {
            label: desc.label.clone(),
            state: self.state.clone(),
        }))
    }

    fn draw_scene(
        &mut self,
        target: &Arc<dyn RenderTarget>,
        scene: &Scene,
        camera: &RenderCamera,
        params: &DrawParams,
    ) -> Result<()> {
        let mut state = lock(&self.state);
        if state.fail_draws {
            return Err(Error::BackendError("mock draw failure".to_string()));
        }
        state.events.push(format!("draw_scene:{}", target.label()));
        state.draws.push(MockDraw {
            target: target.label().to_string(),
            width: target.width(),
            height: target.height(),
            camera_position: camera.position(),
            aspect: camera.aspect(),
            material_override: params.material_override,
            include_helpers: params.include_helpers,
            clear_color: params.clear_color,
            render_settings: params.render_settings,
            environment: scene.environment().map(|e| e.name.clone()),
            model_count: scene.model_count(),
            helper_count: if params.include_helpers { scene.helper_count() } else { 0 },
        });
        self.stats.scene_draws += 1;
        Ok(())
    }

    fn draw_fullscreen(
        &mut self,
        shader: &Arc<dyn Shader>,
        input: &Arc<dyn RenderTarget>,
        output: &Arc<dyn RenderTarget>,
        uniforms: &[u8],
    ) -> Result<()> {
        let mut state = lock(&self.state);
        state.events.push(format!("fullscreen:{}", shader.label()));
        state.passes.push(MockPass {
            shader: shader.label().to_string(),
            input: input.label().to_string(),
            output: output.label().to_string(),
            uniforms: uniforms.to_vec(),
        });
        self.stats.fullscreen_passes += 1;
        Ok(())
    }

    fn read_pixels(&self, target: &Arc<dyn RenderTarget>) -> Result<Vec<u8>> {
        let len = target.width() as usize * target.height() as usize * target.format().bytes_per_pixel();
        Ok(vec![128; len])
    }

    fn stats(&self) -> RendererStats {
        RendererStats {
            live_render_targets: lock(&self.state).live_targets as u32,
            ..self.stats
        }
    }
}

// ============================================================================
// Probe
// ============================================================================

/// Test-side view of a `MockRenderer`'s recorded state
#[derive(Clone)]
pub struct MockProbe {
    state: Arc<Mutex<MockState>>,
}

impl MockProbe {
    pub fn live_targets(&self) -> usize {
        lock(&self.state).live_targets
    }

    pub fn live_shaders(&self) -> usize {
        lock(&self.state).live_shaders
    }

    pub fn events(&self) -> Vec<String> {
        lock(&self.state).events.clone()
    }

    pub fn draws(&self) -> Vec<MockDraw> {
        lock(&self.state).draws.clone()
    }

    pub fn passes(&self) -> Vec<MockPass> {
        lock(&self.state).passes.clone()
    }

    /// Forget recorded calls (live counters are kept)
    pub fn clear(&self) {
        let mut state = lock(&self.state);
        state.events.clear();
        state.draws.clear();
        state.passes.clear();
    }

    /// Make `create_shader` fail for this label
    pub fn fail_shader(&self, label: &str) {
        lock(&self.state).failing_shaders.push(label.to_string());
    }

    /// Stop failing shader builds
    pub fn heal_shaders(&self) {
        lock(&self.state).failing_shaders.clear();
    }

    pub fn fail_draws(&self, fail: bool) {
        lock(&self.state).fail_draws = fail;
    }
}

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
