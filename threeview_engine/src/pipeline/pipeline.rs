/// Built line pipeline and its owner.
///
/// A `Pipeline` is never mutated after `build`; a config or size change
/// replaces it as a whole through `PostProcessor::rebuild`, which releases
/// the old pipeline before creating the new one.

use std::fmt;
use std::sync::Arc;
use crate::camera::RenderCamera;
use crate::canvas::CanvasSize;
use crate::error::Result;
use crate::renderer::{DrawParams, RenderTarget, Renderer};
use crate::scene::Scene;
use crate::{engine_debug, engine_warn};
use super::{CameraBinding, PipelineBuilder, PipelineConfig, Stage, StageKind};

/// Built pipeline
pub struct Pipeline {
    pub(crate) config: PipelineConfig,
    pub(crate) resolution: [f32; 2],
    pub(crate) camera_binding: CameraBinding,
    pub(crate) scene_target: Arc<dyn RenderTarget>,
    pub(crate) stages: Vec<Stage>,
}

impl Pipeline {
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Texel resolution the resolution-aware stages were built with
    pub fn resolution(&self) -> [f32; 2] {
        self.resolution
    }

    pub fn camera_binding(&self) -> CameraBinding {
        self.camera_binding
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Stage kinds in execution order, starting with the scene pass
    pub fn stage_kinds(&self) -> Vec<StageKind> {
        std::iter::once(StageKind::ScenePass)
            .chain(self.stages.iter().map(Stage::kind))
            .collect()
    }

    pub fn has_stage(&self, kind: StageKind) -> bool {
        self.stage_kinds().contains(&kind)
    }

    /// Draw the scene and run every pass; the last pass writes `output`.
    pub fn render(
        &self,
        renderer: &mut dyn Renderer,
        scene: &Scene,
        camera: &RenderCamera,
        params: &DrawParams,
        output: &Arc<dyn RenderTarget>,
    ) -> Result<()> {
        renderer.draw_scene(&self.scene_target, scene, camera, params)?;

        let mut input = &self.scene_target;
        for stage in &self.stages {
            for pass in &stage.passes {
                let target = pass.target.as_ref().unwrap_or(output);
                renderer.draw_fullscreen(&pass.shader, input, target, pass.uniforms.as_bytes())?;
                input = target;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("resolution", &self.resolution)
            .field("camera_binding", &self.camera_binding)
            .field("stages", &self.stages)
            .finish()
    }
}

/// Owned-or-absent pipeline
#[derive(Debug, Default)]
pub enum PipelineSlot {
    #[default]
    NoPipeline,
    ActivePipeline(Pipeline),
}

/// Owner of the line pipeline
///
/// Invalidation only sets a flag; the rebuild happens on the next `ensure`.
/// After a failed build the slot stays empty until the next invalidation.
#[derive(Debug)]
pub struct PostProcessor {
    builder: PipelineBuilder,
    config: PipelineConfig,
    slot: PipelineSlot,
    needs_rebuild: bool,
}

impl PostProcessor {
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_builder(config, PipelineBuilder::default())
    }

    pub fn with_builder(config: PipelineConfig, builder: PipelineBuilder) -> Self {
        Self {
            builder,
            config,
            slot: PipelineSlot::NoPipeline,
            needs_rebuild: true,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Store `config`; invalidates only if it differs from the current one.
    ///
    /// Returns true if the pipeline was invalidated.
    pub fn set_config(&mut self, config: PipelineConfig) -> bool {
        if config == self.config {
            return false;
        }
        self.config = config;
        self.invalidate();
        true
    }

    pub fn invalidate(&mut self) {
        self.needs_rebuild = true;
    }

    pub fn needs_rebuild(&self) -> bool {
        self.needs_rebuild
    }

    /// Drop the current pipeline and every resource it owns.
    pub fn release(&mut self) {
        if let PipelineSlot::ActivePipeline(_) = std::mem::take(&mut self.slot) {
            engine_debug!("threeview::PostProcessor", "Released line pipeline");
        }
    }

    /// Release the current pipeline, then build a new one.
    ///
    /// Returns whether a pipeline is active afterwards.
    pub fn rebuild(&mut self, renderer: &mut dyn Renderer, size: &CanvasSize) -> Result<bool> {
        self.release();
        self.needs_rebuild = false;

        match self.builder.build(renderer, &self.config, size)? {
            Some(pipeline) => {
                self.slot = PipelineSlot::ActivePipeline(pipeline);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Rebuild if invalidated.
    pub fn ensure(&mut self, renderer: &mut dyn Renderer, size: &CanvasSize) -> Result<()> {
        if self.needs_rebuild {
            if let Err(e) = self.rebuild(renderer, size) {
                engine_warn!(
                    "threeview::PostProcessor",
                    "Line pipeline build failed, line view renders directly: {}",
                    e
                );
                return Err(e);
            }
        }
        Ok(())
    }

    pub fn slot(&self) -> &PipelineSlot {
        &self.slot
    }

    pub fn pipeline(&self) -> Option<&Pipeline> {
        match &self.slot {
            PipelineSlot::ActivePipeline(pipeline) => Some(pipeline),
            PipelineSlot::NoPipeline => None,
        }
    }

    /// Number of live pipelines (0 or 1)
    pub fn alive_count(&self) -> usize {
        usize::from(self.pipeline().is_some())
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
