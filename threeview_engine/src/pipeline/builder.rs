/// PipelineBuilder - turns a `PipelineConfig` into GPU resources.
///
/// Planning is pure; `build` is the only place resources are created. A
/// failed build drops whatever it already created before returning.

use crate::canvas::CanvasSize;
use crate::config::{DEFAULT_EXPOSURE, DEFAULT_THRESHOLD};
use crate::error::Result;
use crate::renderer::{Renderer, RenderTargetDesc, ShaderDesc};
use crate::engine_debug;
use super::shaders;
use super::{CameraBinding, Pipeline, PipelineConfig, Stage, StageKind, StagePass, StageUniforms};

/// Planned pass, before any resource exists
#[derive(Debug, Clone, PartialEq)]
pub struct PassPlan {
    pub label: &'static str,
    pub source: &'static str,
    pub uniforms: StageUniforms,
    /// Last pass of the chain, writes into the view target
    pub writes_output: bool,
}

/// Planned stage
#[derive(Debug, Clone, PartialEq)]
pub struct StagePlan {
    pub kind: StageKind,
    pub passes: Vec<PassPlan>,
}

/// Stage plan with the default exposure and threshold.
pub fn plan_stages(config: &PipelineConfig, size: &CanvasSize) -> Vec<StagePlan> {
    PipelineBuilder::default().plan(config, size)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineBuilder {
    exposure: f32,
    threshold: f32,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            exposure: DEFAULT_EXPOSURE,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exposure(mut self, exposure: f32) -> Self {
        self.exposure = exposure;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Ordered post-scene stages for `config`.
    ///
    /// The Sobel-family stage and the Canny stage are mutually exclusive.
    pub fn plan(&self, config: &PipelineConfig, size: &CanvasSize) -> Vec<StagePlan> {
        let resolution = size.resolution().to_array();

        let edge = match config.operator.kernel_selector() {
            Some(kernel) => StagePlan {
                kind: StageKind::SobelFamily,
                passes: vec![PassPlan {
                    label: "edge_kernel",
                    source: shaders::EDGE_KERNEL,
                    uniforms: StageUniforms::edge(resolution, kernel),
                    writes_output: false,
                }],
            },
            None => StagePlan {
                kind: StageKind::Canny,
                passes: vec![
                    PassPlan {
                        label: "canny_gradient",
                        source: shaders::CANNY_GRADIENT,
                        uniforms: StageUniforms::edge(resolution, 0),
                        writes_output: false,
                    },
                    PassPlan {
                        label: "canny_suppression",
                        source: shaders::CANNY_SUPPRESSION,
                        uniforms: StageUniforms::edge(resolution, 0),
                        writes_output: false,
                    },
                ],
            },
        };

        vec![
            StagePlan {
                kind: StageKind::Grayscale,
                passes: vec![PassPlan {
                    label: "grayscale",
                    source: shaders::GRAYSCALE,
                    uniforms: StageUniforms::None,
                    writes_output: false,
                }],
            },
            StagePlan {
                kind: StageKind::Exposure,
                passes: vec![PassPlan {
                    label: "exposure",
                    source: shaders::EXPOSURE,
                    uniforms: StageUniforms::exposure(self.exposure),
                    writes_output: false,
                }],
            },
            edge,
            StagePlan {
                kind: StageKind::Threshold,
                passes: vec![PassPlan {
                    label: "threshold",
                    source: shaders::THRESHOLD,
                    uniforms: StageUniforms::threshold(self.threshold),
                    writes_output: true,
                }],
            },
        ]
    }

    /// Create every resource of the pipeline.
    ///
    /// Returns `Ok(None)` when the config disables the line pipeline.
    ///
    /// # Errors
    ///
    /// `ShaderBuildFailure` from the renderer when a stage does not compile,
    /// or any render target creation error.
    pub fn build(
        &self,
        renderer: &mut dyn Renderer,
        config: &PipelineConfig,
        size: &CanvasSize,
    ) -> Result<Option<Pipeline>> {
        if !config.enabled {
            engine_debug!("threeview::PipelineBuilder", "Line pipeline disabled, skipping build");
            return Ok(None);
        }

        let width = size.physical_width();
        let height = size.physical_height();
        let scene_target = renderer.create_render_target(&RenderTargetDesc::color("pipeline:scene", width, height))?;

        let mut stages = Vec::new();
        for plan in self.plan(config, size) {
            let mut passes = Vec::with_capacity(plan.passes.len());
            for pass in plan.passes {
                let shader = renderer.create_shader(&ShaderDesc {
                    label: pass.label.to_string(),
                    source: pass.source,
                    entry_point: shaders::FRAGMENT_ENTRY.to_string(),
                })?;
                let target = if pass.writes_output {
                    None
                } else {
                    let desc = RenderTargetDesc::color(format!("pipeline:{}", pass.label), width, height);
                    Some(renderer.create_render_target(&desc)?)
                };
                passes.push(StagePass {
                    label: pass.label.to_string(),
                    shader,
                    uniforms: pass.uniforms,
                    target,
                });
            }
            stages.push(Stage { kind: plan.kind, passes });
        }

        engine_debug!(
            "threeview::PipelineBuilder",
            "Built {} line pipeline at {}x{}",
            config.operator, width, height
        );

        Ok(Some(Pipeline {
            config: *config,
            resolution: [width as f32, height as f32],
            camera_binding: CameraBinding::for_mode(config.view_lock_mode),
            scene_target,
            stages,
        }))
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
