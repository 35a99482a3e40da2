//! Post-process pipeline for the line view
//!
//! grayscale → exposure → edge operator → threshold, built all-or-nothing
//! from a `PipelineConfig` and rebuilt whenever the config or the canvas
//! size changes.

mod edge_operator;
mod config;
mod shaders;
mod stage;
mod builder;
mod pipeline;

pub use edge_operator::EdgeOperator;
pub use config::{PipelineConfig, ViewLockMode, CameraBinding};
pub use stage::{StageKind, Stage, StagePass, StageUniforms, ExposureUniforms, EdgeUniforms, ThresholdUniforms};
pub use builder::{PipelineBuilder, StagePlan, PassPlan, plan_stages};
pub use pipeline::{Pipeline, PipelineSlot, PostProcessor};
