/// Viewer configuration

use glam::Vec3;
use crate::camera::{DEFAULT_MAX_DISTANCE, DEFAULT_MIN_DISTANCE};
use crate::canvas::CanvasSize;
use crate::error::Result;
use crate::pipeline::{EdgeOperator, PipelineConfig, ViewLockMode};

/// Exposure factor applied before edge detection
pub const DEFAULT_EXPOSURE: f32 = 0.75;

/// Cutoff turning the edge response into a binary line mask
pub const DEFAULT_THRESHOLD: f32 = 0.2;

/// Orchestrator configuration
///
/// Every field has a working default; hosts usually override only the
/// canvas size and the saved multi-view settings.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Initial logical canvas width
    pub width: u32,
    /// Initial logical canvas height
    pub height: u32,
    /// Device pixel ratio for every render target
    pub pixel_ratio: f32,
    /// Horizontal space the host layout reserves around the canvas
    pub layout_offset: u32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Show the line, depth and normal views
    pub multi_view: bool,
    /// Whether the views share the interactive camera
    pub view_lock_mode: ViewLockMode,
    /// Edge operator used by the line view pipeline
    pub edge_operator: EdgeOperator,
    /// Render the line view through the post-process pipeline
    pub use_line_composer: bool,
    /// Helper overlays visible in the color view
    pub show_helpers: bool,
    /// Add a bounding-box helper for each loaded model
    pub bounds_helper: bool,
    /// Render on every host tick instead of on demand
    pub auto_animate: bool,
    /// Asset loaded when nothing else is available or a decode fails
    pub placeholder_asset: String,
    /// HDR environment loaded at startup and used when another one fails
    pub environment_asset: Option<String>,
    /// Remote folder receiving uploaded models
    pub upload_subfolder: String,
    /// Camera position before any asset is framed
    pub initial_camera_position: Vec3,
    /// Camera target before any asset is framed
    pub initial_camera_target: Vec3,
    /// Near plane before any asset is framed
    pub initial_near: f32,
    /// Far plane before any asset is framed
    pub initial_far: f32,
    /// Closest orbit distance before any asset is framed
    pub min_orbit_distance: f32,
    /// Farthest orbit distance before any asset is framed
    pub max_orbit_distance: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            pixel_ratio: 1.0,
            layout_offset: 10,
            fov: 55.0,
            multi_view: false,
            view_lock_mode: ViewLockMode::Shared,
            edge_operator: EdgeOperator::Sobel,
            use_line_composer: true,
            show_helpers: true,
            bounds_helper: false,
            auto_animate: false,
            placeholder_asset: "assets/head.glb".to_string(),
            environment_asset: Some("assets/clear.hdr".to_string()),
            upload_subfolder: "ThreeViewModels".to_string(),
            initial_camera_position: Vec3::new(0.0, 0.0, 5.0),
            initial_camera_target: Vec3::ZERO,
            initial_near: 0.1,
            initial_far: 10.0,
            min_orbit_distance: DEFAULT_MIN_DISTANCE,
            max_orbit_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl ViewerConfig {
    /// Initial canvas size.
    pub fn canvas_size(&self) -> Result<CanvasSize> {
        CanvasSize::new(self.width, self.height, self.pixel_ratio)
    }

    /// Initial pipeline configuration. The pipeline only exists while the
    /// line view is shown.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            operator: self.edge_operator,
            view_lock_mode: self.view_lock_mode,
            enabled: self.use_line_composer && self.multi_view,
        }
    }
}
