/// Pipeline configuration and camera lock mode.

use crate::view::ViewKind;
use super::EdgeOperator;

/// Whether the views share the interactive camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewLockMode {
    /// Every view renders through the interactive camera
    #[default]
    Shared,
    /// Every view renders through its own camera
    Independent,
}

/// Camera the pipeline's scene pass renders through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraBinding {
    Interactive,
    View(ViewKind),
}

impl CameraBinding {
    /// Binding of the line view pipeline under `mode`
    pub fn for_mode(mode: ViewLockMode) -> Self {
        match mode {
            ViewLockMode::Shared => CameraBinding::Interactive,
            ViewLockMode::Independent => CameraBinding::View(ViewKind::Line),
        }
    }
}

/// Everything the built pipeline depends on besides the canvas size.
///
/// Compared by value: any difference invalidates the built pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PipelineConfig {
    pub operator: EdgeOperator,
    pub view_lock_mode: ViewLockMode,
    /// False when the line view is hidden or line compositing is off
    pub enabled: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            operator: EdgeOperator::Sobel,
            view_lock_mode: ViewLockMode::Shared,
            enabled: true,
        }
    }
}
