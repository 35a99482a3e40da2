/*!
# ThreeView Engine

Multi-view render orchestration for a 3D model viewer widget.

A single loaded model is rendered into up to four synchronized views
(color, line, depth, normal) sharing one canvas size. The line view runs
through an edge-detection post-process pipeline; the other views render the
scene directly with a per-view material override.

## Architecture

- **Orchestrator**: owns the scene, camera rig and view set; drives frames
- **Renderer**: backend factory trait creating render targets and shaders
- **CameraRig**: interactive camera plus one camera per view
- **ViewSet**: per-view render targets and the line-view post-processor
- **PipelineBuilder**: builds the ordered edge-detection stage chain
- **SessionState**: persisted canvas size, asset reference and camera pose

Backends implement [`threeview::render::Renderer`]; the engine never talks
to a GPU API directly.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod canvas;
pub mod config;
pub mod framing;
pub mod renderer;
pub mod scene;
pub mod camera;
pub mod view;
pub mod pipeline;
pub mod asset;
pub mod session;
pub mod orchestrator;

// Main threeview namespace module
pub mod threeview {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::engine::Engine;

    // Entry point
    pub use crate::orchestrator::{Orchestrator, FrameState, FrameReport};
    pub use crate::config::ViewerConfig;
    pub use crate::canvas::CanvasSize;
    pub use crate::framing::{compute_framing, FramingResult};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Render backend sub-module
    pub mod render {
        pub use crate::renderer::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Post-process sub-module
    pub mod pipeline {
        pub use crate::pipeline::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Asset sub-module
    pub mod asset {
        pub use crate::asset::*;
    }

    // Session persistence sub-module
    pub mod session {
        pub use crate::session::*;
    }

    // View sub-module
    pub mod view {
        pub use crate::view::*;
    }
}

// Re-export math library at crate root
pub use glam;
