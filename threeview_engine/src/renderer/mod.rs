/// Renderer module - backend abstraction used by every view

// Module declarations
pub mod renderer;
pub mod render_target;
pub mod render_settings;
pub mod shader;

#[cfg(test)]
pub mod mock_renderer;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use render_target::*;
pub use render_settings::*;
pub use shader::*;
