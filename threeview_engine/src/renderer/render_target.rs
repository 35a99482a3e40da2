/// RenderTarget trait, render target descriptor and viewport

/// Pixel format of a render target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    R8G8B8A8_UNORM,
}

impl TextureFormat {
    /// Bytes per pixel when read back to the host
    pub fn bytes_per_pixel(&self) -> usize {
        4
    }
}

/// Descriptor for creating an offscreen render target
#[derive(Debug, Clone)]
pub struct RenderTargetDesc {
    /// Debug label (view name or pipeline stage name)
    pub label: String,
    /// Width in device pixels
    pub width: u32,
    /// Height in device pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Color the target is cleared to before each scene pass
    pub clear_color: [f32; 4],
}

impl RenderTargetDesc {
    /// Color target with a black clear color.
    pub fn color(label: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            label: label.into(),
            width,
            height,
            format: TextureFormat::R8G8B8A8_UNORM,
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }

    pub fn with_clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.clear_color = clear_color;
        self
    }
}

/// Render target trait
///
/// Offscreen surface a view or a pipeline stage renders into. The backend
/// releases the GPU memory when the last `Arc` is dropped.
pub trait RenderTarget: Send + Sync {
    /// Debug label given at creation
    fn label(&self) -> &str;

    /// Width of the render target in pixels
    fn width(&self) -> u32;

    /// Height of the render target in pixels
    fn height(&self) -> u32;

    /// Pixel format of the render target
    fn format(&self) -> TextureFormat;
}

/// Viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Viewport covering a whole `width x height` target.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::full(1, 1)
    }
}
