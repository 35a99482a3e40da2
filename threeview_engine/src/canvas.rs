//! Canvas dimensions shared by every view.
//!
//! A `CanvasSize` is immutable once built: resize operations construct a new
//! value. The aspect ratio is always derived from width and height.

use glam::Vec2;
use crate::error::{Error, Result};

/// Logical canvas size plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    width: u32,
    height: u32,
    aspect: f32,
    pixel_ratio: f32,
}

impl CanvasSize {
    /// Build a canvas size.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if width or height is zero, `InvalidResource` if the
    /// pixel ratio is not a finite positive number.
    pub fn new(width: u32, height: u32, pixel_ratio: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
            return Err(Error::InvalidResource(format!("pixel ratio {} must be positive", pixel_ratio)));
        }

        Ok(Self {
            width,
            height,
            aspect: width as f32 / height as f32,
            pixel_ratio,
        })
    }

    /// Logical width in CSS-style pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical height in CSS-style pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `width / height`
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Width of the backing render target in device pixels (at least 1).
    pub fn physical_width(&self) -> u32 {
        ((self.width as f32 * self.pixel_ratio).round() as u32).max(1)
    }

    /// Height of the backing render target in device pixels (at least 1).
    pub fn physical_height(&self) -> u32 {
        ((self.height as f32 * self.pixel_ratio).round() as u32).max(1)
    }

    /// Texel resolution handed to resolution-aware shader stages.
    pub fn resolution(&self) -> Vec2 {
        Vec2::new(self.physical_width() as f32, self.physical_height() as f32)
    }

    /// Same pixel ratio, new width, height recomputed from the current aspect.
    pub fn with_width_keep_aspect(&self, width: u32) -> Result<Self> {
        let height = (width as f32 / self.aspect).round() as u32;
        Self::new(width, height, self.pixel_ratio)
    }

    /// Same dimensions, new pixel ratio.
    pub fn with_pixel_ratio(&self, pixel_ratio: f32) -> Result<Self> {
        Self::new(self.width, self.height, pixel_ratio)
    }

    /// True if both logical dimensions match.
    pub fn same_dimensions(&self, other: &CanvasSize) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Short label shown next to the host node title, e.g. `[512x512]`.
    pub fn label(&self) -> String {
        format!("[{}x{}]", self.width, self.height)
    }
}

#[cfg(test)]
#[path = "canvas_tests.rs"]
mod tests;
