/// PNG encoding of read-back view targets.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use crate::error::{Error, Result};

/// Encode tightly packed RGBA8 rows as PNG.
///
/// # Errors
///
/// `InvalidResource` if `rgba` does not hold `width * height` pixels,
/// `BackendError` if the encoder fails.
pub fn encode_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>> {
    let expected = width as usize * height as usize * 4;
    if width == 0 || height == 0 || rgba.len() != expected {
        return Err(Error::InvalidResource(format!(
            "capture buffer of {} bytes does not match {}x{} RGBA",
            rgba.len(), width, height
        )));
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(rgba, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| Error::BackendError(format!("PNG encoding failed: {}", e)))?;
    Ok(png)
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
