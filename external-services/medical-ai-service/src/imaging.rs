//! In-memory image preparation for vision requests
//!
//! Uploads are decoded, scaled to a fixed width and re-encoded as PNG without
//! touching the filesystem, so concurrent requests never share state.

use std::io::Cursor;

use image::{imageops::FilterType, ImageOutputFormat};
use tracing::debug;

use crate::error::{AiError, AiResult};
use crate::providers::InlineImage;

/// Width X-ray and scan uploads are scaled to
pub const XRAY_WIDTH: u32 = 500;
/// Width prescription uploads are scaled to; handwriting needs the extra detail
pub const PRESCRIPTION_WIDTH: u32 = 1000;
/// Largest height a scaled image may have
pub const MAX_SCALED_HEIGHT: u32 = 10_000;

/// Height that keeps the aspect ratio at `target_width`, never below 1 pixel
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> AiResult<u32> {
    if width == 0 || height == 0 {
        return Err(AiError::Image("Image has zero width or height".to_string()));
    }

    let scaled = u64::from(target_width) * u64::from(height) / u64::from(width);
    let scaled = u32::try_from(scaled.max(1)).unwrap_or(u32::MAX);

    if scaled > MAX_SCALED_HEIGHT {
        return Err(AiError::Image(format!(
            "Image aspect ratio {width}x{height} is too extreme to scale"
        )));
    }

    Ok(scaled)
}

/// Decode an uploaded image, scale it to `target_width` and re-encode it as PNG
///
/// # Errors
///
/// Returns [`AiError::Image`] when the bytes are not a supported image or the
/// aspect ratio cannot be scaled.
pub fn prepare_image(bytes: &[u8], target_width: u32) -> AiResult<InlineImage> {
    let decoded = image::load_from_memory(bytes)?;
    let new_height = scaled_height(decoded.width(), decoded.height(), target_width)?;

    debug!(
        original_width = decoded.width(),
        original_height = decoded.height(),
        width = target_width,
        height = new_height,
        "Resizing upload"
    );

    let resized = decoded.resize_exact(target_width, new_height, FilterType::CatmullRom);

    let mut buffer = Cursor::new(Vec::new());
    resized.write_to(&mut buffer, ImageOutputFormat::Png)?;

    Ok(InlineImage::png(buffer.into_inner()))
}
