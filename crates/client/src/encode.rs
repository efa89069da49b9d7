//! Downscale, recompress, and base64-encode a picked image.
//!
//! The payload sent to the backend is always derived from a bounded-size
//! JPEG copy, never the original-resolution asset, so the base64 text
//! stays well under the server's body cap.

use std::io::Cursor;

use base64::engine::general_purpose;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView};

use crate::error::CaptureError;

/// Maximum long-edge dimension after downscale.
pub const MAX_LONG_EDGE: u32 = 600;

/// JPEG quality for the recompressed copy. Deliberately lossy.
pub const JPEG_QUALITY: u8 = 60;

/// Convert raw picked bytes into the transport payload: decode, downscale
/// to at most [`MAX_LONG_EDGE`] on the long edge, re-encode as JPEG at
/// [`JPEG_QUALITY`], and base64 the result.
pub fn prepare_image(bytes: &[u8]) -> Result<String, CaptureError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| CaptureError::Processing(format!("invalid image data: {e}")))?;

    let img = downscale(img);

    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut jpeg), JPEG_QUALITY);
    img.write_with_encoder(encoder)
        .map_err(|e| CaptureError::Processing(format!("failed to re-encode image: {e}")))?;

    Ok(general_purpose::STANDARD.encode(&jpeg))
}

fn downscale(img: DynamicImage) -> DynamicImage {
    let (width, height) = img.dimensions();
    if width.max(height) <= MAX_LONG_EDGE {
        return img;
    }
    // `resize` preserves aspect ratio within the given bounds.
    img.resize(MAX_LONG_EDGE, MAX_LONG_EDGE, image::imageops::FilterType::Triangle)
}
