//! Image files embedded as data URIs.
//!
//! Uploaded avatars and content images are stored inline in the story record,
//! so they are downscaled and re-encoded as JPEG first.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageOutputFormat};

use crate::error::MediaError;

/// Longest side of an uploaded avatar.
pub const AVATAR_MAX_DIMENSION: u32 = 200;

/// Longest side of an image inserted into story content.
pub const CONTENT_IMAGE_MAX_DIMENSION: u32 = 800;

const JPEG_QUALITY: u8 = 70;

/// Decode `bytes`, shrink so neither side exceeds `max_dimension`, and return
/// a `data:image/jpeg;base64,...` URI. Smaller images are not enlarged.
pub fn encode_image(bytes: &[u8], max_dimension: u32) -> Result<String, MediaError> {
    if max_dimension == 0 {
        return Err(MediaError::InvalidDimension);
    }

    let image = image::load_from_memory(bytes)?;
    let (width, height) = image.dimensions();
    let image = if width > max_dimension || height > max_dimension {
        image.resize(max_dimension, max_dimension, FilterType::Triangle)
    } else {
        image
    };

    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    let mut encoded = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut encoded), ImageOutputFormat::Jpeg(JPEG_QUALITY))?;

    tracing::debug!(
        width,
        height,
        max_dimension,
        bytes = encoded.len(),
        "encoded image"
    );
    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(&encoded)))
}

/// Whether a URL is an inline data URI rather than a remote address.
pub fn is_data_uri(url: &str) -> bool {
    url.starts_with("data:")
}
