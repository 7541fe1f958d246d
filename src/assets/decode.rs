use image::{RgbaImage, imageops::FilterType};

use crate::foundation::{
    core::Bitmap,
    error::{FootprintError, FootprintResult},
};

/// How an uploaded photograph is conditioned before it reaches the pipeline.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourcePrep {
    /// Longest allowed side in pixels; larger images are scaled down.
    pub max_dimension: u32,
    /// Re-encode through JPEG at this quality (1..=100) before processing. `None` skips it.
    pub jpeg_quality: Option<u8>,
}

impl Default for SourcePrep {
    fn default() -> Self {
        Self {
            max_dimension: 1000,
            jpeg_quality: Some(70),
        }
    }
}

impl SourcePrep {
    pub fn validate(&self) -> FootprintResult<()> {
        if self.max_dimension == 0 {
            return Err(FootprintError::validation("max_dimension must be > 0"));
        }
        if let Some(q) = self.jpeg_quality
            && !(1..=100).contains(&q)
        {
            return Err(FootprintError::validation(
                "jpeg_quality must be within 1..=100",
            ));
        }
        Ok(())
    }
}

/// Decode any image format supported by `image` into a straight-alpha RGBA bitmap.
pub fn decode_bitmap(bytes: &[u8]) -> FootprintResult<Bitmap> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| FootprintError::input_unavailable(format!("decode image from memory: {e}")))?;
    bitmap_from_rgba(dyn_img.to_rgba8())
}

/// Dimensions after bounding the longer side to `max_dimension`.
///
/// Aspect ratio is kept; the scaled side is truncated and never drops below 1.
pub fn fit_within(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    if width <= max_dimension && height <= max_dimension {
        return (width, height);
    }
    let max = f64::from(max_dimension);
    if width > height {
        let h = (f64::from(height) / f64::from(width) * max).floor() as u32;
        (max_dimension, h.max(1))
    } else {
        let w = (f64::from(width) / f64::from(height) * max).floor() as u32;
        (w.max(1), max_dimension)
    }
}

/// Decode an upload and condition it per `prep`.
pub fn prepare_source(bytes: &[u8], prep: &SourcePrep) -> FootprintResult<Bitmap> {
    let bitmap = decode_bitmap(bytes)?;
    prepare_bitmap(bitmap, prep)
}

/// Downscale and optionally JPEG-requantize an already decoded bitmap.
pub fn prepare_bitmap(bitmap: Bitmap, prep: &SourcePrep) -> FootprintResult<Bitmap> {
    prep.validate()?;

    let (width, height) = (bitmap.width(), bitmap.height());
    let (fit_w, fit_h) = fit_within(width, height, prep.max_dimension);
    let mut img = RgbaImage::from_raw(width, height, bitmap.into_raw())
        .ok_or_else(|| FootprintError::validation("bitmap buffer does not match its size"))?;
    if (fit_w, fit_h) != (width, height) {
        tracing::debug!(width, height, fit_w, fit_h, "downscaling source image");
        img = image::imageops::resize(&img, fit_w, fit_h, FilterType::Triangle);
    }

    if let Some(quality) = prep.jpeg_quality {
        img = requantize_jpeg(&img, quality)?;
    }
    bitmap_from_rgba(img)
}

/// Round-trip through a lossy JPEG. Transparency is flattened over black first.
fn requantize_jpeg(img: &RgbaImage, quality: u8) -> FootprintResult<RgbaImage> {
    let (width, height) = img.dimensions();
    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for px in img.as_raw().chunks_exact(4) {
        let a = u16::from(px[3]);
        for &c in &px[..3] {
            rgb.push(((u16::from(c) * a + 127) / 255) as u8);
        }
    }

    let mut jpeg = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, quality)
        .encode(&rgb, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| FootprintError::encode(format!("encode jpeg: {e}")))?;

    let decoded = image::load_from_memory_with_format(&jpeg, image::ImageFormat::Jpeg)
        .map_err(|e| FootprintError::input_unavailable(format!("decode requantized jpeg: {e}")))?;
    Ok(decoded.to_rgba8())
}

fn bitmap_from_rgba(img: RgbaImage) -> FootprintResult<Bitmap> {
    let (width, height) = img.dimensions();
    Bitmap::new(width, height, img.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
