use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

use crate::foundation::{
    core::Bitmap,
    error::{FootprintError, FootprintResult},
};

/// Encode a bitmap as an RGBA8 PNG. Lossless, so the transparency mask survives exactly.
pub fn encode_png(bitmap: &Bitmap) -> FootprintResult<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(
            bitmap.as_raw(),
            bitmap.width(),
            bitmap.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| FootprintError::encode(format!("encode png: {e}")))?;
    Ok(buf)
}

/// Decode PNG bytes back into an RGBA bitmap.
pub fn decode_png(bytes: &[u8]) -> FootprintResult<Bitmap> {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map_err(|e| FootprintError::input_unavailable(format!("decode png: {e}")))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Bitmap::new(width, height, img.into_raw())
}
