use crate::{
    foundation::{
        cancel::CancelToken,
        core::{Bitmap, FootMask, PressureField},
        error::FootprintResult,
    },
    render::settings::PressureSettings,
};

/// Output of [`segment`]: the raw foot silhouette and its per-pixel pressure.
#[derive(Clone, Debug, PartialEq)]
pub struct Segmentation {
    pub mask: FootMask,
    pub pressure: PressureField,
}

/// Perceptual grayscale (ITU-R BT.601 weights).
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}

/// Logistic pressure estimate for a pixel of the given luma.
pub fn pressure_from_luma(luma: f64, steepness: f64, midpoint: f64) -> f64 {
    let inverted = 1.0 - luma / 255.0;
    1.0 / (1.0 + (-steepness * (inverted - midpoint)).exp())
}

/// Classify every pixel as foot or background and estimate foot pressure.
///
/// A pixel is foot tissue when it is darker than `luma_threshold` or more transparent than
/// `alpha_threshold`. Background pixels keep pressure 0.
pub fn segment(
    bitmap: &Bitmap,
    settings: &PressureSettings,
    cancel: &CancelToken,
) -> FootprintResult<Segmentation> {
    let dims = bitmap.dims();
    let mut mask = FootMask::empty(dims);
    let mut pressure = PressureField::zeros(dims);
    let width = dims.width as usize;
    let row_len = width * 4;

    for (y, row) in bitmap.as_raw().chunks_exact(row_len).enumerate() {
        cancel.check()?;
        let base = y * width;
        for (x, px) in row.chunks_exact(4).enumerate() {
            let gray = luma(px[0], px[1], px[2]);
            if gray < settings.luma_threshold || px[3] < settings.alpha_threshold {
                mask.cells_mut()[base + x] = true;
                pressure.values_mut()[base + x] = pressure_from_luma(
                    gray,
                    settings.sigmoid_steepness,
                    settings.sigmoid_midpoint,
                ) as f32;
            }
        }
    }

    Ok(Segmentation { mask, pressure })
}

#[cfg(test)]
#[path = "../../tests/unit/pressure/segment.rs"]
mod tests;
