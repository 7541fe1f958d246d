use crate::{
    foundation::{
        cancel::CancelToken,
        core::{Bitmap, FootMask, PressureField},
        error::FootprintResult,
    },
    palette::ramp::ColorRamp,
};

/// Paint foot pixels with their ramp color and hide everything else.
///
/// Consumes the source bitmap and reuses its buffer. Pixels outside the mask keep their RGB
/// and get alpha 0; mask pixels get the ramp color at full opacity.
pub fn colorize(
    bitmap: Bitmap,
    field: &PressureField,
    mask: &FootMask,
    ramp: &ColorRamp,
    cancel: &CancelToken,
) -> FootprintResult<Bitmap> {
    let dims = bitmap.dims();
    dims.ensure_matches(field.dims(), "pressure field")?;
    dims.ensure_matches(mask.dims(), "foot mask")?;

    let width = dims.width as usize;
    let mut bitmap = bitmap;
    let rows = bitmap.as_raw_mut().chunks_exact_mut(width * 4);
    for ((row, values), cells) in rows
        .zip(field.values().chunks_exact(width))
        .zip(mask.cells().chunks_exact(width))
    {
        cancel.check()?;
        for ((px, &v), &inside) in row.chunks_exact_mut(4).zip(values).zip(cells) {
            if !inside {
                px[3] = 0;
                continue;
            }
            px.copy_from_slice(&ramp.color_at(f64::from(v)).to_rgba(255));
        }
    }
    Ok(bitmap)
}
