use crate::{
    assets::{
        decode::{SourcePrep, prepare_source},
        encode::encode_png,
    },
    foundation::{
        cancel::CancelToken,
        core::Bitmap,
        error::FootprintResult,
    },
    palette::ramp::ColorRamp,
    pressure::{
        blur::smooth,
        colorize::colorize,
        dilate::dilate,
        normalize::{PressureRange, normalize},
        segment::segment,
    },
    render::settings::PressureSettings,
};

/// How a render resolved. None of these are errors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderOutcome {
    /// Pressures were stretched from `[min, max]` to `[0, 1]`.
    Rendered { min: f32, max: f32 },
    /// Every foot pixel had the same pressure; rescaling was skipped.
    DegenerateRange { value: f32 },
    /// No pixel looked like foot tissue; the map is fully transparent.
    EmptyMask,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub pixels: usize,
    /// Pixels classified as foot before dilation.
    pub foot_pixels: usize,
    /// Pixels visible in the output (after dilation).
    pub mask_pixels: usize,
}

/// A rendered pressure map: RGBA pixels whose alpha is the foot mask.
#[derive(Clone, Debug, PartialEq)]
pub struct PressureMap {
    pub bitmap: Bitmap,
    pub outcome: RenderOutcome,
    pub stats: RenderStats,
}

impl PressureMap {
    pub fn encode_png(&self) -> FootprintResult<Vec<u8>> {
        encode_png(&self.bitmap)
    }
}

/// Pressure maps for both feet of one scan.
#[derive(Clone, Debug, PartialEq)]
pub struct FootPair {
    pub left: PressureMap,
    pub right: PressureMap,
}

/// Run segmentation, dilation, smoothing, normalization and colorization on `bitmap`.
///
/// The source bitmap is consumed; its buffer becomes the output.
#[tracing::instrument(
    skip(bitmap, settings, cancel),
    fields(width = bitmap.width(), height = bitmap.height())
)]
pub fn render_pressure_map(
    bitmap: Bitmap,
    settings: &PressureSettings,
    cancel: &CancelToken,
) -> FootprintResult<PressureMap> {
    settings.validate()?;
    let pixels = bitmap.dims().len();

    let seg = segment(&bitmap, settings, cancel)?;
    let foot_pixels = seg.mask.count();
    if foot_pixels == 0 {
        tracing::debug!("no foot pixels found, returning a transparent map");
        return Ok(PressureMap {
            bitmap: hide_all(bitmap),
            outcome: RenderOutcome::EmptyMask,
            stats: RenderStats {
                pixels,
                foot_pixels: 0,
                mask_pixels: 0,
            },
        });
    }

    let mask = dilate(&seg.mask, settings.dilation_radius, cancel)?;
    let mask_pixels = mask.count();
    tracing::debug!(foot_pixels, mask_pixels, "foot mask ready");

    let smoothed = smooth(
        seg.pressure,
        &mask,
        settings.blur_sigma,
        settings.blur_passes,
        cancel,
    )?;
    let (field, range) = normalize(smoothed, &mask, settings.contrast_exponent, cancel)?;
    let outcome = match range {
        PressureRange::Spread { min, max } => RenderOutcome::Rendered { min, max },
        PressureRange::Flat(value) => RenderOutcome::DegenerateRange { value },
        PressureRange::Empty => RenderOutcome::DegenerateRange { value: 0.0 },
    };
    tracing::debug!(?outcome, "pressure normalized");

    let bitmap = colorize(bitmap, &field, &mask, &ColorRamp::pressure(), cancel)?;
    Ok(PressureMap {
        bitmap,
        outcome,
        stats: RenderStats {
            pixels,
            foot_pixels,
            mask_pixels,
        },
    })
}

/// Render `bitmap` and encode the result as PNG.
pub fn render_pressure_map_png(
    bitmap: Bitmap,
    settings: &PressureSettings,
) -> FootprintResult<Vec<u8>> {
    render_pressure_map(bitmap, settings, &CancelToken::new())?.encode_png()
}

/// Decode an uploaded photograph, condition it and render its pressure map.
pub fn render_upload(
    bytes: &[u8],
    prep: &SourcePrep,
    settings: &PressureSettings,
    cancel: &CancelToken,
) -> FootprintResult<PressureMap> {
    let bitmap = prepare_source(bytes, prep)?;
    render_pressure_map(bitmap, settings, cancel)
}

/// Render both feet concurrently. Returns once both are done; a left-foot error is
/// reported before a right-foot one.
#[tracing::instrument(skip_all)]
pub fn render_foot_pair(
    left: Bitmap,
    right: Bitmap,
    settings: &PressureSettings,
    cancel: &CancelToken,
) -> FootprintResult<FootPair> {
    let (left, right) = rayon::join(
        || render_pressure_map(left, settings, cancel),
        || render_pressure_map(right, settings, cancel),
    );
    Ok(FootPair {
        left: left?,
        right: right?,
    })
}

fn hide_all(mut bitmap: Bitmap) -> Bitmap {
    for px in bitmap.as_raw_mut().chunks_exact_mut(4) {
        px[3] = 0;
    }
    bitmap
}
