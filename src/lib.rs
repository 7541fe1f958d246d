//! Footprint turns a photographed foot scan into a false-color pressure map.
//!
//! # Pipeline overview
//!
//! 1. **Segment**: luma/alpha thresholds split foot from background; darker pixels get a
//!    higher logistic pressure estimate.
//! 2. **Dilate**: the foot mask grows by a fixed Chebyshev radius to close gaps.
//! 3. **Smooth**: repeated mask-aware Gaussian passes; background never leaks into the
//!    silhouette edge.
//! 4. **Normalize**: pressures are stretched to `[0, 1]` and contrast-curved.
//! 5. **Colorize**: pressures map through a color ramp; the mask becomes the alpha channel.
//!
//! Every stage is a synchronous function that owns its output. Renders share no state, so
//! the left and right foot can run concurrently ([`render_foot_pair`]).
#![forbid(unsafe_code)]

mod assets;
mod foundation;
mod palette;
mod pressure;
mod render;

pub use assets::decode::{SourcePrep, decode_bitmap, fit_within, prepare_bitmap, prepare_source};
pub use assets::encode::{decode_png, encode_png};
pub use foundation::cancel::CancelToken;
pub use foundation::core::{Bitmap, Dims, FootMask, PressureField, Rgb8};
pub use foundation::error::{FootprintError, FootprintResult};
pub use palette::legend::{LEGEND_LABELS, LegendEntry, legend_entries, render_legend_strip};
pub use palette::ramp::{ColorRamp, ColorStop, LEGEND_STOPS, PRESSURE_STOPS, color_for_pressure};
pub use pressure::blur::{GaussianKernel, MAX_BLUR_SIGMA, blur_pass, smooth};
pub use pressure::colorize::colorize;
pub use pressure::dilate::dilate;
pub use pressure::normalize::{PressureRange, normalize, pressure_range};
pub use pressure::segment::{Segmentation, luma, pressure_from_luma, segment};
pub use render::pipeline::{
    FootPair, PressureMap, RenderOutcome, RenderStats, render_foot_pair, render_pressure_map,
    render_pressure_map_png, render_upload,
};
pub use render::settings::PressureSettings;
