use crate::{
    foundation::{
        core::{Bitmap, Rgb8},
        error::{FootprintError, FootprintResult},
    },
    palette::ramp::LEGEND_STOPS,
};

/// Labels printed under the legend swatches, lowest pressure first.
pub const LEGEND_LABELS: [&str; 5] = ["Low", "Low-Medium", "Medium", "Medium-High", "High"];

/// One legend swatch.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub value: f64,
    pub color: Rgb8,
}

pub fn legend_entries() -> Vec<LegendEntry> {
    LEGEND_LABELS
        .iter()
        .zip(LEGEND_STOPS.iter())
        .map(|(&label, stop)| LegendEntry {
            label,
            value: stop.value,
            color: stop.color,
        })
        .collect()
}

/// Render the legend as a horizontal strip of flat, equally wide swatches.
///
/// Segment `i` covers columns `[i * width / n, (i + 1) * width / n)`, so every column is
/// filled even when `width` is not a multiple of the swatch count.
pub fn render_legend_strip(width: u32, height: u32) -> FootprintResult<Bitmap> {
    let entries = legend_entries();
    let n = entries.len() as u32;
    if width < n {
        return Err(FootprintError::validation(format!(
            "legend strip must be at least {n} px wide"
        )));
    }

    let mut strip = Bitmap::filled(width, height, [0, 0, 0, 0])?;
    let row_len = width as usize * 4;
    let rgba = strip.as_raw_mut();
    for x in 0..width {
        let segment = ((u64::from(x) * u64::from(n)) / u64::from(width)) as usize;
        let px = entries[segment].color.to_rgba(255);
        for row in rgba.chunks_exact_mut(row_len) {
            let idx = x as usize * 4;
            row[idx..idx + 4].copy_from_slice(&px);
        }
    }
    Ok(strip)
}
