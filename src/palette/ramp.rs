use crate::foundation::{
    core::Rgb8,
    error::{FootprintError, FootprintResult},
};

/// One anchor of a piecewise-linear color ramp.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorStop {
    pub value: f64,
    pub color: Rgb8,
}

impl ColorStop {
    pub const fn new(value: f64, color: Rgb8) -> Self {
        Self { value, color }
    }
}

const BLUE: Rgb8 = Rgb8::new(0, 0, 255);
const GREEN: Rgb8 = Rgb8::new(6, 158, 6);
const YELLOW: Rgb8 = Rgb8::new(198, 198, 7);
const ORANGE: Rgb8 = Rgb8::new(243, 110, 2);
const RED: Rgb8 = Rgb8::new(255, 0, 0);

/// Stops used to colorize the pressure map. Warm colors start early; everything above 0.7 is red.
pub const PRESSURE_STOPS: [ColorStop; 5] = [
    ColorStop::new(0.0, BLUE),
    ColorStop::new(0.3, GREEN),
    ColorStop::new(0.5, YELLOW),
    ColorStop::new(0.6, ORANGE),
    ColorStop::new(0.7, RED),
];

/// Evenly spaced stops printed in the report legend.
///
/// These intentionally differ from [`PRESSURE_STOPS`]; the legend spans 0..1 while the map
/// saturates at 0.7.
pub const LEGEND_STOPS: [ColorStop; 5] = [
    ColorStop::new(0.0, BLUE),
    ColorStop::new(0.25, GREEN),
    ColorStop::new(0.5, YELLOW),
    ColorStop::new(0.75, ORANGE),
    ColorStop::new(1.0, RED),
];

/// Immutable, strictly increasing color stop table.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRamp {
    stops: Vec<ColorStop>,
}

impl ColorRamp {
    pub fn new(stops: Vec<ColorStop>) -> FootprintResult<Self> {
        if stops.len() < 2 {
            return Err(FootprintError::validation(
                "color ramp needs at least two stops",
            ));
        }
        if stops.iter().any(|s| !s.value.is_finite()) {
            return Err(FootprintError::validation(
                "color stop values must be finite",
            ));
        }
        if stops.windows(2).any(|w| w[1].value <= w[0].value) {
            return Err(FootprintError::validation(
                "color stop values must be strictly increasing",
            ));
        }
        Ok(Self { stops })
    }

    /// The table used for pressure-map pixels.
    pub fn pressure() -> Self {
        Self {
            stops: PRESSURE_STOPS.to_vec(),
        }
    }

    /// The table used for the report legend.
    pub fn legend() -> Self {
        Self {
            stops: LEGEND_STOPS.to_vec(),
        }
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Interpolated color for `value`.
    ///
    /// Values above the last stop take the last color without extrapolation. Values below
    /// the first stop (and NaN) take the first color.
    pub fn color_at(&self, value: f64) -> Rgb8 {
        interpolate(&self.stops, value)
    }
}

/// Color of a pressure-map pixel with pressure `value`.
pub fn color_for_pressure(value: f64) -> Rgb8 {
    interpolate(&PRESSURE_STOPS, value)
}

// `stops` holds at least two strictly increasing entries.
fn interpolate(stops: &[ColorStop], value: f64) -> Rgb8 {
    let first = stops[0];
    let last = stops[stops.len() - 1];
    if value > last.value {
        return last.color;
    }
    if value.is_nan() || value < first.value {
        return first.color;
    }

    let lower_index = stops
        .windows(2)
        .position(|w| value >= w[0].value && value <= w[1].value)
        .unwrap_or(0);
    let lower = stops[lower_index];
    let upper = stops[lower_index + 1];

    let range = upper.value - lower.value;
    let t = if range == 0.0 {
        0.0
    } else {
        (value - lower.value) / range
    };

    Rgb8::new(
        lerp_channel(lower.color.r, upper.color.r, t),
        lerp_channel(lower.color.g, upper.color.g, t),
        lerp_channel(lower.color.b, upper.color.b, t),
    )
}

fn lerp_channel(lo: u8, hi: u8, t: f64) -> u8 {
    let lo = f64::from(lo);
    let hi = f64::from(hi);
    round_half_up(lo + t * (hi - lo)).clamp(0.0, 255.0) as u8
}

fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[cfg(test)]
#[path = "../../tests/unit/palette/ramp.rs"]
mod tests;
