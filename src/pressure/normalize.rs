use crate::foundation::{
    cancel::CancelToken,
    core::{FootMask, PressureField},
    error::FootprintResult,
};

/// Pressure range observed over positive mask pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PressureRange {
    /// No mask pixel carries positive pressure.
    Empty,
    /// Every positive mask pixel has the same pressure.
    Flat(f32),
    Spread { min: f32, max: f32 },
}

/// Scan mask pixels with pressure > 0 for their min and max.
pub fn pressure_range(field: &PressureField, mask: &FootMask) -> PressureRange {
    let mut bounds: Option<(f32, f32)> = None;
    for (&v, &inside) in field.values().iter().zip(mask.cells()) {
        if !inside || v <= 0.0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    match bounds {
        None => PressureRange::Empty,
        Some((min, max)) if max > min => PressureRange::Spread { min, max },
        Some((min, _)) => PressureRange::Flat(min),
    }
}

/// Stretch mask pressures to [0, 1] and apply the power-law contrast curve.
///
/// Only a [`PressureRange::Spread`] is rescaled; a flat or empty range leaves the field as
/// the blur produced it.
pub fn normalize(
    field: PressureField,
    mask: &FootMask,
    exponent: f64,
    cancel: &CancelToken,
) -> FootprintResult<(PressureField, PressureRange)> {
    field.dims().ensure_matches(mask.dims(), "foot mask")?;

    let range = pressure_range(&field, mask);
    let PressureRange::Spread { min, max } = range else {
        return Ok((field, range));
    };

    let min = f64::from(min);
    let span = f64::from(max) - min;
    let width = field.dims().width as usize;
    let mut field = field;
    for (values, cells) in field
        .values_mut()
        .chunks_exact_mut(width)
        .zip(mask.cells().chunks_exact(width))
    {
        cancel.check()?;
        for (v, &inside) in values.iter_mut().zip(cells) {
            if inside {
                let rescaled = ((f64::from(*v) - min) / span).clamp(0.0, 1.0);
                *v = rescaled.powf(exponent) as f32;
            }
        }
    }

    Ok((field, range))
}

#[cfg(test)]
#[path = "../../tests/unit/pressure/normalize.rs"]
mod tests;
