use std::f64::consts::PI;

use crate::foundation::{
    cancel::CancelToken,
    core::{FootMask, PressureField},
    error::{FootprintError, FootprintResult},
};

/// Largest sigma a kernel may be built with (radius 96, 193x193 taps).
pub const MAX_BLUR_SIGMA: f64 = 32.0;

/// Square 2D Gaussian kernel, normalized to sum to 1.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    radius: u32,
    weights: Vec<f64>,
}

impl GaussianKernel {
    /// Kernel with radius `ceil(3 * sigma)`. `sigma` must lie in `(0, MAX_BLUR_SIGMA]`.
    pub fn new(sigma: f64) -> FootprintResult<Self> {
        if !sigma.is_finite() || sigma <= 0.0 || sigma > MAX_BLUR_SIGMA {
            return Err(FootprintError::validation(format!(
                "blur sigma must be finite and within (0, {MAX_BLUR_SIGMA}], got {sigma}"
            )));
        }

        let radius = (sigma * 3.0).ceil() as u32;
        let r = radius as i64;
        let size = (2 * radius + 1) as usize;
        let mut weights = Vec::<f64>::with_capacity(size * size);
        let mut sum = 0.0f64;
        for y in -r..=r {
            for x in -r..=r {
                let (x, y) = (x as f64, y as f64);
                let exponent = -(x * x + y * y) / (2.0 * sigma * sigma);
                let w = exponent.exp() / (2.0 * PI * sigma * sigma);
                weights.push(w);
                sum += w;
            }
        }
        if sum <= 0.0 {
            return Err(FootprintError::validation("gaussian kernel sum is zero"));
        }
        for w in &mut weights {
            *w /= sum;
        }

        Ok(Self { radius, weights })
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn size(&self) -> u32 {
        2 * self.radius + 1
    }

    /// Row-major weights, `size() * size()` entries.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

/// One mask-aware Gaussian pass.
///
/// Only in-bounds mask pixels contribute, and each output is divided by the weight that
/// actually contributed, so the silhouette edge is not pulled towards the background.
/// Pixels outside the mask are 0 in the output.
pub fn blur_pass(
    field: &PressureField,
    mask: &FootMask,
    kernel: &GaussianKernel,
    cancel: &CancelToken,
) -> FootprintResult<PressureField> {
    let dims = field.dims();
    dims.ensure_matches(mask.dims(), "foot mask")?;

    let (w, h) = (dims.width as i64, dims.height as i64);
    let r = kernel.radius as i64;
    let values = field.values();
    let cells = mask.cells();
    let mut out = PressureField::zeros(dims);
    let dst = out.values_mut();

    for y in 0..h {
        cancel.check()?;
        for x in 0..w {
            let idx = (y * w + x) as usize;
            if !cells[idx] {
                continue;
            }

            let mut weighted_sum = 0.0f64;
            let mut weight_sum = 0.0f64;
            let mut k = 0usize;
            for ky in -r..=r {
                let ny = y + ky;
                for kx in -r..=r {
                    let nx = x + kx;
                    if nx >= 0 && ny >= 0 && nx < w && ny < h {
                        let n_idx = (ny * w + nx) as usize;
                        if cells[n_idx] {
                            let kw = kernel.weights[k];
                            weighted_sum += f64::from(values[n_idx]) * kw;
                            weight_sum += kw;
                        }
                    }
                    k += 1;
                }
            }

            dst[idx] = if weight_sum > 0.0 {
                (weighted_sum / weight_sum) as f32
            } else {
                0.0
            };
        }
    }

    Ok(out)
}

/// Run `passes` full blur passes, each consuming the previous output.
pub fn smooth(
    field: PressureField,
    mask: &FootMask,
    sigma: f64,
    passes: u32,
    cancel: &CancelToken,
) -> FootprintResult<PressureField> {
    let kernel = GaussianKernel::new(sigma)?;
    let mut current = field;
    for pass in 0..passes {
        current = blur_pass(&current, mask, &kernel, cancel)?;
        tracing::trace!(pass, "blur pass done");
    }
    Ok(current)
}

#[cfg(test)]
#[path = "../../tests/unit/pressure/blur.rs"]
mod tests;
