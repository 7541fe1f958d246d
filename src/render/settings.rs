use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{FootprintError, FootprintResult},
    pressure::blur::MAX_BLUR_SIGMA,
};

/// Tunables of the pressure-map pipeline.
///
/// `Default` reproduces the calibrated clinic output; every field can be overridden from a
/// JSON settings file. Missing keys keep their default, unknown keys are rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PressureSettings {
    /// Pixels with luma strictly below this are foot tissue.
    pub luma_threshold: f64,
    /// Pixels with alpha strictly below this are foot tissue.
    pub alpha_threshold: u8,
    /// Logistic steepness applied to inverted luma.
    pub sigmoid_steepness: f64,
    /// Logistic midpoint applied to inverted luma.
    pub sigmoid_midpoint: f64,
    /// Chebyshev radius of the mask dilation.
    pub dilation_radius: u32,
    /// Gaussian sigma of each smoothing pass; the kernel radius is `ceil(3 * sigma)`.
    pub blur_sigma: f64,
    /// Number of full smoothing passes.
    pub blur_passes: u32,
    /// Power-law contrast exponent applied after rescaling.
    pub contrast_exponent: f64,
}

impl Default for PressureSettings {
    fn default() -> Self {
        Self {
            luma_threshold: 220.0,
            alpha_threshold: 220,
            sigmoid_steepness: 12.0,
            sigmoid_midpoint: 0.5,
            dilation_radius: 5,
            blur_sigma: 3.0,
            blur_passes: 3,
            contrast_exponent: 0.8,
        }
    }
}

impl PressureSettings {
    pub fn validate(&self) -> FootprintResult<()> {
        if !self.luma_threshold.is_finite() || !(0.0..=256.0).contains(&self.luma_threshold) {
            return Err(FootprintError::validation(
                "luma_threshold must be finite and within [0, 256]",
            ));
        }
        if !self.sigmoid_steepness.is_finite() || self.sigmoid_steepness <= 0.0 {
            return Err(FootprintError::validation(
                "sigmoid_steepness must be finite and > 0",
            ));
        }
        if !self.sigmoid_midpoint.is_finite() || !(0.0..=1.0).contains(&self.sigmoid_midpoint) {
            return Err(FootprintError::validation(
                "sigmoid_midpoint must be within [0, 1]",
            ));
        }
        if self.dilation_radius > 64 {
            return Err(FootprintError::validation("dilation_radius must be <= 64"));
        }
        if !self.blur_sigma.is_finite()
            || self.blur_sigma <= 0.0
            || self.blur_sigma > MAX_BLUR_SIGMA
        {
            return Err(FootprintError::validation(format!(
                "blur_sigma must be finite and within (0, {MAX_BLUR_SIGMA}]"
            )));
        }
        if self.blur_passes > 16 {
            return Err(FootprintError::validation("blur_passes must be <= 16"));
        }
        if !self.contrast_exponent.is_finite() || self.contrast_exponent <= 0.0 {
            return Err(FootprintError::validation(
                "contrast_exponent must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON text.
    pub fn from_json_str(text: &str) -> FootprintResult<Self> {
        let settings: Self = serde_json::from_str(text)
            .map_err(|e| FootprintError::serde(format!("parse pressure settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a JSON settings file.
    pub fn from_path(path: &Path) -> FootprintResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read pressure settings '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
