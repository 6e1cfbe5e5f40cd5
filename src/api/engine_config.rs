use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Tuning controls for gesture handling and the initial fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    /// Multiplicative zoom step applied per discrete wheel tick.
    pub zoom_step_factor: f64,
    /// Maximum useful resolution in pixels per millisecond.
    pub max_zoom: f64,
    /// Fraction of the viewport width the fitted data span occupies.
    pub fit_padding_ratio: f64,
    /// Minimum zoom substituted while the viewport width is still unknown.
    pub fallback_min_zoom: f64,
}

impl Default for TimelineEngineConfig {
    fn default() -> Self {
        Self {
            zoom_step_factor: 1.1,
            max_zoom: 10.0,
            fit_padding_ratio: 0.95,
            fallback_min_zoom: 1e-7,
        }
    }
}

impl TimelineEngineConfig {
    pub(crate) fn validate(self) -> TimelineResult<Self> {
        if !self.zoom_step_factor.is_finite() || self.zoom_step_factor <= 1.0 {
            return Err(TimelineError::InvalidData(
                "zoom step factor must be finite and > 1".to_owned(),
            ));
        }

        if !self.max_zoom.is_finite() || self.max_zoom <= 0.0 {
            return Err(TimelineError::InvalidData(
                "max zoom must be finite and > 0".to_owned(),
            ));
        }

        if !self.fit_padding_ratio.is_finite()
            || self.fit_padding_ratio <= 0.0
            || self.fit_padding_ratio > 1.0
        {
            return Err(TimelineError::InvalidData(
                "fit padding ratio must be finite and in (0, 1]".to_owned(),
            ));
        }

        if !self.fallback_min_zoom.is_finite()
            || self.fallback_min_zoom <= 0.0
            || self.fallback_min_zoom > self.max_zoom
        {
            return Err(TimelineError::InvalidData(
                "fallback min zoom must be finite, > 0, and <= max zoom".to_owned(),
            ));
        }

        Ok(self)
    }
}
