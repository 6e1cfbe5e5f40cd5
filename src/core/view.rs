use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::error::{TimelineError, TimelineResult};

/// View state of the timeline: the instant projected to the viewport center
/// and the zoom factor in pixels per millisecond.
///
/// Invariant: `zoom` is finite and strictly positive, `center_ms` is finite.
/// The center is kept as `f64` so gesture math stays exact to sub-millisecond
/// precision; event instants in the data model remain integer milliseconds.
/// Gestures replace the whole value rather than updating fields in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub center_ms: f64,
    pub zoom: f64,
}

impl ViewState {
    pub fn validated(self) -> TimelineResult<Self> {
        if !self.center_ms.is_finite() {
            return Err(TimelineError::InvalidData(
                "view center must be finite".to_owned(),
            ));
        }
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(TimelineError::InvalidData(
                "zoom must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Immutable snapshot of the pixel<->instant mapping.
///
/// `date_to_pixel` and `pixel_to_date` are exact inverses; readers (ruler,
/// presentation) consume copies of this value and never touch view state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    center_ms: f64,
    zoom: f64,
    width_px: f64,
}

impl ViewTransform {
    /// Builds a transform from validated view state and the current viewport.
    ///
    /// A zero-width viewport is accepted: the mapping is still well defined,
    /// it just describes a surface that has not been laid out yet.
    pub fn new(view: ViewState, viewport: Viewport) -> TimelineResult<Self> {
        let view = view.validated()?;
        Ok(Self {
            center_ms: view.center_ms,
            zoom: view.zoom,
            width_px: viewport.width_px(),
        })
    }

    #[must_use]
    pub fn center_ms(self) -> f64 {
        self.center_ms
    }

    #[must_use]
    pub fn zoom(self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        self.width_px
    }

    #[must_use]
    pub fn date_to_pixel(self, instant_ms: f64) -> f64 {
        self.width_px / 2.0 + (instant_ms - self.center_ms) * self.zoom
    }

    #[must_use]
    pub fn pixel_to_date(self, pixel_x: f64) -> f64 {
        self.center_ms + (pixel_x - self.width_px / 2.0) / self.zoom
    }

    /// Visible time window `[pixel_to_date(0), pixel_to_date(width)]`.
    #[must_use]
    pub fn visible_range(self) -> (f64, f64) {
        (self.pixel_to_date(0.0), self.pixel_to_date(self.width_px))
    }

    #[must_use]
    pub fn view_duration_ms(self) -> f64 {
        let (start_ms, end_ms) = self.visible_range();
        end_ms - start_ms
    }
}

/// Zoom at which the padded data span exactly fills the viewport width.
///
/// This doubles as the minimum allowed zoom: zooming out further would shrink
/// the whole timeline to less than the viewport. Returns `None` when the
/// width is zero or the span duration is not positive, so callers substitute
/// their fallback instead of dividing by zero.
#[must_use]
pub fn fit_zoom(span_duration_ms: f64, viewport: Viewport, fit_padding_ratio: f64) -> Option<f64> {
    if !viewport.is_valid() {
        return None;
    }
    if !span_duration_ms.is_finite() || span_duration_ms <= 0.0 {
        return None;
    }

    Some(viewport.width_px() * fit_padding_ratio / span_duration_ms)
}
