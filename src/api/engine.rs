use tracing::{debug, trace};

use crate::core::{DataSpan, History, RulerFrame, ViewState, ViewTransform, Viewport, fit_zoom, ruler};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::{DragAnchor, GestureEvent, InteractionMode};

use super::TimelineEngineConfig;

/// Zoom in effect before the first layout-driven fit, matching a surface
/// that has not been measured yet. Any positive value works; the one-shot
/// initialization replaces it as soon as the width is known.
const PRE_LAYOUT_ZOOM_PX_PER_MS: f64 = 1e-10;

/// Owns the timeline view state and reduces gesture messages over it.
///
/// All mutation happens synchronously inside `apply_gesture`, `resize`, or
/// the data setters; readers only ever see copied [`ViewTransform`] and
/// [`RulerFrame`] snapshots, so no locking discipline is needed around them.
#[derive(Debug)]
pub struct TimelineEngine {
    config: TimelineEngineConfig,
    viewport: Viewport,
    span: DataSpan,
    view: ViewState,
    drag: Option<DragAnchor>,
    initialized: bool,
}

impl TimelineEngine {
    pub fn new(config: TimelineEngineConfig) -> TimelineResult<Self> {
        let config = config.validate()?;
        let span = DataSpan::around_now();
        let view = ViewState {
            center_ms: span.midpoint_ms(),
            zoom: PRE_LAYOUT_ZOOM_PX_PER_MS,
        };

        Ok(Self {
            config,
            viewport: Viewport::new(0),
            span,
            view,
            drag: None,
            initialized: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> TimelineEngineConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn data_span(&self) -> DataSpan {
        self.span
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        if self.drag.is_some() {
            InteractionMode::Panning
        } else {
            InteractionMode::Idle
        }
    }

    /// Replaces the data span from the full set of histories.
    ///
    /// Does not recenter an already-initialized view; only the zoom-out
    /// bound follows the new span.
    pub fn set_histories(&mut self, histories: &[History]) {
        self.set_data_span(DataSpan::from_histories(histories));
    }

    pub fn set_data_span(&mut self, span: DataSpan) {
        debug!(min_ms = span.min_ms(), max_ms = span.max_ms(), "set data span");
        self.span = span;
        self.maybe_initialize();
    }

    /// Records the observed viewport width (on mount and on every resize).
    ///
    /// Width changes never recenter or re-fit an initialized view; fighting
    /// the user's manual pan/zoom on resize is worse than a stale framing.
    pub fn resize(&mut self, width: u32) {
        trace!(width, "viewport resize");
        self.viewport = Viewport::new(width);
        self.maybe_initialize();
    }

    /// One-shot fit: the first time the width and a usable span are both
    /// known, frame the whole padded span and center on its midpoint.
    fn maybe_initialize(&mut self) {
        if self.initialized {
            return;
        }

        let Some(zoom) = fit_zoom(
            self.span.duration_ms(),
            self.viewport,
            self.config.fit_padding_ratio,
        ) else {
            return;
        };

        self.view = ViewState {
            center_ms: self.span.midpoint_ms(),
            zoom,
        };
        self.initialized = true;
        debug!(zoom, center_ms = self.view.center_ms, "initial fit");
    }

    /// Current pixel<->instant mapping as an immutable snapshot.
    pub fn transform(&self) -> TimelineResult<ViewTransform> {
        ViewTransform::new(self.view, self.viewport)
    }

    pub fn map_instant_to_pixel(&self, instant_ms: f64) -> TimelineResult<f64> {
        if !instant_ms.is_finite() {
            return Err(TimelineError::InvalidData(
                "instant must be finite".to_owned(),
            ));
        }
        Ok(self.transform()?.date_to_pixel(instant_ms))
    }

    pub fn map_pixel_to_instant(&self, pixel_x: f64) -> TimelineResult<f64> {
        if !pixel_x.is_finite() {
            return Err(TimelineError::InvalidData(
                "pixel must be finite".to_owned(),
            ));
        }
        Ok(self.transform()?.pixel_to_date(pixel_x))
    }

    /// Visible time window `[pixel_to_date(0), pixel_to_date(width)]`.
    pub fn visible_range(&self) -> TimelineResult<(f64, f64)> {
        Ok(self.transform()?.visible_range())
    }

    /// Rebuilds the adaptive ruler for the current view from scratch.
    pub fn ruler_frame(&self) -> TimelineResult<RulerFrame> {
        Ok(ruler::build_frame(&self.transform()?))
    }

    /// Reduces one gesture message into a whole-value view-state replacement.
    pub fn apply_gesture(&mut self, event: GestureEvent) -> TimelineResult<()> {
        match event {
            GestureEvent::PanStart { pixel_x } => self.pan_start(pixel_x),
            GestureEvent::PanMove { pixel_x } => self.pan_move(pixel_x),
            GestureEvent::PanEnd => {
                self.drag = None;
                trace!("pan end");
                Ok(())
            }
            GestureEvent::ZoomAt { pixel_x, delta } => self.zoom_at(pixel_x, delta),
        }
    }

    fn pan_start(&mut self, pixel_x: f64) -> TimelineResult<()> {
        if !pixel_x.is_finite() {
            return Err(TimelineError::InvalidData(
                "pan start pixel must be finite".to_owned(),
            ));
        }

        self.drag = Some(DragAnchor {
            pixel_x,
            center_ms: self.view.center_ms,
        });
        trace!(pixel_x, "pan start");
        Ok(())
    }

    fn pan_move(&mut self, pixel_x: f64) -> TimelineResult<()> {
        if !pixel_x.is_finite() {
            return Err(TimelineError::InvalidData(
                "pan move pixel must be finite".to_owned(),
            ));
        }

        // A move without an active drag is a stray event, not an error.
        let Some(anchor) = self.drag else {
            return Ok(());
        };

        let delta_ms = (pixel_x - anchor.pixel_x) / self.view.zoom;
        self.view = ViewState {
            center_ms: anchor.center_ms - delta_ms,
            zoom: self.view.zoom,
        };
        Ok(())
    }

    fn zoom_at(&mut self, pixel_x: f64, delta: f64) -> TimelineResult<()> {
        if !pixel_x.is_finite() || !delta.is_finite() {
            return Err(TimelineError::InvalidData(
                "zoom pointer and delta must be finite".to_owned(),
            ));
        }

        let factor = if delta < 0.0 {
            self.config.zoom_step_factor
        } else {
            1.0 / self.config.zoom_step_factor
        };
        let min_zoom = self.min_zoom().min(self.config.max_zoom);
        let new_zoom = (self.view.zoom * factor).clamp(min_zoom, self.config.max_zoom);

        // The instant under the pointer must stay under the pointer: resolve
        // the anchor under the old state, then solve for the center that
        // projects it back to the same pixel under the new zoom.
        let transform = self.transform()?;
        let anchor_ms = transform.pixel_to_date(pixel_x);
        let center_ms = anchor_ms - (pixel_x - transform.width_px() / 2.0) / new_zoom;

        self.view = ViewState {
            center_ms,
            zoom: new_zoom,
        };
        debug!(zoom = new_zoom, center_ms, "zoom step");
        Ok(())
    }

    /// Zoom floor: the level at which the padded data span exactly fits the
    /// viewport. Falls back to a safe positive constant while the width is
    /// unknown rather than dividing by zero.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        fit_zoom(
            self.span.duration_ms(),
            self.viewport,
            self.config.fit_padding_ratio,
        )
        .unwrap_or(self.config.fallback_min_zoom)
    }
}
