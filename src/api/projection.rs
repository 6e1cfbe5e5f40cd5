use smallvec::SmallVec;

use crate::core::{History, ViewTransform};

/// Zoom level above which a marker with an attached image reveals it inline.
pub const IMAGE_ZOOM_THRESHOLD_PX_PER_MS: f64 = 5e-9;

/// Pixel placement for one visible event marker inside a history band.
#[derive(Debug, Clone, PartialEq)]
pub struct EventMarker {
    pub event_id: String,
    pub instant_ms: i64,
    pub pixel_x: f64,
    pub show_image: bool,
}

/// Visible markers for one band; most views show only a handful at a time.
pub type EventMarkers = SmallVec<[EventMarker; 8]>;

/// Projects a history's events onto the current view.
///
/// Events outside the visible window are skipped entirely; the presentation
/// layer never sees them. Rendering, tooltips, and styling stay external.
#[must_use]
pub fn project_history_events(history: &History, transform: &ViewTransform) -> EventMarkers {
    let (start_ms, end_ms) = transform.visible_range();
    let reveal_images = transform.zoom() > IMAGE_ZOOM_THRESHOLD_PX_PER_MS;

    history
        .events
        .iter()
        .filter(|event| {
            let instant = event.instant_ms as f64;
            instant >= start_ms && instant <= end_ms
        })
        .map(|event| EventMarker {
            event_id: event.id.clone(),
            instant_ms: event.instant_ms,
            pixel_x: transform.date_to_pixel(event.instant_ms as f64),
            show_image: reveal_images && event.image_ref.is_some(),
        })
        .collect()
}
