use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

/// Gesture stream consumed by the engine's state reducer.
///
/// Hosts translate raw pointer/wheel input into these messages, which keeps
/// the pan/zoom logic free of platform event types and unit-testable without
/// simulating pointer devices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    PanStart { pixel_x: f64 },
    PanMove { pixel_x: f64 },
    PanEnd,
    /// One discrete wheel step at `pixel_x`.
    /// Negative `delta` zooms in, positive zooms out.
    ZoomAt { pixel_x: f64, delta: f64 },
}

/// Anchor captured at `PanStart`.
///
/// Every `PanMove` is resolved against this original anchor rather than the
/// previous move, so a long drag accumulates no floating-point drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub pixel_x: f64,
    pub center_ms: f64,
}
