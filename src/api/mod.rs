mod engine;
mod engine_config;
mod projection;
mod snapshot;

pub use engine::TimelineEngine;
pub use engine_config::TimelineEngineConfig;
pub use projection::{
    EventMarker, EventMarkers, IMAGE_ZOOM_THRESHOLD_PX_PER_MS, project_history_events,
};
pub use snapshot::EngineSnapshot;
