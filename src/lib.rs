//! timeline-rs: temporal view-state and adaptive ruler engine.
//!
//! This crate owns the pixel<->instant mapping for a pannable, zoomable
//! timeline surface and derives legible tick marks across view spans from
//! seconds to hundreds of thousands of years. It renders nothing itself;
//! hosts feed it layout and gesture input and read back projected output.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
