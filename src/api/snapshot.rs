use serde::{Deserialize, Serialize};

use crate::core::{DataSpan, ViewState};
use crate::error::{TimelineError, TimelineResult};

use super::TimelineEngine;

/// Deterministic dump of engine state for host debugging and regression
/// fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport_width: u32,
    pub view: ViewState,
    pub data_span: DataSpan,
    pub initialized: bool,
}

impl TimelineEngine {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport_width: self.viewport().width,
            view: self.view_state(),
            data_span: self.data_span(),
            initialized: self.is_initialized(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn snapshot_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
