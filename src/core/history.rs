use serde::{Deserialize, Serialize};

use crate::core::primitives::{MS_PER_RULER_YEAR, now_ms};

/// A single dated occurrence inside a history band.
///
/// Instants are signed millisecond timestamps relative to the Unix epoch;
/// negative values represent BCE dates. The engine never validates or mutates
/// event data, it only reads the instants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    pub id: String,
    pub instant_ms: i64,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

/// A named, time-ordered sequence of events displayed as one band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub id: String,
    pub name: String,
    pub color_token: String,
    pub events: Vec<HistoricalEvent>,
}

/// Bounding time interval of all known events, used to derive the zoomed-out
/// limit. Construction always yields a strictly positive duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSpan {
    min_ms: i64,
    max_ms: i64,
}

impl DataSpan {
    /// Creates a span, reordering reversed bounds and padding a zero-duration
    /// interval by one ruler year on each side so the fit formula never sees
    /// a degenerate span.
    #[must_use]
    pub fn new(min_ms: i64, max_ms: i64) -> Self {
        let (min_ms, max_ms) = if min_ms <= max_ms {
            (min_ms, max_ms)
        } else {
            (max_ms, min_ms)
        };

        if min_ms == max_ms {
            return Self {
                min_ms: min_ms.saturating_sub(MS_PER_RULER_YEAR),
                max_ms: max_ms.saturating_add(MS_PER_RULER_YEAR),
            };
        }

        Self { min_ms, max_ms }
    }

    /// Synthetic span of one ruler year on each side of the current instant,
    /// substituted when no events exist.
    #[must_use]
    pub fn around_now() -> Self {
        let now = now_ms();
        Self::new(now - MS_PER_RULER_YEAR, now + MS_PER_RULER_YEAR)
    }

    #[must_use]
    pub fn from_instants<I: IntoIterator<Item = i64>>(instants: I) -> Self {
        let mut bounds: Option<(i64, i64)> = None;
        for instant in instants {
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(instant), max.max(instant)),
                None => (instant, instant),
            });
        }

        match bounds {
            Some((min, max)) => Self::new(min, max),
            None => Self::around_now(),
        }
    }

    /// Flattens every event instant across all histories.
    #[must_use]
    pub fn from_histories(histories: &[History]) -> Self {
        Self::from_instants(
            histories
                .iter()
                .flat_map(|history| history.events.iter().map(|event| event.instant_ms)),
        )
    }

    #[must_use]
    pub fn min_ms(self) -> i64 {
        self.min_ms
    }

    #[must_use]
    pub fn max_ms(self) -> i64 {
        self.max_ms
    }

    #[must_use]
    pub fn duration_ms(self) -> f64 {
        self.max_ms as f64 - self.min_ms as f64
    }

    #[must_use]
    pub fn midpoint_ms(self) -> f64 {
        (self.min_ms as f64 + self.max_ms as f64) / 2.0
    }
}
