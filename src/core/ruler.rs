//! Adaptive ruler: tier selection, tick generation, and tick labels.
//!
//! The ruler is stateless. Every call rebuilds the full tick set from the
//! current transform, so there is no incremental state to invalidate.
//!
//! Tick alignment and the major test operate on raw millisecond timestamps
//! over a flat 365-day year. Calendar tiers (years, months) therefore drift
//! off true calendar boundaries when years have irregular lengths; that is a
//! documented approximation of this ruler, not a bug to fix here.

use crate::core::primitives::{
    MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_RULER_YEAR, civil_year, datetime_from_ms,
};
use crate::core::view::ViewTransform;

/// One tick mark on the ruler. Minor ticks never carry a label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub instant_ms: i64,
    pub pixel_x: f64,
    pub is_major: bool,
    pub label: Option<String>,
}

/// Full ruler output for one frame: ticks in increasing-time order plus the
/// long-form label for the instant at the viewport's horizontal center.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RulerFrame {
    pub ticks: Vec<Tick>,
    pub center_label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickLabelStyle {
    KiloYear,
    Year,
    MonthYear,
    MonthDay,
    HourMinute,
    HourMinuteSecond,
}

/// Tick granularity for one band of visible durations.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RulerTier {
    /// Selected when the visible duration strictly exceeds this threshold.
    min_view_duration_ms: f64,
    major_spacing_ms: i64,
    minor_spacing_ms: i64,
    label_style: TickLabelStyle,
}

/// Granularity table, walked top to bottom; thresholds strictly decrease and
/// the last entry is the catch-all, so exactly one tier applies.
///
/// Every major spacing is an integer multiple of its minor spacing. The month
/// tier uses a 7.5-day minor (instead of a calendar week) to keep that
/// invariant against its 30-day major.
const TIERS: [RulerTier; 9] = [
    RulerTier {
        min_view_duration_ms: (50_000 * MS_PER_RULER_YEAR) as f64,
        major_spacing_ms: 100_000 * MS_PER_RULER_YEAR,
        minor_spacing_ms: 10_000 * MS_PER_RULER_YEAR,
        label_style: TickLabelStyle::KiloYear,
    },
    RulerTier {
        min_view_duration_ms: (5_000 * MS_PER_RULER_YEAR) as f64,
        major_spacing_ms: 10_000 * MS_PER_RULER_YEAR,
        minor_spacing_ms: 1_000 * MS_PER_RULER_YEAR,
        label_style: TickLabelStyle::KiloYear,
    },
    RulerTier {
        min_view_duration_ms: (500 * MS_PER_RULER_YEAR) as f64,
        major_spacing_ms: 1_000 * MS_PER_RULER_YEAR,
        minor_spacing_ms: 100 * MS_PER_RULER_YEAR,
        label_style: TickLabelStyle::Year,
    },
    RulerTier {
        min_view_duration_ms: (50 * MS_PER_RULER_YEAR) as f64,
        major_spacing_ms: 10 * MS_PER_RULER_YEAR,
        minor_spacing_ms: MS_PER_RULER_YEAR,
        label_style: TickLabelStyle::Year,
    },
    RulerTier {
        min_view_duration_ms: (5 * MS_PER_RULER_YEAR) as f64,
        major_spacing_ms: MS_PER_RULER_YEAR,
        minor_spacing_ms: MS_PER_RULER_YEAR / 4,
        label_style: TickLabelStyle::Year,
    },
    RulerTier {
        min_view_duration_ms: (90 * MS_PER_DAY) as f64,
        major_spacing_ms: 30 * MS_PER_DAY,
        minor_spacing_ms: 30 * MS_PER_DAY / 4,
        label_style: TickLabelStyle::MonthYear,
    },
    RulerTier {
        min_view_duration_ms: (7 * MS_PER_DAY) as f64,
        major_spacing_ms: MS_PER_DAY,
        minor_spacing_ms: MS_PER_DAY / 4,
        label_style: TickLabelStyle::MonthDay,
    },
    RulerTier {
        min_view_duration_ms: (12 * MS_PER_HOUR) as f64,
        major_spacing_ms: MS_PER_HOUR,
        minor_spacing_ms: MS_PER_HOUR / 4,
        label_style: TickLabelStyle::HourMinute,
    },
    RulerTier {
        min_view_duration_ms: 0.0,
        major_spacing_ms: 5 * MS_PER_MINUTE,
        minor_spacing_ms: MS_PER_MINUTE,
        label_style: TickLabelStyle::HourMinuteSecond,
    },
];

fn select_tier(view_duration_ms: f64) -> RulerTier {
    TIERS
        .iter()
        .copied()
        .find(|tier| view_duration_ms > tier.min_view_duration_ms)
        .unwrap_or(TIERS[TIERS.len() - 1])
}

/// Builds the tick set and center label for the current transform.
///
/// A zero-width viewport yields an empty frame. Generated ticks start at the
/// first minor-aligned instant at or before the window start and step by the
/// minor spacing; anything landing outside `[0, width]` after projection is
/// discarded to defend against boundary rounding.
#[must_use]
pub fn build_frame(transform: &ViewTransform) -> RulerFrame {
    let width_px = transform.width_px();
    if width_px <= 0.0 {
        return RulerFrame::default();
    }

    let (start_ms, end_ms) = transform.visible_range();
    let tier = select_tier(end_ms - start_ms);

    let minor = tier.minor_spacing_ms;
    let first = (start_ms.floor() as i64).div_euclid(minor) * minor;

    let mut ticks = Vec::new();
    let mut instant_ms = first;
    while (instant_ms as f64) < end_ms {
        let pixel_x = transform.date_to_pixel(instant_ms as f64);
        if pixel_x >= 0.0 && pixel_x <= width_px {
            let is_major = instant_ms % tier.major_spacing_ms == 0;
            ticks.push(Tick {
                instant_ms,
                pixel_x,
                is_major,
                label: is_major.then(|| format_tick_label(tier.label_style, instant_ms)),
            });
        }
        instant_ms += minor;
    }

    let center_ms = transform.pixel_to_date(width_px / 2.0);
    RulerFrame {
        ticks,
        center_label: Some(format_center_label(center_ms.floor() as i64)),
    }
}

fn format_tick_label(style: TickLabelStyle, instant_ms: i64) -> String {
    match style {
        TickLabelStyle::KiloYear => kilo_year_label(instant_ms),
        TickLabelStyle::Year => civil_year(instant_ms).to_string(),
        TickLabelStyle::MonthYear => format_datetime(instant_ms, "%b %Y"),
        TickLabelStyle::MonthDay => format_datetime(instant_ms, "%b %-d"),
        TickLabelStyle::HourMinute => format_datetime(instant_ms, "%H:%M"),
        TickLabelStyle::HourMinuteSecond => format_datetime(instant_ms, "%H:%M:%S"),
    }
}

/// Fixed long-form label for the viewport center, independent of zoom tier.
fn format_center_label(instant_ms: i64) -> String {
    format_datetime(instant_ms, "%B %-d, %Y")
}

fn format_datetime(instant_ms: i64, format: &str) -> String {
    match datetime_from_ms(instant_ms) {
        Some(datetime) => datetime.format(format).to_string(),
        // Out of chrono's range only the year estimate is meaningful.
        None => civil_year(instant_ms).to_string(),
    }
}

/// "200k BCE"-style label for the coarse kilo-year tiers.
///
/// Year 0 rounds to "1 CE": the original formatter conflates astronomical
/// numbering with common-era numbering at the epoch boundary, kept as-is.
fn kilo_year_label(instant_ms: i64) -> String {
    let year = civil_year(instant_ms);
    let kilo_years = (year.abs() as f64 / 1000.0).round() as i64;
    if kilo_years == 0 {
        return "1 CE".to_owned();
    }

    if year < 0 {
        format!("{kilo_years}k BCE")
    } else {
        format!("{kilo_years}k CE")
    }
}
