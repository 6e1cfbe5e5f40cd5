use chrono::{DateTime, Datelike, TimeZone, Utc};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Flat 365-day year used for ruler spacing and span fallbacks.
///
/// Ruler tiers step in raw milliseconds, so "year" ticks drift off true
/// calendar boundaries across leap years. That approximation is deliberate.
pub const MS_PER_RULER_YEAR: i64 = 365 * MS_PER_DAY;

#[must_use]
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Converts a millisecond instant into a calendar datetime.
///
/// Returns `None` outside chrono's representable range (roughly ±262k years).
#[must_use]
pub fn datetime_from_ms(instant_ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(instant_ms).single()
}

/// Astronomical year number for an instant (year 0 is 1 BCE).
///
/// Instants beyond chrono's range fall back to flat-year arithmetic, which is
/// only reachable by panning far outside any normal data span.
#[must_use]
pub fn civil_year(instant_ms: i64) -> i64 {
    match datetime_from_ms(instant_ms) {
        Some(datetime) => i64::from(datetime.year()),
        None => 1970 + instant_ms.div_euclid(MS_PER_RULER_YEAR),
    }
}
