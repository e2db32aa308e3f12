//! Error types for the tonalamatl-engine crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the engine.
///
/// Validation failures and exhausted searches are returned to the
/// caller; they are always recoverable. Internal invariant violations
/// (a table lookup miss for an index the cycle arithmetic already
/// proved in-range) are not represented here: they panic via `expect`
/// with a named invariant, since they signal a defect in the tables or
/// the arithmetic rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Returned when a year/month/day triple does not name a real Gregorian date.
    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    MalformedDate {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
        /// The requested day.
        day: u32,
    },

    /// Returned when a well-formed date falls outside the supported window.
    #[error("date {date} is outside the supported range 1900-01-01..=2100-12-31")]
    DateOutOfRange {
        /// The rejected date.
        date: NaiveDate,
    },

    /// Returned when a ritual day count is outside the 260-day cycle.
    #[error("invalid ritual day count: {count} (must be 1..=260)")]
    RitualCountOutOfRange {
        /// The invalid day count.
        count: u16,
    },

    /// Returned when a solar day-of-year is outside the 365-day cycle.
    #[error("invalid solar day of year: {day_of_year} (must be 1..=365)")]
    SolarDayOutOfRange {
        /// The invalid day-of-year.
        day_of_year: u16,
    },

    /// Returned when a year index is outside the 52-year calendar round.
    #[error("invalid year in round: {year} (must be 1..=52)")]
    YearInRoundOutOfRange {
        /// The invalid year index.
        year: u8,
    },

    /// Returned when a trecena number is outside 1..=20.
    #[error("invalid trecena number: {number} (must be 1..=20)")]
    TrecenaOutOfRange {
        /// The invalid trecena number.
        number: u8,
    },

    /// Returned when the reverse resolver exhausts its search window.
    #[error("no matching date within {window_days} days starting {start}")]
    NoMatchFound {
        /// Length of the searched window in days.
        window_days: i64,
        /// First candidate date of the search.
        start: NaiveDate,
    },
}
