//! Supported-window validation for input dates.
//!
//! Every engine operation validates its input date first and propagates
//! the failure. Out-of-window dates are rejected, never clamped.

use chrono::{Datelike, NaiveDate};

use crate::error::EngineError;

/// First supported year (inclusive).
pub const MIN_YEAR: i32 = 1900;

/// Last supported year (inclusive).
pub const MAX_YEAR: i32 = 2100;

/// Checks that `date` falls within the supported window.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] for dates before 1900-01-01
/// or after 2100-12-31.
pub fn validate(date: NaiveDate) -> Result<(), EngineError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(EngineError::DateOutOfRange { date });
    }
    Ok(())
}

/// Builds a validated Gregorian date from a year/month/day triple.
///
/// Distinguishes the two rejection reasons: a triple that names no real
/// calendar date (Feb 29 in a non-leap year, month 13) is
/// [`EngineError::MalformedDate`]; a real date outside the supported
/// window is [`EngineError::DateOutOfRange`].
///
/// # Errors
///
/// See above.
pub fn gregorian(year: i32, month: u32, day: u32) -> Result<NaiveDate, EngineError> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(EngineError::MalformedDate { year, month, day })?;
    validate(date)?;
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_boundaries() {
        assert!(gregorian(1899, 12, 31).is_err());
        assert!(gregorian(1900, 1, 1).is_ok());
        assert!(gregorian(2100, 12, 31).is_ok());
        assert!(gregorian(2101, 1, 1).is_err());
    }

    #[test]
    fn out_of_range_reports_date() {
        let err = gregorian(1899, 12, 31).unwrap_err();
        assert_eq!(
            err,
            EngineError::DateOutOfRange {
                date: NaiveDate::from_ymd_opt(1899, 12, 31).unwrap()
            }
        );
    }

    #[test]
    fn malformed_feb_29() {
        assert_eq!(
            gregorian(2023, 2, 29).unwrap_err(),
            EngineError::MalformedDate {
                year: 2023,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn leap_feb_29_in_window() {
        assert!(gregorian(2024, 2, 29).is_ok());
    }

    #[test]
    fn malformed_month_13() {
        assert_eq!(
            gregorian(2000, 13, 1).unwrap_err(),
            EngineError::MalformedDate {
                year: 2000,
                month: 13,
                day: 1
            }
        );
    }

    #[test]
    fn malformed_takes_priority_over_range() {
        // An impossible triple in an unsupported year is malformed,
        // not out of range.
        assert!(matches!(
            gregorian(1800, 2, 30).unwrap_err(),
            EngineError::MalformedDate { .. }
        ));
    }

    #[test]
    fn validate_in_window() {
        let date = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        assert!(validate(date).is_ok());
    }
}
