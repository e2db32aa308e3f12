//! Bounded reverse search from compound positions to Gregorian dates.
//!
//! The two cycles are not aligned to the Gregorian year, so there is no
//! closed-form inverse. The resolver scans candidate dates forward from
//! January 1 of a caller-chosen year, re-running the forward converter
//! on each. A compound position recurs exactly once per calendar round
//! (18980 days), so a window shorter than that may legitimately find no
//! match even though one exists elsewhere; exhaustion is reported, not
//! widened.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::convert::{self, CompoundDate};
use crate::correlation::{CALENDAR_ROUND_DAYS, Correlation, XIUHPOHUALLI_DAYS};
use crate::error::EngineError;
use crate::validate;

/// A target position in both cycles plus the calendar-round year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompoundTarget {
    ritual_day_count: u16,
    solar_day_of_year: u16,
    year_in_round: u8,
}

impl CompoundTarget {
    /// Creates a target from its three cycle positions.
    ///
    /// # Errors
    ///
    /// Returns the matching range error if any position is outside its
    /// cycle (1..=260, 1..=365, 1..=52).
    pub fn new(
        ritual_day_count: u16,
        solar_day_of_year: u16,
        year_in_round: u8,
    ) -> Result<Self, EngineError> {
        if !(1..=260).contains(&ritual_day_count) {
            return Err(EngineError::RitualCountOutOfRange {
                count: ritual_day_count,
            });
        }
        if !(1..=365).contains(&solar_day_of_year) {
            return Err(EngineError::SolarDayOutOfRange {
                day_of_year: solar_day_of_year,
            });
        }
        if !(1..=52).contains(&year_in_round) {
            return Err(EngineError::YearInRoundOutOfRange {
                year: year_in_round,
            });
        }
        Ok(Self {
            ritual_day_count,
            solar_day_of_year,
            year_in_round,
        })
    }

    /// Returns the ritual day count (1..=260).
    pub fn ritual_day_count(self) -> u16 {
        self.ritual_day_count
    }

    /// Returns the solar day-of-year (1..=365).
    pub fn solar_day_of_year(self) -> u16 {
        self.solar_day_of_year
    }

    /// Returns the calendar-round year index (1..=52).
    pub fn year_in_round(self) -> u8 {
        self.year_in_round
    }

    fn matches(self, compound: &CompoundDate) -> bool {
        compound.ritual().day_count() == self.ritual_day_count
            && compound.solar().day_of_year() == self.solar_day_of_year
            && compound.year_in_round() == self.year_in_round
    }
}

impl From<&CompoundDate> for CompoundTarget {
    fn from(compound: &CompoundDate) -> Self {
        Self {
            ritual_day_count: compound.ritual().day_count(),
            solar_day_of_year: compound.solar().day_of_year(),
            year_in_round: compound.year_in_round(),
        }
    }
}

/// Search window for the reverse resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchWindow {
    /// One solar cycle (365 days) from January 1 of the chosen year.
    Year,
    /// One full calendar round (18980 days), enough to find any
    /// position that exists at all.
    CalendarRound,
}

impl SearchWindow {
    /// Returns the window length in days.
    pub fn days(self) -> i64 {
        match self {
            SearchWindow::Year => XIUHPOHUALLI_DAYS,
            SearchWindow::CalendarRound => CALENDAR_ROUND_DAYS,
        }
    }
}

/// Scans forward from January 1 of `around_year` for the first date
/// whose compound position matches `target` exactly, using the given
/// correlation. The scan also ends early at the edge of the supported
/// date range, since later candidates can only be further out.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] if `around_year` itself is
/// unsupported, and [`EngineError::NoMatchFound`] naming the searched
/// window when it is exhausted.
pub fn from_compound_with(
    correlation: Correlation,
    target: CompoundTarget,
    around_year: i32,
    window: SearchWindow,
) -> Result<NaiveDate, EngineError> {
    let cancel = AtomicBool::new(false);
    from_compound_cancellable(correlation, target, around_year, window, &cancel)
}

/// [`from_compound_with`] under the standard correlation.
///
/// # Errors
///
/// See [`from_compound_with`].
pub fn from_compound(
    target: CompoundTarget,
    around_year: i32,
    window: SearchWindow,
) -> Result<NaiveDate, EngineError> {
    from_compound_with(Correlation::standard(), target, around_year, window)
}

/// [`from_compound_with`] with an external cancellation token, for
/// interactive callers that cannot wait out a full calendar-round scan.
/// A cancelled search reports [`EngineError::NoMatchFound`] for the
/// window it was asked to cover.
///
/// # Errors
///
/// See [`from_compound_with`].
pub fn from_compound_cancellable(
    correlation: Correlation,
    target: CompoundTarget,
    around_year: i32,
    window: SearchWindow,
    cancel: &AtomicBool,
) -> Result<NaiveDate, EngineError> {
    let start = validate::gregorian(around_year, 1, 1)?;
    debug!(
        ritual = target.ritual_day_count,
        solar = target.solar_day_of_year,
        year_in_round = target.year_in_round,
        %start,
        window_days = window.days(),
        "reverse search started"
    );

    let mut candidate = start;
    for _ in 0..window.days() {
        if cancel.load(Ordering::Relaxed) {
            debug!(%candidate, "reverse search cancelled");
            break;
        }
        match convert::to_compound_with(correlation, candidate) {
            Ok(compound) => {
                if target.matches(&compound) {
                    debug!(%candidate, "reverse search matched");
                    return Ok(candidate);
                }
            }
            // The scan ran off the supported range; later candidates
            // can only be further out.
            Err(EngineError::DateOutOfRange { .. }) => break,
            Err(e) => return Err(e),
        }
        candidate = match candidate.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    debug!(window_days = window.days(), %start, "reverse search exhausted");
    Err(EngineError::NoMatchFound {
        window_days: window.days(),
        start,
    })
}
