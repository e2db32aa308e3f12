//! Forward conversion from Gregorian dates to compound calendar positions.

use chrono::NaiveDate;
use serde::Serialize;

use crate::correlation::{Correlation, TONALPOHUALLI_DAYS, XIUHPOHUALLI_DAYS, YEARS_IN_ROUND};
use crate::cycle::cycle_day;
use crate::error::EngineError;
use crate::ritual::RitualDate;
use crate::solar::SolarDate;
use crate::validate;

/// A Gregorian date expressed in both cycles plus the calendar-round
/// year index. Constructed only by the forward converter; every field
/// is range-correct by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompoundDate {
    gregorian: NaiveDate,
    ritual: RitualDate,
    solar: SolarDate,
    year_in_round: u8,
}

impl CompoundDate {
    /// Returns the source Gregorian date.
    pub fn gregorian(self) -> NaiveDate {
        self.gregorian
    }

    /// Returns the ritual-cycle position.
    pub fn ritual(self) -> RitualDate {
        self.ritual
    }

    /// Returns the solar-cycle position.
    pub fn solar(self) -> SolarDate {
        self.solar
    }

    /// Returns the year index within the 52-year calendar round (1..=52).
    pub fn year_in_round(self) -> u8 {
        self.year_in_round
    }
}

/// Signed whole days elapsed from the correlation anchor.
pub(crate) fn elapsed_days(correlation: Correlation, date: NaiveDate) -> i64 {
    (date - correlation.anchor()).num_days()
}

fn ritual_from_elapsed(correlation: Correlation, elapsed: i64) -> RitualDate {
    let day_count = cycle_day(elapsed, correlation.ritual_day_count(), TONALPOHUALLI_DAYS);
    RitualDate::from_day_count(day_count).expect("cycle arithmetic stays within 1..=260")
}

fn solar_from_elapsed(correlation: Correlation, elapsed: i64) -> SolarDate {
    let day_of_year = cycle_day(elapsed, correlation.solar_day_of_year(), XIUHPOHUALLI_DAYS);
    SolarDate::from_day_of_year(day_of_year).expect("cycle arithmetic stays within 1..=365")
}

fn year_from_elapsed(elapsed: i64) -> u8 {
    let year = elapsed.div_euclid(XIUHPOHUALLI_DAYS).rem_euclid(YEARS_IN_ROUND) + 1;
    u8::try_from(year).expect("year index stays within 1..=52")
}

/// Converts a Gregorian date to its position in the 260-day ritual
/// cycle, using the given correlation.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] for unsupported dates.
pub fn to_ritual_with(correlation: Correlation, date: NaiveDate) -> Result<RitualDate, EngineError> {
    validate::validate(date)?;
    Ok(ritual_from_elapsed(correlation, elapsed_days(correlation, date)))
}

/// [`to_ritual_with`] under the standard correlation.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] for unsupported dates.
pub fn to_ritual(date: NaiveDate) -> Result<RitualDate, EngineError> {
    to_ritual_with(Correlation::standard(), date)
}

/// Converts a Gregorian date to its position in the 365-day solar
/// cycle, using the given correlation.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] for unsupported dates.
pub fn to_solar_with(correlation: Correlation, date: NaiveDate) -> Result<SolarDate, EngineError> {
    validate::validate(date)?;
    Ok(solar_from_elapsed(correlation, elapsed_days(correlation, date)))
}

/// [`to_solar_with`] under the standard correlation.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] for unsupported dates.
pub fn to_solar(date: NaiveDate) -> Result<SolarDate, EngineError> {
    to_solar_with(Correlation::standard(), date)
}

/// Computes the year index within the 52-year calendar round, using the
/// given correlation. Solar years are counted in whole 365-day steps
/// from the anchor; euclidean division keeps the index in 1..=52 on
/// both sides of the anchor.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] for unsupported dates.
pub fn year_in_round_with(correlation: Correlation, date: NaiveDate) -> Result<u8, EngineError> {
    validate::validate(date)?;
    Ok(year_from_elapsed(elapsed_days(correlation, date)))
}

/// [`year_in_round_with`] under the standard correlation.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] for unsupported dates.
pub fn year_in_round(date: NaiveDate) -> Result<u8, EngineError> {
    year_in_round_with(Correlation::standard(), date)
}

/// Converts a Gregorian date to its full compound position: ritual
/// date, solar date, and calendar-round year index.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] for unsupported dates.
pub fn to_compound_with(
    correlation: Correlation,
    date: NaiveDate,
) -> Result<CompoundDate, EngineError> {
    validate::validate(date)?;
    let elapsed = elapsed_days(correlation, date);
    Ok(CompoundDate {
        gregorian: date,
        ritual: ritual_from_elapsed(correlation, elapsed),
        solar: solar_from_elapsed(correlation, elapsed),
        year_in_round: year_from_elapsed(elapsed),
    })
}

/// [`to_compound_with`] under the standard correlation.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] for unsupported dates.
pub fn to_compound(date: NaiveDate) -> Result<CompoundDate, EngineError> {
    to_compound_with(Correlation::standard(), date)
}
