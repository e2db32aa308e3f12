//! Correlation anchor and cycle-length constants.
//!
//! The anchor is the coordinate-system origin for all cycle arithmetic:
//! a fixed Gregorian date paired with its known position in both
//! cycles. Changing it changes the meaning of every derived date, so it
//! is compiled in rather than read from configuration. The converters
//! take the correlation as a parameter, which keeps the engine testable
//! with alternate anchors.

use chrono::NaiveDate;

use crate::error::EngineError;

/// Days in the tonalpohualli ritual cycle (13 numbers x 20 signs).
pub const TONALPOHUALLI_DAYS: i64 = 260;

/// Days in the xiuhpohualli solar cycle (18 months x 20 days + 5 nemontemi).
pub const XIUHPOHUALLI_DAYS: i64 = 365;

/// Days in the calendar round, the least common multiple of both cycles.
pub const CALENDAR_ROUND_DAYS: i64 = 18980;

/// Solar years in the calendar round.
pub const YEARS_IN_ROUND: i64 = 52;

/// A fixed correlation between the Gregorian calendar and both cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correlation {
    anchor: NaiveDate,
    ritual_day_count: u16,
    solar_day_of_year: u16,
}

impl Correlation {
    /// Creates a correlation from an anchor date and its cycle positions.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RitualCountOutOfRange`] or
    /// [`EngineError::SolarDayOutOfRange`] if a position is outside its
    /// cycle.
    pub fn new(
        anchor: NaiveDate,
        ritual_day_count: u16,
        solar_day_of_year: u16,
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
        Ok(Self {
            anchor,
            ritual_day_count,
            solar_day_of_year,
        })
    }

    /// The standard correlation used throughout this workspace:
    /// August 13, 1521 (proleptic Gregorian), the fall of Tenochtitlan,
    /// corresponding to ritual day count 5 (1 Coatl) and solar
    /// day-of-year 1 (1 Atlcahualo).
    ///
    /// This is a well-documented conventional anchor, not a scholarly
    /// correlation claim.
    pub fn standard() -> Self {
        Self {
            anchor: NaiveDate::from_ymd_opt(1521, 8, 13)
                .expect("standard anchor is a valid Gregorian date"),
            ritual_day_count: 5,
            solar_day_of_year: 1,
        }
    }

    /// Returns the anchor date.
    pub fn anchor(self) -> NaiveDate {
        self.anchor
    }

    /// Returns the anchor's ritual day count (1..=260).
    pub fn ritual_day_count(self) -> u16 {
        self.ritual_day_count
    }

    /// Returns the anchor's solar day-of-year (1..=365).
    pub fn solar_day_of_year(self) -> u16 {
        self.solar_day_of_year
    }
}

impl Default for Correlation {
    fn default() -> Self {
        Self::standard()
    }
}
