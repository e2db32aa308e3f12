//! Solar-cycle (xiuhpohualli) date type.

use serde::Serialize;
use tonalamatl_tables::{NemontemiDay, SolarMonth, month_at, nemontemi_at};

use crate::error::EngineError;

/// The two forms a solar-cycle day can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolarForm {
    /// A day within one of the 18 twenty-day months (day-of-year 1..=360).
    MonthDay {
        /// The containing month.
        month: &'static SolarMonth,
        /// Day within the month (1..=20).
        day: u8,
    },
    /// One of the 5 nemontemi days (day-of-year 361..=365).
    Nemontemi(&'static NemontemiDay),
}

/// A position in the 365-day solar cycle.
///
/// Day-of-year 1..=360 falls in a month; 361..=365 are the nemontemi
/// days, with nemontemi index `day_of_year - 360`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarDate {
    day_of_year: u16,
    form: SolarForm,
}

impl SolarDate {
    /// Derives the solar date for a day-of-year in the 365-day cycle.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SolarDayOutOfRange`] if `day_of_year` is
    /// outside 1..=365.
    pub fn from_day_of_year(day_of_year: u16) -> Result<Self, EngineError> {
        if !(1..=365).contains(&day_of_year) {
            return Err(EngineError::SolarDayOutOfRange { day_of_year });
        }
        let form = if day_of_year > 360 {
            let index = u8::try_from(day_of_year - 360).expect("1..=5 fits in u8");
            SolarForm::Nemontemi(nemontemi_at(index).expect("nemontemi table covers 1..=5"))
        } else {
            let position = u8::try_from((day_of_year - 1) / 20 + 1).expect("1..=18 fits in u8");
            let day = u8::try_from((day_of_year - 1) % 20 + 1).expect("1..=20 fits in u8");
            SolarForm::MonthDay {
                month: month_at(position).expect("month table covers 1..=18"),
                day,
            }
        };
        Ok(Self { day_of_year, form })
    }

    /// Returns the day-of-year in the 365-day cycle (1..=365).
    pub fn day_of_year(self) -> u16 {
        self.day_of_year
    }

    /// Returns the month/nemontemi form of this day.
    pub fn form(self) -> SolarForm {
        self.form
    }

    /// Returns true for the 5 nemontemi days.
    pub fn is_nemontemi(self) -> bool {
        matches!(self.form, SolarForm::Nemontemi(_))
    }

    /// Returns the containing month, or `None` for nemontemi days.
    pub fn month(self) -> Option<&'static SolarMonth> {
        match self.form {
            SolarForm::MonthDay { month, .. } => Some(month),
            SolarForm::Nemontemi(_) => None,
        }
    }

    /// Returns the day within the month (1..=20), or `None` for
    /// nemontemi days.
    pub fn day_in_month(self) -> Option<u8> {
        match self.form {
            SolarForm::MonthDay { day, .. } => Some(day),
            SolarForm::Nemontemi(_) => None,
        }
    }

    /// Returns the nemontemi entry, or `None` for month days.
    pub fn nemontemi(self) -> Option<&'static NemontemiDay> {
        match self.form {
            SolarForm::MonthDay { .. } => None,
            SolarForm::Nemontemi(day) => Some(day),
        }
    }
}

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.form {
            SolarForm::MonthDay { month, day } => write!(f, "{} {}", day, month.nahuatl_name),
            SolarForm::Nemontemi(day) => write!(f, "Nemontemi {}", day.index),
        }
    }
}
