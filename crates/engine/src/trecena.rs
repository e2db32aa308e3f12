//! Thirteen-day groupings (trecenas) of the ritual cycle.

use chrono::NaiveDate;
use serde::Serialize;
use tonalamatl_tables::{DaySign, sign_at};

use crate::convert;
use crate::correlation::Correlation;
use crate::error::EngineError;
use crate::ritual::RitualDate;

/// One of the 20 trecenas: a contiguous 13-day block of the 260-day
/// cycle, named for the sign of its first day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trecena {
    number: u8,
    ruling_sign: &'static DaySign,
    days: Vec<RitualDate>,
}

impl Trecena {
    /// Returns the trecena number (1..=20).
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Returns the ruling sign: the sign of the trecena's first day.
    pub fn ruling_sign(&self) -> &'static DaySign {
        self.ruling_sign
    }

    /// Returns the 13 ritual dates of this trecena, in day-count order.
    pub fn days(&self) -> &[RitualDate] {
        &self.days
    }

    /// Returns the day count of the trecena's first day.
    pub fn start_day_count(&self) -> u16 {
        u16::from(self.number - 1) * 13 + 1
    }
}

/// Builds the trecena with the given number (1..=20).
///
/// This is pure index arithmetic over the 260-day cycle; 13 and 20 are
/// coprime, so no sign repeats within a single trecena.
///
/// # Errors
///
/// Returns [`EngineError::TrecenaOutOfRange`] if `number` is outside
/// 1..=20.
pub fn trecena_at(number: u8) -> Result<Trecena, EngineError> {
    if !(1..=20).contains(&number) {
        return Err(EngineError::TrecenaOutOfRange { number });
    }
    let start = u16::from(number - 1) * 13 + 1;
    let ruling_position = u8::try_from((start - 1) % 20 + 1).expect("1..=20 fits in u8");
    let ruling_sign = sign_at(ruling_position).expect("sign table covers 1..=20");
    let days = (start..start + 13)
        .map(|count| {
            RitualDate::from_day_count(count).expect("trecena day counts stay within 1..=260")
        })
        .collect();
    Ok(Trecena {
        number,
        ruling_sign,
        days,
    })
}

/// Returns the trecena containing the given date's ritual day count,
/// using the given correlation.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] for unsupported dates.
pub fn current_trecena_with(
    correlation: Correlation,
    date: NaiveDate,
) -> Result<Trecena, EngineError> {
    let ritual = convert::to_ritual_with(correlation, date)?;
    let number = u8::try_from((ritual.day_count() - 1) / 13 + 1).expect("1..=20 fits in u8");
    trecena_at(number)
}

/// [`current_trecena_with`] under the standard correlation.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] for unsupported dates.
pub fn current_trecena(date: NaiveDate) -> Result<Trecena, EngineError> {
    current_trecena_with(Correlation::standard(), date)
}
