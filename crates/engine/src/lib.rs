//! Deterministic correlation engine between the proleptic Gregorian
//! calendar and the two interlocking Aztec cycles: the tonalpohualli
//! (260-day ritual count) and the xiuhpohualli (365-day solar year).
//!
//! All conversions are pure day arithmetic anchored on a
//! [`Correlation`] pairing one Gregorian date with its position in
//! both cycles. The default anchor is August 13, 1521, the fall of
//! Tenochtitlan. Dates outside 1900..=2100 are rejected up front.
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use tonalamatl_engine::to_compound;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let compound = to_compound(date)?;
//! assert_eq!(compound.ritual().to_string(), "12 Malinalli");
//! assert_eq!(compound.year_in_round(), 35);
//! # Ok::<(), tonalamatl_engine::EngineError>(())
//! ```
//!
//! Reverse lookups have no closed form and go through the bounded
//! scanner in [`from_compound`].

mod convert;
mod correlation;
mod cycle;
mod error;
mod resolve;
mod ritual;
mod solar;
mod trecena;
mod validate;

pub use convert::{
    CompoundDate, to_compound, to_compound_with, to_ritual, to_ritual_with, to_solar,
    to_solar_with, year_in_round, year_in_round_with,
};
pub use correlation::{
    CALENDAR_ROUND_DAYS, Correlation, TONALPOHUALLI_DAYS, XIUHPOHUALLI_DAYS, YEARS_IN_ROUND,
};
pub use error::EngineError;
pub use resolve::{
    CompoundTarget, SearchWindow, from_compound, from_compound_cancellable, from_compound_with,
};
pub use ritual::RitualDate;
pub use solar::{SolarDate, SolarForm};
pub use trecena::{Trecena, current_trecena, current_trecena_with, trecena_at};
pub use validate::{MAX_YEAR, MIN_YEAR, gregorian, validate};
