//! # tonalamatl-tables
//!
//! The four fixed reference tables of the Aztec dual-calendar system:
//! 20 day signs, 13 numbers, 18 solar months, and the 5 nemontemi days
//! that close the solar year.
//!
//! All tables are immutable `static` data constructed at compile time.
//! Accessors are total: out-of-range positions and unknown names return
//! `None` rather than failing. Name lookups are case-insensitive and
//! match both the Nahuatl and the English name of an entry.
//!
//! ## Quick Start
//!
//! ```
//! use tonalamatl_tables::{sign_at, sign_by_name, month_at, number_at};
//!
//! let coatl = sign_at(5).unwrap();
//! assert_eq!(coatl.nahuatl_name, "Coatl");
//! assert_eq!(sign_by_name("serpent").unwrap().position, 5);
//!
//! assert_eq!(month_at(1).unwrap().nahuatl_name, "Atlcahualo");
//! assert_eq!(number_at(13).unwrap().nahuatl_name, "Matlactli huan yei");
//! assert!(sign_at(21).is_none());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `sign` | The 20 day signs of the 260-day tonalpohualli |
//! | `number` | The 13 numbers cycled against the day signs |
//! | `month` | The 18 twenty-day months of the 365-day xiuhpohualli |
//! | `nemontemi` | The 5 nameless days completing the solar year |

mod month;
mod nemontemi;
mod number;
mod sign;

pub use month::{MONTHS, Season, SolarMonth, month_at, month_by_name};
pub use nemontemi::{NEMONTEMI, NemontemiDay, nemontemi_at};
pub use number::{NUMBERS, Polarity, TonalNumber, number_at, number_by_name};
pub use sign::{DAY_SIGNS, DaySign, sign_at, sign_by_name};
