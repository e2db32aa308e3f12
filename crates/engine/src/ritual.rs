//! Ritual-cycle (tonalpohualli) date type.

use serde::Serialize;
use tonalamatl_tables::{DaySign, TonalNumber, number_at, sign_at};

use crate::error::EngineError;

/// A position in the 260-day ritual cycle: the pairing of a number and
/// a day sign, plus the day count that produced it.
///
/// The day count uniquely determines the pairing
/// (`((count-1) mod 13)+1` gives the number, `((count-1) mod 20)+1` the
/// sign). The reverse is not unique: the same pairing recurs at counts
/// offset by 260, so the count is carried alongside the components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RitualDate {
    number: &'static TonalNumber,
    sign: &'static DaySign,
    day_count: u16,
}

impl RitualDate {
    /// Derives the ritual date for a day count in the 260-day cycle.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RitualCountOutOfRange`] if `day_count` is
    /// outside 1..=260.
    pub fn from_day_count(day_count: u16) -> Result<Self, EngineError> {
        if !(1..=260).contains(&day_count) {
            return Err(EngineError::RitualCountOutOfRange { count: day_count });
        }
        let number_value = u8::try_from((day_count - 1) % 13 + 1).expect("1..=13 fits in u8");
        let sign_position = u8::try_from((day_count - 1) % 20 + 1).expect("1..=20 fits in u8");
        let number = number_at(number_value).expect("number table covers 1..=13");
        let sign = sign_at(sign_position).expect("sign table covers 1..=20");
        Ok(Self {
            number,
            sign,
            day_count,
        })
    }

    /// Returns the number component.
    pub fn number(self) -> &'static TonalNumber {
        self.number
    }

    /// Returns the day-sign component.
    pub fn sign(self) -> &'static DaySign {
        self.sign
    }

    /// Returns the day count in the 260-day cycle (1..=260).
    pub fn day_count(self) -> u16 {
        self.day_count
    }
}

impl std::fmt::Display for RitualDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.number.value, self.sign.nahuatl_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_1_is_1_cipactli() {
        let rd = RitualDate::from_day_count(1).unwrap();
        assert_eq!(rd.number().value, 1);
        assert_eq!(rd.sign().nahuatl_name, "Cipactli");
        assert_eq!(rd.day_count(), 1);
    }

    #[test]
    fn count_260_is_13_xochitl() {
        let rd = RitualDate::from_day_count(260).unwrap();
        assert_eq!(rd.number().value, 13);
        assert_eq!(rd.sign().nahuatl_name, "Xochitl");
    }

    #[test]
    fn count_14_wraps_number_not_sign() {
        // Count 14: the 13-number cycle has wrapped, the 20-sign cycle
        // has not.
        let rd = RitualDate::from_day_count(14).unwrap();
        assert_eq!(rd.number().value, 1);
        assert_eq!(rd.sign().position, 14);
    }

    #[test]
    fn count_21_wraps_sign_not_number() {
        let rd = RitualDate::from_day_count(21).unwrap();
        assert_eq!(rd.number().value, 8);
        assert_eq!(rd.sign().position, 1);
    }

    #[test]
    fn out_of_range_rejected() {
        assert_eq!(
            RitualDate::from_day_count(0).unwrap_err(),
            EngineError::RitualCountOutOfRange { count: 0 }
        );
        assert_eq!(
            RitualDate::from_day_count(261).unwrap_err(),
            EngineError::RitualCountOutOfRange { count: 261 }
        );
    }

    #[test]
    fn all_260_pairings_distinct() {
        let mut seen = std::collections::HashSet::new();
        for count in 1..=260 {
            let rd = RitualDate::from_day_count(count).unwrap();
            assert!(
                seen.insert((rd.number().value, rd.sign().position)),
                "pairing repeated before the cycle closed at count {count}"
            );
        }
    }

    #[test]
    fn display() {
        let rd = RitualDate::from_day_count(5).unwrap();
        assert_eq!(rd.to_string(), "5 Coatl");
    }
}
