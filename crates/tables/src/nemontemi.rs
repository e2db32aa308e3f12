//! The 5 nemontemi (nameless) days that close the 365-day solar year.

use serde::Serialize;

/// One of the 5 nemontemi days appended after the 18th month.
///
/// These days sit outside the month table and were held to be
/// inauspicious; each carries a cautionary meaning rather than a patron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NemontemiDay {
    /// Index within the nemontemi run (1..=5).
    pub index: u8,
    /// Display name.
    pub name: &'static str,
    /// Cautionary meaning.
    pub meaning: &'static str,
}

/// The nemontemi run in order. Index 0 holds day 1.
pub static NEMONTEMI: [NemontemiDay; 5] = [
    NemontemiDay {
        index: 1,
        name: "First Nameless Day",
        meaning: "Day of purification and reflection, avoiding important decisions",
    },
    NemontemiDay {
        index: 2,
        name: "Second Nameless Day",
        meaning: "Continuation of purification, fasting and prayer",
    },
    NemontemiDay {
        index: 3,
        name: "Third Nameless Day",
        meaning: "Height of danger, protective rituals performed",
    },
    NemontemiDay {
        index: 4,
        name: "Fourth Nameless Day",
        meaning: "Preparation for renewal, clearing away the old",
    },
    NemontemiDay {
        index: 5,
        name: "Fifth Nameless Day",
        meaning: "Final purification, preparation for the new year",
    },
];

/// Returns the nemontemi day at `index` (1..=5), or `None` if out of range.
pub fn nemontemi_at(index: u8) -> Option<&'static NemontemiDay> {
    if !(1..=5).contains(&index) {
        return None;
    }
    Some(&NEMONTEMI[usize::from(index) - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nemontemi_at_valid() {
        assert_eq!(nemontemi_at(1).unwrap().name, "First Nameless Day");
        assert_eq!(nemontemi_at(5).unwrap().name, "Fifth Nameless Day");
    }

    #[test]
    fn nemontemi_at_out_of_range() {
        assert!(nemontemi_at(0).is_none());
        assert!(nemontemi_at(6).is_none());
    }

    #[test]
    fn indices_contiguous() {
        for (i, day) in NEMONTEMI.iter().enumerate() {
            assert_eq!(usize::from(day.index), i + 1);
        }
    }
}
