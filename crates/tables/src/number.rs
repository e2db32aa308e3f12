//! The 13 numbers cycled against the day signs.

use serde::Serialize;

/// Gender polarity of a tonalpohualli number.
///
/// Polarity strictly alternates through the table, starting masculine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Masculine,
    Feminine,
}

impl Polarity {
    /// Returns the lowercase display form.
    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Masculine => "masculine",
            Polarity::Feminine => "feminine",
        }
    }
}

/// One of the 13 numbers of the tonalpohualli.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TonalNumber {
    /// Numeric value (1..=13).
    pub value: u8,
    /// Nahuatl name of the number.
    pub nahuatl_name: &'static str,
    /// Symbolic meaning.
    pub meaning: &'static str,
    /// Alternating gender polarity.
    pub polarity: Polarity,
}

/// The number cycle in order. Index 0 holds value 1 (Ce).
pub static NUMBERS: [TonalNumber; 13] = [
    TonalNumber {
        value: 1,
        nahuatl_name: "Ce",
        meaning: "Beginning, unity, initiation, the start of all things",
        polarity: Polarity::Masculine,
    },
    TonalNumber {
        value: 2,
        nahuatl_name: "Ome",
        meaning: "Duality, balance, partnership, the cosmic principle of twoness",
        polarity: Polarity::Feminine,
    },
    TonalNumber {
        value: 3,
        nahuatl_name: "Yei",
        meaning: "Creation, harmony, the triad of earth, water, and sky",
        polarity: Polarity::Masculine,
    },
    TonalNumber {
        value: 4,
        nahuatl_name: "Nahui",
        meaning: "Stability, foundation, the four cardinal directions, completeness",
        polarity: Polarity::Feminine,
    },
    TonalNumber {
        value: 5,
        nahuatl_name: "Macuilli",
        meaning: "Center, balance, the fifth direction (up/down), human connection",
        polarity: Polarity::Masculine,
    },
    TonalNumber {
        value: 6,
        nahuatl_name: "Chicuace",
        meaning: "Movement, change, the principle of flux and transformation",
        polarity: Polarity::Feminine,
    },
    TonalNumber {
        value: 7,
        nahuatl_name: "Chicome",
        meaning: "Mysticism, spirituality, the sacred number of cosmic connection",
        polarity: Polarity::Masculine,
    },
    TonalNumber {
        value: 8,
        nahuatl_name: "Chicuei",
        meaning: "Abundance, material manifestation, earthly completion",
        polarity: Polarity::Feminine,
    },
    TonalNumber {
        value: 9,
        nahuatl_name: "Chicnahui",
        meaning: "Divine completion, lunar cycles, emotional wisdom",
        polarity: Polarity::Masculine,
    },
    TonalNumber {
        value: 10,
        nahuatl_name: "Matlactli",
        meaning: "Perfection, human completion, the sum of fingers and toes",
        polarity: Polarity::Feminine,
    },
    TonalNumber {
        value: 11,
        nahuatl_name: "Matlactli huan ce",
        meaning: "Transcendence, spiritual mastery, beyond the physical",
        polarity: Polarity::Masculine,
    },
    TonalNumber {
        value: 12,
        nahuatl_name: "Matlactli huan ome",
        meaning: "Cosmic order, universal harmony, the cycle of time",
        polarity: Polarity::Feminine,
    },
    TonalNumber {
        value: 13,
        nahuatl_name: "Matlactli huan yei",
        meaning: "Divine completeness, highest spiritual attainment, cosmic consciousness",
        polarity: Polarity::Masculine,
    },
];

/// Returns the number with `value` (1..=13), or `None` if out of range.
pub fn number_at(value: u8) -> Option<&'static TonalNumber> {
    if !(1..=13).contains(&value) {
        return None;
    }
    Some(&NUMBERS[usize::from(value) - 1])
}

/// Looks up a number by Nahuatl name, case-insensitively.
pub fn number_by_name(name: &str) -> Option<&'static TonalNumber> {
    NUMBERS.iter().find(|n| n.nahuatl_name.eq_ignore_ascii_case(name))
}
