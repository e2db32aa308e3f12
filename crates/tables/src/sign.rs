//! The 20 day signs of the 260-day tonalpohualli.

use serde::Serialize;

/// One of the 20 day signs of the tonalpohualli.
///
/// Sign data follows Codex Borbonicus / Codex Magliabechiano usage;
/// the glyph field is a display placeholder, not a codex rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySign {
    /// Nahuatl name of the sign.
    pub nahuatl_name: &'static str,
    /// English translation.
    pub english_name: &'static str,
    /// Short display glyph.
    pub glyph: &'static str,
    /// Phonetic pronunciation guide.
    pub pronunciation: &'static str,
    /// Symbolic meaning.
    pub meaning: &'static str,
    /// Position in the sign cycle (1..=20).
    pub position: u8,
    /// Cardinal direction the sign belongs to.
    pub direction: &'static str,
    /// Ruling deity.
    pub deity: &'static str,
}

/// The sign cycle in order. Index 0 holds position 1 (Cipactli).
pub static DAY_SIGNS: [DaySign; 20] = [
    DaySign {
        nahuatl_name: "Cipactli",
        english_name: "Crocodile",
        glyph: "🐊",
        pronunciation: "see-PAK-tlee",
        meaning: "The earth monster, primordial being associated with fertility and the earth's surface",
        position: 1,
        direction: "East",
        deity: "Tonacatecuhtli",
    },
    DaySign {
        nahuatl_name: "Ehecatl",
        english_name: "Wind",
        glyph: "💨",
        pronunciation: "eh-HEH-katl",
        meaning: "The life-giving wind, breath of life, communication and movement",
        position: 2,
        direction: "North",
        deity: "Quetzalcoatl",
    },
    DaySign {
        nahuatl_name: "Calli",
        english_name: "House",
        glyph: "🏠",
        pronunciation: "KAH-yee",
        meaning: "The home, sanctuary, protection, family and community",
        position: 3,
        direction: "West",
        deity: "Tepeyollotl",
    },
    DaySign {
        nahuatl_name: "Cuetzpalin",
        english_name: "Lizard",
        glyph: "🦎",
        pronunciation: "kwehts-PAH-leen",
        meaning: "Adaptation, regeneration, speed and survival instincts",
        position: 4,
        direction: "South",
        deity: "Huehuecoyotl",
    },
    DaySign {
        nahuatl_name: "Coatl",
        english_name: "Serpent",
        glyph: "🐍",
        pronunciation: "KOH-ahtl",
        meaning: "Wisdom, transformation, duality, connection between earth and sky",
        position: 5,
        direction: "East",
        deity: "Chalchiuhtlicue",
    },
    DaySign {
        nahuatl_name: "Miquiztli",
        english_name: "Death",
        glyph: "💀",
        pronunciation: "mee-KEEZ-tlee",
        meaning: "Transformation, endings, ancestors, the cycle of life and death",
        position: 6,
        direction: "North",
        deity: "Tecciztecatl",
    },
    DaySign {
        nahuatl_name: "Mazatl",
        english_name: "Deer",
        glyph: "🦌",
        pronunciation: "mah-ZAHTL",
        meaning: "Gentleness, grace, alertness, connection to nature and hunting",
        position: 7,
        direction: "West",
        deity: "Tlaloc",
    },
    DaySign {
        nahuatl_name: "Tochtli",
        english_name: "Rabbit",
        glyph: "🐰",
        pronunciation: "TOCH-tlee",
        meaning: "Fertility, abundance, playfulness, lunar associations",
        position: 8,
        direction: "South",
        deity: "Mayahuel",
    },
    DaySign {
        nahuatl_name: "Atl",
        english_name: "Water",
        glyph: "💧",
        pronunciation: "AHTL",
        meaning: "Purification, emotion, healing, life-giving properties",
        position: 9,
        direction: "East",
        deity: "Xiuhtecuhtli",
    },
    DaySign {
        nahuatl_name: "Itzcuintli",
        english_name: "Dog",
        glyph: "🐕",
        pronunciation: "eets-KOINT-lee",
        meaning: "Loyalty, companionship, guidance through the underworld",
        position: 10,
        direction: "North",
        deity: "Mictlantecuhtli",
    },
    DaySign {
        nahuatl_name: "Ozomatli",
        english_name: "Monkey",
        glyph: "🐵",
        pronunciation: "oh-soh-MAHT-lee",
        meaning: "Playfulness, creativity, intelligence, trickster energy",
        position: 11,
        direction: "West",
        deity: "Xochipilli",
    },
    DaySign {
        nahuatl_name: "Malinalli",
        english_name: "Grass",
        glyph: "🌾",
        pronunciation: "mah-lee-NAH-yee",
        meaning: "Perseverance, flexibility, growth, connection to agriculture",
        position: 12,
        direction: "South",
        deity: "Patecatl",
    },
    DaySign {
        nahuatl_name: "Acatl",
        english_name: "Reed",
        glyph: "🎋",
        pronunciation: "ah-KAHTL",
        meaning: "Knowledge, communication, authority, writing and scholarship",
        position: 13,
        direction: "East",
        deity: "Tezcatlipoca",
    },
    DaySign {
        nahuatl_name: "Ocelotl",
        english_name: "Jaguar",
        glyph: "🐆",
        pronunciation: "oh-seh-KOHTL",
        meaning: "Power, courage, nocturnal strength, warrior spirit",
        position: 14,
        direction: "North",
        deity: "Tlazolteotl",
    },
    DaySign {
        nahuatl_name: "Quauhtli",
        english_name: "Eagle",
        glyph: "🦅",
        pronunciation: "KWAH-htlee",
        meaning: "Vision, freedom, spiritual connection, highest aspirations",
        position: 15,
        direction: "West",
        deity: "Xipe Totec",
    },
    DaySign {
        nahuatl_name: "Cozcaquauhtli",
        english_name: "Buzzard",
        glyph: "🪶",
        pronunciation: "kohs-kah-KWAH-htlee",
        meaning: "Purification, transformation, clearing away what is no longer needed",
        position: 16,
        direction: "South",
        deity: "Itzpapalotl",
    },
    DaySign {
        nahuatl_name: "Ollin",
        english_name: "Movement",
        glyph: "🌀",
        pronunciation: "OH-leen",
        meaning: "Change, evolution, cosmic movement, earthquakes and transformation",
        position: 17,
        direction: "East",
        deity: "Xolotl",
    },
    DaySign {
        nahuatl_name: "Tecpatl",
        english_name: "Flint",
        glyph: "🔪",
        pronunciation: "tek-PAHTL",
        meaning: "Divine communication, sacrifice, technology, cutting through illusion",
        position: 18,
        direction: "North",
        deity: "Chalchiuhtotolin",
    },
    DaySign {
        nahuatl_name: "Quiahuitl",
        english_name: "Rain",
        glyph: "🌧️",
        pronunciation: "kee-ah-WEETL",
        meaning: "Blessing, purification, emotional release, agricultural abundance",
        position: 19,
        direction: "West",
        deity: "Tonatiuh",
    },
    DaySign {
        nahuatl_name: "Xochitl",
        english_name: "Flower",
        glyph: "🌸",
        pronunciation: "SHO-cheetl",
        meaning: "Beauty, creativity, pleasure, the flowering of consciousness",
        position: 20,
        direction: "South",
        deity: "Xochiquetzal",
    },
];

/// Returns the day sign at `position` (1..=20), or `None` if out of range.
pub fn sign_at(position: u8) -> Option<&'static DaySign> {
    if !(1..=20).contains(&position) {
        return None;
    }
    Some(&DAY_SIGNS[usize::from(position) - 1])
}

/// Looks up a day sign by Nahuatl or English name, case-insensitively.
pub fn sign_by_name(name: &str) -> Option<&'static DaySign> {
    DAY_SIGNS.iter().find(|s| {
        s.nahuatl_name.eq_ignore_ascii_case(name) || s.english_name.eq_ignore_ascii_case(name)
    })
}
