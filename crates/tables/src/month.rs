//! The 18 twenty-day months (veintenas) of the 365-day xiuhpohualli.

use serde::Serialize;

/// Seasonal association of a solar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Returns the capitalized display form.
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

/// One of the 18 months of the xiuhpohualli. Every month is 20 days;
/// the 5 nemontemi days that complete the 365-day year sit outside
/// the month table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarMonth {
    /// Nahuatl name of the month.
    pub nahuatl_name: &'static str,
    /// English translation.
    pub english_name: &'static str,
    /// Position in the solar year (1..=18).
    pub position: u8,
    /// Patron deity.
    pub patron: &'static str,
    /// Seasonal association.
    pub season: Season,
    /// Agricultural significance.
    pub agricultural: &'static str,
}

/// The month cycle in order. Index 0 holds position 1 (Atlcahualo).
pub static MONTHS: [SolarMonth; 18] = [
    SolarMonth {
        nahuatl_name: "Atlcahualo",
        english_name: "Water Left",
        position: 1,
        patron: "Chalchiuhtlicue",
        season: Season::Spring,
        agricultural: "Beginning of the agricultural cycle, preparation of fields",
    },
    SolarMonth {
        nahuatl_name: "Tlacaxipehualiztli",
        english_name: "Flaying of Men",
        position: 2,
        patron: "Xipe Totec",
        season: Season::Spring,
        agricultural: "Planting season, corn planting ceremonies",
    },
    SolarMonth {
        nahuatl_name: "Tozoztontli",
        english_name: "Little Vigil",
        position: 3,
        patron: "Coatlicue",
        season: Season::Spring,
        agricultural: "Early growth, first shoots appear",
    },
    SolarMonth {
        nahuatl_name: "Huei Tozoztli",
        english_name: "Great Vigil",
        position: 4,
        patron: "Tlaloc",
        season: Season::Spring,
        agricultural: "Rain prayers, ensuring crop growth",
    },
    SolarMonth {
        nahuatl_name: "Toxcatl",
        english_name: "Dryness",
        position: 5,
        patron: "Tezcatlipoca",
        season: Season::Summer,
        agricultural: "Dry season begins, crop monitoring",
    },
    SolarMonth {
        nahuatl_name: "Etzal",
        english_name: "Corn",
        position: 6,
        patron: "Centeotl",
        season: Season::Summer,
        agricultural: "Corn ripening, first harvests begin",
    },
    SolarMonth {
        nahuatl_name: "Tecuilhuitontli",
        english_name: "Little Feast of the Lords",
        position: 7,
        patron: "Huixtocihuatl",
        season: Season::Summer,
        agricultural: "Salt harvesting, food preservation",
    },
    SolarMonth {
        nahuatl_name: "Huei Tecuilhuitl",
        english_name: "Great Feast of the Lords",
        position: 8,
        patron: "Xilonen",
        season: Season::Summer,
        agricultural: "Main corn harvest begins",
    },
    SolarMonth {
        nahuatl_name: "Tlaxochimaco",
        english_name: "Giving of Flowers",
        position: 9,
        patron: "Huitzilopochtli",
        season: Season::Autumn,
        agricultural: "Flower offerings, harvest celebrations",
    },
    SolarMonth {
        nahuatl_name: "Xocotlhuetzi",
        english_name: "Fruit Falls",
        position: 10,
        patron: "Toci",
        season: Season::Autumn,
        agricultural: "Fruit harvest, preparation for storage",
    },
    SolarMonth {
        nahuatl_name: "Ochpaniztli",
        english_name: "Sweeping",
        position: 11,
        patron: "Tlazolteotl",
        season: Season::Autumn,
        agricultural: "Field clearing, preparation for new cycle",
    },
    SolarMonth {
        nahuatl_name: "Teotleco",
        english_name: "Arrival of the Gods",
        position: 12,
        patron: "Tezcatlipoca",
        season: Season::Autumn,
        agricultural: "Harvest completion, storage preparation",
    },
    SolarMonth {
        nahuatl_name: "Tepeilhuitl",
        english_name: "Feast of the Mountains",
        position: 13,
        patron: "Tlaloc",
        season: Season::Winter,
        agricultural: "Mountain offerings, water conservation",
    },
    SolarMonth {
        nahuatl_name: "Quecholli",
        english_name: "Precious Feather",
        position: 14,
        patron: "Mixcoatl",
        season: Season::Winter,
        agricultural: "Hunting season, meat preservation",
    },
    SolarMonth {
        nahuatl_name: "Panquetzaliztli",
        english_name: "Raising of Banners",
        position: 15,
        patron: "Huitzilopochtli",
        season: Season::Winter,
        agricultural: "War ceremonies, protection of stores",
    },
    SolarMonth {
        nahuatl_name: "Atemoztli",
        english_name: "Descent of Water",
        position: 16,
        patron: "Tlaloc",
        season: Season::Winter,
        agricultural: "Water ceremonies, preparation for planting",
    },
    SolarMonth {
        nahuatl_name: "Tititl",
        english_name: "Stretch",
        position: 17,
        patron: "Ilamatecuhtli",
        season: Season::Winter,
        agricultural: "Final preparations, year-end ceremonies",
    },
    SolarMonth {
        nahuatl_name: "Izcalli",
        english_name: "Sprout",
        position: 18,
        patron: "Xiuhtecuhtli",
        season: Season::Winter,
        agricultural: "New fire ceremony, preparation for renewal",
    },
];

/// Returns the month at `position` (1..=18), or `None` if out of range.
pub fn month_at(position: u8) -> Option<&'static SolarMonth> {
    if !(1..=18).contains(&position) {
        return None;
    }
    Some(&MONTHS[usize::from(position) - 1])
}

/// Looks up a month by Nahuatl or English name, case-insensitively.
pub fn month_by_name(name: &str) -> Option<&'static SolarMonth> {
    MONTHS.iter().find(|m| {
        m.nahuatl_name.eq_ignore_ascii_case(name) || m.english_name.eq_ignore_ascii_case(name)
    })
}
