//! Structural properties of the forward conversion: cycle ranges,
//! single-step monotonicity, periodicity, and trecena shape.

use chrono::{Days, NaiveDate};
use tonalamatl_engine::{
    TONALPOHUALLI_DAYS, XIUHPOHUALLI_DAYS, current_trecena, to_compound,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A spread of dates across the supported window, including both window
/// edges and a leap day.
fn sample_dates() -> Vec<NaiveDate> {
    vec![
        date(1900, 1, 1),
        date(1923, 7, 19),
        date(1969, 12, 31),
        date(2000, 2, 29),
        date(2024, 3, 15),
        date(2077, 11, 2),
        date(2100, 12, 31),
    ]
}

#[test]
fn derived_fields_stay_in_range() {
    for d in sample_dates() {
        let c = to_compound(d).unwrap();
        assert!((1..=260).contains(&c.ritual().day_count()), "{d}");
        assert!((1..=13).contains(&c.ritual().number().value), "{d}");
        assert!((1..=20).contains(&c.ritual().sign().position), "{d}");
        assert!((1..=365).contains(&c.solar().day_of_year()), "{d}");
        assert!((1..=52).contains(&c.year_in_round()), "{d}");
    }
}

#[test]
fn consecutive_days_advance_both_cycles_by_one() {
    // A full year of consecutive days, crossing both cycle boundaries.
    let mut d = date(2023, 6, 1);
    let mut prev = to_compound(d).unwrap();
    for _ in 0..400 {
        d = d.succ_opt().unwrap();
        let next = to_compound(d).unwrap();
        assert_eq!(
            next.ritual().day_count(),
            prev.ritual().day_count() % 260 + 1,
            "ritual step at {d}"
        );
        assert_eq!(
            next.solar().day_of_year(),
            prev.solar().day_of_year() % 365 + 1,
            "solar step at {d}"
        );
        prev = next;
    }
}

#[test]
fn ritual_cycle_has_period_260() {
    for d in sample_dates() {
        let Some(later) = d.checked_add_days(Days::new(TONALPOHUALLI_DAYS as u64)) else {
            continue;
        };
        let (Ok(a), Ok(b)) = (to_compound(d), to_compound(later)) else {
            continue; // later date fell out of the supported window
        };
        assert_eq!(a.ritual(), b.ritual(), "ritual period broken at {d}");
    }
}

#[test]
fn solar_cycle_has_period_365() {
    for d in sample_dates() {
        let Some(later) = d.checked_add_days(Days::new(XIUHPOHUALLI_DAYS as u64)) else {
            continue;
        };
        let (Ok(a), Ok(b)) = (to_compound(d), to_compound(later)) else {
            continue;
        };
        assert_eq!(
            a.solar().day_of_year(),
            b.solar().day_of_year(),
            "solar period broken at {d}"
        );
    }
}

#[test]
fn year_in_round_advances_every_365_days() {
    for d in sample_dates() {
        let Some(later) = d.checked_add_days(Days::new(XIUHPOHUALLI_DAYS as u64)) else {
            continue;
        };
        let (Ok(a), Ok(b)) = (to_compound(d), to_compound(later)) else {
            continue;
        };
        assert_eq!(
            u16::from(b.year_in_round()),
            u16::from(a.year_in_round()) % 52 + 1,
            "year step broken at {d}"
        );
    }
}

#[test]
fn trecena_shape_for_every_sample() {
    for d in sample_dates() {
        let c = to_compound(d).unwrap();
        let t = current_trecena(d).unwrap();
        assert_eq!(t.days().len(), 13, "{d}");
        // Contiguous, strictly increasing counts.
        for pair in t.days().windows(2) {
            assert_eq!(pair[1].day_count(), pair[0].day_count() + 1, "{d}");
        }
        // The date's own count lies inside the group.
        assert!(
            t.days()
                .iter()
                .any(|day| day.day_count() == c.ritual().day_count()),
            "{d}: day count {} not in trecena {}",
            c.ritual().day_count(),
            t.number()
        );
        // Named for its first day's sign.
        assert_eq!(t.days()[0].sign(), t.ruling_sign(), "{d}");
    }
}

#[test]
fn intercalary_flag_tracks_day_of_year() {
    // Sweep one full solar cycle and check the flag flips exactly at 361.
    let mut d = date(2024, 4, 7); // solar day-of-year 361
    for expected_doy in 361..=365u16 {
        let c = to_compound(d).unwrap();
        assert_eq!(c.solar().day_of_year(), expected_doy);
        assert!(c.solar().is_nemontemi());
        assert_eq!(
            c.solar().nemontemi().unwrap().index,
            u8::try_from(expected_doy - 360).unwrap()
        );
        d = d.succ_opt().unwrap();
    }
    // Next day opens a new solar year.
    let c = to_compound(d).unwrap();
    assert_eq!(c.solar().day_of_year(), 1);
    assert!(!c.solar().is_nemontemi());
    assert_eq!(c.solar().month().unwrap().position, 1);
}
