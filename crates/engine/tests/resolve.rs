//! Reverse-resolver behavior: window semantics, exhaustion, and the
//! bounded round-trip guarantee.

use chrono::{Datelike, NaiveDate};
use tonalamatl_engine::{
    CompoundTarget, EngineError, SearchWindow, from_compound, to_compound,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn recovers_date_within_its_own_year() {
    for d in [
        date(1900, 6, 1),
        date(2000, 2, 29),
        date(2024, 3, 15),
        // Offset 364, the last candidate of a 365-day scan in a leap
        // year (2024-12-31 would be offset 365, outside the window).
        date(2024, 12, 30),
    ] {
        let target = CompoundTarget::from(&to_compound(d).unwrap());
        let found = from_compound(target, d.year(), SearchWindow::Year).unwrap();
        assert_eq!(found, d, "resolver missed {d} in its own year");
    }
}

#[test]
fn round_trip_preserves_compound_position() {
    let d = date(2026, 8, 30);
    let original = to_compound(d).unwrap();
    let found = from_compound(
        CompoundTarget::from(&original),
        2026,
        SearchWindow::Year,
    )
    .unwrap();
    let recovered = to_compound(found).unwrap();
    assert_eq!(recovered.ritual(), original.ritual());
    assert_eq!(recovered.solar(), original.solar());
    assert_eq!(recovered.year_in_round(), original.year_in_round());
}

#[test]
fn year_window_misses_position_from_another_round_year() {
    // 2030-06-01 has compound position (201, 52, 42). That position
    // occurs once per 18980 days, so a 365-day scan from 2024-01-01
    // legitimately finds nothing.
    let target = CompoundTarget::new(201, 52, 42).unwrap();
    let err = from_compound(target, 2024, SearchWindow::Year).unwrap_err();
    assert_eq!(
        err,
        EngineError::NoMatchFound {
            window_days: 365,
            start: date(2024, 1, 1),
        }
    );
}

#[test]
fn calendar_round_window_finds_distant_position() {
    // The same position the year window missed is reachable with the
    // full 18980-day window.
    let target = CompoundTarget::new(201, 52, 42).unwrap();
    let found = from_compound(target, 2024, SearchWindow::CalendarRound).unwrap();
    assert_eq!(found, date(2030, 6, 1));
}

#[test]
fn inconsistent_target_never_matches() {
    // (ritual, solar) jointly pin down the position in the calendar
    // round, which fixes the year index too. Perturbing only the year
    // yields a target no date ever produces.
    let real = CompoundTarget::from(&to_compound(date(2024, 3, 15)).unwrap());
    let fake = CompoundTarget::new(
        real.ritual_day_count(),
        real.solar_day_of_year(),
        real.year_in_round() % 52 + 1,
    )
    .unwrap();
    assert!(matches!(
        from_compound(fake, 2024, SearchWindow::CalendarRound),
        Err(EngineError::NoMatchFound { .. })
    ));
}

#[test]
fn scan_stops_at_supported_range_edge() {
    // 2050-01-01 has position (75, 271, 9); scanning from 2100 runs off
    // the supported window long before a full calendar round elapses.
    let target = CompoundTarget::new(75, 271, 9).unwrap();
    assert!(matches!(
        from_compound(target, 2100, SearchWindow::CalendarRound),
        Err(EngineError::NoMatchFound { .. })
    ));
}

#[test]
fn unsupported_start_year_is_rejected_up_front() {
    let target = CompoundTarget::new(1, 1, 1).unwrap();
    assert!(matches!(
        from_compound(target, 1899, SearchWindow::Year),
        Err(EngineError::DateOutOfRange { .. })
    ));
}
