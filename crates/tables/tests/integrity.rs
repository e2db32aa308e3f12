//! Cross-table integrity checks: every table is a contiguous 1..=N run
//! with no duplicate names, and lookups agree with direct indexing.

use std::collections::HashSet;

use tonalamatl_tables::{
    DAY_SIGNS, MONTHS, NEMONTEMI, NUMBERS, month_at, month_by_name, nemontemi_at, number_at,
    sign_at, sign_by_name,
};

#[test]
fn sign_names_unique() {
    let nahuatl: HashSet<_> = DAY_SIGNS.iter().map(|s| s.nahuatl_name).collect();
    assert_eq!(nahuatl.len(), 20, "duplicate Nahuatl sign name");
    let english: HashSet<_> = DAY_SIGNS.iter().map(|s| s.english_name).collect();
    assert_eq!(english.len(), 20, "duplicate English sign name");
}

#[test]
fn month_names_unique() {
    let nahuatl: HashSet<_> = MONTHS.iter().map(|m| m.nahuatl_name).collect();
    assert_eq!(nahuatl.len(), 18, "duplicate Nahuatl month name");
    let english: HashSet<_> = MONTHS.iter().map(|m| m.english_name).collect();
    assert_eq!(english.len(), 18, "duplicate English month name");
}

#[test]
fn number_names_unique() {
    let names: HashSet<_> = NUMBERS.iter().map(|n| n.nahuatl_name).collect();
    assert_eq!(names.len(), 13, "duplicate number name");
}

#[test]
fn nemontemi_names_unique() {
    let names: HashSet<_> = NEMONTEMI.iter().map(|d| d.name).collect();
    assert_eq!(names.len(), 5, "duplicate nemontemi name");
}

#[test]
fn position_lookup_agrees_with_table_order() {
    for position in 1..=20u8 {
        assert_eq!(
            sign_at(position).unwrap().position,
            position,
            "sign_at({position}) returned the wrong entry"
        );
    }
    for value in 1..=13u8 {
        assert_eq!(number_at(value).unwrap().value, value);
    }
    for position in 1..=18u8 {
        assert_eq!(month_at(position).unwrap().position, position);
    }
    for index in 1..=5u8 {
        assert_eq!(nemontemi_at(index).unwrap().index, index);
    }
}

#[test]
fn name_lookup_roundtrip() {
    for sign in &DAY_SIGNS {
        assert_eq!(sign_by_name(sign.nahuatl_name).unwrap(), sign);
        assert_eq!(sign_by_name(sign.english_name).unwrap(), sign);
    }
    for month in &MONTHS {
        assert_eq!(month_by_name(month.nahuatl_name).unwrap(), month);
        assert_eq!(month_by_name(month.english_name).unwrap(), month);
    }
}

#[test]
fn no_blank_fields() {
    for sign in &DAY_SIGNS {
        assert!(!sign.nahuatl_name.is_empty());
        assert!(!sign.meaning.is_empty());
        assert!(!sign.deity.is_empty());
    }
    for month in &MONTHS {
        assert!(!month.patron.is_empty());
        assert!(!month.agricultural.is_empty());
    }
    for day in &NEMONTEMI {
        assert!(!day.meaning.is_empty());
    }
}
