//! Negative-safe cyclic arithmetic.

/// Maps a signed elapsed-day offset onto a 1-based cycle position.
///
/// `anchor_day` is the 1-based position of day zero (the anchor date)
/// within the cycle. Euclidean remainder keeps the result in
/// `1..=len` for any sign of `elapsed`; a truncating `%` would yield
/// negative positions for dates before the anchor.
pub(crate) fn cycle_day(elapsed: i64, anchor_day: u16, len: i64) -> u16 {
    let pos = (elapsed + i64::from(anchor_day) - 1).rem_euclid(len) + 1;
    u16::try_from(pos).expect("cycle position fits in u16 for all supported cycle lengths")
}
