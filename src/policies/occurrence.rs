//! Occurrence rule - the letter must appear a bounded number of times.

use crate::record::PasswordRecord;

/// Checks that the record's letter occurs between `min_bound` and
/// `max_bound` times (inclusive).
///
/// The letter is compared literally, so `.` or `*` only match themselves.
pub fn occurrence_policy(record: &PasswordRecord) -> bool {
    let count = record.letter_count();
    let min = record.min_bound() as usize;
    let max = record.max_bound() as usize;
    (min..=max).contains(&count)
}
