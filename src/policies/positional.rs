//! Positional rule - the letter must sit at exactly one of two positions.

use crate::record::PasswordRecord;

/// Checks that exactly one of the 1-indexed positions `min_bound` and
/// `max_bound` holds the record's letter.
///
/// A position outside the password never matches.
pub fn positional_policy(record: &PasswordRecord) -> bool {
    let letter = record.letter();
    let first = record.char_at(record.min_bound()) == Some(letter);
    let second = record.char_at(record.max_bound()) == Some(letter);
    first ^ second
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn record(min: u32, max: u32, letter: char, pwd: &str) -> PasswordRecord {
        PasswordRecord::new(min, max, letter, SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_positional_first_position_only() {
        assert!(positional_policy(&record(1, 3, 'a', "abcde")));
    }

    #[test]
    fn test_positional_second_position_only() {
        assert!(positional_policy(&record(1, 3, 'c', "abcde")));
    }

    #[test]
    fn test_positional_neither_position() {
        assert!(!positional_policy(&record(1, 3, 'b', "cdefg")));
    }

    #[test]
    fn test_positional_both_positions() {
        assert!(!positional_policy(&record(2, 9, 'c', "ccccccccc")));
    }

    #[test]
    fn test_positional_equal_bounds() {
        // Same position on both sides can never be an exclusive match
        assert!(!positional_policy(&record(2, 2, 'b', "abc")));
        assert!(!positional_policy(&record(2, 2, 'x', "abc")));
    }

    #[test]
    fn test_positional_out_of_range() {
        assert!(positional_policy(&record(1, 10, 'a', "abc")));
        assert!(!positional_policy(&record(5, 10, 'a', "abc")));
        assert!(positional_policy(&record(0, 3, 'c', "abc")));
        assert!(!positional_policy(&record(0, 0, 'a', "abc")));
    }

    #[test]
    fn test_positional_is_idempotent() {
        let rec = record(1, 3, 'a', "abcde");
        assert_eq!(positional_policy(&rec), positional_policy(&rec));
    }
}
