//! Password record - one parsed line of policy input.

use secrecy::{ExposeSecret, SecretString};

/// A password together with the policy parameters it is checked against.
///
/// The bounds mean different things per policy: character positions for the
/// positional rule, an inclusive count range for the occurrence rule.
/// Fields are read-only once the record is built.
#[derive(Debug)]
pub struct PasswordRecord {
    min_bound: u32,
    max_bound: u32,
    letter: char,
    password: SecretString,
}

impl PasswordRecord {
    /// Builds a record. `min_bound <= max_bound` is not enforced.
    pub fn new(min_bound: u32, max_bound: u32, letter: char, password: SecretString) -> Self {
        Self {
            min_bound,
            max_bound,
            letter,
            password,
        }
    }

    pub fn min_bound(&self) -> u32 {
        self.min_bound
    }

    pub fn max_bound(&self) -> u32 {
        self.max_bound
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Character at a 1-indexed position, `None` when out of range.
    pub(crate) fn char_at(&self, position: u32) -> Option<char> {
        let index = usize::try_from(position).ok()?.checked_sub(1)?;
        self.password.expose_secret().chars().nth(index)
    }

    /// Number of literal occurrences of the record's letter.
    pub(crate) fn letter_count(&self) -> usize {
        self.password
            .expose_secret()
            .chars()
            .filter(|&c| c == self.letter)
            .count()
    }
}
