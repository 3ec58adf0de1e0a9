//! Valid/invalid partitioning and counting.

use std::fmt;

use crate::record::PasswordRecord;

/// Records split by the outcome of one policy.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub valid: Vec<&'a PasswordRecord>,
    pub invalid: Vec<&'a PasswordRecord>,
}

impl<'a> Partition<'a> {
    /// Splits `records` according to `check`, keeping input order in each half.
    pub fn split(records: &'a [PasswordRecord], check: impl Fn(&PasswordRecord) -> bool) -> Self {
        let (valid, invalid): (Vec<_>, Vec<_>) = records.iter().partition(|record| check(*record));
        Self { valid, invalid }
    }

    pub fn tally(&self) -> PolicyTally {
        PolicyTally {
            invalid: self.invalid.len(),
            valid: self.valid.len(),
        }
    }
}

/// Counts produced by running one policy over a record collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyTally {
    pub invalid: usize,
    pub valid: usize,
}

impl PolicyTally {
    pub fn total(&self) -> usize {
        self.invalid + self.valid
    }
}

impl fmt::Display for PolicyTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "There are {} valid passwords and {} invalid passwords",
            self.valid, self.invalid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::{ExposeSecret, SecretString};

    fn records(passwords: &[&str]) -> Vec<PasswordRecord> {
        passwords
            .iter()
            .map(|p| PasswordRecord::new(1, 1, 'a', SecretString::new(p.to_string().into())))
            .collect()
    }

    #[test]
    fn test_split_preserves_order() {
        let recs = records(&["a1", "b1", "a2", "b2"]);
        let partition = Partition::split(&recs, |r| r.password().expose_secret().starts_with('a'));

        let valid: Vec<_> = partition.valid.iter().map(|r| r.password().expose_secret()).collect();
        let invalid: Vec<_> = partition
            .invalid
            .iter()
            .map(|r| r.password().expose_secret())
            .collect();
        assert_eq!(valid, vec!["a1", "a2"]);
        assert_eq!(invalid, vec!["b1", "b2"]);
    }

    #[test]
    fn test_tally_counts_each_half() {
        let recs = records(&["a", "b", "c"]);
        let tally = Partition::split(&recs, |r| r.password().expose_secret() != "b").tally();
        assert_eq!(tally, PolicyTally { invalid: 1, valid: 2 });
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_tally_empty() {
        let tally = Partition::default().tally();
        assert_eq!(tally, PolicyTally::default());
    }

    #[test]
    fn test_tally_display() {
        let tally = PolicyTally { invalid: 1, valid: 2 };
        assert_eq!(
            tally.to_string(),
            "There are 2 valid passwords and 1 invalid passwords"
        );
    }
}
