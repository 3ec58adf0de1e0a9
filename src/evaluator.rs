//! Policy evaluator - runs every rule over a parsed record collection.

use std::fmt;
use std::path::Path;

use crate::parser::{load_records_from_path, RecordError};
use crate::policies::{occurrence_policy, positional_policy};
use crate::record::PasswordRecord;
use crate::tally::{Partition, PolicyTally};

/// The supported password policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Letter count must fall within the bounds.
    OccurrenceCount,
    /// Letter must sit at exactly one of the two bound positions.
    Position,
}

impl Policy {
    /// Every policy, in report order.
    pub const ALL: [Policy; 2] = [Policy::OccurrenceCount, Policy::Position];

    pub fn label(self) -> &'static str {
        match self {
            Policy::OccurrenceCount => "Part 1",
            Policy::Position => "Part 2",
        }
    }

    pub fn check(self, record: &PasswordRecord) -> bool {
        match self {
            Policy::OccurrenceCount => occurrence_policy(record),
            Policy::Position => positional_policy(record),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Splits `records` into valid and invalid halves under `policy`.
pub fn classify(records: &[PasswordRecord], policy: Policy) -> Partition<'_> {
    Partition::split(records, |record| policy.check(record))
}

/// Runs one policy over `records` and counts the outcome.
pub fn evaluate_records(records: &[PasswordRecord], policy: Policy) -> PolicyTally {
    let tally = classify(records, policy).tally();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "{} ({:?}): {} valid, {} invalid",
        policy,
        policy,
        tally.valid,
        tally.invalid
    );

    tally
}

/// Per-policy tallies in [`Policy::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyReport {
    pub results: Vec<(Policy, PolicyTally)>,
}

impl PolicyReport {
    pub fn get(&self, policy: Policy) -> Option<PolicyTally> {
        self.results
            .iter()
            .find(|(p, _)| *p == policy)
            .map(|(_, tally)| *tally)
    }

    /// One human-readable line per policy.
    pub fn lines(&self) -> Vec<String> {
        self.results
            .iter()
            .map(|(policy, tally)| format!("{}: {}", policy, tally))
            .collect()
    }
}

/// Evaluates every policy over the same record collection.
pub fn evaluate_all(records: &[PasswordRecord]) -> PolicyReport {
    let results = Policy::ALL
        .iter()
        .map(|&policy| (policy, evaluate_records(records, policy)))
        .collect();
    PolicyReport { results }
}

/// Loads the file at `path` and evaluates every policy over its records.
///
/// # Errors
///
/// Propagates any [`RecordError`] from loading; nothing is evaluated in
/// that case.
pub fn evaluate_file<P: AsRef<Path>>(path: P) -> Result<PolicyReport, RecordError> {
    let records = load_records_from_path(path)?;
    Ok(evaluate_all(&records))
}
