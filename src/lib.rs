//! Password policy validation library
//!
//! Parses password records shaped like `1-3 a: abcde` and checks each one
//! against two independent rules:
//!
//! - **Occurrence count**: the letter appears between `min` and `max` times.
//! - **Position**: the letter sits at exactly one of the 1-indexed positions
//!   `min` and `max`.
//!
//! # Features
//!
//! - `cli` (default): Builds the `pwd-policy` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_INPUT`: Custom path to the input file
//!   (default: `./input.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_policy::{evaluate_file, get_input_path};
//!
//! let report = evaluate_file(get_input_path()).expect("Failed to evaluate input");
//! for line in report.lines() {
//!     println!("{}", line);
//! }
//! ```

// Internal modules
mod evaluator;
mod parser;
mod policies;
mod record;
mod tally;

// Public API
pub use evaluator::{
    Policy, PolicyReport, classify, evaluate_all, evaluate_file, evaluate_records,
};
pub use parser::{
    RecordError, get_input_path, load_records, load_records_from_path, parse_record, parse_records,
};
pub use policies::{occurrence_policy, positional_policy};
pub use record::PasswordRecord;
pub use tally::{Partition, PolicyTally};
