//! Record parsing and input loading
//!
//! Turns lines shaped like `1-3 a: abcde` into [`PasswordRecord`]s.

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use thiserror::Error;

use crate::record::PasswordRecord;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Input file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read input file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Input file is empty: {0}")]
    EmptyInput(PathBuf),
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: &'static str },
}

/// Returns the input file path.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY_INPUT`
/// 2. Default path `./input.txt`
pub fn get_input_path() -> PathBuf {
    std::env::var("PWD_POLICY_INPUT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./input.txt"))
}

/// Loads records from the path returned by [`get_input_path`].
pub fn load_records() -> Result<Vec<PasswordRecord>, RecordError> {
    let path = get_input_path();
    load_records_from_path(&path)
}

/// Loads and parses every record in the file at `path`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist or cannot be read
/// - File contains no records
/// - Any line is malformed (no partial result is returned)
pub fn load_records_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<PasswordRecord>, RecordError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Input loading FAILED: file not found {}", path.display());
        return Err(RecordError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| RecordError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Input loading FAILED: empty file {}", path.display());
        return Err(RecordError::EmptyInput(path.to_path_buf()));
    }

    let records = parse_records(&content)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Loaded {} records from {:?}", records.len(), path);

    Ok(records)
}

/// Parses every line of `content`, stopping at the first bad one.
pub fn parse_records(content: &str) -> Result<Vec<PasswordRecord>, RecordError> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| parse_record(line, index + 1))
        .collect()
}

/// Parses a single `<min>-<max> <letter>: <password>` line.
///
/// `line_number` is only used to report errors.
pub fn parse_record(line: &str, line_number: usize) -> Result<PasswordRecord, RecordError> {
    let malformed = |reason: &'static str| {
        #[cfg(feature = "tracing")]
        tracing::debug!("Rejecting line {}: {}", line_number, reason);
        RecordError::MalformedRecord {
            line: line_number,
            reason,
        }
    };

    let mut parts = line.splitn(3, ' ');
    let (Some(bounds), Some(letter_part), Some(password)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed("expected `<min>-<max> <letter>: <password>`"));
    };

    let (min, max) = bounds
        .split_once('-')
        .ok_or_else(|| malformed("bounds must be `<min>-<max>`"))?;
    let min_bound = parse_bound(min)
        .ok_or_else(|| malformed("minimum bound is not a non-negative integer"))?;
    let max_bound = parse_bound(max)
        .ok_or_else(|| malformed("maximum bound is not a non-negative integer"))?;

    let letter = letter_part
        .strip_suffix(':')
        .ok_or_else(|| malformed("letter must be followed by `:`"))?;
    let mut chars = letter.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return Err(malformed("letter must be a single character"));
    };

    let password = password.trim();
    if password.is_empty() {
        return Err(malformed("password is empty"));
    }

    Ok(PasswordRecord::new(
        min_bound,
        max_bound,
        letter,
        SecretString::new(password.to_string().into()),
    ))
}

/// Digits only: `u32::from_str` would also take a leading `+`.
fn parse_bound(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
