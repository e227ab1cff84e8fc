// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

/// A date or time string was rejected by the validators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The date is not a valid `YYYY-MM-DD` string.
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    Date(String),

    /// The time is not a valid `HH:MM` string.
    #[error("invalid time `{0}`, expected HH:MM")]
    Time(String),
}

/// A record in an agenda file is malformed.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line holds a date but no time.
    #[error("line {line}: missing time")]
    MissingTime { line: usize },

    /// The file ends right after the time, before the comment.
    #[error("line {line}: missing comment")]
    MissingComment { line: usize },

    /// The record is well formed but its date or time is out of range.
    #[error("line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: ValidationError,
    },
}

impl ParseError {
    /// The line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingTime { line }
            | ParseError::MissingComment { line }
            | ParseError::InvalidRecord { line, .. } => *line,
        }
    }
}

/// Errors returned by agenda operations.
#[derive(Debug, thiserror::Error)]
pub enum AgendaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Opening, reading, or writing an agenda file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An agenda file could not be parsed, nothing was loaded.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}
