// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use std::fmt;

use crate::ValidationError;
use crate::validate::{is_valid_date, is_valid_time};

/// Default storage bound for comments, in characters.
pub const DEFAULT_MAX_COMMENT_LEN: usize = 99;

/// A single agenda entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    date: String,
    time: String,
    comment: String,
}

impl Event {
    /// Creates a validated event, keeping at most [`DEFAULT_MAX_COMMENT_LEN`]
    /// characters of the comment.
    pub fn new(date: &str, time: &str, comment: &str) -> Result<Self, ValidationError> {
        Self::with_comment_limit(date, time, comment, DEFAULT_MAX_COMMENT_LEN)
    }

    /// Creates a validated event.
    ///
    /// The comment is cut at its first line break and truncated to
    /// `max_comment_len` characters.
    pub fn with_comment_limit(
        date: &str,
        time: &str,
        comment: &str,
        max_comment_len: usize,
    ) -> Result<Self, ValidationError> {
        if !is_valid_date(date) {
            return Err(ValidationError::Date(date.to_string()));
        }
        if !is_valid_time(time) {
            return Err(ValidationError::Time(time.to_string()));
        }

        Ok(Self {
            date: date.to_string(),
            time: time.to_string(),
            comment: normalize_comment(comment, max_comment_len),
        })
    }

    /// Builds an event straight from a parsed record, without validation.
    pub(crate) fn from_record(date: &str, time: &str, comment: &str) -> Self {
        Self {
            date: date.to_string(),
            time: time.to_string(),
            comment: comment.to_string(),
        }
    }

    /// Date as `YYYY-MM-DD`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Time as `HH:MM`.
    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// The sort key, compared lexicographically.
    pub fn key(&self) -> (&str, &str) {
        (&self.date, &self.time)
    }

    /// Compares two events by their sort key only.
    pub fn cmp_key(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }

    /// Whether this event is scheduled at the given date and time.
    pub fn is_at(&self, date: &str, time: &str) -> bool {
        self.date == date && self.time == time
    }
}

/// Formats the event as a persisted record, without the line break.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.time, self.comment)
    }
}

fn normalize_comment(raw: &str, max_len: usize) -> String {
    let line = raw.split('\n').next().unwrap_or_default();
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.chars().take(max_len).collect()
}
