// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Syntax and range checks for the fixed-width date and time strings.

/// Length of a `YYYY-MM-DD` date.
pub const DATE_LEN: usize = 10;

/// Length of a `HH:MM` time.
pub const TIME_LEN: usize = 5;

/// Checks whether `s` is a `YYYY-MM-DD` date with `year >= 1000`, month in
/// `1..=12` and day in `1..=31`.
///
/// No calendar check is done, so `2024-02-31` is accepted.
pub fn is_valid_date(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != DATE_LEN || b[4] != b'-' || b[7] != b'-' {
        return false;
    }

    match (number(&b[0..4]), number(&b[5..7]), number(&b[8..10])) {
        (Some(year), Some(month), Some(day)) => {
            year >= 1000 && (1..=12).contains(&month) && (1..=31).contains(&day)
        }
        _ => false,
    }
}

/// Checks whether `s` is a `HH:MM` time with hour in `0..=23` and minute in
/// `0..=59`.
pub fn is_valid_time(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != TIME_LEN || b[2] != b':' {
        return false;
    }

    match (number(&b[0..2]), number(&b[3..5])) {
        (Some(hour), Some(minute)) => hour <= 23 && minute <= 59,
        _ => false,
    }
}

/// Parses a run of ASCII digits, rejecting signs and whitespace.
fn number(digits: &[u8]) -> Option<u32> {
    digits.iter().try_fold(0u32, |acc, &c| {
        c.is_ascii_digit().then(|| acc * 10 + u32::from(c - b'0'))
    })
}
