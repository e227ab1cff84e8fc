// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::path::Path;

use agenda_core::Agenda;

/// Asserts that the agenda holds exactly these `(date, time, comment)`
/// triples, in this order.
///
/// # Panics
///
/// Panics if the agenda content or order differs.
#[allow(dead_code)]
pub fn assert_triples(agenda: &Agenda, expected: &[(&str, &str, &str)]) {
    let actual: Vec<_> = agenda
        .iter()
        .map(|e| (e.date(), e.time(), e.comment()))
        .collect();
    assert_eq!(actual, expected, "Agenda content mismatch");
}

/// Asserts that a file exists at the given path.
///
/// # Panics
///
/// Panics if the file doesn't exist.
#[allow(dead_code)]
pub fn assert_file_exists<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    assert!(path.exists(), "File does not exist: {}", path.display());
}

/// Asserts that a file does NOT exist at the given path.
///
/// # Panics
///
/// Panics if the file exists.
#[allow(dead_code)]
pub fn assert_file_not_exists<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    assert!(!path.exists(), "File should not exist: {}", path.display());
}
