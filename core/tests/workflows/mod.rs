// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the agenda-core crate.
//!
//! These tests drive the planner through multi-step sessions, including
//! saving, merge-loading, and writing back to a backing file.

mod agenda_lifecycle;
mod file_merge;
