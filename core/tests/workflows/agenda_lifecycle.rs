// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Add, list, delete, and clear workflows on an in-memory planner.

use agenda_core::{ClearOutcome, Config, Planner, ValidationError};

use crate::common::assert_triples;

fn planner() -> Planner {
    Planner::new(Config::default()).unwrap()
}

#[test]
fn lifecycle_date_ordering_dominates() {
    let mut planner = planner();
    planner.add_event("2024-03-10", "09:00", "standup").unwrap();
    planner.add_event("2024-01-05", "14:30", "review").unwrap();

    let listing = planner.display();
    assert!(!listing.resorted());
    let lines: Vec<_> = listing.lines().collect();
    assert_eq!(
        lines,
        ["2024-01-05 14:30 review", "2024-03-10 09:00 standup"]
    );
}

#[test]
fn lifecycle_duplicate_keys_delete_earliest_inserted() {
    let mut planner = planner();
    planner.add_event("2024-01-01", "10:00", "A").unwrap();
    planner.add_event("2024-01-01", "10:00", "B").unwrap();
    assert_eq!(planner.agenda().len(), 2);

    let deleted = planner.delete_event("2024-01-01", "10:00").unwrap();
    assert_eq!(deleted.unwrap().comment(), "A");
    assert_triples(planner.agenda(), &[("2024-01-01", "10:00", "B")]);

    let lines: Vec<_> = planner.display().lines().collect();
    assert_eq!(lines, ["2024-01-01 10:00 B"]);
}

#[test]
fn lifecycle_delete_twice() {
    let mut planner = planner();
    planner.add_event("2024-01-01", "10:00", "once").unwrap();
    planner.add_event("2024-06-01", "10:00", "kept").unwrap();

    assert!(planner.delete_event("2024-01-01", "10:00").unwrap().is_some());
    let before = planner.agenda().clone();
    assert!(planner.delete_event("2024-01-01", "10:00").unwrap().is_none());
    assert_eq!(planner.agenda(), &before);
}

#[test]
fn lifecycle_rejected_add_leaves_agenda_untouched() {
    let mut planner = planner();
    planner.add_event("2024-01-01", "10:00", "ok").unwrap();

    let err = planner.add_event("2024-1-1", "10:00", "bad").unwrap_err();
    assert_eq!(err, ValidationError::Date("2024-1-1".to_string()));
    let err = planner.add_event("2024-01-01", "24:00", "bad").unwrap_err();
    assert_eq!(err, ValidationError::Time("24:00".to_string()));

    assert_triples(planner.agenda(), &[("2024-01-01", "10:00", "ok")]);
}

#[test]
fn lifecycle_rejected_delete() {
    let mut planner = planner();
    planner.add_event("2024-01-01", "10:00", "ok").unwrap();

    assert!(planner.delete_event("2024-01-01", "1000").is_err());
    assert_eq!(planner.agenda().len(), 1);
}

#[test]
fn lifecycle_update_is_delete_then_insert() {
    let mut planner = planner();
    planner.add_event("2024-01-01", "10:00", "draft").unwrap();
    planner.add_event("2024-01-02", "10:00", "other").unwrap();

    planner.delete_event("2024-01-01", "10:00").unwrap();
    planner.add_event("2024-01-03", "10:00", "moved").unwrap();

    assert_triples(
        planner.agenda(),
        &[
            ("2024-01-02", "10:00", "other"),
            ("2024-01-03", "10:00", "moved"),
        ],
    );
}

#[test]
fn lifecycle_clear() {
    let mut planner = planner();
    assert_eq!(planner.clear(), ClearOutcome::AlreadyEmpty);

    planner.add_event("2024-01-01", "10:00", "A").unwrap();
    planner.add_event("2024-01-02", "10:00", "B").unwrap();
    assert_eq!(planner.clear(), ClearOutcome::Cleared(2));
    assert!(planner.display().is_empty());

    // still usable afterwards
    planner.add_event("2024-01-03", "10:00", "C").unwrap();
    assert_eq!(planner.agenda().len(), 1);
}

#[test]
fn lifecycle_always_sorted_after_adds() {
    let mut planner = planner();
    let keys = [
        ("2025-07-14", "12:00"),
        ("2023-11-02", "07:45"),
        ("2025-07-14", "08:30"),
        ("1999-12-31", "23:59"),
        ("2025-07-14", "12:00"),
        ("2024-02-29", "00:00"),
    ];
    for (date, time) in keys {
        planner.add_event(date, time, "x").unwrap();
        assert!(planner.agenda().is_sorted());
    }
}
