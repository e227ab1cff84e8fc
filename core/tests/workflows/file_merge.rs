// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Save, merge-load, and backing file workflows.

use std::collections::HashMap;

use tokio::fs;

use agenda_core::{AgendaError, Config, ParseError, Planner, SaveOutcome};

use crate::common::{
    SAMPLE_AGENDA, assert_file_exists, assert_file_not_exists, assert_triples, setup_temp_dirs,
    test_config,
};

fn multiset(planner: &Planner) -> HashMap<(String, String, String), usize> {
    let mut map = HashMap::new();
    for e in planner.agenda() {
        let key = (
            e.date().to_string(),
            e.time().to_string(),
            e.comment().to_string(),
        );
        *map.entry(key).or_default() += 1;
    }
    map
}

#[tokio::test]
async fn file_merge_save_then_load_round_trip() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs.path("saved.txt");

    let mut source = Planner::new(Config::default()).unwrap();
    source.add_event("2024-03-10", "09:00", "standup").unwrap();
    source.add_event("2024-01-05", "14:30", "review with  spaces").unwrap();
    source.add_event("2024-01-05", "14:30", "").unwrap();

    let outcome = source.save(&path).await.unwrap();
    assert_eq!(outcome, SaveOutcome::Saved(3));
    assert_file_exists(&path);

    let mut target = Planner::new(Config::default()).unwrap();
    assert_eq!(target.load(&path).await.unwrap(), 3);
    assert_eq!(multiset(&source), multiset(&target));
}

#[tokio::test]
async fn file_merge_save_empty_is_a_notice() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs.path("empty.txt");

    let planner = Planner::new(Config::default()).unwrap();
    assert_eq!(
        planner.save(&path).await.unwrap(),
        SaveOutcome::NothingToSave
    );
    assert_file_not_exists(&path);
}

#[tokio::test]
async fn file_merge_save_keeps_memory_order() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let input = temp_dirs
        .create_agenda_file("input.txt", SAMPLE_AGENDA)
        .await
        .unwrap();
    let output = temp_dirs.path("output.txt");

    let mut planner = Planner::new(Config::default()).unwrap();
    planner.load(&input).await.unwrap();
    planner.save(&output).await.unwrap();

    assert_eq!(fs::read_to_string(&output).await.unwrap(), SAMPLE_AGENDA);
}

#[tokio::test]
async fn file_merge_load_prepends_then_display_sorts() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs
        .create_agenda_file("input.txt", SAMPLE_AGENDA)
        .await
        .unwrap();

    let mut planner = Planner::new(Config::default()).unwrap();
    planner.add_event("2024-02-01", "12:00", "existing").unwrap();
    assert_eq!(planner.load(&path).await.unwrap(), 3);

    assert_triples(
        planner.agenda(),
        &[
            ("2024-03-10", "09:00", "standup"),
            ("2024-01-05", "14:30", "code review"),
            ("2024-01-05", "08:00", "coffee with Sam"),
            ("2024-02-01", "12:00", "existing"),
        ],
    );

    let listing = planner.display();
    assert!(listing.resorted());
    let lines: Vec<_> = listing.lines().collect();
    assert_eq!(
        lines,
        [
            "2024-01-05 08:00 coffee with Sam",
            "2024-01-05 14:30 code review",
            "2024-02-01 12:00 existing",
            "2024-03-10 09:00 standup",
        ]
    );
}

#[tokio::test]
async fn file_merge_missing_time_leaves_agenda_unchanged() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs
        .create_agenda_file("broken.txt", "2024-03-10 09:00 standup\n2024-03-11\n")
        .await
        .unwrap();

    let mut planner = Planner::new(Config::default()).unwrap();
    planner.add_event("2024-02-01", "12:00", "existing").unwrap();
    let before = planner.agenda().clone();

    let err = planner.load(&path).await.unwrap_err();
    match err {
        AgendaError::Parse { path: p, source } => {
            assert_eq!(p, path);
            assert_eq!(source, ParseError::MissingTime { line: 2 });
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
    assert_eq!(planner.agenda(), &before);
}

#[tokio::test]
async fn file_merge_missing_file_is_io_error() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let mut planner = Planner::new(Config::default()).unwrap();
    planner.add_event("2024-02-01", "12:00", "existing").unwrap();

    let err = planner.load(&temp_dirs.path("nope.txt")).await.unwrap_err();
    assert!(matches!(err, AgendaError::Io { .. }));
    assert_eq!(planner.agenda().len(), 1);
}

#[tokio::test]
async fn file_merge_save_to_unwritable_path() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let mut planner = Planner::new(Config::default()).unwrap();
    planner.add_event("2024-02-01", "12:00", "existing").unwrap();
    let before = planner.agenda().clone();

    let path = temp_dirs.path("missing-dir").join("agenda.txt");
    let err = planner.save(&path).await.unwrap_err();
    assert!(matches!(err, AgendaError::Io { .. }));
    assert_eq!(planner.agenda(), &before);
}

#[tokio::test]
async fn file_merge_open_missing_backing_file_starts_empty() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs.path("nested").join("agenda.txt");

    let planner = Planner::open(test_config(&path)).await.unwrap();
    assert!(planner.agenda().is_empty());
    assert_eq!(planner.backing_path(), Some(path.as_path()));

    // unchanged planners never write
    planner.close().await.unwrap();
    assert_file_not_exists(&path);
}

#[tokio::test]
async fn file_merge_backing_file_written_back_on_close() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs.path("nested").join("agenda.txt");

    let mut planner = Planner::open(test_config(&path)).await.unwrap();
    planner.add_event("2024-03-10", "09:00", "standup").unwrap();
    planner.close().await.unwrap();
    assert_eq!(
        fs::read_to_string(&path).await.unwrap(),
        "2024-03-10 09:00 standup\n"
    );

    let mut planner = Planner::open(test_config(&path)).await.unwrap();
    assert_eq!(planner.agenda().len(), 1);
    planner.clear();
    planner.close().await.unwrap();
    assert_eq!(fs::read_to_string(&path).await.unwrap(), "");
}

#[tokio::test]
async fn file_merge_open_sorts_and_writes_back_backing_file() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs
        .create_agenda_file("agenda.txt", SAMPLE_AGENDA)
        .await
        .unwrap();

    let mut planner = Planner::open(test_config(&path)).await.unwrap();
    assert!(planner.agenda().is_sorted());
    assert!(!planner.display().resorted());
    planner.close().await.unwrap();

    assert_eq!(
        fs::read_to_string(&path).await.unwrap(),
        "2024-01-05 08:00 coffee with Sam\n2024-01-05 14:30 code review\n2024-03-10 09:00 standup\n"
    );
}

#[tokio::test]
async fn file_merge_add_to_out_of_order_backing_file() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs
        .create_agenda_file("agenda.txt", SAMPLE_AGENDA)
        .await
        .unwrap();

    let mut planner = Planner::open(test_config(&path)).await.unwrap();
    planner.add_event("2024-02-01", "12:00", "new").unwrap();
    assert!(planner.agenda().is_sorted());
    planner.close().await.unwrap();

    assert_eq!(
        fs::read_to_string(&path).await.unwrap(),
        "\
2024-01-05 08:00 coffee with Sam
2024-01-05 14:30 code review
2024-02-01 12:00 new
2024-03-10 09:00 standup
"
    );
}

#[tokio::test]
async fn file_merge_open_broken_backing_file_fails() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let path = temp_dirs
        .create_agenda_file("agenda.txt", "2024-03-10\n")
        .await
        .unwrap();

    let result = Planner::open(test_config(&path)).await;
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&path).await.unwrap(), "2024-03-10\n");
}
