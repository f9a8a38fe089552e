//! End-to-end tests for the `labyrinth` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A small custom catalog: a two-room loop.
const LOOP_CATALOG: &str = r#"{
  "rooms": [
    {
      "id": "11",
      "name": "East Wing",
      "doors": [{ "label": "Corridor", "target": "12" }]
    },
    {
      "id": "12",
      "name": "West Wing",
      "doors": [{ "label": "Corridor", "target": "11", "note": "Back east." }]
    }
  ]
}"#;

fn labyrinth() -> Command {
    Command::cargo_bin("labyrinth").unwrap()
}

fn write_catalog(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

// ---------------------------------------------------------------------------
// rooms
// ---------------------------------------------------------------------------

#[test]
fn rooms_lists_built_in_map() {
    labyrinth()
        .arg("rooms")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Lobby (2,2,3)")
                .and(predicate::str::contains("Silent Square (4,9,9)"))
                .and(predicate::str::contains("9 authored rooms")),
        );
}

#[test]
fn rooms_uses_custom_catalog() {
    let (_dir, path) = write_catalog(LOOP_CATALOG);
    labyrinth()
        .args(["--catalog", path.to_str().unwrap(), "rooms"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("East Wing")
                .and(predicate::str::contains("2 authored rooms"))
                .and(predicate::str::contains("The Lobby").not()),
        );
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_authored_room() {
    labyrinth()
        .args(["show", "442"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Broken Stair (4,4,2)")
                .and(predicate::str::contains("[1] Climb out → 223"))
                .and(predicate::str::contains("Reached from")),
        );
}

#[test]
fn show_uncharted_room() {
    labyrinth()
        .args(["show", "779"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Uncharted Node (779)")
                .and(predicate::str::contains("uncharted"))
                .and(predicate::str::contains("[1] Echo 1 → 779 → 779")),
        );
}

#[test]
fn show_story_prints_storyboard() {
    labyrinth()
        .args(["show", "223", "--story"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Signature: total 7, spread 1, mod9 7, apex 2, parity 001")
                .and(predicate::str::contains("Mood: electric, on edge"))
                .and(predicate::str::contains("Camera: static medium shot")),
        );
}

#[test]
fn show_without_story_flag_omits_storyboard() {
    labyrinth()
        .args(["show", "223"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signature:").not());
}

#[test]
fn show_rejects_malformed_id() {
    labyrinth()
        .args(["show", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed room id"));
}

// ---------------------------------------------------------------------------
// walk / explore
// ---------------------------------------------------------------------------

#[test]
fn leftmost_walk_closes_loop() {
    labyrinth()
        .args(["walk"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Hall of Mirrors")
                .and(predicate::str::contains("4 steps, stopped: loop closed at 779")),
        );
}

#[test]
fn walk_respects_step_budget() {
    labyrinth()
        .args(["walk", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 steps, stopped: step budget used up"));
}

#[test]
fn random_walk_json_is_reproducible() {
    let run = || {
        labyrinth()
            .args(["walk", "-S", "random", "--seed", "7", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let first = run();
    assert_eq!(first, run());

    let value: serde_json::Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(value["path"][0], "223");
}

#[test]
fn explore_json_summary() {
    let output = labyrinth()
        .args(["explore", "--depth", "2", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["rooms"], 8);
    assert_eq!(value["doors_tried"], 9);
    assert_eq!(value["status"], "completed");
}

#[test]
fn explore_reports_room_limit() {
    labyrinth()
        .args(["explore", "--max-rooms", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3-room limit"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_moves_and_reverses() {
    labyrinth()
        .arg("play")
        .write_stdin("1\nback\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Twin Gate (3,3,5)")
                .and(predicate::str::contains("You step back into 223."))
                .and(predicate::str::contains("Goodnight, wanderer.")),
        );
}

#[test]
fn play_reports_errors_and_continues() {
    labyrinth()
        .arg("play")
        .write_stdin("4\nback\npath\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("there is no door 4 here")
                .and(predicate::str::contains("already at the start room"))
                .and(predicate::str::contains("1 rooms deep")),
        );
}

#[test]
fn play_story_and_signed_door_numbers() {
    labyrinth()
        .arg("play")
        .write_stdin("+1\nstory\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("unknown command: +1")
                .and(predicate::str::contains("Scene: The Lobby (2,2,3)  [223]"))
                .and(predicate::str::contains("The Twin Gate").not()),
        );
}

#[test]
fn play_from_custom_start() {
    let (_dir, path) = write_catalog(LOOP_CATALOG);
    labyrinth()
        .args(["--catalog", path.to_str().unwrap(), "play", "--start", "11"])
        .write_stdin("1\n1\nturn\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("West Wing  [12]")
                .and(predicate::str::contains("Trail: 11/12/11"))
                .and(predicate::str::contains("Door IN [1] 12")),
        );
}

// ---------------------------------------------------------------------------
// export / catalog loading
// ---------------------------------------------------------------------------

#[test]
fn export_round_trips_through_catalog_flag() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("map.json");

    labyrinth()
        .args(["export", "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 9 rooms"));

    labyrinth()
        .args(["--catalog", out.to_str().unwrap(), "show", "499"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Silent Square (4,9,9)"));
}

#[test]
fn export_to_stdout() {
    labyrinth()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rooms\"").and(predicate::str::contains("\"223\"")));
}

#[test]
fn invalid_catalog_json_fails() {
    let (_dir, path) = write_catalog("{ not json");
    labyrinth()
        .args(["--catalog", path.to_str().unwrap(), "rooms"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid catalog JSON"));
}

#[test]
fn catalog_with_duplicate_rooms_fails() {
    let (_dir, path) = write_catalog(
        r#"{"rooms": [
            {"id": "5", "name": "A", "doors": [{"label": "x", "target": "6"}]},
            {"id": "5", "name": "B", "doors": [{"label": "y", "target": "7"}]}
        ]}"#,
    );
    labyrinth()
        .args(["--catalog", path.to_str().unwrap(), "rooms"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate room in catalog: 5"));
}

#[test]
fn missing_catalog_file_fails() {
    labyrinth()
        .args(["--catalog", "/nonexistent/catalog.json", "rooms"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read catalog"));
}
