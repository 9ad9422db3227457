//! End-to-end tests for the `anticipate` binary.
//!
//! stdout is a pipe under the test harness, so `--color auto` renders plain
//! text. `--width` is passed everywhere to keep frame widths independent of the
//! terminal the tests run in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn anticipate() -> Command {
    let mut cmd = Command::cargo_bin("anticipate").unwrap();
    cmd.env_remove("NO_COLOR").env_remove("RUST_LOG");
    cmd
}

#[test]
fn render_json_snapshot() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("frame.json");
    fs::write(
        &path,
        r#"{
            "state": "active",
            "message": "Color",
            "typed": { "text": "bl", "cursor": 2 },
            "matches": ["black", "blue"],
            "highlighted": 1
        }"#,
    )
    .unwrap();

    anticipate()
        .args(["--width", "200", "render"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\n ┌ Color "))
        .stdout(predicate::str::contains("› blue"))
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn render_toml_snapshot_with_follow() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("frame.toml");
    fs::write(
        &path,
        r#"
message = "Pick"
matches = ["one", "two", "three", "four", "five", "six"]
scroll = 3
highlighted = 5
"#,
    )
    .unwrap();

    anticipate()
        .args(["--width", "200", "render", "--follow"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("› six"))
        .stdout(predicate::str::contains("one").not());
}

#[test]
fn render_from_stdin() {
    anticipate()
        .args(["--width", "200", "--color", "always", "render", "-"])
        .write_stdin(r#"{ "message": "Name", "state": "cancel", "placeholder": "E.g. Ada" }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[2;9mE.g. Ada\x1b[0m"))
        .stdout(predicate::str::contains("Cancelled."));
}

#[test]
fn inconsistent_snapshot_fails() {
    anticipate()
        .args(["render", "-"])
        .write_stdin(r#"{ "state": "error", "message": "Name" }"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no error message"));
}

#[test]
fn missing_snapshot_file_fails() {
    anticipate()
        .args(["render", "/nonexistent/frame.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read snapshot"));
}

#[test]
fn theme_round_trips_through_theme_flag() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("theme.toml");
    fs::write(&path, "emphasis = \"magenta\"\n\n[glyphs]\npointer = \">\"\n").unwrap();

    anticipate()
        .args(["--width", "200", "--theme"])
        .arg(&path)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("emphasis = \"magenta\""))
        .stdout(predicate::str::contains("pointer = \">\""))
        .stdout(predicate::str::contains("min_width = 60"));
}

#[test]
fn narrow_width_shrinks_min_width() {
    anticipate()
        .args(["--width", "30", "theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("min_width = 24"));
}

#[test]
fn bad_theme_glyph_is_reported() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("theme.toml");
    fs::write(&path, "[glyphs]\nthumb = \"█\"\npointer = \"👉\"\n").unwrap();

    anticipate()
        .arg("--theme")
        .arg(&path)
        .arg("theme")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pointer"));
}

#[test]
fn demo_walks_through_every_state() {
    anticipate()
        .args(["--width", "200", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# idle"))
        .stdout(predicate::str::contains("# submit"))
        .stdout(predicate::str::contains("⚠ Pick a color from the list."))
        .stdout(predicate::str::contains("⚠ Cancelled."));
}
