mod common;

use common::{scratch_dir, write_results, SEASON_ONE, SEASON_TWO};
use std::process::Command;

fn binary() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_kicker-rating"));
    command
        .env_remove("KICKER_INPUT_DIR")
        .env_remove("KICKER_OUTPUT_DIR")
        .env_remove("KICKER_MISSED_GAMES")
        .env_remove("KICKER_PENALTY_FRACTION")
        .env("RUST_LOG", "warn");
    command
}

/// A directory with two result files produces one report per file plus the full timeline
#[test]
fn test_writes_reports_for_every_source() {
    let dir = scratch_dir();
    let output = dir.path().join("out");
    write_results(dir.path(), "kicker1.txt", SEASON_ONE);
    write_results(dir.path(), "kicker2.txt", SEASON_TWO);

    let result = binary()
        .args(["--input-dir", dir.path().to_str().unwrap(), "--output-dir", output.to_str().unwrap()])
        .args(["--mode", "continuous"])
        .output()
        .expect("Failed to execute kicker-rating");

    assert!(
        result.status.success(),
        "kicker-rating failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert!(output.join("Full_Timeline.json").exists());
    assert!(output.join("kicker1.json").exists());
    assert!(output.join("kicker2.json").exists());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Full Timeline (10 games)"));
}

#[test]
fn test_unparsable_file_is_skipped() {
    let dir = scratch_dir();
    write_results(dir.path(), "a.txt", SEASON_ONE);
    write_results(dir.path(), "b.txt", "Anna\tBen\tlots,0\n");

    let result = binary()
        .args(["--input-dir", dir.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute kicker-rating");

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("a (7 games)"));
    assert!(!stdout.contains("b ("));
}

#[test]
fn test_oversized_win_count_skips_only_that_file() {
    let dir = scratch_dir();
    write_results(dir.path(), "a.txt", SEASON_ONE);
    write_results(dir.path(), "b.txt", "Anna\tBen\t4000000000,0\n");

    let result = binary()
        .args(["--input-dir", dir.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute kicker-rating");

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("a (7 games)"));
    assert!(!stdout.contains("b ("));
    assert!(String::from_utf8_lossy(&result.stderr).contains("exceeds the limit"));
}

#[test]
fn test_invalid_penalty_fraction_exits_with_error() {
    let dir = scratch_dir();
    write_results(dir.path(), "a.txt", SEASON_ONE);

    let result = binary()
        .args(["--input-dir", dir.path().to_str().unwrap(), "--penalty-fraction", "1.5"])
        .output()
        .expect("Failed to execute kicker-rating");

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Invalid configuration"), "Got: {}", stderr);
}

#[test]
fn test_empty_directory_exits_with_error() {
    let dir = scratch_dir();

    let result = binary()
        .args(["--input-dir", dir.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute kicker-rating");

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("No result files found"));
}
