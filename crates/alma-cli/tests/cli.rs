//! End-to-end tests for the alma binary.

use almagemela::model::SoulmateModel;
use almagemela::primitives::Vector;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture_artifact(dir: &tempfile::TempDir) -> PathBuf {
    let model = SoulmateModel::new(
        vec![
            "age".to_string(),
            "people_met_per_year".to_string(),
            "social_events_per_month".to_string(),
            "personality_type_ENFP".to_string(),
            "location_Urban".to_string(),
        ],
        Vector::from_slice(&[0.002, 0.0001, 0.01, 0.05, 0.03]),
        0.1,
    )
    .expect("valid model parts");

    let path = dir.path().join("soulmate_model.alma");
    model.save(&path).expect("fixture save should succeed");
    path
}

fn alma() -> Command {
    Command::cargo_bin("alma").expect("binary builds")
}

#[test]
fn estimate_with_flags_prints_percentage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = fixture_artifact(&dir);

    alma()
        .args(["estimate", "--model"])
        .arg(&path)
        .args([
            "--age",
            "25",
            "--people-met",
            "100",
            "--events",
            "4",
            "--personality",
            "ENFP",
            "--location",
            "Urban",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Predicted Soulmate Probability"))
        .stdout(predicate::str::contains("28.0%"));
}

#[test]
fn estimate_partial_flags_fill_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = fixture_artifact(&dir);

    // Defaults: 25 / 100 / 4 / INTJ / Urban -> 0.1 + 0.05 + 0.01 + 0.04 + 0.03
    alma()
        .args(["estimate", "--model"])
        .arg(&path)
        .args(["--age", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("23.0%"));
}

#[test]
fn estimate_missing_artifact_prints_advisory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.alma");

    alma()
        .args(["estimate", "--model"])
        .arg(&path)
        .args(["--age", "25"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains(
            "Please ensure the model is trained and saved",
        ));
}

#[test]
fn estimate_rejects_unknown_personality() {
    alma()
        .args(["estimate", "--personality", "ABCD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown personality type"));
}

#[test]
fn inspect_shows_schema() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = fixture_artifact(&dir);

    alma()
        .args(["inspect", "--model"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("linear_regression"))
        .stdout(predicate::str::contains("Expected columns"))
        .stdout(predicate::str::contains("personality_type_ENFP"));
}

#[test]
fn validate_passes_good_artifact() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = fixture_artifact(&dir);

    alma()
        .args(["validate", "--model"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[PASS]"));
}

#[test]
fn validate_fails_corrupted_artifact() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = fixture_artifact(&dir);

    let mut bytes = std::fs::read(&path).expect("fixture readable");
    let idx = bytes.len() - 10;
    bytes[idx] ^= 0x01;
    std::fs::write(&path, bytes).expect("fixture writable");

    alma()
        .args(["validate", "--model"])
        .arg(&path)
        .assert()
        .failure()
        .code(5)
        .stdout(predicate::str::contains("[FAIL]"));
}

#[test]
fn interactive_estimate_accepts_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = fixture_artifact(&dir);

    // Five empty answers take every default, then decline another round.
    alma()
        .args(["estimate", "--model"])
        .arg(&path)
        .write_stdin("\n\n\n\n\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Predicted Soulmate Probability"))
        .stdout(predicate::str::contains("23.0%"));
}
