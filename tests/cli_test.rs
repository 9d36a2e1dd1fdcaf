//! CLI integration tests: run the `wordhood` binary as a subprocess.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)] // cargo_bin() warns about custom build-dir
fn wordhood_cmd() -> Command {
    let mut cmd =
        Command::cargo_bin("wordhood").expect("wordhood binary should be built by cargo");
    cmd.env_remove("WORDHOOD_ALPHABET")
        .env_remove("WORDHOOD_MODE")
        .env_remove("WORDHOOD_THREADS");
    cmd
}

#[test]
fn test_cli_writes_neighborhood() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("words.txt");

    wordhood_cmd()
        .args(["cat", "1", out.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let words: Vec<&str> = content.split('\n').collect();
    assert!(words.len() >= 104 && words.len() <= 182);
    assert!(words.contains(&"at"));
    assert!(words.contains(&"bat"));
    assert!(words.contains(&"catt"));
    assert!(!words.contains(&"cat"));
    assert!(!content.ends_with('\n'));
}

#[test]
fn test_cli_sorted_custom_alphabet() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("words.txt");

    wordhood_cmd()
        .args(["--sort", "--alphabet", "ab", "a", "1", out.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), "\naa\nab\nb\nba");
}

#[test]
fn test_cli_hyphenated_word() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("words.txt");

    wordhood_cmd()
        .args(["-ab", "1", out.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let words: Vec<&str> = content.split('\n').collect();
    assert_eq!(words.len(), 181);
    assert!(words.contains(&"ab"));
    assert!(words.contains(&"-b"));
    assert!(words.contains(&"xab"));
}

#[test]
fn test_cli_alphabet_from_environment() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("words.txt");

    wordhood_cmd()
        .env("WORDHOOD_ALPHABET", "x")
        .args(["--sort", "", "1", out.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), "x");
}

#[test]
fn test_cli_rejects_invalid_distance() {
    for bad in ["0", "-3", "abc"] {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("words.txt");

        wordhood_cmd()
            .args(["cat", bad, out.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "Error: Distance must be a positive integer.",
            ));

        assert!(!out.exists(), "output written for distance {bad:?}");
    }
}

#[test]
fn test_cli_invalid_distance_keeps_existing_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("words.txt");
    fs::write(&out, "previous").unwrap();

    wordhood_cmd()
        .args(["cat", "0", out.to_str().unwrap()])
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&out).unwrap(), "previous");
}

#[test]
fn test_cli_wrong_argument_count() {
    wordhood_cmd()
        .args(["cat", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("<OUTPUT_FILE>"));
}

#[test]
fn test_cli_unwritable_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("missing").join("words.txt");

    wordhood_cmd()
        .args(["cat", "1", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: I/O error"));
}

#[test]
fn test_cli_json_summary() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("words.txt");

    let output = wordhood_cmd()
        .args([
            "--summary",
            "--format",
            "json",
            "--alphabet",
            "ab",
            "ab",
            "2",
            out.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["word"], "ab");
    assert_eq!(summary["distance"], 2);
    assert_eq!(summary["mode"], "frontier");
    assert_eq!(summary["levels"].as_array().unwrap().len(), 2);

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(
        summary["total_words"].as_u64().unwrap() as usize,
        written.split('\n').count()
    );
}
