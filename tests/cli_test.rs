//! Command line tests.
//!
//! Runs the `vimdown` binary against the fixtures.

#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn vimdown(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vimdown"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_convert_to_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("recipes.txt");
    let input = fixture("rigellians.md");

    let result = vimdown(&[input.to_str().unwrap(), output.to_str().unwrap()]);
    assert!(result.status.success());

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("recipes.txt\n\n"));
    assert!(text.contains("*recipes-how_to_cook_for_forty_humans*"));

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("recipes.txt: 4 headings"));
}

#[test]
fn test_convert_to_stdout() {
    let input = fixture("rigellians.md");
    let result = vimdown(&["--no-toc", "-q", input.to_str().unwrap()]);
    assert!(result.status.success());

    let text = String::from_utf8(result.stdout).unwrap();
    assert!(text.starts_with("rigellians.txt\n\n===="));
    assert!(!text.contains("CONTENTS"));
    assert!(result.stderr.is_empty());
}

#[test]
fn test_options() {
    let input = fixture("rigellians.md");
    let result = vimdown(&[
        "-p",
        "-c",
        "40",
        "-t",
        "2",
        "-d",
        "Recipes",
        "--no-rules",
        "-q",
        input.to_str().unwrap(),
    ]);
    assert!(result.status.success());

    let text = String::from_utf8(result.stdout).unwrap();
    let first = text.lines().next().unwrap();
    assert_eq!(first, format!("rigellians.txt{}Recipes", " ".repeat(19)));
    assert!(text.contains("*Rigellians-Ingredients*"));
    assert!(!text.contains(&"=".repeat(40)));
    assert!(text.contains("1. Humans\n  * forty of them\n"));
}

#[test]
fn test_outline_json() {
    let input = fixture("rigellians.md");
    let result = vimdown(&["--outline", input.to_str().unwrap()]);
    assert!(result.status.success());

    let json = String::from_utf8(result.stdout).unwrap();
    assert!(json.contains("\"title\": \"rigellians\""));
    assert!(json.contains("\"chapter\": \"1.2.\""));
    assert!(json.contains("\"tag\": \"rigellians-method\""));
    assert!(!json.contains("HOW TO COOK"));
}

#[test]
fn test_windows_1252_input() {
    let input = fixture("cp1252.md");
    let result = vimdown(&["--no-toc", input.to_str().unwrap()]);
    assert!(result.status.success());

    let text = String::from_utf8(result.stdout).unwrap();
    assert!(text.contains("CAFÉ"));
    assert!(text.contains("*cp1252-café*"));
    assert!(text.contains("Crème.\n"));
}

#[test]
fn test_diagnostics_summary() {
    let input = fixture("unsupported.md");
    let result = vimdown(&[input.to_str().unwrap()]);
    assert!(result.status.success());

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("4 element(s) could not be represented"));
}

#[test]
fn test_missing_input_fails() {
    let result = vimdown(&["does/not/exist.md"]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).starts_with("error: "));
}
