//! CLI integration tests for skill resolution and display.
//!
//! Verifies end-to-end argument plumbing against a fabricated pair of
//! personal and shared skill roots.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn create_skill(root: &Path, name: &str, body: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("create skill dir");
    fs::write(
        dir.join("SKILL.md"),
        format!("---\nname: {name}\ndescription: test skill\n---\n{body}"),
    )
    .expect("write skill");
    dir
}

fn skillet(personal: &Path, shared: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_skillet"))
        .env("SKILLET_PERSONAL_DIR", personal)
        .env("SKILLET_SHARED_DIR", shared)
        .args(args)
        .output()
        .expect("run skillet")
}

#[test]
fn resolve_prefers_personal_and_honors_the_shared_prefix() {
    let tmp = tempfile::tempdir().unwrap();
    let personal = tmp.path().join("personal");
    let shared = tmp.path().join("shared");
    create_skill(&personal, "x", "personal body\n");
    create_skill(&shared, "x", "shared body\n");

    let output = skillet(&personal, &shared, &["resolve", "x"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("personal"));
    assert!(stdout.contains("x/SKILL.md"));

    let output = skillet(&personal, &shared, &["resolve", "shared:x"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[shared]"));
}

#[test]
fn resolve_of_unknown_name_fails_with_a_message() {
    let tmp = tempfile::tempdir().unwrap();
    let personal = tmp.path().join("personal");
    let shared = tmp.path().join("shared");
    fs::create_dir_all(&personal).unwrap();
    fs::create_dir_all(&shared).unwrap();

    let output = skillet(&personal, &shared, &["resolve", "y"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Skill not found"));
}

#[test]
fn show_prints_the_body_without_the_header() {
    let tmp = tempfile::tempdir().unwrap();
    let personal = tmp.path().join("personal");
    let shared = tmp.path().join("shared");
    create_skill(&shared, "guide", "# Guide\n\nThe body.\n");

    let output = skillet(&personal, &shared, &["show", "guide"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# Guide"));
    assert!(!stdout.contains("description: test skill"));
}

#[test]
fn list_reports_skills_from_both_roots() {
    let tmp = tempfile::tempdir().unwrap();
    let personal = tmp.path().join("personal");
    let shared = tmp.path().join("shared");
    create_skill(&personal, "mine", "# Mine\n");
    create_skill(&shared, "ours", "# Ours\n");

    let output = skillet(&personal, &shared, &["list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mine [personal]"));
    assert!(stdout.contains("ours [shared]"));

    let output = skillet(&personal, &shared, &["list", "--format", "json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"name\": \"mine\""));
    assert!(stdout.contains("\"source\": \"shared\""));
}

#[test]
fn check_updates_succeeds_on_a_plain_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let personal = tmp.path().join("personal");
    let shared = tmp.path().join("shared");
    fs::create_dir_all(&shared).unwrap();

    let output = skillet(&personal, &shared, &["check-updates"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No updates available"));
}
