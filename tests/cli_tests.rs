//! CLI behavior tests: config initialization and submission validation.
//!
//! These only exercise paths that terminate before any network call.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn brandaudit() -> Command {
    Command::cargo_bin("brandaudit").expect("binary builds")
}

#[test]
fn test_init_creates_default_config() {
    let dir = tempdir().unwrap();

    brandaudit()
        .current_dir(dir.path())
        .arg("--init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default configuration file"));

    let config_path = dir.path().join("config/brandaudit.toml");
    assert!(config_path.exists());
    let content = std::fs::read_to_string(config_path).unwrap();
    assert!(content.contains("[serp]"));
    assert!(content.contains("[notify]"));
    assert!(content.contains("[subscribe]"));
}

#[test]
fn test_missing_config_without_tty_suggests_init() {
    let dir = tempdir().unwrap();

    brandaudit()
        .current_dir(dir.path())
        .args(["--company", "Acme Corp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Run with --init"));
}

#[test]
fn test_empty_submission_reports_every_missing_field() {
    let dir = tempdir().unwrap();
    brandaudit().current_dir(dir.path()).arg("--init").assert().success();

    brandaudit()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Name is required.")
                .and(predicate::str::contains("Email is required."))
                .and(predicate::str::contains("Company name is required."))
                .and(predicate::str::contains("Address is required."))
                .and(predicate::str::contains("Phone number is required."))
                .and(predicate::str::contains("Website URL is required.")),
        );
}

#[test]
fn test_partial_submission_reports_only_missing_fields() {
    let dir = tempdir().unwrap();
    brandaudit().current_dir(dir.path()).arg("--init").assert().success();

    brandaudit()
        .current_dir(dir.path())
        .args(["--company", "Acme Corp", "--website", "acme.com"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Name is required.")
                .and(predicate::str::contains("Company name is required.").not()),
        );
}

#[test]
fn test_unknown_output_format_rejected() {
    let dir = tempdir().unwrap();
    brandaudit().current_dir(dir.path()).arg("--init").assert().success();

    brandaudit()
        .current_dir(dir.path())
        .args(["--output-format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format 'pdf'"));
}

#[test]
fn test_missing_search_key_fails_before_network() {
    let dir = tempdir().unwrap();
    brandaudit().current_dir(dir.path()).arg("--init").assert().success();

    brandaudit()
        .current_dir(dir.path())
        .env_remove("SERPAPI_KEY")
        .args([
            "--name", "Jane Doe",
            "--email", "jane@example.com",
            "--company", "Acme Corp",
            "--address", "1 Main St",
            "--phone", "555-1234",
            "--website", "acme.com",
            "--skip-notify",
            "--skip-subscribe",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SERPAPI_KEY"));
}
