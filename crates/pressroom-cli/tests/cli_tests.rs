use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

/// Helper function to create a temporary content root for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a pressroom Command with a scrubbed
/// environment, so credentials on the host never leak into a test
fn pressroom_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pressroom").expect("Failed to find pressroom binary");
    cmd.env_remove("OPENAI_API_KEY")
        .env_remove("UNSPLASH_ACCESS_KEY")
        .env_remove("PEXELS_API_KEY")
        .env_remove("OPENAI_BASE_URL")
        .env_remove("UNSPLASH_BASE_URL")
        .env_remove("PEXELS_BASE_URL")
        .env_remove("PRESSROOM_MODEL");
    cmd
}

fn write_plan(root: &std::path::Path) {
    let dir = root.join("content-plans");
    std::fs::create_dir_all(&dir).expect("Failed to create plan dir");
    let plan = json!({
        "month": "2025-06",
        "startDate": "2025-06-01",
        "endDate": "2025-06-30",
        "articles": [{
            "date": "2025-06-03",
            "category": "tutorial",
            "slug": "react-hooks",
            "title": "React Hooks Deep Dive",
            "description": "All about hooks",
            "tags": ["react"],
            "status": "planned"
        }]
    });
    std::fs::write(
        dir.join("2025-06.json"),
        serde_json::to_string_pretty(&plan).expect("Failed to serialize plan"),
    )
    .expect("Failed to write plan file");
}

#[test]
fn test_cli_publish_without_plan_exits_successfully() {
    let temp_dir = create_cli_test_environment();

    pressroom_cmd()
        .env("OPENAI_API_KEY", "test-key")
        .args([
            "--root",
            temp_dir.path().to_str().unwrap(),
            "publish",
            "--date",
            "2025-06-03",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating article for 2025-06-03"))
        .stdout(predicate::str::contains(
            "No content plan file found for month 2025-06",
        ));

    // Nothing gets created besides the (empty) articles directory.
    assert!(!temp_dir.path().join("content-plans").exists());
    let articles: Vec<_> = std::fs::read_dir(temp_dir.path().join("src/content/articles"))
        .expect("Articles dir should exist")
        .collect();
    assert!(articles.is_empty());
}

#[test]
fn test_cli_publish_without_model_key_exits_with_error() {
    let temp_dir = create_cli_test_environment();
    write_plan(temp_dir.path());

    pressroom_cmd()
        .args([
            "--root",
            temp_dir.path().to_str().unwrap(),
            "publish",
            "--date",
            "2025-06-03",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_cli_publish_reconciles_existing_article() {
    let temp_dir = create_cli_test_environment();
    write_plan(temp_dir.path());

    let articles_dir = temp_dir.path().join("src/content/articles");
    std::fs::create_dir_all(&articles_dir).expect("Failed to create articles dir");
    std::fs::write(
        articles_dir.join("2025-06-03-react-hooks.mdx"),
        "---\ntitle: \"Hand-written\"\n---\n\nBody.\n",
    )
    .expect("Failed to pre-create article");

    pressroom_cmd()
        .env("OPENAI_API_KEY", "test-key")
        .args([
            "--root",
            temp_dir.path().to_str().unwrap(),
            "publish",
            "--date",
            "2025-06-03",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Article already exists for 2025-06-03-react-hooks",
        ))
        .stdout(predicate::str::contains(
            "Marked existing article as published",
        ));

    let plan = std::fs::read_to_string(temp_dir.path().join("content-plans/2025-06.json"))
        .expect("Failed to read plan");
    assert!(plan.contains("\"status\": \"published\""));
    assert!(plan.contains("\"entrySlug\": \"2025-06-03-react-hooks\""));
}

#[test]
fn test_cli_publish_alias_and_unscheduled_date() {
    let temp_dir = create_cli_test_environment();
    write_plan(temp_dir.path());

    pressroom_cmd()
        .env("OPENAI_API_KEY", "test-key")
        .args([
            "--root",
            temp_dir.path().to_str().unwrap(),
            "p",
            "--date",
            "2025-06-10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No article scheduled for 2025-06-10"));
}

#[test]
fn test_cli_refresh_heroes_requires_image_credentials() {
    let temp_dir = create_cli_test_environment();

    pressroom_cmd()
        .args(["--root", temp_dir.path().to_str().unwrap(), "refresh-heroes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("UNSPLASH_ACCESS_KEY"));
}

#[test]
fn test_cli_rejects_malformed_date() {
    let temp_dir = create_cli_test_environment();

    pressroom_cmd()
        .env("OPENAI_API_KEY", "test-key")
        .args([
            "--root",
            temp_dir.path().to_str().unwrap(),
            "publish",
            "--date",
            "not-a-date",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_help_lists_commands() {
    pressroom_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("publish"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("refresh-heroes"));
}
