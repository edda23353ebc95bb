//! End-to-end CLI integration tests.
//!
//! These run the `relnotes` binary from an empty temporary directory, so no
//! `relnotes.toml` is picked up, and point it either at a closed local port or
//! at a mock server so that nothing reaches the real GitHub API.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// An API root nothing listens on.
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

fn relnotes(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_relnotes"));
    cmd.current_dir(dir.path()).env_remove("GITHUB_TOKEN");
    cmd
}

fn valid_args() -> Vec<&'static str> {
    vec![
        "--user",
        "ebi-gene-expression-group",
        "--repo",
        "release-notes-generator",
        "--since",
        "afc2ab85",
        "--until",
        "9cf91ff1",
        "--token",
        "test-token",
        "--api-url",
        UNREACHABLE_API,
    ]
}

#[test]
fn test_help_lists_options() {
    let dir = TempDir::new().unwrap();

    relnotes(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--since"))
        .stdout(predicate::str::contains("--until"))
        .stdout(predicate::str::contains("--output-format"));
}

#[test]
fn test_missing_required_args_fails() {
    let dir = TempDir::new().unwrap();

    relnotes(&dir)
        .args(["-u", "baz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--repo"));
}

#[test]
fn test_invalid_output_format_fails() {
    let dir = TempDir::new().unwrap();

    relnotes(&dir)
        .args(valid_args())
        .args(["--output-format", "pdf"])
        .assert()
        .failure();
}

#[test]
fn test_unreachable_api_exits_with_one() {
    let dir = TempDir::new().unwrap();

    relnotes(&dir)
        .args(valid_args())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "failed to generate release notes for ebi-gene-expression-group/release-notes-generator",
        ))
        .stderr(predicate::str::contains("GitHub API unreachable"));
}

#[test]
fn test_failure_writes_no_file() {
    let dir = TempDir::new().unwrap();

    relnotes(&dir)
        .args(valid_args())
        .args(["--file", "notes", "--output-format", "HTML"])
        .assert()
        .code(1);

    assert!(!dir.path().join("notes.html").exists());
    assert!(!dir.path().join("notes").exists());
}

#[test]
fn test_invalid_config_file_exits_with_one() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("relnotes.toml"), "[github]\npage_size = 0\n").unwrap();

    relnotes(&dir)
        .args(valid_args())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("page_size"));
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();

    relnotes(&dir)
        .args(valid_args())
        .args(["--config", "missing.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.toml"));
}

fn commit_json(prefix: &str, message: &str) -> Value {
    let sha = format!("{prefix:0<40}");
    json!({
        "sha": sha,
        "html_url": format!("https://github.com/org/repo/commit/{sha}"),
        "commit": {
            "message": message,
            "author": { "name": "Jane Doe", "email": "jane@example.com" }
        }
    })
}

/// Serves `org/repo` with a short history reachable from `cccc3333`.
async fn mock_github() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/org/repo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "repo",
            "description": "Expression Atlas"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/org/repo/commits"))
        .and(query_param("sha", "cccc3333"))
        .and(query_param("per_page", "30"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            commit_json("cccc3333", "Fix crash on empty input"),
            commit_json("bbbb2222", "Merge pull request #12 from org/feature"),
            commit_json("aaaa1111", "Update docs\n\nSigned-off-by: Sam <sam@example.com>"),
            commit_json("0000ffff", "Initial commit"),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn range_args(server: &MockServer) -> Vec<String> {
    [
        "-u", "org", "-r", "repo", "-s", "aaaa", "--ut", "cccc3333", "--token", "test-token",
        "--api-url",
    ]
    .iter()
    .map(ToString::to_string)
    .chain([server.uri()])
    .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_prints_markdown_notes_to_stdout() {
    let server = mock_github().await;
    let dir = TempDir::new().unwrap();

    relnotes(&dir)
        .args(range_args(&server))
        .args(["-v", "v2.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Release Notes for repo - v2.0.0\n"))
        .stdout(predicate::str::contains("**Expression Atlas**"))
        .stdout(predicate::str::contains(
            "* **[bbbb2222](https://github.com/org/repo/commit/bbbb2222",
        ))
        .stdout(predicate::str::contains(
            "Merge pull request #12 from org/feature (by jane@example.com)",
        ))
        .stdout(predicate::str::contains("Fix crash on empty input"))
        .stdout(predicate::str::contains("Update docs"))
        .stdout(predicate::str::contains("Initial commit").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_writes_html_file() {
    let server = mock_github().await;
    let dir = TempDir::new().unwrap();

    relnotes(&dir)
        .args(range_args(&server))
        .args(["--file", "notes", "-o", "html"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(dir.path().join("notes.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Release Notes for repo - v1.0.0</h1>"));
    assert!(html.contains(">cccc3333</a> Fix crash on empty input (by jane@example.com)</li>"));
    assert!(!html.contains("Initial commit"));
    assert!(!dir.path().join("notes").exists());
}
