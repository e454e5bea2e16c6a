#![deny(clippy::all, clippy::pedantic)]

use std::path::Path;

use assert_cmd::Command;
use httpmock::MockServer;
use predicates::str::contains;
use tempfile::TempDir;

fn admin(server: &MockServer, token_file: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("novacore-admin"));
    cmd.env_remove("NOVACORE_TOKEN")
        .env_remove("NOVACORE_CONFIG_FILE")
        .arg("--api-base-url")
        .arg(server.base_url())
        .arg("--token-file")
        .arg(token_file)
        .arg("--locale")
        .arg("en");
    cmd
}

#[test]
fn empty_menu_list_renders_empty_state_inside_frame() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/v1/dashboard/menus");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let dir = TempDir::new().expect("tmp dir");
    admin(&server, &dir.path().join("token"))
        .args(["menus", "list"])
        .assert()
        .success()
        .stdout(contains("> Menus [/menus]"))
        .stdout(contains("No menus found"))
        .stdout(contains("Start by creating your first menu"));
    mock.assert();
}

#[test]
fn rejected_token_is_cleared_and_exit_fails() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/api/v1/cms/pages")
            .header("authorization", "Bearer stale");
        then.status(401);
    });

    let dir = TempDir::new().expect("tmp dir");
    let token_file = dir.path().join("token");
    std::fs::write(&token_file, "stale").expect("write token");

    admin(&server, &token_file)
        .args(["pages", "list"])
        .assert()
        .failure()
        .stdout(contains("Your session has expired; sign in again"))
        .stderr(contains("error: Your session has expired"));

    mock.assert_calls(1);
    assert!(!token_file.exists());
}

#[test]
fn json_flag_prints_api_payload() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET")
            .path("/api/v1/cms/pages")
            .query_param("pageNumber", "2")
            .query_param("pageSize", "5")
            .query_param("status", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"items":[],"totalCount":6,"pageNumber":2,"pageSize":5,"totalPages":2}"#,
            );
    });

    let dir = TempDir::new().expect("tmp dir");
    admin(&server, &dir.path().join("token"))
        .args(["--json", "pages", "list", "--page", "2", "--page-size", "5"])
        .args(["--status", "published"])
        .assert()
        .success()
        .stdout(contains("\"totalCount\": 6"));
}

#[test]
fn blank_menu_label_fails_without_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/api/v1/dashboard/menus/3/items");
        then.status(201);
    });

    let dir = TempDir::new().expect("tmp dir");
    admin(&server, &dir.path().join("token"))
        .args(["menus", "items", "add", "3", "--url", "/about"])
        .assert()
        .failure()
        .stderr(contains("error:"));
    mock.assert_calls(0);
}

#[test]
fn login_stores_token_from_environment() {
    let server = MockServer::start();
    let dir = TempDir::new().expect("tmp dir");
    let token_file = dir.path().join("nested").join("token");

    admin(&server, &token_file)
        .env("NOVACORE_TOKEN", "fresh-token")
        .args(["session", "login"])
        .assert()
        .success()
        .stdout(contains("Token stored at"));

    let stored = std::fs::read_to_string(&token_file).expect("token file");
    assert_eq!(stored.trim(), "fresh-token");
}
