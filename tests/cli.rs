//! Brewfile check E2E tests

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use mockito::{Mock, Server, ServerGuard};
use predicates::str::contains;
use tempfile::TempDir;

const BREWFILE: &str = r#"tap "homebrew/cask"
brew "wget"
brew "doesnotexist"
brew "partial"
cask "firefox"
"#;

fn cmd(dir: &Path, server: &ServerGuard) -> Command {
    let mut cmd = Command::cargo_bin("brew-compat").unwrap();
    cmd.current_dir(dir)
        .env("BREW_COMPAT_API_URL", server.url())
        .env_remove("RUST_LOG");
    cmd
}

fn workspace(brewfile: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Brewfile"), brewfile).unwrap();
    dir
}

fn mock_homebrew(server: &mut ServerGuard) -> Vec<Mock> {
    vec![
        server
            .mock("GET", "/formula/wget.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"bottle": {"stable": {"files": {"big_sur": {}, "catalina": {}}}}}"#)
            .create(),
        server
            .mock("GET", "/formula/doesnotexist.json")
            .with_status(404)
            .create(),
        server
            .mock("GET", "/formula/partial.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "partial", "bottle": {}}"#)
            .create(),
        server
            .mock("GET", "/cask/firefox.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"token": "firefox", "depends_on": {"macos": {">=": ["10.14"]}}}"#)
            .create(),
    ]
}

#[test]
fn prints_status_table_for_default_brewfile() {
    let mut server = Server::new();
    let mocks = mock_homebrew(&mut server);
    let dir = workspace(BREWFILE);

    cmd(dir.path(), &server)
        .assert()
        .success()
        .stdout(contains("| Kind        | Formula      | Status    |"))
        .stdout(contains("| Bottle      | wget         | Supported |"))
        .stdout(contains("| Bottle      | doesnotexist | Unknown   |"))
        .stdout(contains("| Bottle      | partial      | No info   |"))
        .stdout(contains("| Application | firefox      | Supported |"));

    for mock in mocks {
        mock.assert();
    }
    assert!(!dir.path().join("compatibility.csv").exists());
}

#[test]
fn checks_against_requested_macos_version() {
    let mut server = Server::new();
    let _mocks = mock_homebrew(&mut server);
    let dir = workspace(BREWFILE);

    cmd(dir.path(), &server)
        .args(["--macos-version", "sierra"])
        .assert()
        .success()
        .stdout(contains("| Bottle      | wget         | Unsupported |"))
        .stdout(contains("| Application | firefox      | Unsupported |"));
}

#[test]
fn export_writes_quoted_csv_in_current_directory() {
    let mut server = Server::new();
    let _mocks = mock_homebrew(&mut server);
    let dir = workspace(BREWFILE);

    cmd(dir.path(), &server)
        .arg("--export")
        .assert()
        .success()
        .stderr(contains("Exported results to compatibility.csv"));

    let csv = fs::read_to_string(dir.path().join("compatibility.csv")).unwrap();
    assert_eq!(
        csv,
        "\"kind\",\"formula\",\"status\"\r\n\
         \"Bottle\",\"wget\",\"Supported\"\r\n\
         \"Bottle\",\"doesnotexist\",\"Unknown\"\r\n\
         \"Bottle\",\"partial\",\"No info\"\r\n\
         \"Application\",\"firefox\",\"Supported\"\r\n"
    );
}

#[test]
fn accepts_brewfile_path_argument() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/cask/firefox.json")
        .with_status(200)
        .with_body(r#"{"depends_on": {"macos": {">=": ["10.15"]}}}"#)
        .create();
    let dir = workspace("");
    let path = dir.path().join("Brewfile.work");
    fs::write(&path, "cask \"firefox\"\n").unwrap();

    cmd(dir.path(), &server)
        .arg(&path)
        .args(["--macos-version", "catalina"])
        .assert()
        .success()
        .stdout(contains("| Application | firefox | Supported |"));

    mock.assert();
}

#[test]
fn verbose_logs_queried_endpoints() {
    let mut server = Server::new();
    let _mocks = mock_homebrew(&mut server);
    let dir = workspace(BREWFILE);

    cmd(dir.path(), &server)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(contains("Querying: "))
        .stderr(contains("/formula/wget.json"))
        .stderr(contains("FIN."));
}

#[test]
fn exits_with_error_when_brewfile_is_missing() {
    let server = Server::new();
    let dir = TempDir::new().unwrap();

    cmd(dir.path(), &server)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Brewfile does not exist"));
}

#[test]
fn rejects_unknown_macos_version() {
    let server = Server::new();
    let dir = workspace(BREWFILE);

    cmd(dir.path(), &server)
        .args(["--macos-version", "monterey"])
        .assert()
        .failure();
}
