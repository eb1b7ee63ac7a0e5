//! Binary-level tests for the non-interactive subcommands.

mod common;

use assert_cmd::Command;
use common::{serve_with, Route};
use indoc::indoc;
use tempfile::TempDir;

fn starroster(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("starroster").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("STARROSTER_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let assert = starroster(&dir).arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    for name in ["browse", "dump", "init"] {
        assert!(stdout.contains(name), "missing {name} in:\n{stdout}");
    }
}

#[test]
fn dump_without_url_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let assert = starroster(&dir).arg("dump").assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();

    assert!(
        stderr.contains("no starting URL configured"),
        "unexpected stderr:\n{stderr}"
    );
}

#[test]
fn dump_warns_about_unknown_log_level() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".starroster.toml"),
        "[logging]\nlevel = \"loud\"\n",
    )
    .unwrap();

    let assert = starroster(&dir).arg("dump").assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();

    assert!(
        stderr.contains("Ignoring unknown log level 'loud'"),
        "unexpected stderr:\n{stderr}"
    );
    // stderr is a pipe here, so no color codes.
    assert!(!stderr.contains("\x1b["), "escape codes in:\n{stderr:?}");
}

#[test]
fn dump_warns_when_config_is_unreadable() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".starroster.toml")).unwrap();

    let assert = starroster(&dir).arg("dump").assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();

    assert!(
        stderr.contains("Failed to read config file"),
        "unexpected stderr:\n{stderr}"
    );
    assert!(!stderr.contains("\x1b["), "escape codes in:\n{stderr:?}");
}

#[test]
fn dump_rejects_non_http_url() {
    let dir = TempDir::new().unwrap();
    let assert = starroster(&dir)
        .args(["dump", "--api-url", "ftp://swapi.dev/api/people/"])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();

    assert!(stderr.contains("unsupported scheme 'ftp'"));
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    starroster(&dir).arg("init").assert().success();
    let written = std::fs::read_to_string(dir.path().join(".starroster.toml")).unwrap();
    assert!(written.contains("https://swapi.dev/api/people/"));

    starroster(&dir).arg("init").assert().failure();
    starroster(&dir).args(["init", "--force"]).assert().success();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dump_walks_pages_from_config_file() {
    let base = serve_with(|base| {
        vec![
            Route::ok(
                "/people/",
                &indoc! {r#"
                    {"count": 3, "next": "BASE/people/?page=2", "results": [
                        {"name": "Luke Skywalker", "homeworld": "BASE/planets/1/"},
                        {"name": "Leia Organa", "homeworld": "BASE/planets/2/"}
                    ]}
                "#}
                .replace("BASE", base),
            ),
            Route::ok(
                "/people/?page=2",
                &indoc! {r#"
                    {"count": 3, "next": null, "results": [
                        {"name": "Han Solo", "homeworld": "BASE/planets/1/"}
                    ]}
                "#}
                .replace("BASE", base),
            ),
            Route::ok("/planets/1/", r#"{"name": "Tatooine"}"#),
            Route::ok("/planets/2/", r#"{"name": "Alderaan"}"#),
        ]
    })
    .await;

    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".starroster.toml"),
        format!("[api]\nurl = \"{base}/people/\"\n"),
    )
    .unwrap();

    let output = tokio::task::spawn_blocking(move || {
        starroster(&dir)
            .args(["dump", "--homeworlds"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "dump failed: {output:?}");
    assert!(stdout.contains("1. Luke Skywalker (Tatooine)"));
    assert!(stdout.contains("2. Leia Organa (Alderaan)"));
    assert!(stdout.contains("3. Han Solo (Tatooine)"));
    assert!(stdout.contains("Loaded 3 of 3 characters across 2 page(s)"));
}
