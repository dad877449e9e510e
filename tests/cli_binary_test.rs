//! End-to-end tests of the chat-widget binary.

mod common;

use std::process::{Command, Output};

use common::{completions_url, sse_body, COMPLETIONS_PATH};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn binary() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_chat-widget"));
    command
        .env_remove("CHAT_WIDGET_URL")
        .env_remove("CHAT_WIDGET_MODEL")
        .env_remove("CHAT_WIDGET_TOKEN")
        .env_remove("RUST_LOG");
    command
}

async fn run(mut command: Command) -> Output {
    tokio::task::spawn_blocking(move || command.output().expect("Failed to execute binary"))
        .await
        .unwrap()
}

#[test]
fn test_version_flag() {
    let output = binary().arg("--version").output().expect("Failed to execute binary");

    assert!(output.status.success(), "Version flag should exit with code 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("chat-widget {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    let output = binary().arg("-h").output().expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Usage: chat-widget"));
}

#[test]
fn test_unknown_flag_fails() {
    let output = binary().arg("--bogus").output().expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown flag: --bogus"));
}

#[test]
fn test_missing_token_fails() {
    let output = binary().arg("hello").output().expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("please include a token"));
}

#[tokio::test]
async fn test_one_shot_prints_answer() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(sse_body(&["forty", "-two"]), "text/event-stream"),
        )
        .mount(&mock_server)
        .await;

    let url = completions_url(&mock_server);
    let mut command = binary();
    command
        .args(["--url", url.as_str(), "--token", "abc"])
        .args(["meaning", "of", "life"]);
    let output = run(command).await;

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "forty-two\n");
}

#[tokio::test]
async fn test_one_shot_error_exits_nonzero() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let url = completions_url(&mock_server);
    let mut command = binary();
    command
        .args(["--url", url.as_str(), "--token", "abc"])
        .arg("hello");
    let output = run(command).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("response not ok: 500"));
}
