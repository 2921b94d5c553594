//! End-to-end tests running the compiled binaries against mock servers.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A binary invocation with a clean environment and a working directory
/// that holds no `.env` file.
fn command(bin: &str, workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(bin).unwrap();
    cmd.env_clear().current_dir(workdir.path());
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_number_prints_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/device-phone-number"))
        .and(header("Authorization", "Bearer cli-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "devicePhoneNumber": "+15550001111" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    tokio::task::spawn_blocking(move || {
        let workdir = TempDir::new().unwrap();
        command("camara-number-verification", &workdir)
            .env("API_BASE_URL", &uri)
            .env("OAUTH_TOKEN", "cli-token")
            .arg("--get-number")
            .assert()
            .success()
            .stdout("{\"devicePhoneNumber\":\"+15550001111\"}\n");
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_token_sends_bearer_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/verify"))
        .and(header("Authorization", "Bearer None"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": 401,
            "code": "UNAUTHENTICATED"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    tokio::task::spawn_blocking(move || {
        let workdir = TempDir::new().unwrap();
        command("camara-number-verification", &workdir)
            .env("API_BASE_URL", &uri)
            .args(["--verify", "+15551234567"])
            .assert()
            .success()
            .stdout(predicate::str::contains("UNAUTHENTICATED"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_env_file_is_loaded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscriptions"))
        .and(header("Authorization", "Bearer from-dotenv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    tokio::task::spawn_blocking(move || {
        let workdir = TempDir::new().unwrap();
        std::fs::write(
            workdir.path().join(".env"),
            format!("CAMARA_API_BASE_URL={}\nOAUTH_TOKEN=from-dotenv\n", uri),
        )
        .unwrap();

        command("camara-roaming-manager", &workdir)
            .arg("--list")
            .assert()
            .success()
            .stdout("[]\n");
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_without_detail_logs_error_and_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    tokio::task::spawn_blocking(move || {
        let workdir = TempDir::new().unwrap();
        command("camara-roaming-manager", &workdir)
            .env("CAMARA_API_BASE_URL", &uri)
            .args(["--create", "--webhook", "{}"])
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains(
                "Both subscription_detail and webhook are required",
            ));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_prints_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/device-status/v0/subscriptions/sub-9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/device-status/v0", mock_server.uri());
    tokio::task::spawn_blocking(move || {
        let workdir = TempDir::new().unwrap();
        command("camara-roaming-manager", &workdir)
            .env("CAMARA_API_BASE_URL", &base_url)
            .env("OAUTH_TOKEN", "t")
            .args(["--delete", "sub-9"])
            .assert()
            .success()
            .stdout("Subscription deleted successfully.\n")
            .stderr(predicate::str::contains("Deleting subscription with ID: sub-9"));
    })
    .await
    .unwrap();
}

#[test]
fn test_unreachable_server_exits_with_failure() {
    let workdir = TempDir::new().unwrap();
    command("camara-roaming-manager", &workdir)
        .env("CAMARA_API_BASE_URL", "http://127.0.0.1:9")
        .args(["--phone", "+15551234567"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("An error occurred"));
}

#[test]
fn test_invalid_webhook_json_rejected() {
    let workdir = TempDir::new().unwrap();
    command("camara-roaming-manager", &workdir)
        .args(["--create", "--subscription_detail", "{}", "--webhook", "not-json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--webhook"));
}

#[test]
fn test_help() {
    let workdir = TempDir::new().unwrap();
    command("camara-number-verification", &workdir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--get-number"));
}

#[test]
fn test_bad_config_reports_cause() {
    let workdir = TempDir::new().unwrap();
    command("camara-roaming-manager", &workdir)
        .env("REQUEST_TIMEOUT", "soon")
        .arg("--list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to deserialize configuration: "))
        .stderr(predicate::str::contains("soon"));
}
