// Integration tests for the radvctl binary

use std::io::Write;
use std::process::Command;

fn radvctl(host: &str, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_radvctl"))
        .arg("--host")
        .arg(host)
        .args(args)
        .output()
        .expect("binary should run")
}

#[tokio::test]
async fn test_reload_command_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/reload")
        .match_header("content-type", "application/json")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"interfaces":[{{"name":"eth0","ra_interval_ms":1000}}]}}"#
    )
    .unwrap();

    let output = radvctl(
        &server.host_with_port(),
        &["reload", file.path().to_str().unwrap()],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("reloaded 1 interface"));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_reload_command_reports_rejection() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/reload")
        .with_status(422)
        .with_body(r#"{"message":"duplicate interface name"}"#)
        .create_async()
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"interfaces":[{{"name":"eth0","ra_interval_ms":1000}},{{"name":"eth0","ra_interval_ms":1000}}]}}"#
    )
    .unwrap();

    let output = radvctl(
        &server.host_with_port(),
        &["reload", file.path().to_str().unwrap()],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duplicate interface name"));
}

#[tokio::test]
async fn test_status_command_prints_table() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/status")
        .with_status(200)
        .with_body(r#"{"interfaces":[{"name":"eth0","state":"Running"},{"name":"eth1","state":"Init"}]}"#)
        .create_async()
        .await;

    let output = radvctl(&server.host_with_port(), &["status"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("INTERFACE"));
    assert!(stdout.contains("eth0"));
    assert!(stdout.contains("Running"));
    assert!(stdout.contains("eth1"));
    assert!(stdout.contains("Init"));
}

#[tokio::test]
async fn test_status_command_json_output() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/status")
        .with_status(200)
        .with_body(r#"{"interfaces":[{"name":"eth0","state":"Stopped"}]}"#)
        .create_async()
        .await;

    let output = radvctl(&server.host_with_port(), &["status", "--json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("output should be JSON");
    assert_eq!(parsed["interfaces"][0]["name"], "eth0");
    assert_eq!(parsed["interfaces"][0]["state"], "Stopped");
}
