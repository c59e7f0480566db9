// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! Integration tests for the provision and call commands using wiremock.
//!
//! Drives the real command handlers end to end against a mock platform,
//! covering:
//! - env record mutation rules on every provisioning outcome
//! - the pre-flight host check (no network traffic without a host)
//! - the exact call payload
//! - transport errors ending the command cleanly

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use voxctl::cli::call::CallArgs;
use voxctl::cli::global::GlobalOptions;
use voxctl::cli::provision::{ProfileName, ProvisionArgs};
use voxctl::cmd::call::run_call_command;
use voxctl::cmd::provision::run_provision_command;

fn temp_env_file(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let env_path = dir.path().join(".env");
    std::fs::write(&env_path, content).expect("failed to seed env file");
    (dir, env_path)
}

fn global_for(env_file: &Path) -> GlobalOptions {
    GlobalOptions {
        env_file: env_file.to_path_buf(),
        ..GlobalOptions::default()
    }
}

fn provision_args() -> ProvisionArgs {
    ProvisionArgs {
        profile: ProfileName::DeepgramPhone,
    }
}

// =============================================================================
// provision tests
// =============================================================================

#[tokio::test]
async fn test_provision_appends_assistant_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/agent"))
        .and(body_partial_json(serde_json::json!({
            "agent_config": { "agent_name": "Deepgram Phone Agent" }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"agent_id": "X"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (_dir, env_path) = temp_env_file(&format!(
        "BOLNA_NGROK_URL={}\nDEEPGRAM_AUTH_TOKEN=token\n",
        mock_server.uri()
    ));

    let result = run_provision_command(&provision_args(), &global_for(&env_path)).await;
    assert!(result.is_ok(), "provision failed: {:?}", result.err());

    let content = std::fs::read_to_string(&env_path).unwrap();
    assert!(content.ends_with("ASSISTANT_ID=X\n"), "got: {content}");
    assert!(content.contains("DEEPGRAM_AUTH_TOKEN=token\n"));
    assert_eq!(content.matches("ASSISTANT_ID=").count(), 1);
}

#[tokio::test]
async fn test_provision_updates_existing_assistant_id_in_place() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/agent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"agent_id": "fresh"})),
        )
        .mount(&mock_server)
        .await;

    let (_dir, env_path) = temp_env_file(&format!(
        "A=1\nASSISTANT_ID=stale\nBOLNA_NGROK_URL={}\nB=2\n",
        mock_server.uri()
    ));

    run_provision_command(&provision_args(), &global_for(&env_path))
        .await
        .unwrap();

    let content = std::fs::read_to_string(&env_path).unwrap();
    assert_eq!(
        content,
        format!(
            "A=1\nASSISTANT_ID=fresh\nBOLNA_NGROK_URL={}\nB=2\n",
            mock_server.uri()
        )
    );
}

#[tokio::test]
async fn test_provision_missing_agent_id_leaves_record_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/agent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "created"})),
        )
        .mount(&mock_server)
        .await;

    let seed = format!("BOLNA_NGROK_URL={}\n", mock_server.uri());
    let (_dir, env_path) = temp_env_file(&seed);

    run_provision_command(&provision_args(), &global_for(&env_path))
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(&env_path).unwrap(), seed);
}

#[tokio::test]
async fn test_provision_non_200_leaves_record_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/agent"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let seed = format!("BOLNA_NGROK_URL={}\nOTHER=keep\n", mock_server.uri());
    let (_dir, env_path) = temp_env_file(&seed);

    let result = run_provision_command(&provision_args(), &global_for(&env_path)).await;

    // Reported on the console, but not an error and no mutation
    assert!(result.is_ok());
    assert_eq!(std::fs::read_to_string(&env_path).unwrap(), seed);
}

#[tokio::test]
async fn test_provision_non_json_body_leaves_record_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let seed = format!("BOLNA_NGROK_URL={}\n", mock_server.uri());
    let (_dir, env_path) = temp_env_file(&seed);

    run_provision_command(&provision_args(), &global_for(&env_path))
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(&env_path).unwrap(), seed);
}

#[tokio::test]
async fn test_provision_missing_host_fails_before_any_request() {
    let mock_server = MockServer::start().await;

    // Nothing must reach the server when the host is missing
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let seed = "DEEPGRAM_AUTH_TOKEN=token\n";
    let (_dir, env_path) = temp_env_file(seed);

    let result = run_provision_command(&provision_args(), &global_for(&env_path)).await;

    assert!(result.is_err(), "missing host must fail the command");
    assert_eq!(std::fs::read_to_string(&env_path).unwrap(), seed);
    mock_server.verify().await;
}

#[tokio::test]
async fn test_provision_transport_error_is_not_fatal() {
    // Nothing listens on this port; connection is refused
    let seed = "BOLNA_NGROK_URL=http://127.0.0.1:9\n";
    let (_dir, env_path) = temp_env_file(seed);

    let result = run_provision_command(&provision_args(), &global_for(&env_path)).await;

    assert!(result.is_ok(), "transport errors are reported, not fatal");
    assert_eq!(std::fs::read_to_string(&env_path).unwrap(), seed);
}

#[tokio::test]
async fn test_provision_batman_sends_batman_document() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/agent"))
        .and(body_partial_json(serde_json::json!({
            "agent_config": {
                "agent_name": "Batman",
                "agent_welcome_message": "How are you doing citizen?"
            }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"agent_id": "bat-1"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (_dir, env_path) = temp_env_file(&format!("BOLNA_NGROK_URL={}\n", mock_server.uri()));

    let args = ProvisionArgs {
        profile: ProfileName::Batman,
    };
    run_provision_command(&args, &global_for(&env_path))
        .await
        .unwrap();

    assert!(
        std::fs::read_to_string(&env_path)
            .unwrap()
            .contains("ASSISTANT_ID=bat-1")
    );
}

// =============================================================================
// call tests
// =============================================================================

#[tokio::test]
async fn test_call_sends_exact_three_field_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/call"))
        .and(body_json(serde_json::json!({
            "agent_id": "agent-1",
            "recipient_phone_number": "15551234567",
            "debug_mode": true
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"call_sid": "CA1"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (_dir, env_path) = temp_env_file(&format!(
        "TWILIO_NGROK_URL={}\nASSISTANT_ID=agent-1\nDESTINATION_PHONE_NUMBER=15551234567\n",
        mock_server.uri()
    ));

    let result = run_call_command(&CallArgs::default(), &global_for(&env_path)).await;
    assert!(result.is_ok(), "call failed: {:?}", result.err());
}

#[tokio::test]
async fn test_call_passes_missing_values_through_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/call"))
        .and(body_json(serde_json::json!({
            "agent_id": "",
            "recipient_phone_number": "",
            "debug_mode": true
        })))
        .respond_with(ResponseTemplate::new(400).set_body_string("missing agent"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (_dir, env_path) =
        temp_env_file(&format!("TWILIO_NGROK_URL={}\n", mock_server.uri()));

    // No validation: empty fields go out, the 400 comes back, and the
    // command still exits cleanly
    let result = run_call_command(&CallArgs::default(), &global_for(&env_path)).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_call_number_override_reaches_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/call"))
        .and(body_partial_json(serde_json::json!({
            "recipient_phone_number": "15559999999"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (_dir, env_path) = temp_env_file(&format!(
        "TWILIO_NGROK_URL={}\nDESTINATION_PHONE_NUMBER=15550000000\nASSISTANT_ID=a\n",
        mock_server.uri()
    ));

    let args = CallArgs {
        number: Some("15559999999".to_string()),
    };
    run_call_command(&args, &global_for(&env_path)).await.unwrap();
}

#[tokio::test]
async fn test_call_non_json_body_is_logged_not_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/call"))
        .respond_with(ResponseTemplate::new(200).set_body_string("queued"))
        .mount(&mock_server)
        .await;

    let (_dir, env_path) = temp_env_file(&format!(
        "TWILIO_NGROK_URL={}\nASSISTANT_ID=a\nDESTINATION_PHONE_NUMBER=15551234567\n",
        mock_server.uri()
    ));

    let result = run_call_command(&CallArgs::default(), &global_for(&env_path)).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_call_transport_error_is_not_fatal() {
    let (_dir, env_path) = temp_env_file(
        "TWILIO_NGROK_URL=http://127.0.0.1:9\nASSISTANT_ID=a\nDESTINATION_PHONE_NUMBER=15551234567\n",
    );

    let result = run_call_command(&CallArgs::default(), &global_for(&env_path)).await;
    assert!(result.is_ok());
}
