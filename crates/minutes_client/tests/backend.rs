use std::time::Duration;

use minutes_client::{Backend, BackendError, BackendSettings, ClientEvent, ClientHandle, HttpBackend};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> BackendSettings {
    BackendSettings {
        base_url: server.uri(),
        ..BackendSettings::default()
    }
}

#[tokio::test]
async fn upload_returns_summary_and_posts_multipart_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "summary": "Decisions: ship on Friday",
        })))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(settings_for(&server)).expect("backend");
    let summary = backend
        .summarize("standup.txt", b"raw notes body".to_vec(), "focus on decisions")
        .await
        .expect("summarize ok");
    assert_eq!(summary, "Decisions: ship on Friday");

    let requests = server.received_requests().await.expect("recording on");
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"meetingNotes\""));
    assert!(body.contains("filename=\"standup.txt\""));
    assert!(body.contains("raw notes body"));
    assert!(body.contains("name=\"customPrompt\""));
    assert!(body.contains("focus on decisions"));
}

#[tokio::test]
async fn upload_sends_prompt_field_even_when_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "summary": "ok"})),
        )
        .mount(&server)
        .await;

    let backend = HttpBackend::new(settings_for(&server)).expect("backend");
    backend
        .summarize("notes.txt", b"x".to_vec(), "")
        .await
        .expect("summarize ok");

    let requests = server.received_requests().await.expect("recording on");
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"customPrompt\""));
}

#[tokio::test]
async fn upload_rejection_carries_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "model overloaded",
        })))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(settings_for(&server)).expect("backend");
    let err = backend
        .summarize("notes.txt", b"x".to_vec(), "")
        .await
        .unwrap_err();
    assert_eq!(err, BackendError::Rejected("model overloaded".to_string()));
}

#[tokio::test]
async fn upload_parses_envelope_regardless_of_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "error": "summarizer crashed",
        })))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(settings_for(&server)).expect("backend");
    let err = backend
        .summarize("notes.txt", b"x".to_vec(), "")
        .await
        .unwrap_err();
    assert_eq!(err, BackendError::Rejected("summarizer crashed".to_string()));
}

#[tokio::test]
async fn upload_success_without_summary_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(settings_for(&server)).expect("backend");
    let err = backend
        .summarize("notes.txt", b"x".to_vec(), "")
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::InvalidResponse(_)));
}

#[tokio::test]
async fn upload_non_json_reply_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>bad gateway</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let backend = HttpBackend::new(settings_for(&server)).expect("backend");
    let err = backend
        .summarize("notes.txt", b"x".to_vec(), "")
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::InvalidResponse(_)));
}

#[tokio::test]
async fn upload_times_out_on_slow_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"success": true, "summary": "late"})),
        )
        .mount(&server)
        .await;

    let settings = BackendSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let backend = HttpBackend::new(settings).expect("backend");
    let err = backend
        .summarize("notes.txt", b"x".to_vec(), "")
        .await
        .unwrap_err();
    assert_eq!(err, BackendError::Timeout);
}

#[tokio::test]
async fn upload_reports_network_error_when_backend_is_down() {
    // A pooled server (`MockServer::start`) keeps its port open after drop;
    // an exclusive one actually shuts down, leaving the port closed.
    let server = MockServer::builder().start().await;
    let settings = settings_for(&server);
    drop(server);

    let backend = HttpBackend::new(settings).expect("backend");
    let err = backend
        .summarize("notes.txt", b"x".to_vec(), "")
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::Network(_)));
}

#[tokio::test]
async fn send_email_posts_exact_payload() {
    let server = MockServer::start().await;
    let recipients = vec!["a@x.com".to_string(), "b@y.com".to_string()];
    Mock::given(method("POST"))
        .and(path("/send-email"))
        .and(body_json(json!({
            "recipients": ["a@x.com", "b@y.com"],
            "subject": "Meeting Summary",
            "summary": "The decisions",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(settings_for(&server)).expect("backend");
    backend
        .deliver_email(&recipients, "Meeting Summary", "The decisions")
        .await
        .expect("payload matched the mock");
}

#[tokio::test]
async fn send_email_rejection_carries_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send-email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "smtp relay refused",
        })))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(settings_for(&server)).expect("backend");
    let err = backend
        .deliver_email(&["a@x.com".to_string()], "Meeting Summary", "body")
        .await
        .unwrap_err();
    assert_eq!(err, BackendError::Rejected("smtp relay refused".to_string()));
}

#[tokio::test]
async fn handle_uploads_file_from_disk() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "summary": "from disk"})),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let notes_path = dir.path().join("standup.txt");
    std::fs::write(&notes_path, "notes written to disk").expect("write notes");

    let handle = ClientHandle::new(settings_for(&server)).expect("handle");
    handle.summarize(3, &notes_path, "standup.txt", "short please");

    let event = wait_for_event(&handle).await;
    assert_eq!(
        event,
        ClientEvent::UploadFinished {
            request_id: 3,
            result: Ok("from disk".to_string()),
        }
    );

    let requests = server.received_requests().await.expect("recording on");
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("notes written to disk"));
}

#[tokio::test]
async fn handle_reports_unreadable_file_without_touching_network() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("not-there.txt");

    // Port 9 (discard) is never listening; any network attempt would fail
    // differently than FileRead.
    let settings = BackendSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        ..BackendSettings::default()
    };
    let handle = ClientHandle::new(settings).expect("handle");
    handle.summarize(7, &missing, "not-there.txt", "");

    let event = wait_for_event(&handle).await;
    match event {
        ClientEvent::UploadFinished {
            request_id: 7,
            result: Err(BackendError::FileRead(_)),
        } => {}
        other => panic!("expected a file read failure, got {other:?}"),
    }
}

#[tokio::test]
async fn handle_rejects_oversized_notes_before_upload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let notes_path = dir.path().join("big.txt");
    std::fs::write(&notes_path, "0123456789abcdef").expect("write notes");

    let settings = BackendSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        max_notes_bytes: 8,
        ..BackendSettings::default()
    };
    let handle = ClientHandle::new(settings).expect("handle");
    handle.summarize(4, &notes_path, "big.txt", "");

    let event = wait_for_event(&handle).await;
    assert_eq!(
        event,
        ClientEvent::UploadFinished {
            request_id: 4,
            result: Err(BackendError::NotesTooLarge {
                max_bytes: 8,
                actual: 16,
            }),
        }
    );
}

async fn wait_for_event(handle: &ClientHandle) -> ClientEvent {
    for _ in 0..200 {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!("no client event within five seconds");
}
