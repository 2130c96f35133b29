//! Integration tests for elevenlabs-rs.
//!
//! Every test drives the client against a local `wiremock` server, so no
//! network access or API key is needed.
//!
//! Run with: cargo test --test api_tests
//! Set RUST_LOG=elevenlabs_rs=debug to see request logs.

use std::sync::Once;
use std::time::Duration;

use futures_util::StreamExt;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{
    body_json, header, header_regex, method, path, query_param, query_param_is_missing,
};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

use elevenlabs_rs::prelude::*;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Client pointed at the mock server with a test key.
fn client_for(server: &MockServer) -> ElevenLabsClient {
    init_logging();
    ElevenLabsClient::new(
        ClientConfig::default()
            .with_base_url(server.uri())
            .with_api_key("test-key")
            .with_timeout(Duration::from_secs(5)),
    )
    .unwrap()
}

/// Matches requests that lack the given header.
struct MissingHeader(&'static str);

impl Match for MissingHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key(self.0)
    }
}

fn history_page(ids: &[&str], has_more: bool) -> serde_json::Value {
    let items: Vec<_> = ids
        .iter()
        .map(|id| json!({"history_item_id": id, "text": format!("text {id}"), "date_unix": 1700000000}))
        .collect();
    json!({
        "history": items,
        "last_history_item_id": ids.last().copied().unwrap_or(""),
        "has_more": has_more,
    })
}

// =============================================================================
// Request construction
// =============================================================================

#[tokio::test]
async fn test_api_key_header_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .and(header("xi-api-key", "test-key"))
        .and(header("accept", "application/json"))
        .and(MissingHeader("content-type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"model_id": "eleven_multilingual_v2", "name": "Multilingual v2", "can_do_text_to_speech": true}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let models = client_for(&server).models().list().await.unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].model_id.as_str(), "eleven_multilingual_v2");
}

#[tokio::test]
async fn test_empty_api_key_omits_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/voices"))
        .and(MissingHeader("xi-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"voices": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.set_api_key("").await;
    let voices = client.voices().list().await.unwrap();
    assert!(voices.is_empty());
}

#[tokio::test]
async fn test_query_modifiers_are_appended_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(history_page(&["a"], false)))
        .mount(&server)
        .await;

    client_for(&server)
        .history()
        .list(&[
            QueryModifier::page_size(10),
            QueryModifier::custom("voice_id", "v1"),
            QueryModifier::page_size(20),
        ])
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("page_size=10&voice_id=v1&page_size=20")
    );
}

#[tokio::test]
async fn test_text_to_speech_convert() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/text-to-speech/voice-1"))
        .and(query_param("optimize_streaming_latency", "3"))
        .and(header("accept", "*/*"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "text": "Hello",
            "model_id": "eleven_turbo_v2",
            "voice_settings": {"stability": 0.5, "similarity_boost": 0.75}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ID3audio".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let request = TextToSpeechRequest::new("Hello")
        .with_model("eleven_turbo_v2")
        .with_voice_settings(VoiceSettings::new(0.5, 0.75));
    let audio = client_for(&server)
        .text_to_speech()
        .convert(
            &VoiceId::new("voice-1"),
            &request,
            &[QueryModifier::latency_optimizations(LatencyOptimization::Max)],
        )
        .await
        .unwrap();
    assert_eq!(&audio[..], b"ID3audio");
}

#[tokio::test]
async fn test_text_to_speech_stream_into_sink() {
    let server = MockServer::start().await;
    let payload: Vec<u8> = (0..64 * 1024).map(|i| (i % 251) as u8).collect();
    Mock::given(method("POST"))
        .and(path("/text-to-speech/voice-1/stream"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let mut sink: Vec<u8> = Vec::new();
    let written = client_for(&server)
        .text_to_speech()
        .stream(&mut sink, &VoiceId::new("voice-1"), &TextToSpeechRequest::new("Hi"), &[])
        .await
        .unwrap();
    assert_eq!(written, payload.len() as u64);
    assert_eq!(sink, payload);
}

#[tokio::test]
async fn test_stream_error_status_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/text-to-speech/voice-1/stream"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": {"status": "invalid_api_key", "message": "Invalid API key"}
        })))
        .mount(&server)
        .await;

    let mut sink: Vec<u8> = Vec::new();
    let err = client_for(&server)
        .text_to_speech()
        .stream(&mut sink, &VoiceId::new("voice-1"), &TextToSpeechRequest::new("Hi"), &[])
        .await
        .unwrap_err();
    assert!(err.is_auth_error());
    assert!(sink.is_empty());
}

// =============================================================================
// Response classification
// =============================================================================

#[tokio::test]
async fn test_unauthorized_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": {
                "status": "needs_authorization",
                "message": "Neither authorization header nor xi-api-key received"
            }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).user().get().await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(err.kind(), ErrorKind::Client);
    assert_eq!(
        err.to_string(),
        "api error - Neither authorization header nor xi-api-key received"
    );
    match err {
        Error::Api(api) => {
            assert_eq!(api.http_status, 401);
            assert_eq!(api.detail.status, "needs_authorization");
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bad_request_with_additional_info() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/voices/v1"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": {"status": "voice_not_found", "message": "Voice not found", "additional_info": "v1"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .voices()
        .delete(&VoiceId::new("v1"))
        .await
        .unwrap_err();
    assert!(!err.is_auth_error());
    match err {
        Error::Api(api) => assert_eq!(api.detail.additional_info.as_deref(), Some("v1")),
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_error_body_is_decoding_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(400).set_body_string("<html>bad</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).user().get().await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert_eq!(err.kind(), ErrorKind::Decoding);
}

#[tokio::test]
async fn test_unprocessable_entity_is_validation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/text-to-speech/voice-1"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                {"loc": ["body", "text"], "msg": "field required", "type": "value_error.missing"},
                {"loc": ["body", "model_id"], "msg": "unknown model", "type": "value_error"}
            ]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .text_to_speech()
        .convert(&VoiceId::new("voice-1"), &TextToSpeechRequest::new(""), &[])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "validation error: field required");
    match err {
        Error::Validation(v) => {
            assert_eq!(v.detail.len(), 2);
            assert_eq!(v.detail[0].loc, vec!["body", "text"]);
        }
        other => panic!("expected Error::Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_with_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/subscription"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).user().subscription().await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedStatus { status: 500, .. }));
    assert_eq!(
        err.to_string(),
        "unexpected HTTP status \"500 Internal Server Error\""
    );
    assert!(err.is_server_error());
}

#[tokio::test]
async fn test_other_statuses_are_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/voices"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.models().list().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected HTTP status \"500 Internal Server Error\""
    );
    assert!(err.is_server_error());

    let err = client.voices().list().await.unwrap_err();
    assert_eq!(err.to_string(), "unexpected HTTP status \"404 Not Found\"");
    assert!(!err.is_server_error());
    assert_eq!(err.kind(), ErrorKind::Server);

    let err = client.user().get().await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedStatus { status: 201, .. }));
}

#[tokio::test]
async fn test_invalid_success_body_is_decoding_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/voices/settings/default"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .voices()
        .default_settings()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decoding);
}

#[tokio::test]
async fn test_repeated_calls_are_independent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/voices/v1/settings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"stability": 0.4, "similarity_boost": 0.9})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.voices().settings(&VoiceId::new("v1")).await.unwrap();
    let second = client.voices().settings(&VoiceId::new("v1")).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first, VoiceSettings::new(0.4, 0.9));
}

// =============================================================================
// Timeouts and cancellation
// =============================================================================

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.set_timeout(Duration::from_millis(100)).await;

    let started = std::time::Instant::now();
    let err = client.models().list().await.unwrap_err();
    let elapsed = started.elapsed();

    assert!(err.is_timeout());
    assert!(matches!(err, Error::Timeout(t) if t == Duration::from_millis(100)));
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(elapsed >= Duration::from_millis(100), "returned early: {elapsed:?}");
    assert!(elapsed < Duration::from_millis(1000), "deadline overshot: {elapsed:?}");
}

#[tokio::test]
async fn test_cancellation_aborts_in_flight_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.set_timeout(Duration::from_secs(30)).await;

    let token = client.cancellation_token().clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let err = client.models().list().await.unwrap_err();
    assert!(matches!(err, Error::Cancelled));
    assert!(err.is_timeout());

    // Later calls fail without touching the network
    let requests_before = server.received_requests().await.unwrap().len();
    let err = client.models().list().await.unwrap_err();
    assert!(matches!(err, Error::Cancelled));
    assert_eq!(server.received_requests().await.unwrap().len(), requests_before);
}

#[tokio::test]
async fn test_parent_token_from_config() {
    let server = MockServer::start().await;
    let parent = tokio_util::sync::CancellationToken::new();
    let client = ElevenLabsClient::new(
        ClientConfig::default()
            .with_base_url(server.uri())
            .with_cancellation_token(parent.child_token()),
    )
    .unwrap();

    parent.cancel();
    let err = client.user().subscription().await.unwrap_err();
    assert!(err.is_timeout());
}

// =============================================================================
// History pagination
// =============================================================================

#[tokio::test]
async fn test_history_last_page_has_no_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(history_page(&["a", "b"], false)))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server).history().list(&[]).await.unwrap();
    assert_eq!(page.response.history.len(), 2);
    assert!(page.next.is_none());
    assert!(!page.has_more());
}

#[tokio::test]
async fn test_history_cursor_fetches_next_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .and(query_param("page_size", "2"))
        .and(query_param_is_missing("start_after_history_item_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(history_page(&["a", "b"], true)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .and(query_param("page_size", "2"))
        .and(query_param("start_after_history_item_id", "b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(history_page(&["c"], false)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client
        .history()
        .list(&[QueryModifier::page_size(2)])
        .await
        .unwrap();
    let cursor = first.next.expect("first page should have a cursor");
    assert_eq!(cursor.last_item_id(), &HistoryItemId::new("b"));

    let second = cursor.next(&[]).await.unwrap();
    assert_eq!(second.response.history[0].history_item_id.as_str(), "c");
    assert!(second.next.is_none());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[1].url.query(),
        Some("page_size=2&start_after_history_item_id=b")
    );
}

#[tokio::test]
async fn test_history_cursor_extra_modifiers_override() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .and(query_param_is_missing("start_after_history_item_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(history_page(&["a"], true)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .and(query_param("start_after_history_item_id", "a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(history_page(&["b"], false)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client
        .history()
        .list(&[QueryModifier::page_size(1)])
        .await
        .unwrap();
    first
        .next
        .unwrap()
        .next(&[QueryModifier::page_size(50)])
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[1].url.query(),
        Some("page_size=50&start_after_history_item_id=a")
    );
}

#[tokio::test]
async fn test_history_items_stream_walks_all_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .and(query_param_is_missing("start_after_history_item_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(history_page(&["a", "b"], true)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .and(query_param("start_after_history_item_id", "b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(history_page(&["c", "d"], true)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .and(query_param("start_after_history_item_id", "d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(history_page(&["e"], false)))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let ids: Vec<String> = client
        .history()
        .items(&[QueryModifier::page_size(2)])
        .map(|item| item.unwrap().history_item_id.to_string())
        .collect()
        .await;
    assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);

    let pages: Vec<_> = client.history().pages(&[]).collect().await;
    assert_eq!(pages.len(), 3);
}

#[tokio::test]
async fn test_history_pages_stop_after_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .and(query_param_is_missing("start_after_history_item_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(history_page(&["a"], true)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .and(query_param("start_after_history_item_id", "a"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let mut pages = client_for(&server).history().pages(&[]);
    assert!(pages.next().await.unwrap().is_ok());
    let err = pages.next().await.unwrap().unwrap_err();
    assert!(err.is_server_error());
    assert!(pages.next().await.is_none());
}

#[tokio::test]
async fn test_history_item_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history/item-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "history_item_id": "item-1",
            "voice_id": "v1",
            "text": "hello",
            "character_count_change_from": 100,
            "character_count_change_to": 105,
            "date_unix": 1700000000
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/history/item-1/audio"))
        .and(header("accept", "*/*"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"mp3".to_vec()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/history/item-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/history/download"))
        .and(body_json(json!({"history_item_ids": ["item-1", "item-2"]})))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PK\x03\x04".to_vec()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let id = HistoryItemId::new("item-1");

    let item = client.history().get(&id).await.unwrap();
    assert_eq!(item.characters_used(), 5);
    assert!(item.created_at().is_some());

    assert_eq!(&client.history().audio(&id).await.unwrap()[..], b"mp3");
    client.history().delete(&id).await.unwrap();

    let archive = client
        .history()
        .download(&DownloadHistoryRequest::new(["item-1", "item-2"]))
        .await
        .unwrap();
    assert!(archive.starts_with(b"PK"));
}

// =============================================================================
// Voices and samples
// =============================================================================

#[tokio::test]
async fn test_get_voice_with_settings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/voices/v1"))
        .and(query_param("with_settings", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "voice_id": "v1",
            "name": "Rachel",
            "settings": {"stability": 0.5, "similarity_boost": 0.75}
        })))
        .mount(&server)
        .await;

    let voice = client_for(&server)
        .voices()
        .get(&VoiceId::new("v1"), &[QueryModifier::with_settings()])
        .await
        .unwrap();
    assert_eq!(voice.name, "Rachel");
    assert_eq!(voice.settings, Some(VoiceSettings::new(0.5, 0.75)));
}

#[tokio::test]
async fn test_edit_voice_settings() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/voices/v1/settings/edit"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"stability": 0.25, "similarity_boost": 0.5, "use_speaker_boost": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .voices()
        .edit_settings(
            &VoiceId::new("v1"),
            &VoiceSettings::new(0.25, 0.5).with_speaker_boost(true),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_add_voice_uploads_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/voices/add"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"voice_id": "new-voice"})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let sample = dir.path().join("sample.mp3");
    std::fs::write(&sample, b"fake mp3 data").unwrap();

    let request = AddEditVoiceRequest::new("Narrator")
        .with_label("accent", "british")
        .with_file(&sample);
    let voice_id = client_for(&server).voices().add(&request).await.unwrap();
    assert_eq!(voice_id, VoiceId::new("new-voice"));

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"name\""));
    assert!(body.contains("Narrator"));
    assert!(body.contains("name=\"labels\""));
    assert!(body.contains(r#"{"accent":"british"}"#));
    assert!(body.contains("filename=\"sample.mp3\""));
    assert!(body.contains("fake mp3 data"));
    assert!(!body.contains("name=\"description\""));
}

#[tokio::test]
async fn test_add_voice_with_missing_file_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/voices/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"voice_id": "x"})))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.mp3");
    let request = AddEditVoiceRequest::new("Narrator").with_file(&missing);

    let err = client_for(&server).voices().add(&request).await.unwrap_err();
    match err {
        Error::FileAccess { path, .. } => assert_eq!(path, missing),
        other => panic!("expected Error::FileAccess, got {other:?}"),
    }
}

#[tokio::test]
async fn test_edit_voice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/voices/v1/edit"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .voices()
        .edit(
            &VoiceId::new("v1"),
            &AddEditVoiceRequest::new("Renamed").with_description("New description"),
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("New description"));
}

#[tokio::test]
async fn test_sample_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/voices/v1/samples/s1/audio"))
        .and(header("accept", "*/*"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"sample-audio".to_vec()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/voices/v1/samples/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let voice = VoiceId::new("v1");
    let sample = SampleId::new("s1");

    let audio = client.samples().audio(&voice, &sample).await.unwrap();
    assert_eq!(&audio[..], b"sample-audio");
    client.samples().delete(&voice, &sample).await.unwrap();
}

// =============================================================================
// User
// =============================================================================

#[tokio::test]
async fn test_user_and_subscription() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subscription": {"tier": "creator", "character_count": 100, "character_limit": 1000},
            "is_new_user": false,
            "xi_api_key": "test-key"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user/subscription"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tier": "creator",
            "character_count": 100,
            "character_limit": 1000,
            "has_open_invoices": true,
            "next_invoice": {"amount_due_cents": 2200, "next_payment_attempt_unix": 1700000000}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let user = client.user().get().await.unwrap();
    assert_eq!(user.subscription.characters_remaining(), 900);

    let details = client.user().subscription().await.unwrap();
    assert!(details.has_open_invoices);
    assert_eq!(details.tier, "creator");
    assert_eq!(details.next_invoice.map(|i| i.amount_due_cents), Some(2200));
}

// =============================================================================
// Shared client
// =============================================================================

#[tokio::test]
async fn test_lazy_client_reflects_updates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .and(header("xi-api-key", "rotated-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    init_logging();
    let lazy = LazyClient::new(ClientConfig::default().with_base_url(server.uri()));
    assert!(!lazy.is_initialized());

    lazy.set_api_key("rotated-key").await.unwrap();
    let models = lazy.get().await.unwrap().models().list().await.unwrap();
    assert!(models.is_empty());
    assert!(lazy.is_initialized());
}
