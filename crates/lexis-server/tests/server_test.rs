//! Integration tests for the HTTP server.
//!
//! Drives the router in-process through tower's `oneshot`, without binding a
//! TCP listener.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt; // for oneshot()

use lexis_config::Config;
use lexis_server::build_app_with_state;
use lexis_server::models::{ErrorResponse, HealthResponse};
use lexis_server::state::AppState;

fn app() -> Router {
    build_app_with_state(AppState::new(Config::default()))
}

async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let (status, body) = get(app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_value(body).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, "0.1.0");
    assert_eq!(health.dictionary_entries, 16);
}

#[tokio::test]
async fn translate_hello_world() {
    let (status, body) = post(
        app(),
        "/translate",
        json!({"text": "Hello world", "direction": "en_to_ig"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translated"], "náàgò àná");
    assert_eq!(body["confidence"], 100.0);
    assert_eq!(body["direction"], "en_to_ig");
}

#[tokio::test]
async fn translate_accepts_english_text_field() {
    let (status, body) = post(app(), "/translate", json!({"english-text": "red house"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translated"], "ékpikpa únyí");
}

#[tokio::test]
async fn translate_missing_text_is_bad_request() {
    let (status, body) = post(app(), "/translate", json!({"direction": "en_to_ig"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(body).unwrap();
    assert_eq!(error.error, "text is required");
}

#[tokio::test]
async fn translate_unknown_direction_is_bad_request() {
    let (status, body) = post(
        app(),
        "/translate",
        json!({"text": "hello", "direction": "en_to_fr"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("en_to_fr"));
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (status, body) = post_raw(app(), "/back-translate", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn translate_batch_averages_confidence() {
    let (status, body) = post(
        app(),
        "/translate/batch",
        json!({"texts": ["Hello world", "the dog"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
    assert_eq!(body["average_confidence"], 50.0);
}

#[tokio::test]
async fn back_translate_hello_world() {
    let (status, body) = post(
        app(),
        "/back-translate",
        json!({"text": "Hello world", "source_direction": "en_to_ig"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["forward_translation"], "náàgò àná");
    assert_eq!(body["back_translation"], "sympathy world");
    assert_eq!(body["quality_metrics"]["similarity_score"], 50.0);
    assert_eq!(body["quality_metrics"]["overlapping_words"], json!(["world"]));
    assert_eq!(body["overall_quality"]["overall_score"], 85.0);
    assert_eq!(body["overall_quality"]["quality_level"], "Excellent");
}

#[tokio::test]
async fn back_translate_batch_summary() {
    let (status, body) = post(
        app(),
        "/back-translate/batch",
        json!({"texts": ["Hello world", "Eat white stone."]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
    let summary = &body["summary"];
    assert_eq!(summary["total_texts"], 2);
    assert_eq!(summary["average_quality_score"], 92.5);
    assert_eq!(
        summary["quality_distribution"],
        json!({"Excellent": 2, "Good": 0, "Fair": 0, "Poor": 0})
    );
}

#[tokio::test]
async fn back_translate_batch_rejects_empty_list() {
    let (status, body) = post(app(), "/back-translate/batch", json!({"texts": []})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "texts must be a non-empty list");
}

#[tokio::test]
async fn translation_quality_scores_supplied_translation() {
    let (status, body) = post(
        app(),
        "/translation-quality",
        json!({"original_text": "Hello world", "translated_text": "náàgò àná"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["provided_translation"], "náàgò àná");
    assert_eq!(body["back_translation"], "sympathy world");
    assert_eq!(body["overall_quality"]["overall_score"], 85.0);
}

#[tokio::test]
async fn detect_language_both_sides() {
    let (_, body) = post(app(), "/detect-language", json!({"text": "eat the stone"})).await;
    assert_eq!(body["detected_language"], "english");

    let (_, body) = post(app(), "/detect-language", json!({"text": "jẹ omi"})).await;
    assert_eq!(body["detected_language"], "igala");

    let (_, body) = post(app(), "/detect-language", json!({"text": "bonjour"})).await;
    assert_eq!(body["detected_language"], "unknown");
}

#[tokio::test]
async fn suggestions_by_prefix() {
    let (status, body) = post(
        app(),
        "/suggestions",
        json!({"partial_word": "s", "language": "english"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["language"], "english");
    assert_eq!(body["suggestions"], json!(["stone", "sympathy"]));
}

#[tokio::test]
async fn suggestions_unknown_language_is_bad_request() {
    let (status, _) = post(
        app(),
        "/suggestions",
        json!({"partial_word": "s", "language": "klingon"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn pos_tags_for_text() {
    let (status, body) = post(
        app(),
        "/pos-tags",
        json!({"translation_text": "the red house"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original_text"], "the red house");
    assert_eq!(body["pos_tags"], "DT, JJ, NN");
    assert_eq!(body["tagged_words"][1], json!({"word": "red", "tag": "JJ"}));
}

#[tokio::test]
async fn quality_report_tracks_user_history() {
    let app = app();

    for text in ["Hello world", "the dog"] {
        let (status, _) = post(
            app.clone(),
            "/back-translate",
            json!({"text": text, "user_id": "ada", "session_id": "s1"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    // no user_id, not recorded
    post(app.clone(), "/back-translate", json!({"text": "red house"})).await;

    let (status, body) = get(app, "/quality-report/ada").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], "ada");
    assert_eq!(body["total_back_translations"], 2);
    assert_eq!(body["average_quality_score"], 57.5);
    assert_eq!(body["quality_distribution"]["Excellent"], 1);
    assert_eq!(body["quality_distribution"]["Poor"], 1);

    let trend = body["quality_trend"].as_array().unwrap();
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0]["overall_score"], 85.0);
    assert_eq!(trend[1]["quality_level"], "Poor");
}

#[tokio::test]
async fn quality_report_for_unknown_user_is_empty() {
    let (status, body) = get(app(), "/quality-report/nobody").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_back_translations"], 0);
    assert_eq!(body["quality_trend"], json!([]));
}
