//! Cloze masking API tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use answer_check_backend::config::ServerConfig;
use common::fixtures;
use common::TestContext;

/// Test the answer is masked and the rest of the sentence kept.
#[tokio::test]
async fn test_mask_sentence() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/cloze/mask")
        .json(&fixtures::mask_request("Tiba-tiba, lampu padam.", "tiba-tiba"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(
        body,
        json!({ "masked": "____, lampu padam.", "masked_count": 1 })
    );
}

/// Test every variant is masked.
#[tokio::test]
async fn test_mask_multiple_variants() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/cloze/mask")
        .json(&fixtures::mask_request(
            "Running is great; I run daily.",
            "run | running",
        ))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["masked"], "____ is great; I ____ daily.");
    assert_eq!(body["masked_count"], 2);
}

/// Test an elided article stays visible.
#[tokio::test]
async fn test_mask_keeps_elided_article() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/cloze/mask")
        .json(&fixtures::mask_request("L'eau est froide.", "eau"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "masked": "L'____ est froide.", "masked_count": 1 })
    );
}

/// Test the configured mask is used.
#[tokio::test]
async fn test_mask_uses_configured_mask() {
    let mut config = ServerConfig::default();
    config.engine.cloze_mask = "[...]".to_string();
    let server = TestContext::with_config(config).server();

    let response = server
        .post("/api/cloze/mask")
        .json(&fixtures::mask_request("She walked home.", "walk"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["masked"], "She [...] home.");
}

/// Test a per-request threshold override.
#[tokio::test]
async fn test_mask_threshold_override() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/cloze/mask")
        .json(&json!({
            "sentence": "She walked home.",
            "expected_answer": "walk",
            "settings": { "cloze_match_threshold": 0.9 },
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["masked"], "She walked home.");
    assert_eq!(body["masked_count"], 0);
}

/// Test an empty mask override is rejected.
#[tokio::test]
async fn test_mask_rejects_empty_mask() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/cloze/mask")
        .json(&json!({
            "sentence": "She walked home.",
            "expected_answer": "walk",
            "settings": { "cloze_mask": "" },
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid settings: cloze mask must not be empty");
}
