//! Request body factories.

use serde_json::{json, Value};

/// Body for POST /api/answers/validate.
pub fn validate_request(user_answer: &str, expected_answer: &str, tolerance: Option<&str>) -> Value {
    let mut body = json!({
        "user_answer": user_answer,
        "expected_answer": expected_answer,
    });
    if let Some(tolerance) = tolerance {
        body["tolerance"] = json!(tolerance);
    }
    body
}

/// Body for POST /api/answers/diff.
pub fn diff_request(user_answer: &str, expected_answer: &str) -> Value {
    json!({
        "user_answer": user_answer,
        "expected_answer": expected_answer,
    })
}

/// Body for POST /api/answers/check.
pub fn check_request(user_answer: &str, expected_answer: &str, tolerance: &str) -> Value {
    json!({
        "user_answer": user_answer,
        "expected_answer": expected_answer,
        "tolerance": tolerance,
    })
}

/// Body for POST /api/cloze/mask.
pub fn mask_request(sentence: &str, expected_answer: &str) -> Value {
    json!({
        "sentence": sentence,
        "expected_answer": expected_answer,
    })
}

/// A string of `len` repeated letters.
pub fn long_text(len: usize) -> String {
    "a".repeat(len)
}
