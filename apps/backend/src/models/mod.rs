//! Request and response bodies for the grading API

use serde::{Deserialize, Serialize};

// Re-export shared types from answer-core
pub use answer_core::types::{
    AnswerFeedback, DiffStrategy, FeedbackStatus, FeedbackToken, SettingsOverride, Tolerance,
    ValidationResult,
};

/// POST /api/answers/validate body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub user_answer: String,
    pub expected_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<Tolerance>,
}

/// POST /api/answers/validate response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    #[serde(flatten)]
    pub result: ValidationResult,
    pub tolerance: Tolerance,
}

/// POST /api/answers/diff body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffRequest {
    pub user_answer: String,
    pub expected_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SettingsOverride>,
}

/// POST /api/answers/diff response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffResponse {
    pub strategy: DiffStrategy,
    pub tokens: Vec<FeedbackToken>,
    pub rendered: String,
}

/// POST /api/answers/check body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    pub user_answer: String,
    pub expected_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<Tolerance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SettingsOverride>,
}

/// POST /api/cloze/mask body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskRequest {
    pub sentence: String,
    pub expected_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SettingsOverride>,
}

/// POST /api/cloze/mask response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskResponse {
    pub masked: String,
    pub masked_count: usize,
}
