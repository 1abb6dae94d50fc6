//! Answer grading endpoints

use answer_core::{check_answer, choose_strategy, diff_using, render_feedback, validate};
use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::routes::{check_length, effective_settings};
use crate::AppState;

/// POST /api/answers/validate
pub async fn validate_answer(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>> {
    check_length(&state, "user_answer", &request.user_answer)?;
    check_length(&state, "expected_answer", &request.expected_answer)?;

    let tolerance = request.tolerance.unwrap_or(state.config.default_tolerance);
    let result = validate(&request.user_answer, &request.expected_answer, tolerance);

    Ok(Json(ValidateResponse { result, tolerance }))
}

/// POST /api/answers/diff
pub async fn diff_answer(
    State(state): State<AppState>,
    Json(request): Json<DiffRequest>,
) -> Result<Json<DiffResponse>> {
    check_length(&state, "user_answer", &request.user_answer)?;
    check_length(&state, "expected_answer", &request.expected_answer)?;

    let settings = effective_settings(&state, request.settings.as_ref())?;
    let strategy = choose_strategy(&request.user_answer, &request.expected_answer, &settings);
    let tokens = diff_using(
        strategy,
        &request.user_answer,
        &request.expected_answer,
        settings.missing_placeholder,
    );
    let rendered = render_feedback(&tokens);

    Ok(Json(DiffResponse {
        strategy,
        tokens,
        rendered,
    }))
}

/// POST /api/answers/check
pub async fn check(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<AnswerFeedback>> {
    check_length(&state, "user_answer", &request.user_answer)?;
    check_length(&state, "expected_answer", &request.expected_answer)?;

    let settings = effective_settings(&state, request.settings.as_ref())?;
    let tolerance = request.tolerance.unwrap_or(state.config.default_tolerance);
    let feedback = check_answer(
        &request.user_answer,
        &request.expected_answer,
        tolerance,
        &settings,
    );

    tracing::debug!(
        is_correct = feedback.result.is_correct,
        similarity = feedback.result.similarity,
        "checked answer"
    );

    Ok(Json(feedback))
}
