//! Cloze masking endpoint

use answer_core::mask_sentence;
use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::routes::{check_length, effective_settings};
use crate::AppState;

/// POST /api/cloze/mask
pub async fn mask(
    State(state): State<AppState>,
    Json(request): Json<MaskRequest>,
) -> Result<Json<MaskResponse>> {
    check_length(&state, "sentence", &request.sentence)?;
    check_length(&state, "expected_answer", &request.expected_answer)?;

    let settings = effective_settings(&state, request.settings.as_ref())?;
    let masked = mask_sentence(&request.sentence, &request.expected_answer, &settings);

    Ok(Json(MaskResponse {
        masked: masked.text,
        masked_count: masked.masked_count,
    }))
}
