//! HTTP route handlers

pub mod answers;
pub mod cloze;

use answer_core::{EngineSettings, SettingsOverride};

use crate::error::{ApiError, Result};
use crate::AppState;

/// Reject string fields longer than the configured limit.
pub(crate) fn check_length(state: &AppState, field: &str, value: &str) -> Result<()> {
    let max = state.config.max_input_chars;
    if value.chars().count() > max {
        return Err(ApiError::BadRequest(format!(
            "{field} exceeds {max} characters"
        )));
    }
    Ok(())
}

/// Configured engine settings merged with per-request overrides.
pub(crate) fn effective_settings(
    state: &AppState,
    overrides: Option<&SettingsOverride>,
) -> Result<EngineSettings> {
    let settings = state.config.engine.merge(overrides);
    settings.validate()?;
    Ok(settings)
}
