//! Full grading flow: pick the best variant, then explain the difference.

use crate::diff::{choose_strategy, diff_using};
use crate::types::{AnswerFeedback, EngineSettings, Tolerance};
use crate::validation::validate;

/// Validate a typed answer and diff it against the variant it matched best.
pub fn check_answer(
    user_answer: &str,
    expected_answer: &str,
    tolerance: Tolerance,
    settings: &EngineSettings,
) -> AnswerFeedback {
    let result = validate(user_answer, expected_answer, tolerance);
    let strategy = choose_strategy(user_answer, &result.matched_answer, settings);
    let diff = diff_using(
        strategy,
        user_answer,
        &result.matched_answer,
        settings.missing_placeholder,
    );

    AnswerFeedback {
        result,
        strategy,
        diff,
    }
}
