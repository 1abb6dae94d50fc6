//! Answer grading engine for typed language-learning exercises.
//!
//! Provides:
//! - Normalization of typed text (case, punctuation, whitespace)
//! - Normalized Levenshtein similarity
//! - Validation against `/`-separated answer variants with a typo tolerance
//! - Character-level feedback diffs
//! - Cloze masking of an answer inside a sentence
//!
//! Every grading operation is a pure function and never fails.

pub mod cloze;
pub mod diff;
pub mod error;
pub mod feedback;
pub mod normalize;
pub mod similarity;
pub mod types;
pub mod validation;

pub use cloze::{mask_answer, mask_answer_with, mask_sentence, split_cloze_variants, tokenize};
pub use diff::{choose_strategy, diff, diff_using, diff_with, render_feedback};
pub use error::{ParseError, Result};
pub use feedback::check_answer;
pub use normalize::normalize;
pub use similarity::{levenshtein_distance, similarity};
pub use types::{
    AnswerFeedback, DiffStrategy, EngineSettings, FeedbackStatus, FeedbackToken, MaskedSentence,
    SettingsOverride, Tolerance, ValidationResult,
};
pub use validation::{split_variants, validate};
