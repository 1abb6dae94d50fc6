//! Character-level feedback for a typed answer against one expected variant.
//!
//! Similar strings are aligned with an edit-distance backtrace. Dissimilar
//! strings are compared position by position instead, since a backtrace over
//! two unrelated words tends to line up stray common letters and paint a
//! wrong answer mostly green.

use tracing::debug;

use crate::similarity::{edit_matrix, similarity};
use crate::types::{DiffStrategy, EngineSettings, FeedbackToken};

/// Pick the diff strategy for a pair of strings.
pub fn choose_strategy(
    user_answer: &str,
    expected_answer: &str,
    settings: &EngineSettings,
) -> DiffStrategy {
    if similarity(user_answer, expected_answer) < settings.diff_alignment_threshold {
        DiffStrategy::Positional
    } else {
        DiffStrategy::Alignment
    }
}

/// Diff with default settings.
pub fn diff(user_answer: &str, expected_answer: &str) -> Vec<FeedbackToken> {
    diff_with(user_answer, expected_answer, &EngineSettings::default())
}

/// Diff a typed answer against a single expected variant.
///
/// The non-missing tokens, in order, spell out `user_answer` exactly.
pub fn diff_with(
    user_answer: &str,
    expected_answer: &str,
    settings: &EngineSettings,
) -> Vec<FeedbackToken> {
    let strategy = choose_strategy(user_answer, expected_answer, settings);
    debug!(?strategy, "diffing answer");
    diff_using(strategy, user_answer, expected_answer, settings.missing_placeholder)
}

/// Diff with an already chosen strategy.
pub fn diff_using(
    strategy: DiffStrategy,
    user_answer: &str,
    expected_answer: &str,
    placeholder: char,
) -> Vec<FeedbackToken> {
    let user: Vec<char> = user_answer.chars().collect();
    let expected: Vec<char> = expected_answer.chars().collect();

    match strategy {
        DiffStrategy::Positional => positional_diff(&user, &expected, placeholder),
        DiffStrategy::Alignment => aligned_diff(&user, &expected, placeholder),
    }
}

/// Concatenate token characters, placeholders included.
pub fn render_feedback(tokens: &[FeedbackToken]) -> String {
    tokens.iter().map(|t| t.ch).collect()
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn positional_diff(user: &[char], expected: &[char], placeholder: char) -> Vec<FeedbackToken> {
    let len = user.len().max(expected.len());

    (0..len)
        .map(|i| match (user.get(i), expected.get(i)) {
            (Some(&u), Some(&e)) if same_letter(u, e) => FeedbackToken::correct(u),
            (Some(&u), _) => FeedbackToken::wrong(u),
            (None, _) => FeedbackToken::missing(placeholder),
        })
        .collect()
}

/// Backtrace through the edit matrix, preferring in order: match,
/// substitution, missing expected character, extra typed character.
fn aligned_diff(user: &[char], expected: &[char], placeholder: char) -> Vec<FeedbackToken> {
    let matrix = edit_matrix(user, expected, same_letter);

    let mut tokens = Vec::with_capacity(user.len().max(expected.len()));
    let mut i = user.len();
    let mut j = expected.len();

    while i > 0 || j > 0 {
        let cost = matrix[i][j];
        let diagonal = i > 0 && j > 0;

        if diagonal && same_letter(user[i - 1], expected[j - 1]) && cost == matrix[i - 1][j - 1] {
            tokens.push(FeedbackToken::correct(user[i - 1]));
            i -= 1;
            j -= 1;
        } else if diagonal && cost == matrix[i - 1][j - 1] + 1 {
            tokens.push(FeedbackToken::wrong(user[i - 1]));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || cost == matrix[i][j - 1] + 1) {
            tokens.push(FeedbackToken::missing(placeholder));
            j -= 1;
        } else {
            tokens.push(FeedbackToken::wrong(user[i - 1]));
            i -= 1;
        }
    }

    tokens.reverse();
    tokens
}
