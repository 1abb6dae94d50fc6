//! Answer validation against one or more accepted variants.

use tracing::debug;

use crate::normalize::normalize;
use crate::similarity::similarity;
use crate::types::{Tolerance, ValidationResult};

/// Delimiter between accepted variants in an expected answer.
pub const VARIANT_DELIMITER: char = '/';

/// Split an expected answer into trimmed variants.
///
/// Empty variants are kept so indices line up with the raw answer.
pub fn split_variants(expected: &str) -> Vec<String> {
    expected
        .split(VARIANT_DELIMITER)
        .map(|v| v.trim().to_string())
        .collect()
}

/// Validate a typed answer against an expected answer.
///
/// Every variant is scored left to right and the first variant reaching the
/// best score wins. Variants with nothing left after normalization never
/// score, so a blank expected answer is never accepted. The same holds for
/// punctuation-only variants such as `?`, even when typed exactly.
pub fn validate(user_answer: &str, expected_answer: &str, tolerance: Tolerance) -> ValidationResult {
    let variants = split_variants(expected_answer);

    let mut best_score = 0.0;
    let mut best_index = 0;

    for (index, variant) in variants.iter().enumerate() {
        if normalize(variant).is_empty() {
            continue;
        }
        let score = similarity(user_answer, variant);
        if score > best_score {
            best_score = score;
            best_index = index;
        }
    }

    let matched_answer = variants.get(best_index).cloned().unwrap_or_default();
    let is_correct = best_score >= tolerance.threshold();

    debug!(
        tolerance = tolerance.as_str(),
        similarity = best_score,
        matched_answer = %matched_answer,
        is_correct,
        "validated answer"
    );

    ValidationResult {
        is_correct,
        similarity: best_score,
        matched_answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_variants() {
        assert_eq!(split_variants("dog / cat/bird "), vec!["dog", "cat", "bird"]);
        assert_eq!(split_variants("cat"), vec!["cat"]);
        assert_eq!(split_variants(""), vec![""]);
        assert_eq!(split_variants("a//b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_multi_variant_selection() {
        let result = validate("cat", "dog/cat/bird", Tolerance::Strict);
        assert_eq!(
            result,
            ValidationResult {
                is_correct: true,
                similarity: 1.0,
                matched_answer: "cat".to_string(),
            }
        );
    }

    #[test]
    fn test_ties_keep_first_variant() {
        // "bat" and "hat" are both one substitution away from "cat"
        let result = validate("cat", "bat/hat", Tolerance::Lenient);
        assert_eq!(result.matched_answer, "bat");
        assert!(!result.is_correct);
    }

    #[test]
    fn test_best_variant_wins_even_when_later() {
        let result = validate("the house", "a home / the house", Tolerance::Strict);
        assert!(result.is_correct);
        assert_eq!(result.matched_answer, "the house");
    }

    #[test]
    fn test_punctuation_and_case_are_ignored() {
        let result = validate("Good morning!", "good morning", Tolerance::Strict);
        assert!(result.is_correct);
        assert_eq!(result.similarity, 1.0);
    }

    #[test]
    fn test_single_edit_passes_normal_at_boundary() {
        // 1 - 1/7 = 0.857 >= 0.85
        let result = validate("receve", "receive", Tolerance::Normal);
        assert!(result.is_correct);
        assert!(result.similarity >= Tolerance::Normal.threshold());

        let result = validate("receve", "receive", Tolerance::Strict);
        assert!(!result.is_correct);
    }

    #[test]
    fn test_transposition_needs_lenient() {
        // two edits: 1 - 2/7 = 0.714
        let result = validate("recieve", "receive", Tolerance::Normal);
        assert!(!result.is_correct);

        let result = validate("recieve", "receive", Tolerance::Lenient);
        assert!(result.is_correct);
        assert_eq!(result.matched_answer, "receive");
    }

    #[test]
    fn test_tolerance_monotonicity() {
        let pairs = [
            ("cat", "cat"),
            ("receve", "receive"),
            ("recieve", "receive"),
            ("helo", "hello"),
            ("xyz", "abc"),
            ("la casa", "la casa / el hogar"),
        ];
        for (user, expected) in pairs {
            let strict = validate(user, expected, Tolerance::Strict).is_correct;
            let normal = validate(user, expected, Tolerance::Normal).is_correct;
            let lenient = validate(user, expected, Tolerance::Lenient).is_correct;
            if strict {
                assert!(normal && lenient, "{user:?} / {expected:?}");
            }
            if normal {
                assert!(lenient, "{user:?} / {expected:?}");
            }
        }
    }

    #[test]
    fn test_empty_inputs_degrade_to_incorrect() {
        let result = validate("", "cat", Tolerance::Lenient);
        assert!(!result.is_correct);
        assert_eq!(result.similarity, 0.0);
        assert_eq!(result.matched_answer, "cat");

        let result = validate("cat", "", Tolerance::Lenient);
        assert!(!result.is_correct);
        assert_eq!(result.similarity, 0.0);
        assert_eq!(result.matched_answer, "");

        let result = validate("", "", Tolerance::Lenient);
        assert!(!result.is_correct);
        assert_eq!(result.similarity, 0.0);
    }

    #[test]
    fn test_punctuation_only_variant_never_matches() {
        let result = validate("?", "?", Tolerance::Strict);
        assert!(!result.is_correct);
        assert_eq!(result.similarity, 0.0);
        assert_eq!(result.matched_answer, "?");

        let result = validate("yes", "?! / yes", Tolerance::Strict);
        assert!(result.is_correct);
        assert_eq!(result.matched_answer, "yes");
    }

    #[test]
    fn test_no_match_falls_back_to_first_variant() {
        let result = validate("zzz", " dog / cat ", Tolerance::Normal);
        assert!(!result.is_correct);
        assert_eq!(result.similarity, 0.0);
        assert_eq!(result.matched_answer, "dog");
    }
}
