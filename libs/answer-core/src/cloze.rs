//! Masking of the expected answer inside a sentence for cloze exercises.

use tracing::trace;
use unicode_normalization::char::is_combining_mark;

use crate::similarity::similarity;
use crate::types::{EngineSettings, MaskedSentence};

/// Delimiters between accepted variants of a cloze answer.
pub const CLOZE_DELIMITERS: &[char] = &['/', ',', '|'];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || is_combining_mark(c)
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '’')
}

fn is_joiner(c: char) -> bool {
    c == '-' || is_apostrophe(c)
}

/// Split a sentence into alternating word and separator tokens.
///
/// Hyphens and apostrophes between two word characters stay inside the word,
/// so "Tiba-tiba" and "don't" are single tokens. Combining marks belong to the
/// word they follow. Joining the tokens gives back the original sentence.
pub fn tokenize(sentence: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = sentence.char_indices().collect();
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut previous: Option<bool> = None;

    for (k, &(offset, c)) in chars.iter().enumerate() {
        let in_word = is_word_char(c)
            || (is_joiner(c)
                && k > 0
                && is_word_char(chars[k - 1].1)
                && chars.get(k + 1).is_some_and(|&(_, next)| is_word_char(next)));

        if previous.is_some_and(|was_word| was_word != in_word) {
            tokens.push(&sentence[start..offset]);
            start = offset;
        }
        previous = Some(in_word);
    }

    if start < sentence.len() {
        tokens.push(&sentence[start..]);
    }
    tokens
}

/// Split a cloze answer on `/`, `,` or `|` into trimmed, non-empty variants.
pub fn split_cloze_variants(expected: &str) -> Vec<String> {
    expected
        .split(CLOZE_DELIMITERS)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Mask with default settings.
pub fn mask_answer(sentence: &str, expected_answer: &str) -> String {
    mask_answer_with(sentence, expected_answer, &EngineSettings::default())
}

/// Replace every word close enough to an accepted variant with the mask.
pub fn mask_answer_with(sentence: &str, expected_answer: &str, settings: &EngineSettings) -> String {
    mask_sentence(sentence, expected_answer, settings).text
}

/// Split a word at its apostrophes, keeping them as separate pieces.
fn split_apostrophes(word: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for (offset, c) in word.char_indices() {
        if is_apostrophe(c) {
            if start < offset {
                pieces.push(&word[start..offset]);
            }
            let end = offset + c.len_utf8();
            pieces.push(&word[offset..end]);
            start = end;
        }
    }
    if start < word.len() {
        pieces.push(&word[start..]);
    }
    pieces
}

fn best_score(text: &str, variants: &[String]) -> f64 {
    if !text.chars().any(is_word_char) {
        return 0.0;
    }
    variants
        .iter()
        .map(|v| similarity(text, v))
        .fold(0.0, f64::max)
}

struct Masker<'a> {
    variants: Vec<String>,
    settings: &'a EngineSettings,
    text: String,
    masked_count: usize,
}

impl Masker<'_> {
    fn push(&mut self, piece: &str, score: f64) {
        if score >= self.settings.cloze_match_threshold {
            trace!(piece, score, "masking cloze token");
            self.text.push_str(&self.settings.cloze_mask);
            self.masked_count += 1;
        } else {
            self.text.push_str(piece);
        }
    }

    /// Mask a whole token, or only the pieces of an elided word ("l'eau")
    /// when a piece matches better than the whole.
    fn push_token(&mut self, token: &str) {
        let whole = best_score(token, &self.variants);
        let pieces = split_apostrophes(token);

        if pieces.len() > 1 {
            let scores: Vec<f64> = pieces
                .iter()
                .map(|p| best_score(p, &self.variants))
                .collect();
            if scores.iter().any(|&s| s > whole) {
                for (piece, score) in pieces.into_iter().zip(scores) {
                    self.push(piece, score);
                }
                return;
            }
        }
        self.push(token, whole);
    }
}

/// Like [`mask_answer_with`], also reporting how many words were masked.
pub fn mask_sentence(
    sentence: &str,
    expected_answer: &str,
    settings: &EngineSettings,
) -> MaskedSentence {
    let mut masker = Masker {
        variants: split_cloze_variants(expected_answer),
        settings,
        text: String::with_capacity(sentence.len()),
        masked_count: 0,
    };

    for token in tokenize(sentence) {
        masker.push_token(token);
    }

    MaskedSentence {
        text: masker.text,
        masked_count: masker.masked_count,
    }
}
