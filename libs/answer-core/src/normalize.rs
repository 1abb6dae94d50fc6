//! Normalization applied before any answer comparison.

use unicode_normalization::UnicodeNormalization;

/// Characters removed during normalization.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')', '?', '"', '\'', '…', '[', ']', '<', '>', '|', '\\', '@', '+', '¡', '¿', '«', '»',
    '“', '”', '‘', '’', '„', '–', '—',
    // zero-width space, non-joiner, joiner and byte order mark
    '\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}',
];

/// Lower-case, strip punctuation, compose to NFC and collapse whitespace.
///
/// Composed and decomposed spellings of the same text normalize alike.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .nfc()
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
