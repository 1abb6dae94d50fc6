//! Core types shared by the validator, diff generator and cloze masker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};

/// How forgiving answer validation is about typos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tolerance {
    Strict,
    Normal,
    Lenient,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::Normal
    }
}

impl Tolerance {
    /// All levels, strictest first.
    pub const ALL: [Tolerance; 3] = [Self::Strict, Self::Normal, Self::Lenient];

    /// Minimum similarity an answer needs to be accepted.
    pub const fn threshold(self) -> f64 {
        match self {
            Self::Strict => 1.0,
            Self::Normal => 0.85,
            Self::Lenient => 0.70,
        }
    }

    /// Get the tolerance name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Normal => "normal",
            Self::Lenient => "lenient",
        }
    }
}

impl FromStr for Tolerance {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "normal" => Ok(Self::Normal),
            "lenient" => Ok(Self::Lenient),
            _ => Err(ParseError::UnknownTolerance(s.to_string())),
        }
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for a typed answer against all accepted variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the best score met the tolerance threshold.
    pub is_correct: bool,
    /// Best similarity score seen, between 0.0 and 1.0.
    pub similarity: f64,
    /// The variant that produced the best score.
    pub matched_answer: String,
}

/// Per-character verdict in a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    /// Typed character matches the expected one.
    Correct,
    /// Typed character is a substitution or an extra character.
    Wrong,
    /// Expected character the user never typed.
    Missing,
}

/// A single rendered character with its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackToken {
    #[serde(rename = "char")]
    pub ch: char,
    pub status: FeedbackStatus,
}

impl FeedbackToken {
    pub fn correct(ch: char) -> Self {
        Self {
            ch,
            status: FeedbackStatus::Correct,
        }
    }

    pub fn wrong(ch: char) -> Self {
        Self {
            ch,
            status: FeedbackStatus::Wrong,
        }
    }

    /// Placeholder token for an expected character that was not typed.
    pub fn missing(placeholder: char) -> Self {
        Self {
            ch: placeholder,
            status: FeedbackStatus::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.status == FeedbackStatus::Missing
    }
}

/// Strategy the diff generator picked for a pair of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffStrategy {
    /// Index-by-index comparison, used for dissimilar strings.
    Positional,
    /// Edit-distance backtrace, used for similar strings.
    Alignment,
}

/// Verdict plus diff against the matched variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub result: ValidationResult,
    pub strategy: DiffStrategy,
    pub diff: Vec<FeedbackToken>,
}

/// A sentence with its answer words masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedSentence {
    pub text: String,
    pub masked_count: usize,
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Similarity at or above which diffs use the alignment strategy.
    pub diff_alignment_threshold: f64,
    /// Similarity at or above which a sentence token is masked.
    pub cloze_match_threshold: f64,
    /// Replacement text for masked tokens.
    pub cloze_mask: String,
    /// Character rendered for missing tokens.
    pub missing_placeholder: char,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            diff_alignment_threshold: 0.6,
            cloze_match_threshold: 0.6,
            cloze_mask: "____".to_string(),
            missing_placeholder: '_',
        }
    }
}

impl EngineSettings {
    /// Check thresholds are within [0, 1] and the mask is usable.
    pub fn validate(&self) -> Result<()> {
        check_threshold("diff_alignment_threshold", self.diff_alignment_threshold)?;
        check_threshold("cloze_match_threshold", self.cloze_match_threshold)?;
        if self.cloze_mask.is_empty() {
            return Err(ParseError::EmptyMask);
        }
        Ok(())
    }

    /// Merge these settings with optional overrides.
    pub fn merge(&self, overrides: Option<&SettingsOverride>) -> Self {
        match overrides {
            Some(o) => Self {
                diff_alignment_threshold: o
                    .diff_alignment_threshold
                    .unwrap_or(self.diff_alignment_threshold),
                cloze_match_threshold: o
                    .cloze_match_threshold
                    .unwrap_or(self.cloze_match_threshold),
                cloze_mask: o
                    .cloze_mask
                    .clone()
                    .unwrap_or_else(|| self.cloze_mask.clone()),
                missing_placeholder: o.missing_placeholder.unwrap_or(self.missing_placeholder),
            },
            None => self.clone(),
        }
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParseError::ThresholdOutOfRange { name, value })
    }
}

/// Per-request settings overrides (all fields optional).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_alignment_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloze_match_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloze_mask: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_placeholder: Option<char>,
}
