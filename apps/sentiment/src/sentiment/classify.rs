//! Classification: turns raw polarity scores into the 3-way label returned by the API.
//!
//! Thresholds follow the usual VADER convention:
//! compound ≥ 0.05 → Positive, compound ≤ −0.05 → Negative, otherwise Neutral.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::sentiment::scorer::SentimentScorer;

pub const MIN_TEXT_CHARS: usize = 1;
pub const MAX_TEXT_CHARS: usize = 1000;
pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;
const SCORE_SCALE: f64 = 10_000.0; // 4 decimal places

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResponse {
    pub label: SentimentLabel,
    /// Compound score rounded to 4 decimal places.
    pub score: f64,
    pub distribution: Distribution,
}

/// Length is counted in characters, not bytes.
pub fn validate_text(text: &str) -> Result<(), AppError> {
    let len = text.chars().count();
    if len < MIN_TEXT_CHARS {
        return Err(AppError::Validation(format!(
            "text should have at least {MIN_TEXT_CHARS} character"
        )));
    }
    if len > MAX_TEXT_CHARS {
        return Err(AppError::Validation(format!(
            "text should have at most {MAX_TEXT_CHARS} characters (got {len})"
        )));
    }
    Ok(())
}

/// Rounds half away from zero.
pub fn round_score(compound: f64) -> f64 {
    (compound * SCORE_SCALE).round() / SCORE_SCALE
}

/// Scores already-validated text. The label is decided on the unrounded compound.
pub fn analyze(scorer: &dyn SentimentScorer, text: &str) -> SentimentResponse {
    let scores = scorer.polarity_scores(text);

    SentimentResponse {
        label: SentimentLabel::from_compound(scores.compound),
        score: round_score(scores.compound),
        distribution: Distribution {
            positive: scores.positive,
            neutral: scores.neutral,
            negative: scores.negative,
        },
    }
}
