//! The assessment score triple and its semantic ranges.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of questions in the assessment. Fixed for every session.
pub const TOTAL_QUESTIONS: i64 = 15;

/// Raw scores of record. Always replaced as a whole; see [`crate::core::store::ResultStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Standing against the reference population, nominally 0–100.
    pub percentile: i64,
    /// Ordinal position among test takers. No upper bound.
    pub rank: i64,
    /// Nominally 0..=[`TOTAL_QUESTIONS`].
    pub correct_answers: i64,
}

impl ScoreRecord {
    pub fn new(percentile: i64, rank: i64, correct_answers: i64) -> Self {
        Self {
            percentile,
            rank,
            correct_answers,
        }
    }

    /// All-zero record a session starts with.
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Range check used by strict editing. The store itself never calls this.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0..=100).contains(&self.percentile) {
            return Err(ValidationError::PercentileOutOfRange(self.percentile));
        }
        if self.rank < 0 {
            return Err(ValidationError::NegativeRank(self.rank));
        }
        if !(0..=TOTAL_QUESTIONS).contains(&self.correct_answers) {
            return Err(ValidationError::CorrectAnswersOutOfRange {
                value: self.correct_answers,
                total: TOTAL_QUESTIONS,
            });
        }
        Ok(())
    }

    pub fn get(&self, field: ScoreField) -> i64 {
        match field {
            ScoreField::Percentile => self.percentile,
            ScoreField::Rank => self.rank,
            ScoreField::CorrectAnswers => self.correct_answers,
        }
    }
}

/// One of the three editable scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreField {
    Percentile,
    Rank,
    CorrectAnswers,
}

impl ScoreField {
    pub const ALL: [ScoreField; 3] = [Self::Percentile, Self::Rank, Self::CorrectAnswers];

    /// Stable identifier, also used as the form input id.
    pub fn key(self) -> &'static str {
        match self {
            Self::Percentile => "percentile",
            Self::Rank => "rank",
            Self::CorrectAnswers => "correct-answers",
        }
    }
}

impl fmt::Display for ScoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Percentile => "percentile",
            Self::Rank => "rank",
            Self::CorrectAnswers => "correct answers",
        };
        f.write_str(label)
    }
}

/// Rejections raised when the editor runs in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is not a whole number: {raw:?}")]
    NotANumber { field: ScoreField, raw: String },

    #[error("percentile {0} is outside 0–100")]
    PercentileOutOfRange(i64),

    #[error("rank {0} cannot be negative")]
    NegativeRank(i64),

    #[error("correct answers {value} is outside 0–{total}")]
    CorrectAnswersOutOfRange { value: i64, total: i64 },
}

impl ValidationError {
    /// The field the error refers to, for inline form feedback.
    pub fn field(&self) -> ScoreField {
        match self {
            Self::NotANumber { field, .. } => *field,
            Self::PercentileOutOfRange(_) => ScoreField::Percentile,
            Self::NegativeRank(_) => ScoreField::Rank,
            Self::CorrectAnswersOutOfRange { .. } => ScoreField::CorrectAnswers,
        }
    }
}
