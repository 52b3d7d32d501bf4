//! Pure transforms from a [`ScoreRecord`] to the inputs each chart consumes.
//!
//! Nothing here holds state; the same record and context always produce the
//! same output, bit for bit. Out-of-range scores flow through unclamped; the
//! drawing code decides how to show them.

use serde::{Deserialize, Serialize};

use super::mastery::{default_topics, TopicMastery};
use super::score::{ScoreRecord, TOTAL_QUESTIONS};

/// Average percentile of the reference population used in the comparison sentence.
pub const REFERENCE_AVERAGE_PERCENTILE: i64 = 72;

/// Percentile axis of the illustrative distribution curve.
pub const DISTRIBUTION_BUCKETS: [u8; 11] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

/// Number of students per bucket. Fixed shape, not live data.
pub const DISTRIBUTION_COUNTS: [u32; 11] = [1, 2, 5, 8, 15, 25, 20, 10, 5, 4, 1];

/// Correct/incorrect split for the donut, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutInput {
    pub correct_fraction: f64,
    pub incorrect_fraction: f64,
}

impl DonutInput {
    pub fn from_correct_answers(correct_answers: i64) -> Self {
        let correct_fraction = 100.0 * correct_answers as f64 / TOTAL_QUESTIONS as f64;
        Self {
            correct_fraction,
            incorrect_fraction: 100.0 - correct_fraction,
        }
    }

    /// Both slices clamped into 0–100 for drawing. The raw fields stay untouched.
    pub fn display_fractions(&self) -> (f64, f64) {
        let correct = clamp_percent(self.correct_fraction);
        (correct, 100.0 - correct)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionInput {
    pub buckets: [u8; 11],
    pub counts: [u32; 11],
    /// Continuous x position on the bucket axis (0.0 = first bucket, 10.0 = last).
    pub marker_x: f64,
}

impl DistributionInput {
    pub fn for_percentile(percentile: i64) -> Self {
        Self {
            buckets: DISTRIBUTION_BUCKETS,
            counts: DISTRIBUTION_COUNTS,
            marker_x: marker_x(percentile),
        }
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Where the "your percentile" line sits on the bucket axis.
pub fn marker_x(percentile: i64) -> f64 {
    percentile as f64 / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Below,
    Equal,
    Above,
}

impl Relation {
    fn phrase(self) -> &'static str {
        match self {
            Self::Below => "lower than",
            Self::Equal => "equal to",
            Self::Above => "higher than",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub percentile: i64,
    pub average_percentile: i64,
    pub relation: Relation,
}

impl Comparison {
    pub fn new(percentile: i64, average_percentile: i64) -> Self {
        let relation = match percentile.cmp(&average_percentile) {
            std::cmp::Ordering::Less => Relation::Below,
            std::cmp::Ordering::Equal => Relation::Equal,
            std::cmp::Ordering::Greater => Relation::Above,
        };
        Self {
            percentile,
            average_percentile,
            relation,
        }
    }

    /// English comparison sentence.
    pub fn narrative(&self) -> String {
        format!(
            "You scored {}% percentile which is {} the average percentile {}% of all the engineers who took this assessment",
            self.percentile,
            self.relation.phrase(),
            self.average_percentile
        )
    }
}

/// Inputs shared by every recompute that do not come from the score record.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedContext {
    pub average_percentile: i64,
    pub mastery: Vec<TopicMastery>,
}

impl Default for DerivedContext {
    fn default() -> Self {
        Self {
            average_percentile: REFERENCE_AVERAGE_PERCENTILE,
            mastery: default_topics(),
        }
    }
}

/// Everything the dashboard renders, recomputed on each commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub record: ScoreRecord,
    pub donut: DonutInput,
    pub distribution: DistributionInput,
    pub comparison: Comparison,
    pub narrative: String,
    pub mastery: Vec<TopicMastery>,
}

impl DerivedMetrics {
    pub fn compute(record: &ScoreRecord, context: &DerivedContext) -> Self {
        let comparison = Comparison::new(record.percentile, context.average_percentile);
        Self {
            record: *record,
            donut: DonutInput::from_correct_answers(record.correct_answers),
            distribution: DistributionInput::for_percentile(record.percentile),
            narrative: comparison.narrative(),
            comparison,
            mastery: context.mastery.clone(),
        }
    }

    /// "You scored 11 questions correct out of 15."
    pub fn question_summary(&self) -> String {
        format!(
            "You scored {} questions correct out of {TOTAL_QUESTIONS}.",
            self.record.correct_answers
        )
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
