//! Static per-topic proficiency shown as horizontal bars. Independent of scores.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MasteryTone {
    Blue,
    Orange,
    Red,
    Green,
}

impl MasteryTone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Blue => "mastery-bar__fill--blue",
            Self::Orange => "mastery-bar__fill--orange",
            Self::Red => "mastery-bar__fill--red",
            Self::Green => "mastery-bar__fill--green",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicMastery {
    pub topic: String,
    /// 0–100. Out-of-range values are clamped by [`TopicMastery::new`] and on load.
    #[serde(deserialize_with = "clamped_percentage")]
    pub percentage: u8,
    pub tone: MasteryTone,
}

impl TopicMastery {
    pub fn new(topic: impl Into<String>, percentage: u8, tone: MasteryTone) -> Self {
        Self {
            topic: topic.into(),
            percentage: percentage.min(100),
            tone,
        }
    }

    /// CSS width of the filled part of the bar.
    pub fn bar_width(&self) -> String {
        format!("{}%", self.percentage.min(100))
    }
}

fn clamped_percentage<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(0, 100) as u8)
}

/// The four syllabus topics of the HTML assessment, in display order.
pub fn default_topics() -> Vec<TopicMastery> {
    vec![
        TopicMastery::new("HTML Tools, Forms, History", 80, MasteryTone::Blue),
        TopicMastery::new("Tags & References in HTML", 60, MasteryTone::Orange),
        TopicMastery::new("Tables & References in HTML", 24, MasteryTone::Red),
        TopicMastery::new("Tables & CSS Basics", 96, MasteryTone::Green),
    ]
}
