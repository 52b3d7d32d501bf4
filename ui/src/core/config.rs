//! Dashboard configuration loaded from `skillboard.toml`.
//!
//! Every section is optional; missing keys fall back to the built-in HTML
//! assessment. Example:
//!
//! ```toml
//! [assessment]
//! title = "Hyper Text Markup Language"
//! submitted_on = "2021-06-05"
//!
//! [comparison]
//! average_percentile = 72
//!
//! [editor]
//! validation = "strict"
//!
//! [[mastery]]
//! topic = "Tables & CSS Basics"
//! percentage = 96
//! tone = "green"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use time::{macros::format_description, Date};

use super::derived::{DerivedContext, REFERENCE_AVERAGE_PERCENTILE};
use super::editor::ValidationMode;
use super::mastery::{default_topics, TopicMastery};

pub const CONFIG_FILE_NAME: &str = "skillboard.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub assessment: AssessmentInfo,
    pub comparison: ComparisonConfig,
    pub editor: EditorConfig,
    pub profile: ProfileConfig,
    pub mastery: Vec<TopicMastery>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssessmentInfo {
    pub title: String,
    pub questions: u32,
    pub duration_minutes: u32,
    /// ISO date, `YYYY-MM-DD`.
    pub submitted_on: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    pub average_percentile: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub validation: ValidationMode,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub display_name: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            assessment: AssessmentInfo::default(),
            comparison: ComparisonConfig::default(),
            editor: EditorConfig::default(),
            profile: ProfileConfig::default(),
            mastery: default_topics(),
        }
    }
}

impl Default for AssessmentInfo {
    fn default() -> Self {
        Self {
            title: "Hyper Text Markup Language".into(),
            questions: 8,
            duration_minutes: 15,
            submitted_on: "2021-06-05".into(),
        }
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            average_percentile: REFERENCE_AVERAGE_PERCENTILE,
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            display_name: "Abdessamad Ait Elmouden".into(),
        }
    }
}

impl AssessmentInfo {
    pub fn submitted_date(&self) -> Option<Date> {
        Date::parse(
            self.submitted_on.trim(),
            &format_description!("[year]-[month]-[day]"),
        )
        .ok()
    }

    /// Long form like `5 June 2021`; falls back to the raw text if it isn't a date.
    pub fn submitted_label(&self) -> String {
        self.submitted_date()
            .and_then(|date| {
                date.format(&format_description!(
                    "[day padding:none] [month repr:long] [year]"
                ))
                .ok()
            })
            .unwrap_or_else(|| self.submitted_on.clone())
    }

    /// Question count as shown in the card header, zero-padded to two digits.
    pub fn questions_label(&self) -> String {
        format!("{:02}", self.questions)
    }
}

impl DashboardConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Read and parse `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("config loaded from {}", path.display());
        Ok(config)
    }

    /// Like [`DashboardConfig::load`], but a missing or broken file yields defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("config file {} not found, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}, using defaults");
                Self::default()
            }
        }
    }

    /// Inputs for [`crate::core::derived::DerivedMetrics::compute`].
    pub fn derived_context(&self) -> DerivedContext {
        DerivedContext {
            average_percentile: self.comparison.average_percentile,
            mastery: self.mastery.clone(),
        }
    }
}

/// Where the desktop build looks for its config file: the working directory first,
/// then the platform config dir.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    directories::ProjectDirs::from("com", "ReadyPlayerEmma", "Skillboard")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
        .unwrap_or(local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mastery::MasteryTone;

    #[test]
    fn empty_file_yields_defaults() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.comparison.average_percentile, 72);
        assert_eq!(config.editor.validation, ValidationMode::Permissive);
        assert_eq!(config.mastery.len(), 4);
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [comparison]
            average_percentile = 60

            [editor]
            validation = "strict"
            "#,
        )
        .unwrap();

        assert_eq!(config.comparison.average_percentile, 60);
        assert_eq!(config.editor.validation, ValidationMode::Strict);
        assert_eq!(config.assessment, AssessmentInfo::default());
        assert_eq!(config.derived_context().average_percentile, 60);
    }

    #[test]
    fn mastery_entries_replace_defaults_and_clamp() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [[mastery]]
            topic = "Selectors"
            percentage = 140
            tone = "orange"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.mastery,
            vec![TopicMastery::new("Selectors", 100, MasteryTone::Orange)]
        );
    }

    #[test]
    fn wide_mastery_values_clamp_without_losing_other_settings() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [comparison]
            average_percentile = 50

            [editor]
            validation = "strict"

            [[mastery]]
            topic = "Semantics"
            percentage = 300
            tone = "blue"

            [[mastery]]
            topic = "Accessibility"
            percentage = -5
            tone = "red"
            "#,
        )
        .unwrap();

        assert_eq!(config.comparison.average_percentile, 50);
        assert_eq!(config.editor.validation, ValidationMode::Strict);
        assert_eq!(
            config.mastery,
            vec![
                TopicMastery::new("Semantics", 100, MasteryTone::Blue),
                TopicMastery::new("Accessibility", 0, MasteryTone::Red),
            ]
        );
    }

    #[test]
    fn unknown_validation_mode_is_a_parse_error() {
        let err = DashboardConfig::from_toml_str("[editor]\nvalidation = \"loose\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn submitted_label_is_long_form() {
        let info = AssessmentInfo::default();
        assert_eq!(info.submitted_label(), "5 June 2021");
        assert_eq!(info.questions_label(), "08");

        let odd = AssessmentInfo {
            submitted_on: "last week".into(),
            ..AssessmentInfo::default()
        };
        assert_eq!(odd.submitted_label(), "last week");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = DashboardConfig::load_or_default("definitely/not/here/skillboard.toml");
        assert_eq!(config, DashboardConfig::default());
        assert!(matches!(
            DashboardConfig::load("definitely/not/here/skillboard.toml"),
            Err(ConfigError::Read { .. })
        ));
    }
}
