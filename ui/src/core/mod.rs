//! Score state, the edit workflow, and the derived-metrics pipeline. No UI code lives here.

pub mod config;
pub mod derived;
pub mod editor;
pub mod format;
pub mod mastery;
pub mod score;
pub mod store;

pub use derived::{Comparison, DerivedContext, DerivedMetrics, DistributionInput, DonutInput};
pub use editor::{EditFields, EditorSession, EditorState, ValidationMode};
pub use mastery::{MasteryTone, TopicMastery};
pub use score::{ScoreField, ScoreRecord, ValidationError, TOTAL_QUESTIONS};
pub use store::{ResultStore, SubscriptionId};
