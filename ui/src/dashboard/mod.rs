mod cards;
pub use cards::{ComparisonGraphCard, QuestionAnalysisCard, SyllabusAnalysisCard};

mod summary;
pub use summary::SkillTestCard;

mod editor;
pub use editor::UpdateDialog;

pub mod svg;

use dioxus::prelude::*;

use crate::core::{
    config::DashboardConfig, DerivedMetrics, EditorSession, ResultStore, ScoreRecord,
};

/// Signals backing one dashboard session. The store's only observer recomputes
/// `metrics`, so views read derived values and never the store directly.
#[derive(Clone, Copy)]
pub struct DashboardSession {
    pub store: Signal<ResultStore>,
    pub metrics: Signal<DerivedMetrics>,
    pub editor: Signal<EditorSession>,
    pub config: Signal<DashboardConfig>,
}

impl DashboardSession {
    fn create(config: DashboardConfig) -> Self {
        let context = config.derived_context();
        let mut metrics = Signal::new(DerivedMetrics::compute(&ScoreRecord::zeroed(), &context));

        let mut store = ResultStore::initialize();
        store.subscribe(move |record| {
            let derived = DerivedMetrics::compute(record, &context);
            tracing::debug!(
                summary = %derived.question_summary(),
                narrative = %derived.narrative,
                "derived metrics recomputed"
            );
            metrics.set(derived);
        });

        Self {
            store: Signal::new(store),
            metrics,
            editor: Signal::new(EditorSession::new()),
            config: Signal::new(config),
        }
    }
}

/// Create the session once and expose it to every view below the caller.
pub fn use_dashboard_provider(config: impl FnOnce() -> DashboardConfig) -> DashboardSession {
    use_context_provider(|| DashboardSession::create(config()))
}

/// The session provided by [`use_dashboard_provider`] higher up the tree.
pub fn use_dashboard() -> DashboardSession {
    use_context::<DashboardSession>()
}
