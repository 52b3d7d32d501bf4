//! Session-level behaviour of the score store, editor, and derived pipeline,
//! wired the same way the dashboard wires them: one observer recomputes the
//! derived metrics on every commit.

use std::cell::RefCell;
use std::rc::Rc;

use ui::core::{
    config::DashboardConfig, DerivedContext, DerivedMetrics, EditorSession, ResultStore,
    ScoreField, ScoreRecord, ValidationMode,
};

struct Session {
    store: ResultStore,
    editor: EditorSession,
    view: Rc<RefCell<DerivedMetrics>>,
    recomputes: Rc<RefCell<u32>>,
}

impl Session {
    fn start(context: DerivedContext) -> Self {
        let view = Rc::new(RefCell::new(DerivedMetrics::compute(
            &ScoreRecord::zeroed(),
            &context,
        )));
        let recomputes = Rc::new(RefCell::new(0));

        let mut store = ResultStore::initialize();
        let sink = view.clone();
        let counter = recomputes.clone();
        store.subscribe(move |record| {
            *sink.borrow_mut() = DerivedMetrics::compute(record, &context);
            *counter.borrow_mut() += 1;
        });

        Self {
            store,
            editor: EditorSession::new(),
            view,
            recomputes,
        }
    }

    fn fill(&mut self, percentile: &str, rank: &str, correct: &str) {
        self.editor.set_field(ScoreField::Percentile, percentile);
        self.editor.set_field(ScoreField::Rank, rank);
        self.editor.set_field(ScoreField::CorrectAnswers, correct);
    }
}

#[test]
fn update_flow_recomputes_every_view() {
    let mut session = Session::start(DerivedContext::default());
    assert_eq!(session.store.read(), ScoreRecord::new(0, 0, 0));

    session.editor.open();
    let fields = session.editor.fields().unwrap();
    assert_eq!(
        (
            fields.percentile.as_str(),
            fields.rank.as_str(),
            fields.correct_answers.as_str()
        ),
        ("0", "0", "0")
    );

    session.fill("65", "150", "11");
    let committed = session
        .editor
        .submit(&mut session.store, ValidationMode::Permissive)
        .unwrap();
    assert_eq!(committed, Some(ScoreRecord::new(65, 150, 11)));
    assert!(!session.editor.is_open());
    assert_eq!(session.store.read(), ScoreRecord::new(65, 150, 11));

    let view = session.view.borrow();
    assert_eq!(view.record, ScoreRecord::new(65, 150, 11));
    assert!((view.donut.correct_fraction - 73.333_333_333).abs() < 1e-6);
    assert!((view.donut.incorrect_fraction - 26.666_666_667).abs() < 1e-6);
    assert_eq!(view.donut.correct_fraction + view.donut.incorrect_fraction, 100.0);
    assert_eq!(view.distribution.marker_x, 6.5);
    assert_eq!(
        view.question_summary(),
        "You scored 11 questions correct out of 15."
    );
    assert!(view.narrative.contains("65%"));
    assert!(view.narrative.contains("lower than"));
    assert_eq!(*session.recomputes.borrow(), 1);
}

#[test]
fn cancel_keeps_record_and_skips_recompute() {
    let mut session = Session::start(DerivedContext::default());
    session.store.commit(ScoreRecord::new(40, 10, 3));
    let before = session.view.borrow().clone();

    session.editor.open();
    session.fill("99", "1", "15");
    session.editor.cancel();

    assert_eq!(session.store.read(), ScoreRecord::new(40, 10, 3));
    assert_eq!(*session.view.borrow(), before);
    assert_eq!(*session.recomputes.borrow(), 1);
    assert_eq!(session.store.commit_count(), 1);
}

#[test]
fn reopening_after_submit_shows_zeroes() {
    let mut session = Session::start(DerivedContext::default());

    session.editor.open();
    session.fill("80", "12", "14");
    session
        .editor
        .submit(&mut session.store, ValidationMode::Permissive)
        .unwrap();

    session.editor.open();
    let fields = session.editor.fields().unwrap();
    assert_eq!(fields.percentile, "0");
    assert_eq!(fields.rank, "0");
    assert_eq!(fields.correct_answers, "0");
    assert_eq!(session.store.read(), ScoreRecord::new(80, 12, 14));
}

#[test]
fn observer_never_sees_a_partial_record() {
    let mut store = ResultStore::initialize();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |record| sink.borrow_mut().push(*record));

    store.commit(ScoreRecord::new(55, 120, 9));
    store.commit(ScoreRecord::new(1, 2, 3));

    assert_eq!(store.read(), ScoreRecord::new(1, 2, 3));
    assert_eq!(
        *seen.borrow(),
        vec![ScoreRecord::new(55, 120, 9), ScoreRecord::new(1, 2, 3)]
    );
}

#[test]
fn strict_config_rejects_out_of_range_submission() {
    let config = DashboardConfig::from_toml_str("[editor]\nvalidation = \"strict\"\n").unwrap();
    let mut session = Session::start(config.derived_context());

    session.editor.open();
    session.fill("140", "3", "5");
    let err = session
        .editor
        .submit(&mut session.store, config.editor.validation)
        .unwrap_err();

    assert_eq!(err.field(), ScoreField::Percentile);
    assert!(session.editor.is_open());
    assert_eq!(session.store.read(), ScoreRecord::zeroed());
    assert_eq!(*session.recomputes.borrow(), 0);
}

#[test]
fn configured_average_changes_narrative_only() {
    let config =
        DashboardConfig::from_toml_str("[comparison]\naverage_percentile = 50\n").unwrap();
    let mut session = Session::start(config.derived_context());

    session.store.commit(ScoreRecord::new(65, 150, 11));
    let view = session.view.borrow();
    assert!(view.narrative.contains("higher than"));
    assert!(view.narrative.contains("50%"));
    assert_eq!(view.distribution.marker_x, 6.5);
}

#[test]
fn derived_metrics_serialize_for_external_renderers() {
    let metrics = DerivedMetrics::compute(&ScoreRecord::new(65, 150, 11), &DerivedContext::default());
    let json = serde_json::to_value(&metrics).unwrap();

    assert_eq!(json["record"]["correct_answers"], 11);
    assert_eq!(json["distribution"]["marker_x"], 6.5);
    assert_eq!(json["distribution"]["counts"][5], 25);
    assert_eq!(json["comparison"]["relation"], "below");
    assert_eq!(json["mastery"][3]["tone"], "green");

    let back: DerivedMetrics = serde_json::from_value(json).unwrap();
    assert_eq!(back, metrics);
}
