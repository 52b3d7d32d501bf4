//! Edit-and-commit workflow behind the "Update" button.
//!
//! The editor is either closed or open with three text fields. Opening always
//! seeds every field with `"0"`, even after a previous submit; the form does
//! not pre-fill the committed values.
//!
//! Field coercion (permissive mode)
//! --------------------------------
//! Each field is trimmed, then:
//! - empty text becomes `0`
//! - integer text is taken as-is
//! - finite decimal or exponent text (`"6.9"`, `"1e2"`) is truncated toward zero,
//!   saturating at the `i64` bounds
//! - anything else (`"abc"`, `"NaN"`, `"inf"`) becomes `0`
//!
//! Strict mode instead rejects non-integral text and out-of-range triples with a
//! [`ValidationError`], leaving the editor open and the store untouched.

use serde::{Deserialize, Serialize};

use super::score::{ScoreField, ScoreRecord, ValidationError};
use super::store::ResultStore;

/// How submitted fields are checked before committing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Coerce everything, never reject.
    #[default]
    Permissive,
    /// Reject non-numeric or out-of-range submissions.
    Strict,
}

/// Raw text of the three inputs while the editor is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditFields {
    pub percentile: String,
    pub rank: String,
    pub correct_answers: String,
}

impl EditFields {
    pub fn zeroed() -> Self {
        Self {
            percentile: "0".to_string(),
            rank: "0".to_string(),
            correct_answers: "0".to_string(),
        }
    }

    pub fn get(&self, field: ScoreField) -> &str {
        match field {
            ScoreField::Percentile => &self.percentile,
            ScoreField::Rank => &self.rank,
            ScoreField::CorrectAnswers => &self.correct_answers,
        }
    }

    fn slot_mut(&mut self, field: ScoreField) -> &mut String {
        match field {
            ScoreField::Percentile => &mut self.percentile,
            ScoreField::Rank => &mut self.rank,
            ScoreField::CorrectAnswers => &mut self.correct_answers,
        }
    }

    /// Candidate triple under the permissive coercion rule.
    pub fn coerced(&self) -> ScoreRecord {
        ScoreRecord::new(
            coerce_field(&self.percentile),
            coerce_field(&self.rank),
            coerce_field(&self.correct_answers),
        )
    }

    /// Candidate triple under strict parsing, then range-checked.
    pub fn validated(&self) -> Result<ScoreRecord, ValidationError> {
        let strict = |field: ScoreField| {
            let raw = self.get(field);
            parse_whole(raw).ok_or_else(|| ValidationError::NotANumber {
                field,
                raw: raw.to_string(),
            })
        };

        let record = ScoreRecord::new(
            strict(ScoreField::Percentile)?,
            strict(ScoreField::Rank)?,
            strict(ScoreField::CorrectAnswers)?,
        );
        record.validate()?;
        Ok(record)
    }

    pub fn candidate(&self, mode: ValidationMode) -> Result<ScoreRecord, ValidationError> {
        match mode {
            ValidationMode::Permissive => Ok(self.coerced()),
            ValidationMode::Strict => self.validated(),
        }
    }
}

impl Default for EditFields {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Open(EditFields),
}

/// Owns the editor state machine for one dashboard session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSession {
    state: EditorState,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Open(_))
    }

    pub fn fields(&self) -> Option<&EditFields> {
        match &self.state {
            EditorState::Open(fields) => Some(fields),
            EditorState::Closed => None,
        }
    }

    /// Show the form with every field reset to `"0"`.
    pub fn open(&mut self) {
        self.state = EditorState::Open(EditFields::zeroed());
    }

    /// Store raw text for `field`. No effect while closed.
    pub fn set_field(&mut self, field: ScoreField, raw: impl Into<String>) {
        match &mut self.state {
            EditorState::Open(fields) => *fields.slot_mut(field) = raw.into(),
            EditorState::Closed => {
                tracing::trace!(%field, "field edit ignored, editor closed");
            }
        }
    }

    /// Close without committing.
    pub fn cancel(&mut self) {
        if self.is_open() {
            tracing::debug!("score editor cancelled");
        }
        self.state = EditorState::Closed;
    }

    /// Commit the edited triple and close.
    ///
    /// Returns `Ok(None)` when the editor was not open. On a validation error the
    /// editor stays open with the user's text intact.
    pub fn submit(
        &mut self,
        store: &mut ResultStore,
        mode: ValidationMode,
    ) -> Result<Option<ScoreRecord>, ValidationError> {
        let EditorState::Open(fields) = &self.state else {
            tracing::trace!("submit ignored, editor closed");
            return Ok(None);
        };

        let candidate = match fields.candidate(mode) {
            Ok(candidate) => candidate,
            Err(err) => {
                tracing::debug!(error = %err, "score submission rejected");
                return Err(err);
            }
        };

        store.commit(candidate);
        self.state = EditorState::Closed;
        Ok(Some(candidate))
    }
}

/// Permissive numeric coercion of one input; see the module docs.
pub fn coerce_field(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return value;
    }
    match trimmed.parse::<f64>() {
        // `as` saturates at the i64 bounds for finite floats.
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => 0,
    }
}

/// Integral value of `raw`, or `None` for empty, fractional, or non-numeric text.
fn parse_whole(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    let value = trimmed.parse::<f64>().ok()?;
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_at(percentile: i64, rank: i64, correct: i64) -> ResultStore {
        let mut store = ResultStore::new();
        store.commit(ScoreRecord::new(percentile, rank, correct));
        store
    }

    #[test]
    fn coercion_rule() {
        assert_eq!(coerce_field("42"), 42);
        assert_eq!(coerce_field("  7 "), 7);
        assert_eq!(coerce_field(""), 0);
        assert_eq!(coerce_field("-3"), -3);
        assert_eq!(coerce_field("6.9"), 6);
        assert_eq!(coerce_field("-6.9"), -6);
        assert_eq!(coerce_field("1e2"), 100);
        assert_eq!(coerce_field("abc"), 0);
        assert_eq!(coerce_field("NaN"), 0);
        assert_eq!(coerce_field("inf"), 0);
        assert_eq!(coerce_field("1e300"), i64::MAX);
    }

    #[test]
    fn opening_seeds_zeroes() {
        let mut editor = EditorSession::new();
        assert!(!editor.is_open());
        editor.open();
        assert_eq!(editor.fields(), Some(&EditFields::zeroed()));
    }

    #[test]
    fn opening_twice_discards_pending_edits() {
        let mut editor = EditorSession::new();
        editor.open();
        editor.set_field(ScoreField::Percentile, "88");
        editor.open();
        assert_eq!(editor.fields(), Some(&EditFields::zeroed()));
    }

    #[test]
    fn cancel_leaves_store_untouched() {
        let mut store = store_at(40, 10, 3);
        let mut editor = EditorSession::new();

        editor.open();
        editor.set_field(ScoreField::Percentile, "99");
        editor.cancel();

        assert!(!editor.is_open());
        assert_eq!(store.read(), ScoreRecord::new(40, 10, 3));
        assert_eq!(
            editor.submit(&mut store, ValidationMode::Permissive),
            Ok(None)
        );
        assert_eq!(store.read(), ScoreRecord::new(40, 10, 3));
    }

    #[test]
    fn submit_commits_and_closes() {
        let mut store = ResultStore::new();
        let mut editor = EditorSession::new();

        editor.open();
        editor.set_field(ScoreField::Percentile, "65");
        editor.set_field(ScoreField::Rank, "150");
        editor.set_field(ScoreField::CorrectAnswers, "11");

        let committed = editor
            .submit(&mut store, ValidationMode::Permissive)
            .unwrap();
        assert_eq!(committed, Some(ScoreRecord::new(65, 150, 11)));
        assert_eq!(store.read(), ScoreRecord::new(65, 150, 11));
        assert_eq!(editor.state(), &EditorState::Closed);
    }

    #[test]
    fn reopening_resets_to_zero_not_last_committed() {
        let mut store = ResultStore::new();
        let mut editor = EditorSession::new();

        editor.open();
        editor.set_field(ScoreField::Rank, "12");
        editor
            .submit(&mut store, ValidationMode::Permissive)
            .unwrap();

        editor.open();
        let fields = editor.fields().unwrap();
        assert_eq!(fields.rank, "0");
        assert_eq!(fields.percentile, "0");
        assert_eq!(fields.correct_answers, "0");
    }

    #[test]
    fn permissive_submit_coerces_garbage() {
        let mut store = ResultStore::new();
        let mut editor = EditorSession::new();

        editor.open();
        editor.set_field(ScoreField::Percentile, "lots");
        editor.set_field(ScoreField::Rank, "");
        editor.set_field(ScoreField::CorrectAnswers, "99");

        editor
            .submit(&mut store, ValidationMode::Permissive)
            .unwrap();
        assert_eq!(store.read(), ScoreRecord::new(0, 0, 99));
    }

    #[test]
    fn strict_submit_rejects_and_stays_open() {
        let mut store = store_at(40, 10, 3);
        let mut editor = EditorSession::new();

        editor.open();
        editor.set_field(ScoreField::Percentile, "lots");
        let err = editor
            .submit(&mut store, ValidationMode::Strict)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotANumber {
                field: ScoreField::Percentile,
                raw: "lots".into()
            }
        );
        assert!(editor.is_open());
        assert_eq!(editor.fields().unwrap().percentile, "lots");

        editor.set_field(ScoreField::Percentile, "50");
        editor.set_field(ScoreField::CorrectAnswers, "16");
        let err = editor
            .submit(&mut store, ValidationMode::Strict)
            .unwrap_err();
        assert_eq!(err.field(), ScoreField::CorrectAnswers);
        assert_eq!(store.read(), ScoreRecord::new(40, 10, 3));
    }

    #[test]
    fn strict_submit_accepts_valid_input() {
        let mut store = ResultStore::new();
        let mut editor = EditorSession::new();

        editor.open();
        editor.set_field(ScoreField::Percentile, " 80 ");
        editor.set_field(ScoreField::Rank, "1e1");
        editor.set_field(ScoreField::CorrectAnswers, "15");
        editor.submit(&mut store, ValidationMode::Strict).unwrap();

        assert_eq!(store.read(), ScoreRecord::new(80, 10, 15));
    }

    #[test]
    fn strict_rejects_fractions_and_empty() {
        let fields = EditFields {
            percentile: "6.5".into(),
            ..EditFields::zeroed()
        };
        assert!(matches!(
            fields.validated(),
            Err(ValidationError::NotANumber { .. })
        ));

        let fields = EditFields {
            rank: "   ".into(),
            ..EditFields::zeroed()
        };
        assert!(fields.validated().is_err());
    }

    #[test]
    fn edits_while_closed_are_ignored() {
        let mut editor = EditorSession::new();
        editor.set_field(ScoreField::Rank, "5");
        assert_eq!(editor.fields(), None);
    }
}
