//! Session-scoped holder of the current [`ScoreRecord`].
//!
//! The store is the single source of truth for raw scores. It accepts any
//! candidate triple without checking ranges; callers that want validation run
//! it before committing (see [`crate::core::editor`]).
//!
//! Observers registered with [`ResultStore::subscribe`] run synchronously
//! inside [`ResultStore::commit`], after the record has been replaced, so they
//! only ever observe the complete new triple.

use std::fmt;

use super::score::ScoreRecord;

/// Handle returned by [`ResultStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&ScoreRecord)>;

pub struct ResultStore {
    record: ScoreRecord,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
    commits: u64,
}

impl ResultStore {
    /// Fresh store holding `{0, 0, 0}` and no observers.
    pub fn initialize() -> Self {
        Self {
            record: ScoreRecord::zeroed(),
            observers: Vec::new(),
            next_id: 0,
            commits: 0,
        }
    }

    pub fn new() -> Self {
        Self::initialize()
    }

    /// Current snapshot.
    pub fn read(&self) -> ScoreRecord {
        self.record
    }

    /// Replace the record with `candidate` and notify observers in subscription order.
    pub fn commit(&mut self, candidate: ScoreRecord) {
        self.record = candidate;
        self.commits = self.commits.wrapping_add(1);
        tracing::debug!(
            percentile = candidate.percentile,
            rank = candidate.rank,
            correct_answers = candidate.correct_answers,
            observers = self.observers.len(),
            "score record committed"
        );

        let snapshot = self.record;
        for (_, observer) in self.observers.iter_mut() {
            observer(&snapshot);
        }
    }

    /// Register an observer. It is not called for the current record, only for later commits.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&ScoreRecord) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if `id` was not (or no longer) registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Number of commits since initialization.
    pub fn commit_count(&self) -> u64 {
        self.commits
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::initialize()
    }
}

impl fmt::Debug for ResultStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultStore")
            .field("record", &self.record)
            .field("observers", &self.observers.len())
            .field("commits", &self.commits)
            .finish()
    }
}
