//! In-memory stores for exercise instances and per-learner answers.
//!
//! The answer store is the persistence boundary the spec calls
//! "learner-scoped storage": a single optional integer per
//! (exercise, learner) pair, written at most once and never deleted.

use std::sync::Arc;

use dashmap::DashMap;
use grammarian_core::{AnswerState, Exercise, ExerciseDefinition, ExerciseView, SubmissionError};

pub type ExerciseId = String;
pub type LearnerId = String;

/// Registry of exercise instances, keyed by id.
#[derive(Clone, Debug, Default)]
pub struct ExerciseStore {
    exercises: Arc<DashMap<ExerciseId, ExerciseDefinition>>,
}

impl ExerciseStore {
    /// Create a new empty exercise store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the stock demo exercise
    pub fn with_defaults() -> Self {
        let store = Self::new();
        store.insert("demo", ExerciseDefinition::default());
        store
    }

    /// Register a new exercise instance and return its generated id
    pub fn create(&self, definition: ExerciseDefinition) -> ExerciseId {
        let exercise_id = uuid::Uuid::new_v4().to_string();
        self.exercises.insert(exercise_id.clone(), definition);
        exercise_id
    }

    /// Register an exercise instance under a caller-chosen id
    pub fn insert(&self, exercise_id: impl Into<ExerciseId>, definition: ExerciseDefinition) {
        self.exercises.insert(exercise_id.into(), definition);
    }

    /// Fetch the current definition of an exercise instance
    pub fn get(&self, exercise_id: &str) -> Option<ExerciseDefinition> {
        self.exercises.get(exercise_id).map(|d| d.clone())
    }

    /// Replace the definition of an existing exercise instance
    pub fn update(&self, exercise_id: &str, definition: ExerciseDefinition) -> bool {
        match self.exercises.get_mut(exercise_id) {
            Some(mut entry) => {
                *entry = definition;
                true
            }
            None => false,
        }
    }

    /// List all exercise instances
    pub fn list(&self) -> Vec<(ExerciseId, ExerciseDefinition)> {
        self.exercises
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

/// Per-learner persisted answers, keyed by (exercise, learner).
///
/// Each learner's state is independent; no cross-learner locking is needed.
/// The map's per-key entry lock makes the check-then-write inside `submit`
/// atomic with respect to racing submissions from the same learner, so at
/// most one wins and the others observe `AlreadyAnswered`.
#[derive(Clone, Debug, Default)]
pub struct AnswerStore {
    answers: Arc<DashMap<(ExerciseId, LearnerId), AnswerState>>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a learner's state, implicitly unanswered on first view.
    pub fn get(&self, exercise_id: &str, learner_id: &str) -> AnswerState {
        self.answers
            .get(&(exercise_id.to_string(), learner_id.to_string()))
            .map(|state| *state)
            .unwrap_or_default()
    }

    /// Route one submission through the exercise controller while holding
    /// this learner's entry, persisting the selection on success.
    pub fn submit(
        &self,
        exercise: &Exercise,
        exercise_id: &str,
        learner_id: &str,
        candidate_index: usize,
    ) -> Result<ExerciseView, SubmissionError> {
        let mut entry = self
            .answers
            .entry((exercise_id.to_string(), learner_id.to_string()))
            .or_default();
        exercise.submit(entry.value_mut(), candidate_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn demo_exercise() -> Exercise {
        Exercise::new(ExerciseDefinition {
            text: "To [boldy go]".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_exercise_store_roundtrip() {
        let store = ExerciseStore::with_defaults();
        assert!(store.get("demo").is_some());

        let exercise_id = store.create(ExerciseDefinition::default());
        assert_eq!(store.list().len(), 2);

        let updated = ExerciseDefinition {
            text: "[Affect] or effect?".to_string(),
            ..Default::default()
        };
        assert!(store.update(&exercise_id, updated.clone()));
        assert_eq!(store.get(&exercise_id), Some(updated));

        assert!(!store.update("missing", ExerciseDefinition::default()));
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_answer_store_scopes_state_per_learner() {
        let store = AnswerStore::new();
        let exercise = demo_exercise();

        store.submit(&exercise, "demo", "learner1", 0).unwrap();
        assert_eq!(store.get("demo", "learner1").selected_index(), Some(0));
        assert!(!store.get("demo", "learner2").has_answered());
        assert!(!store.get("other", "learner1").has_answered());
    }

    #[test]
    fn test_concurrent_submissions_only_one_wins() {
        let store = AnswerStore::new();
        let exercise = demo_exercise();

        let outcomes: Vec<_> = std::thread::scope(|scope| {
            (0..8usize)
                .map(|candidate| {
                    let store = &store;
                    let exercise = &exercise;
                    scope.spawn(move || store.submit(exercise, "demo", "learner1", candidate % 3))
                })
                .collect::<Vec<_>>()
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        let wins = outcomes.iter().filter(|o| o.is_ok()).count();
        assert_eq!(wins, 1);
        assert!(
            outcomes
                .iter()
                .filter_map(|o| o.as_ref().err())
                .all(|e| *e == SubmissionError::AlreadyAnswered)
        );
        assert!(store.get("demo", "learner1").has_answered());
    }
}
