//! The authored exercise and the controller composing the tokenizer with
//! the answer state machine.

use serde::{Deserialize, Serialize};

use crate::answer::{AnswerState, SubmissionError};
use crate::tokenizer::tokenize;

/// The author-facing configuration of one exercise instance.
///
/// `text` is the annotated sentence: the author surrounds the error with
/// square brackets, e.g. `"[It's] surface was cracked."`. It is the single
/// source of truth; parts and the answer index are derived from it on every
/// read and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    /// The title of this problem.
    pub title: String,
    /// The description of the problem or instructions shown to the learner.
    pub instructions: String,
    /// The annotated sentence shown to the learner.
    pub text: String,
}

impl Default for ExerciseDefinition {
    fn default() -> Self {
        Self {
            title: "Identify the error".to_string(),
            instructions: "Is there an error in the following sentence? \
                           Click on the part of the sentence that is incorrect."
                .to_string(),
            text: "What [affect] has it had on your life?".to_string(),
        }
    }
}

/// The render-ready bundle consumed by the serving layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseView {
    /// The tokenized sentence, one entry per clickable unit.
    pub parts: Vec<String>,
    /// The part the learner selected, if any.
    pub selected_index: Option<usize>,
    /// The correct part, present only once the learner has answered.
    pub correct_index: Option<usize>,
}

/// Composes the tokenizer and the answer state machine for one exercise.
///
/// Every operation re-tokenizes the current authored text, so author edits
/// between calls are always reflected and a submission is validated against
/// the part count at submission time.
#[derive(Debug, Clone, Default)]
pub struct Exercise {
    definition: ExerciseDefinition,
}

impl Exercise {
    pub fn new(definition: ExerciseDefinition) -> Self {
        Self { definition }
    }

    pub fn definition(&self) -> &ExerciseDefinition {
        &self.definition
    }

    /// The parts of the current text, brackets stripped.
    pub fn parts(&self) -> Vec<String> {
        tokenize(&self.definition.text).0
    }

    /// The index of the part the author marked as wrong. `None` when the
    /// annotation is missing or malformed.
    pub fn answer_index(&self) -> Option<usize> {
        tokenize(&self.definition.text).1
    }

    /// Build the view bundle for one learner's state.
    pub fn view(&self, state: &AnswerState) -> ExerciseView {
        let (parts, answer_index) = tokenize(&self.definition.text);
        let view_state = state.view(answer_index);
        ExerciseView {
            parts,
            selected_index: view_state.selected_index,
            correct_index: view_state.correct_index,
        }
    }

    /// Route one submission through the state machine and return the
    /// updated view bundle.
    pub fn submit(
        &self,
        state: &mut AnswerState,
        candidate_index: usize,
    ) -> Result<ExerciseView, SubmissionError> {
        let (parts, answer_index) = tokenize(&self.definition.text);
        let view_state = state.submit(parts.len(), candidate_index, answer_index)?;
        tracing::debug!(
            selected_index = candidate_index,
            correct_index = ?answer_index,
            "recorded answer submission"
        );
        Ok(ExerciseView {
            parts,
            selected_index: view_state.selected_index,
            correct_index: view_state.correct_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn exercise(text: &str) -> Exercise {
        Exercise::new(ExerciseDefinition {
            text: text.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_default_definition_round_trips_through_json() {
        let definition = ExerciseDefinition::default();
        let json = serde_json::to_string(&definition).unwrap();
        let back: ExerciseDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, definition);
        assert_eq!(
            Exercise::new(definition).answer_index(),
            Some(2),
            "the default text marks its third part"
        );
    }

    #[test]
    fn test_view_before_answering_hides_answer() {
        let exercise = exercise("To [boldy go]");
        let view = exercise.view(&AnswerState::default());
        assert_eq!(view.parts, vec!["To", " ", "boldy go"]);
        assert_eq!(view.selected_index, None);
        assert_eq!(view.correct_index, None);
    }

    #[test]
    fn test_submit_reveals_answer() {
        let exercise = exercise("To [boldy go]");
        let mut state = AnswerState::default();
        let view = exercise.submit(&mut state, 2).unwrap();
        assert_eq!(view.selected_index, Some(2));
        assert_eq!(view.correct_index, Some(2));

        // Subsequent views keep revealing the answer.
        let view = exercise.view(&state);
        assert_eq!(view.correct_index, Some(2));
    }

    #[test]
    fn test_second_submission_is_rejected() {
        let exercise = exercise("To [boldy go]");
        let mut state = AnswerState::default();
        exercise.submit(&mut state, 0).unwrap();
        assert_eq!(
            exercise.submit(&mut state, 1).unwrap_err(),
            SubmissionError::AlreadyAnswered
        );
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_submission_validated_against_current_text() {
        // The author shortened the text after the learner loaded the page;
        // the stale index must be rejected, not silently accepted.
        let mut state = AnswerState::default();
        let before = exercise("What [affect] has it had on your life?");
        assert_eq!(before.parts().len(), 16);

        let after = exercise("[Affect] or effect?");
        let err = after.submit(&mut state, 15).unwrap_err();
        assert!(matches!(err, SubmissionError::InvalidSelection(_)));

        // A valid index against the edited text still works.
        let view = after.submit(&mut state, 0).unwrap();
        assert_eq!(view.correct_index, Some(0));
    }

    #[test]
    fn test_malformed_annotation_degrades_to_no_answer() {
        let exercise = exercise("To [boldy go");
        let mut state = AnswerState::default();
        assert_eq!(exercise.answer_index(), None);
        let view = exercise.submit(&mut state, 0).unwrap();
        assert_eq!(view.selected_index, Some(0));
        assert_eq!(view.correct_index, None);
    }
}
