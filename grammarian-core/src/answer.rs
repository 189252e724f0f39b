//! One-shot answer state machine.
//!
//! A learner starts `Unanswered` and moves to `Answered` by submitting a
//! part index exactly once; there is no transition back. While unanswered,
//! the correct index is withheld from every view so the answer cannot leak
//! before submission.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a submission can fail with. Both are caused by the caller and
/// reported synchronously; neither is retried internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// A second submission attempt. Hard rejection rather than a silent
    /// no-op: the serving layer should never allow this under normal
    /// operation, so it signals a client/state desync.
    #[error("an answer has already been submitted")]
    AlreadyAnswered,

    /// The candidate index is missing or outside `[0, sequence_length)`.
    #[error("invalid part selection: {0}")]
    InvalidSelection(String),
}

/// The user-specific state exposed to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// The part the learner selected, if they have answered.
    pub selected_index: Option<usize>,
    /// The correct part, revealed only once the learner has answered.
    pub correct_index: Option<usize>,
}

/// Per-learner persisted state: the single part index the learner selected.
///
/// Write-once: once `selected_index` is set it is never overwritten. The
/// selection is recorded regardless of correctness; correctness is derived
/// by the caller as `selected_index == answer_index`, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerState {
    selected_index: Option<usize>,
}

impl AnswerState {
    /// Has the learner made a choice yet?
    pub fn has_answered(&self) -> bool {
        self.selected_index.is_some()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Current view of this learner's state. `answer_index` is included
    /// only once the learner has answered.
    pub fn view(&self, answer_index: Option<usize>) -> ViewState {
        ViewState {
            selected_index: self.selected_index,
            correct_index: if self.has_answered() {
                answer_index
            } else {
                None
            },
        }
    }

    /// Record the learner's single submission.
    ///
    /// `sequence_len` must be recomputed from the current authored text at
    /// submission time, not cached from an earlier view, so an author edit
    /// between view and submit is caught rather than silently accepted.
    pub fn submit(
        &mut self,
        sequence_len: usize,
        candidate_index: usize,
        answer_index: Option<usize>,
    ) -> Result<ViewState, SubmissionError> {
        if self.has_answered() {
            return Err(SubmissionError::AlreadyAnswered);
        }
        if candidate_index >= sequence_len {
            return Err(SubmissionError::InvalidSelection(format!(
                "part index {} is out of range for {} parts",
                candidate_index, sequence_len
            )));
        }
        self.selected_index = Some(candidate_index);
        Ok(self.view(answer_index))
    }
}
