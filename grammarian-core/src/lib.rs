//! # Grammarian Core
//!
//! Domain logic for the Grammarian exercise: a sentence is shown to a
//! learner, one contiguous span of it was marked by the author as "the
//! error", and the learner must pick which displayed token corresponds to
//! that span.
//!
//! ## Component Structure
//!
//! * [`tokenizer`]: splits an annotated sentence into learner-facing parts
//!   and locates the author-marked answer span
//! * [`answer`]: the one-shot answer state machine (submit exactly once,
//!   reveal the answer afterwards)
//! * [`exercise`]: the authored exercise definition and the controller that
//!   composes the tokenizer and the state machine into view/submit
//!   operations
//!
//! ## Processing Pipeline
//!
//! 1. **Input**: the authored text, e.g. `"What [affect] has it had?"`
//! 2. **Tokenize**: [`tokenizer::tokenize`] produces the part sequence and
//!    the index of the bracketed part
//! 3. **State**: [`answer::AnswerState`] records the learner's single
//!    submission
//! 4. **Output**: [`exercise::ExerciseView`], the render-ready bundle
//!    consumed by the serving layer
//!
//! All operations are synchronous and deterministic; the authored text is
//! re-tokenized on every call so that author edits are always picked up.

pub mod answer;
pub mod exercise;
pub mod tokenizer;

pub use answer::{AnswerState, SubmissionError, ViewState};
pub use exercise::{Exercise, ExerciseDefinition, ExerciseView};
pub use tokenizer::tokenize;
