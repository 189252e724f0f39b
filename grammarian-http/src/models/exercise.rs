use grammarian_core::{ExerciseDefinition, ExerciseView};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The learner-facing view of an exercise: the tokenized sentence plus this
/// learner's state. The raw annotated text never appears here, so the
/// bracket markers cannot leak the answer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseViewResponse {
    /// The title of the problem
    pub title: String,
    /// Instructions shown to the learner
    pub instructions: String,
    /// The sentence split into clickable parts
    pub parts: Vec<String>,
    /// The part this learner selected, if they have answered
    pub selected_index: Option<usize>,
    /// The correct part, revealed only once this learner has answered
    pub correct_index: Option<usize>,
}

impl ExerciseViewResponse {
    pub fn new(definition: &ExerciseDefinition, view: ExerciseView) -> Self {
        Self {
            title: definition.title.clone(),
            instructions: definition.instructions.clone(),
            parts: view.parts,
            selected_index: view.selected_index,
            correct_index: view.correct_index,
        }
    }
}

/// A learner's single answer submission
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SubmitAnswerRequest {
    /// Index of the part the learner clicked
    pub part_index: Option<i64>,
}

/// Author-facing request to register a new exercise instance
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateExerciseRequest {
    /// The title of the problem
    #[serde(default = "default_title")]
    pub title: String,
    /// Instructions shown to the learner
    #[serde(default = "default_instructions")]
    pub instructions: String,
    /// The annotated sentence; surround the error with square brackets,
    /// e.g. "[It's] surface was cracked."
    pub text: String,
}

fn default_title() -> String {
    ExerciseDefinition::default().title
}

fn default_instructions() -> String {
    ExerciseDefinition::default().instructions
}

impl From<CreateExerciseRequest> for ExerciseDefinition {
    fn from(request: CreateExerciseRequest) -> Self {
        Self {
            title: request.title,
            instructions: request.instructions,
            text: request.text,
        }
    }
}

/// Response to a successful exercise registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateExerciseResponse {
    /// Identifier of the new exercise instance
    pub exercise_id: String,
}

/// Author-facing raw definition, annotated text included
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseDefinitionResponse {
    /// The title of the problem
    pub title: String,
    /// Instructions shown to the learner
    pub instructions: String,
    /// The annotated sentence, bracket markers intact
    pub text: String,
}

impl From<ExerciseDefinition> for ExerciseDefinitionResponse {
    fn from(definition: ExerciseDefinition) -> Self {
        Self {
            title: definition.title,
            instructions: definition.instructions,
            text: definition.text,
        }
    }
}

/// One entry in the exercise listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseSummary {
    /// Identifier of the exercise instance
    pub exercise_id: String,
    /// The title of the problem
    pub title: String,
}

/// Listing of all registered exercise instances
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListExercisesResponse {
    pub exercises: Vec<ExerciseSummary>,
}
