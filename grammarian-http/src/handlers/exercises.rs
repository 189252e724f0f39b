use crate::auth::{AuthAuthor, AuthUser};
use crate::error::AppError;
use crate::models::{
    CreateExerciseRequest, CreateExerciseResponse, ExerciseDefinitionResponse, ExerciseSummary,
    ExerciseViewResponse, ListExercisesResponse, SubmitAnswerRequest,
};
use crate::server::AppState;
use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use grammarian_core::{Exercise, SubmissionError};

/// Get the learner view of an exercise
///
/// Returns the tokenized sentence plus the calling learner's state. The
/// correct part index is included only once this learner has answered.
#[utoipa::path(
    get,
    path = "/exercises/{exercise_id}",
    responses(
        (status = 200, description = "Exercise view retrieved successfully", body = ExerciseViewResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Exercise not found")
    ),
    params(
        ("exercise_id" = String, Path, description = "Exercise instance identifier")
    )
)]
#[axum::debug_handler]
pub async fn get_exercise(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(exercise_id): Path<String>,
) -> Result<Json<ExerciseViewResponse>, AppError> {
    let definition = state
        .exercises
        .get(&exercise_id)
        .ok_or_else(|| AppError::ExerciseNotFound(exercise_id.clone()))?;

    let answer_state = state.answers.get(&exercise_id, &auth.user().user_id);
    let exercise = Exercise::new(definition);
    let view = exercise.view(&answer_state);

    Ok(Json(ExerciseViewResponse::new(exercise.definition(), view)))
}

/// Submit the learner's single answer
///
/// Records which part the learner clicked. Succeeds at most once per
/// learner per exercise; afterwards the view reveals the correct part.
#[utoipa::path(
    post,
    path = "/exercises/{exercise_id}/attempt",
    request_body = SubmitAnswerRequest,
    responses(
        (status = 200, description = "Answer recorded", body = ExerciseViewResponse),
        (status = 400, description = "Already answered or invalid selection"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Exercise not found")
    ),
    params(
        ("exercise_id" = String, Path, description = "Exercise instance identifier")
    )
)]
#[axum::debug_handler]
pub async fn submit_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(exercise_id): Path<String>,
    payload: Result<Json<SubmitAnswerRequest>, JsonRejection>,
) -> Result<Json<ExerciseViewResponse>, AppError> {
    let definition = state
        .exercises
        .get(&exercise_id)
        .ok_or_else(|| AppError::ExerciseNotFound(exercise_id.clone()))?;

    // A body whose part_index is not an integer is an invalid selection,
    // not a transport error; it gets the same structured rejection as an
    // out-of-range index.
    let Json(payload) = payload.map_err(|rejection| {
        SubmissionError::InvalidSelection(format!(
            "part_index must be a non-negative integer: {}",
            rejection.body_text()
        ))
    })?;

    // A missing or negative index never reaches the state machine either.
    let candidate_index = payload
        .part_index
        .and_then(|index| usize::try_from(index).ok())
        .ok_or_else(|| {
            SubmissionError::InvalidSelection(format!(
                "part_index must be a non-negative integer, got {:?}",
                payload.part_index
            ))
        })?;

    let exercise = Exercise::new(definition);
    let view = state.answers.submit(
        &exercise,
        &exercise_id,
        &auth.user().user_id,
        candidate_index,
    )?;

    tracing::info!(
        exercise_id = %exercise_id,
        user_id = %auth.user().user_id,
        part_index = candidate_index,
        "answer submitted"
    );

    Ok(Json(ExerciseViewResponse::new(exercise.definition(), view)))
}

/// Register a new exercise instance
///
/// Requires the author role.
#[utoipa::path(
    post,
    path = "/exercises",
    request_body = CreateExerciseRequest,
    responses(
        (status = 201, description = "Exercise created", body = CreateExerciseResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
#[axum::debug_handler]
pub async fn create_exercise(
    State(state): State<AppState>,
    _auth: AuthAuthor,
    Json(payload): Json<CreateExerciseRequest>,
) -> (StatusCode, Json<CreateExerciseResponse>) {
    let exercise_id = state.exercises.create(payload.into());

    tracing::info!(exercise_id = %exercise_id, "exercise created");

    (
        StatusCode::CREATED,
        Json(CreateExerciseResponse { exercise_id }),
    )
}

/// List all exercise instances
#[utoipa::path(
    get,
    path = "/exercises",
    responses(
        (status = 200, description = "Exercises listed successfully", body = ListExercisesResponse),
        (status = 401, description = "Unauthorized")
    )
)]
#[axum::debug_handler]
pub async fn list_exercises(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Json<ListExercisesResponse> {
    let mut exercises: Vec<ExerciseSummary> = state
        .exercises
        .list()
        .into_iter()
        .map(|(exercise_id, definition)| ExerciseSummary {
            exercise_id,
            title: definition.title,
        })
        .collect();
    exercises.sort_by(|a, b| a.exercise_id.cmp(&b.exercise_id));

    Json(ListExercisesResponse { exercises })
}

/// Get the raw definition of an exercise, annotation included
///
/// Requires the author role; the bracketed text would leak the answer to a
/// learner.
#[utoipa::path(
    get,
    path = "/exercises/{exercise_id}/definition",
    responses(
        (status = 200, description = "Definition retrieved successfully", body = ExerciseDefinitionResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Exercise not found")
    ),
    params(
        ("exercise_id" = String, Path, description = "Exercise instance identifier")
    )
)]
#[axum::debug_handler]
pub async fn get_exercise_definition(
    State(state): State<AppState>,
    _auth: AuthAuthor,
    Path(exercise_id): Path<String>,
) -> Result<Json<ExerciseDefinitionResponse>, AppError> {
    let definition = state
        .exercises
        .get(&exercise_id)
        .ok_or_else(|| AppError::ExerciseNotFound(exercise_id.clone()))?;

    Ok(Json(definition.into()))
}

/// Replace the definition of an existing exercise
///
/// Requires the author role. Learner answers recorded against the previous
/// text are kept; later submissions are validated against the new text.
#[utoipa::path(
    put,
    path = "/exercises/{exercise_id}",
    request_body = CreateExerciseRequest,
    responses(
        (status = 200, description = "Definition updated", body = ExerciseDefinitionResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Exercise not found")
    ),
    params(
        ("exercise_id" = String, Path, description = "Exercise instance identifier")
    )
)]
#[axum::debug_handler]
pub async fn update_exercise(
    State(state): State<AppState>,
    _auth: AuthAuthor,
    Path(exercise_id): Path<String>,
    Json(payload): Json<CreateExerciseRequest>,
) -> Result<Json<ExerciseDefinitionResponse>, AppError> {
    let definition: grammarian_core::ExerciseDefinition = payload.into();
    if !state.exercises.update(&exercise_id, definition.clone()) {
        return Err(AppError::ExerciseNotFound(exercise_id));
    }

    tracing::info!(exercise_id = %exercise_id, "exercise updated");

    Ok(Json(definition.into()))
}
