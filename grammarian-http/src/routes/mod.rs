pub mod exercises;

use crate::handlers;
use crate::models::{
    CreateExerciseRequest, CreateExerciseResponse, ExerciseDefinitionResponse, ExerciseSummary,
    ExerciseViewResponse, ListExercisesResponse, SubmitAnswerRequest, User, UserRole,
};
use crate::server::AppState;
use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::exercises::get_exercise,
        handlers::exercises::submit_answer,
        handlers::exercises::create_exercise,
        handlers::exercises::list_exercises,
        handlers::exercises::get_exercise_definition,
        handlers::exercises::update_exercise
    ),
    components(schemas(
        ExerciseViewResponse,
        SubmitAnswerRequest,
        CreateExerciseRequest,
        CreateExerciseResponse,
        ExerciseDefinitionResponse,
        ExerciseSummary,
        ListExercisesResponse,
        User,
        UserRole
    ))
)]
struct ApiDoc;

/// Create the main API router with state
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health_check))
        .nest("/api/v1", api_v1_router())
}

/// Create the v1 API router with state
fn api_v1_router() -> Router<AppState> {
    Router::new().merge(exercises::routes())
}

/// Health check endpoint for container health monitoring
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}
