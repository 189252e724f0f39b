use crate::handlers::{
    create_exercise, get_exercise, get_exercise_definition, list_exercises, submit_answer,
    update_exercise,
};
use crate::server::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Create the exercise routes with state
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/exercises", post(create_exercise))
        .route("/exercises", get(list_exercises))
        .route("/exercises/{exercise_id}", get(get_exercise))
        .route("/exercises/{exercise_id}", put(update_exercise))
        .route(
            "/exercises/{exercise_id}/definition",
            get(get_exercise_definition),
        )
        .route("/exercises/{exercise_id}/attempt", post(submit_answer))
}
