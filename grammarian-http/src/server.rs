use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::auth::{AuthStore, auth_middleware};
use crate::routes::create_api_router;
use crate::store::{AnswerStore, ExerciseId, ExerciseStore};
use grammarian_core::ExerciseDefinition;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Exercise instances to register at startup, in addition to the
    /// stock demo exercise
    pub exercises: HashMap<ExerciseId, ExerciseDefinition>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            exercises: HashMap::new(),
        }
    }
}

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    /// Registered exercise instances
    pub exercises: ExerciseStore,
    /// Per-learner persisted answers
    pub answers: AnswerStore,
    /// API keys and users
    pub auth_store: AuthStore,
}

impl AppState {
    /// State seeded with the demo exercise and the default users
    pub fn with_defaults() -> Self {
        Self {
            exercises: ExerciseStore::with_defaults(),
            answers: AnswerStore::new(),
            auth_store: AuthStore::with_defaults(),
        }
    }
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState::with_defaults();
    for (exercise_id, definition) in config.exercises {
        state.exercises.insert(exercise_id, definition);
    }

    info!("Initialized exercise and answer stores");

    // Create the router with all routes and add the stores as state
    let app = create_api_router()
        .layer(axum::middleware::from_fn_with_state(
            Arc::new(state.auth_store.clone()),
            auth_middleware,
        ))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Parse the socket address
    let addr = format!("{}:{}", config.host, config.port).parse::<SocketAddr>()?;

    // Start the server
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
