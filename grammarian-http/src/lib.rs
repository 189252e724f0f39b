//! Grammarian HTTP API Server
//!
//! This crate hosts Grammarian exercises over HTTP: authors configure
//! annotated sentences, learners fetch the tokenized view and submit their
//! single answer.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod store;

use server::{ServerConfig, start_server};

/// Start the Grammarian HTTP server with the default configuration
pub async fn start() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    start_server(ServerConfig::default()).await
}

/// Start the Grammarian HTTP server with a custom configuration
pub async fn start_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    start_server(config).await
}
