use crate::auth::AuthStore;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Axum middleware for API key authentication
pub async fn auth_middleware(
    State(auth_store): State<Arc<AuthStore>>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let path = request.uri().path();
    if ignore_auth_path(path) {
        return Ok(next.run(request).await);
    }

    // Extract API key from headers
    let api_key = request
        .headers()
        .get("X-API-Key")
        .and_then(|value| value.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    // Look up user by API key
    let user = auth_store
        .user_for_key(api_key)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    tracing::debug!(user_id = %user.user_id, role = %user.role, "authenticated request");

    // Add user to request extensions
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

fn ignore_auth_path(path: &str) -> bool {
    path.starts_with("/health") || path.starts_with("/swagger-ui") || path.starts_with("/api-docs")
}
