use crate::models::user::User;
use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};

fn user_from_parts(parts: &Parts) -> Result<User, StatusCode> {
    parts
        .extensions
        .get::<User>()
        .cloned()
        .ok_or(StatusCode::UNAUTHORIZED)
}

/// The authenticated caller, placed in the request extensions by the auth
/// middleware. Does not consume the request body.
pub struct AuthUser(pub User);

impl AuthUser {
    pub fn user(&self) -> &User {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        user_from_parts(parts).map(AuthUser)
    }
}

/// Like [`AuthUser`], but rejects callers without the author role.
///
/// Guards the endpoints that expose or change the raw annotated text,
/// which would leak the answer to a learner.
pub struct AuthAuthor(pub User);

impl<S> FromRequestParts<S> for AuthAuthor
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = user_from_parts(parts)?;
        if !user.is_author() {
            return Err(StatusCode::FORBIDDEN);
        }
        Ok(AuthAuthor(user))
    }
}
