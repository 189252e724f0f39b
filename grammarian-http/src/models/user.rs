use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// User role for basic authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ToSchema)]
pub enum UserRole {
    /// A learner answering exercises
    #[default]
    Learner,
    /// An author configuring exercises
    Author,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Learner => write!(f, "learner"),
            UserRole::Author => write!(f, "author"),
        }
    }
}

/// User model representing a learner or author
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier for the user
    pub user_id: String,
    /// Username for display purposes
    pub username: String,
    /// User's role for authorization
    pub role: UserRole,
}

impl User {
    /// Create a new user with the given ID, username, and role
    pub fn new(user_id: impl Into<String>, username: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            role,
        }
    }

    /// Create a new learner
    pub fn new_learner(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self::new(user_id, username, UserRole::Learner)
    }

    /// Create a new author
    pub fn new_author(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self::new(user_id, username, UserRole::Author)
    }

    /// Check if the user has the author role
    pub fn is_author(&self) -> bool {
        self.role == UserRole::Author
    }
}
