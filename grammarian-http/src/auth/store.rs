use crate::models::user::User;
use dashmap::DashMap;
use std::sync::Arc;

/// API-key table resolving each key directly to its user.
///
/// Grammarian has no signup flow: keys are provisioned at startup, either
/// the stock development keys below or whatever the embedding deployment
/// registers before serving traffic.
#[derive(Clone, Debug, Default)]
pub struct AuthStore {
    keys: Arc<DashMap<String, User>>,
}

impl AuthStore {
    /// Create an empty key table
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock development keys: one author and two learners
    pub fn with_defaults() -> Self {
        let store = Self::new();
        store.register("author-key", User::new_author("author", "Course Author"));
        store.register("learner1-key", User::new_learner("learner1", "Learner 1"));
        store.register("learner2-key", User::new_learner("learner2", "Learner 2"));
        store
    }

    /// Associate an API key with a user
    pub fn register(&self, api_key: impl Into<String>, user: User) {
        self.keys.insert(api_key.into(), user);
    }

    /// Resolve an API key to its user
    pub fn user_for_key(&self, api_key: &str) -> Option<User> {
        self.keys.get(api_key).map(|user| user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_resolution() {
        let store = AuthStore::with_defaults();

        let author = store.user_for_key("author-key").unwrap();
        assert_eq!(author.user_id, "author");
        assert_eq!(author.role, UserRole::Author);

        let learner = store.user_for_key("learner1-key").unwrap();
        assert!(!learner.is_author());

        assert!(store.user_for_key("wrong-key").is_none());
        assert!(AuthStore::new().user_for_key("author-key").is_none());
    }

    #[test]
    fn test_registering_a_key_again_replaces_the_user() {
        let store = AuthStore::new();
        store.register("key", User::new_learner("a", "A"));
        store.register("key", User::new_learner("b", "B"));
        assert_eq!(store.user_for_key("key").unwrap().user_id, "b");
    }
}
