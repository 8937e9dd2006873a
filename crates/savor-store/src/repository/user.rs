//! # User Repository
//!
//! Read-only access to the seeded customer accounts.

use std::sync::Arc;

use savor_core::User;

/// Repository for user lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    users: Arc<Vec<User>>,
}

impl UserRepository {
    /// Creates a repository over a fixed set of users.
    pub fn new(users: Vec<User>) -> Self {
        UserRepository {
            users: Arc::new(users),
        }
    }

    /// Lists all users.
    pub fn list(&self) -> Vec<User> {
        self.users.as_ref().clone()
    }

    /// Gets a user by ID.
    pub fn get_by_id(&self, id: &str) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_get_by_id() {
        let data = seed::seed();
        let repo = UserRepository::new(data.users.clone());

        let first = &data.users[0];
        assert_eq!(repo.get_by_id(&first.id).unwrap(), *first);
        assert!(repo.get_by_id("missing").is_none());
    }
}
