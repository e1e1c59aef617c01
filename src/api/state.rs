//! API server state

use std::sync::Arc;

use crate::types::{seed_users, Credentials, User};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Users listed by `GET /api/v1/users`
    pub users: Arc<Vec<User>>,

    /// The accepted login
    pub credentials: Arc<Credentials>,
}

impl AppState {
    /// Create state with the seeded user directory
    pub fn new(credentials: Credentials) -> Self {
        Self::with_users(credentials, seed_users())
    }

    pub fn with_users(credentials: Credentials, users: Vec<User>) -> Self {
        Self {
            users: Arc::new(users),
            credentials: Arc::new(credentials),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Credentials::default())
    }
}
