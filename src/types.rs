//! Core types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Jean Dupont")]
    pub name: String,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Users served by `GET /api/v1/users`.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "John Doe"),
        User::new(2, "Jane Smith"),
        User::new(3, "Alice Johnson"),
        User::new(4, "Bob Brown"),
    ]
}

/// Body of `POST /api/v1/login`.
///
/// Both fields are optional on the wire so that a missing field is reported
/// through the envelope rather than as a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[schema(example = "admin")]
    pub username: Option<String>,
    #[schema(example = "password123")]
    pub password: Option<String>,
}

/// Payload of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginData {
    #[schema(example = "admin")]
    pub username: String,
    #[schema(example = "fake-jwt-token")]
    pub token: String,
}

/// The single accepted login and the token it is answered with.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub token: String,
}

impl Credentials {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "password123".to_string(),
            token: "fake-jwt-token".to_string(),
        }
    }
}
