use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Login payload submitted to `/api/auth/login`.
pub struct LoginRequest {
    /// Username submitted by the client.
    pub username: String,
    /// Plaintext password submitted by the client.
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Registration payload submitted to `/api/auth/signup`.
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
/// Authenticated user details returned by the backend.
pub struct AuthUser {
    /// Stable user identifier, when the backend exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Username, also used to match post authorship.
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Any further fields the backend attaches to the user.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl AuthUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }

    /// Whether this user is the author with the given username.
    pub fn is_named(&self, username: &str) -> bool {
        self.username == username
    }
}

impl std::fmt::Display for AuthUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Login and signup response: the user object with the issued token alongside.
pub struct AuthResponse {
    /// Bearer token to persist and send on later requests.
    pub token: String,
    #[serde(flatten)]
    pub user: AuthUser,
}
