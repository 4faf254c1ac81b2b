//! Session payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of a login request.
#[derive(Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Account username.
    pub username: &'a str,
    /// Account password.
    pub password: &'a str,
}

impl fmt::Debug for LoginRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fields the client reads from a successful login response.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LoginResponse {
    /// Token to send on authenticated requests.
    pub session_token: String,
    /// Numeric id of the logged-in user.
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("session_token", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}
