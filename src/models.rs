use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered account. Only the bcrypt hash of the password is kept.
#[derive(Clone, Debug)]
pub struct CredentialRecord {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

impl CredentialRecord {
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            role: role.into(),
        }
    }
}

#[derive(Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps the plaintext out of any log line that formats a request.
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub token: Option<String>,
    pub message: String,
}

impl LoginResponse {
    pub fn success(token: String) -> Self {
        Self {
            success: true,
            token: Some(token),
            message: "Login successful".to_string(),
        }
    }

    /// A failed login never carries a token.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            token: None,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}
