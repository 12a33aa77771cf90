use thiserror::Error;

/// Message returned for every unexpected fault. The fault itself only goes to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username and password are required")]
    Missing,
    #[error("Username must be at least 3 characters and password at least 6 characters")]
    TooShort,
}

/// Faults in the hashing or signing path.
#[derive(Debug, Error)]
pub enum InternalError {
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("login worker failed: {0}")]
    Worker(String),
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    // Same wording for unknown user and wrong password.
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl LoginError {
    /// The text that may be shown to the caller.
    pub fn public_message(&self) -> String {
        match self {
            LoginError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<bcrypt::BcryptError> for LoginError {
    fn from(err: bcrypt::BcryptError) -> Self {
        LoginError::Internal(err.into())
    }
}

impl From<jsonwebtoken::errors::Error> for LoginError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        LoginError::Internal(err.into())
    }
}

/// Startup configuration errors. These stop the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET environment variable is required")]
    MissingSecret,
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
}
