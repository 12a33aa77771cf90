use crate::auth::TokenIssuer;
use crate::db::CredentialRegistry;
use crate::errors::{LoginError, ValidationError};
use crate::models::{LoginRequest, LoginResponse};
use bcrypt::{hash, verify, BcryptError};
use log::error;

/// Work factor used for every stored password hash.
pub const PASSWORD_HASH_COST: u32 = 10;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Salted bcrypt hash; a fresh salt is drawn on every call.
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    hash(plaintext, PASSWORD_HASH_COST)
}

pub fn verify_password(plaintext: &str, password_hash: &str) -> Result<bool, BcryptError> {
    verify(plaintext, password_hash)
}

/// Checks credentials against a registry and signs access tokens.
pub struct Authenticator<R> {
    registry: R,
    issuer: TokenIssuer,
}

impl<R: CredentialRegistry> Authenticator<R> {
    pub fn new(registry: R, issuer: TokenIssuer) -> Self {
        Self { registry, issuer }
    }

    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    /// Runs the login gates and returns a token on success.
    pub fn authenticate(&self, request: &LoginRequest) -> Result<String, LoginError> {
        validate(request)?;

        let Some(user) = self.registry.lookup(&request.username) else {
            return Err(LoginError::InvalidCredentials);
        };

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self.issuer.create_jwt(&user.username, &user.role)?;
        Ok(token)
    }

    pub fn login(&self, request: &LoginRequest) -> LoginResponse {
        into_response(self.authenticate(request))
    }
}

/// Collapses a login outcome into the response shown to the caller.
pub fn into_response(outcome: Result<String, LoginError>) -> LoginResponse {
    match outcome {
        Ok(token) => LoginResponse::success(token),
        Err(err) => {
            if let LoginError::Internal(ref fault) = err {
                error!("Login error: {fault}");
            }
            LoginResponse::failure(err.public_message())
        }
    }
}

// Lengths are UTF-16 code units, so one emoji counts as two.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn validate(request: &LoginRequest) -> Result<(), ValidationError> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(ValidationError::Missing);
    }
    if utf16_len(&request.username) < MIN_USERNAME_LEN
        || utf16_len(&request.password) < MIN_PASSWORD_LEN
    {
        return Err(ValidationError::TooShort);
    }
    Ok(())
}
