//! Single-account login check: validates a username/password pair against a
//! read-only credential registry and issues a one-hour HS256 access token.

pub mod auth;
pub mod authenticator;
pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod user_handlers;

pub use auth::TokenIssuer;
pub use authenticator::{hash_password, verify_password, Authenticator};
pub use db::{CredentialRegistry, InMemoryRegistry};
pub use errors::{ConfigError, InternalError, LoginError, ValidationError};
pub use models::{Claims, CredentialRecord, LoginRequest, LoginResponse};
