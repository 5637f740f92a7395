use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for AccessToken construction failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessTokenError {
    #[error("Access token must not be empty")]
    Empty,
}

/// Error for credential lookup operations
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Stored user record is malformed: {0}")]
    MalformedRecord(String),
}

/// Error for password comparison operations
#[derive(Debug, Clone, Error)]
pub enum PasswordCompareError {
    #[error("Password comparison failed: {0}")]
    ComparisonFailed(String),
}

/// Error for token generation operations
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// Error for access token persistence operations
#[derive(Debug, Clone, Error)]
pub enum TokenStoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("User not found: {0}")]
    UserNotFound(String),
}

/// Top-level error for the authentication flow.
///
/// Collaborator errors convert via `#[from]` and propagate unchanged; the
/// only errors originating here are the request-shape guard clauses.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Missing param: {0}")]
    MissingParam(&'static str),

    #[error("Credential lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Password comparison failed: {0}")]
    Password(#[from] PasswordCompareError),

    #[error("Token generation failed: {0}")]
    Token(#[from] TokenError),

    #[error("Token persistence failed: {0}")]
    TokenStore(#[from] TokenStoreError),
}
