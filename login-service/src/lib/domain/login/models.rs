use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::login::errors::AccessTokenError;
use crate::login::errors::EmailError;
use crate::login::errors::UserIdError;

/// Credential pair submitted by a caller.
///
/// Transient, constructed per call at the boundary, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registered user as read from storage.
///
/// The authentication flow only ever reads this; it is never mutated here.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque access token issued on successful authentication.
///
/// Never inspected by the authentication flow; non-emptiness is the only
/// structural requirement and is enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap an issued token string.
    ///
    /// # Errors
    /// * `Empty` - The token string is empty
    pub fn new(token: String) -> Result<Self, AccessTokenError> {
        if token.is_empty() {
            return Err(AccessTokenError::Empty);
        }
        Ok(Self(token))
    }

    /// Get token as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, yielding the raw string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_address_accepts_valid() {
        let email = EmailAddress::new("nicola@example.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "nicola@example.com");
    }

    #[test]
    fn test_email_address_rejects_invalid() {
        let result = EmailAddress::new("not-an-email".to_string());
        assert!(matches!(result, Err(EmailError::InvalidFormat(_))));
    }

    #[test]
    fn test_access_token_rejects_empty() {
        let result = AccessToken::new(String::new());
        assert_eq!(result, Err(AccessTokenError::Empty));
    }

    #[test]
    fn test_user_id_round_trips_through_string() {
        let id = UserId::new();
        let parsed = UserId::from_string(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_user_id_rejects_invalid_format() {
        let result = UserId::from_string("not-a-uuid");
        assert!(matches!(result, Err(UserIdError::InvalidFormat(_))));
    }
}
