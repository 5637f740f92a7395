use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// JWT claims issued by the login service.
///
/// Covers the RFC 7519 registered claims this service uses. All fields are
/// optional so the same type can decode tokens from older deployments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Claims {
    /// Subject (user identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// JWT ID (unique token identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims for an authenticated subject with automatic expiration.
    ///
    /// # Arguments
    /// * `subject` - Unique identifier of the authenticated entity
    /// * `expiration_hours` - Hours until the token expires
    ///
    /// # Returns
    /// Claims with sub, exp, and iat set
    pub fn for_subject(subject: impl ToString, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: Some(subject.to_string()),
            exp: Some(expiration.timestamp()),
            iat: Some(now.timestamp()),
            iss: None,
            jti: None,
        }
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set issuer.
    pub fn with_issuer(mut self, iss: impl ToString) -> Self {
        self.iss = Some(iss.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("user123", 24);

        assert_eq!(claims.sub, Some("user123".to_string()));
        assert!(claims.exp.is_some());
        assert!(claims.iat.is_some());

        let exp = claims.exp.unwrap();
        let iat = claims.iat.unwrap();
        assert_eq!(exp - iat, 24 * 60 * 60);
    }

    #[test]
    fn test_builder_pattern() {
        let claims = Claims::new()
            .with_subject("user123")
            .with_expiration(1234567890)
            .with_issuer("login-service");

        assert_eq!(claims.sub, Some("user123".to_string()));
        assert_eq!(claims.exp, Some(1234567890));
        assert_eq!(claims.iss, Some("login-service".to_string()));
    }
}
