use async_trait::async_trait;
use auth::Claims;
use auth::JwtHandler;
use auth::PasswordHasher;

use crate::domain::login::models::AccessToken;
use crate::domain::login::models::UserId;
use crate::domain::login::ports::PasswordComparator;
use crate::domain::login::ports::TokenGenerator;
use crate::login::errors::PasswordCompareError;
use crate::login::errors::TokenError;

/// Password comparison backed by the Argon2id hasher.
pub struct Argon2PasswordComparator {
    hasher: PasswordHasher,
}

impl Argon2PasswordComparator {
    pub fn new() -> Self {
        Self {
            hasher: PasswordHasher::new(),
        }
    }
}

impl Default for Argon2PasswordComparator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordComparator for Argon2PasswordComparator {
    async fn compare(&self, password: &str, hash: &str) -> Result<bool, PasswordCompareError> {
        self.hasher
            .verify(password, hash)
            .map_err(|e| PasswordCompareError::ComparisonFailed(e.to_string()))
    }
}

/// Token issuance backed by HS256 JWTs with the user id as subject.
pub struct JwtTokenGenerator {
    jwt_handler: JwtHandler,
    expiration_hours: i64,
}

impl JwtTokenGenerator {
    pub fn new(secret: &[u8], expiration_hours: i64) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            expiration_hours,
        }
    }
}

#[async_trait]
impl TokenGenerator for JwtTokenGenerator {
    async fn generate(&self, user_id: &UserId) -> Result<AccessToken, TokenError> {
        let claims = Claims::for_subject(user_id, self.expiration_hours);

        let token = self
            .jwt_handler
            .encode(&claims)
            .map_err(|e| TokenError::GenerationFailed(e.to_string()))?;

        AccessToken::new(token).map_err(|e| TokenError::GenerationFailed(e.to_string()))
    }
}
