use async_trait::async_trait;

use crate::domain::login::errors::AuthError;
use crate::domain::login::errors::LookupError;
use crate::domain::login::errors::PasswordCompareError;
use crate::domain::login::errors::TokenError;
use crate::domain::login::errors::TokenStoreError;
use crate::domain::login::models::AccessToken;
use crate::domain::login::models::Credentials;
use crate::domain::login::models::User;
use crate::domain::login::models::UserId;

/// Port for the authentication flow itself.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Authenticate a credential pair.
    ///
    /// # Returns
    /// * `Some(token)` - Credentials matched a registered user
    /// * `None` - Unknown email or wrong password; deliberately
    ///   indistinguishable so callers cannot probe which emails exist
    ///
    /// # Errors
    /// * `MissingParam` - Email or password was empty
    /// * Any collaborator error, propagated unchanged
    async fn authenticate(&self, credentials: Credentials)
        -> Result<Option<AccessToken>, AuthError>;
}

/// Credential lookup by email.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve the user registered under an email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Lookup operation failed
    /// * `MalformedRecord` - Stored record could not be reconstructed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, LookupError>;
}

/// Plaintext-against-hash password comparison.
#[async_trait]
pub trait PasswordComparator: Send + Sync + 'static {
    /// Compare a plaintext password against a stored hash.
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    ///
    /// # Errors
    /// * `ComparisonFailed` - The stored hash is unusable or the comparison
    ///   itself failed
    async fn compare(&self, password: &str, hash: &str) -> Result<bool, PasswordCompareError>;
}

/// Access token issuance keyed by user identity.
#[async_trait]
pub trait TokenGenerator: Send + Sync + 'static {
    /// Generate an access token for a user.
    ///
    /// # Errors
    /// * `GenerationFailed` - Token could not be produced
    async fn generate(&self, user_id: &UserId) -> Result<AccessToken, TokenError>;
}

/// Persistence of issued access tokens.
#[async_trait]
pub trait AccessTokenRepository: Send + Sync + 'static {
    /// Record the token most recently issued to a user.
    ///
    /// # Errors
    /// * `Database` - Persistence operation failed
    /// * `UserNotFound` - No stored user matches the id
    async fn update(&self, user_id: &UserId, token: &AccessToken) -> Result<(), TokenStoreError>;
}

/// Email syntax validation.
///
/// A total predicate: syntax checking has no failure mode of its own.
pub trait EmailValidator: Send + Sync + 'static {
    /// Report whether a string is a syntactically valid email address.
    fn is_valid(&self, email: &str) -> bool;
}
