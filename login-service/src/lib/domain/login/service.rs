use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::login::models::AccessToken;
use crate::domain::login::models::Credentials;
use crate::login::errors::AuthError;
use crate::login::ports::AccessTokenRepository;
use crate::login::ports::AuthServicePort;
use crate::login::ports::PasswordComparator;
use crate::login::ports::TokenGenerator;
use crate::login::ports::UserRepository;

/// Authentication orchestrator.
///
/// Sequences credential lookup, password verification, token issuance, and
/// token persistence. Each step runs at most once per call, strictly in that
/// order, and each depends on the previous step's result. Collaborator
/// failures propagate unchanged; there is no recovery, retry, or logging
/// here.
pub struct AuthService<UR, PC, TG>
where
    UR: UserRepository,
    PC: PasswordComparator,
    TG: TokenGenerator,
{
    user_repository: Arc<UR>,
    password_comparator: Arc<PC>,
    token_generator: Arc<TG>,
    token_store: Option<Arc<dyn AccessTokenRepository>>,
}

impl<UR, PC, TG> AuthService<UR, PC, TG>
where
    UR: UserRepository,
    PC: PasswordComparator,
    TG: TokenGenerator,
{
    /// Create a new authentication service with injected collaborators.
    ///
    /// The mandatory collaborators are required here; construction is the
    /// only wiring check this service performs.
    pub fn new(
        user_repository: Arc<UR>,
        password_comparator: Arc<PC>,
        token_generator: Arc<TG>,
    ) -> Self {
        Self {
            user_repository,
            password_comparator,
            token_generator,
            token_store: None,
        }
    }

    /// Configure persistence of issued tokens.
    ///
    /// Without a store, successful authentication skips the persistence
    /// step and still returns the token.
    pub fn with_token_store(mut self, token_store: Arc<dyn AccessTokenRepository>) -> Self {
        self.token_store = Some(token_store);
        self
    }
}

#[async_trait]
impl<UR, PC, TG> AuthServicePort for AuthService<UR, PC, TG>
where
    UR: UserRepository,
    PC: PasswordComparator,
    TG: TokenGenerator,
{
    async fn authenticate(
        &self,
        credentials: Credentials,
    ) -> Result<Option<AccessToken>, AuthError> {
        if credentials.email.is_empty() {
            return Err(AuthError::MissingParam("email"));
        }
        if credentials.password.is_empty() {
            return Err(AuthError::MissingParam("password"));
        }

        let user = match self.user_repository.find_by_email(&credentials.email).await? {
            Some(user) => user,
            // Unknown email must not be distinguishable from wrong password
            None => return Ok(None),
        };

        let password_matches = self
            .password_comparator
            .compare(&credentials.password, &user.password_hash)
            .await?;
        if !password_matches {
            return Ok(None);
        }

        let token = self.token_generator.generate(&user.id).await?;

        if let Some(token_store) = &self.token_store {
            token_store.update(&user.id, &token).await?;
        }

        Ok(Some(token))
    }
}
