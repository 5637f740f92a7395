use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::login::models::AccessToken;
use crate::domain::login::models::UserId;
use crate::domain::login::ports::AccessTokenRepository;
use crate::login::errors::TokenStoreError;

/// Records the most recently issued token on the user's own row.
pub struct PostgresAccessTokenRepository {
    pool: PgPool,
}

impl PostgresAccessTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessTokenRepository for PostgresAccessTokenRepository {
    async fn update(&self, user_id: &UserId, token: &AccessToken) -> Result<(), TokenStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET access_token = $2
            WHERE id = $1
            "#,
        )
        .bind(user_id.0)
        .bind(token.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| TokenStoreError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TokenStoreError::UserNotFound(user_id.to_string()));
        }

        Ok(())
    }
}
