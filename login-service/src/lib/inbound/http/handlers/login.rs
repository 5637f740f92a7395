use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::login::models::Credentials;
use crate::inbound::http::router::AppState;

/// Login endpoint.
///
/// Checks run in a fixed order and the first failing one decides the
/// response: request shape, email presence, password presence, email
/// format, then the authentication chain.
pub async fn login(
    State(state): State<AppState>,
    body: Option<Json<LoginRequestBody>>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // An absent or unparseable body is a transport-level fault, not a field
    // validation outcome.
    let Some(Json(body)) = body else {
        return Err(ApiError::ServerError);
    };

    // Empty strings count as missing, matching the presence contract.
    let email = body
        .email
        .filter(|email| !email.is_empty())
        .ok_or(ApiError::MissingParam("email"))?;
    let password = body
        .password
        .filter(|password| !password.is_empty())
        .ok_or(ApiError::MissingParam("password"))?;

    if let Some(email_validator) = &state.email_validator {
        if !email_validator.is_valid(&email) {
            return Err(ApiError::InvalidParam("email"));
        }
    }

    let outcome = state
        .auth_service
        .authenticate(Credentials { email, password })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Authentication chain failed");
            ApiError::from(e)
        })?;

    match outcome {
        Some(token) => Ok(ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData {
                access_token: token.into_inner(),
            },
        )),
        None => Err(ApiError::Unauthorized),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub access_token: String,
}
