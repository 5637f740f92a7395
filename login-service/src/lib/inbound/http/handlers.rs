use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::login::errors::AuthError;

pub mod login;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Every failure outcome the login boundary can produce.
///
/// Closed by construction; mapping to responses is an exhaustive match, and
/// callers never see more detail than these four shapes carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    MissingParam(&'static str),
    InvalidParam(&'static str),
    Unauthorized,
    ServerError,
}

impl From<AuthError> for ApiError {
    fn from(_: AuthError) -> Self {
        // Callers only learn that the server failed; field-level detail
        // comes from the boundary's own shape checks.
        Self::ServerError
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, payload) = match self {
            ApiError::MissingParam(param) => (
                StatusCode::BAD_REQUEST,
                ApiErrorData::new("MissingParamError", format!("Missing param: {}", param)),
            ),
            ApiError::InvalidParam(param) => (
                StatusCode::BAD_REQUEST,
                ApiErrorData::new("InvalidParamError", format!("Invalid param: {}", param)),
            ),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ApiErrorData::new("UnauthorizedError", "Unauthorized".to_string()),
            ),
            ApiError::ServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorData::new("ServerError", "Internal server error".to_string()),
            ),
        };

        (status, Json(payload)).into_response()
    }
}

/// Error payload: a named error kind plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub error: &'static str,
    pub message: String,
}

impl ApiErrorData {
    fn new(error: &'static str, message: String) -> Self {
        Self { error, message }
    }
}
