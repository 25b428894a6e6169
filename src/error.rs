use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum StorefrontError {
    #[error("brand not found: {0}")]
    BrandNotFound(String),

    #[error("username and password are both required")]
    MissingField,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error in {}: {source}", path.display())]
    DataFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("duplicate brand id: {0}")]
    DuplicateBrandId(String),

    #[error("duplicate product id: {0}")]
    DuplicateProductId(String),

    #[error("duplicate username: {0}")]
    DuplicateUsername(String),
}

impl From<figment::Error> for StorefrontError {
    fn from(e: figment::Error) -> Self {
        StorefrontError::Config(Box::new(e))
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            StorefrontError::BrandNotFound(id) => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: format!("No brand with id '{id}'."),
                },
            ),
            StorefrontError::MissingField => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "MISSING_FIELD".to_string(),
                    message: "Both username and password are required.".to_string(),
                },
            ),
            StorefrontError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_CREDENTIALS".to_string(),
                    message: "Invalid username or password.".to_string(),
                },
            ),
            StorefrontError::MalformedBody(reason) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "MALFORMED_BODY".to_string(),
                    message: reason,
                },
            ),
            StorefrontError::InvalidRequest(reason) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".to_string(),
                    message: reason,
                },
            ),
            StorefrontError::Io(_)
            | StorefrontError::DataFile { .. }
            | StorefrontError::Json(_)
            | StorefrontError::Config(_)
            | StorefrontError::DuplicateBrandId(_)
            | StorefrontError::DuplicateProductId(_)
            | StorefrontError::DuplicateUsername(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                },
            ),
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

impl ApiErrorResponse {
    /// Error response for failures raised outside `StorefrontError` (routing, body limits).
    pub fn with_status(
        status: StatusCode,
        code: &str,
        message: impl Into<String>,
    ) -> axum::response::Response {
        let body = ApiErrorResponse {
            error: ApiErrorBody {
                code: code.to_string(),
                message: message.into(),
            },
        };
        (status, Json(body)).into_response()
    }
}
