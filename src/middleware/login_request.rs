use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiErrorResponse, StorefrontError};

/// Login form as sent by clients. Both fields may be missing or `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Lenient JSON extractor for `POST /api/login`.
///
/// Unlike `axum::Json` it needs no `Content-Type` header and treats an empty
/// body as a form with both fields missing, so field validation stays with
/// the login validator.
pub struct LoginPayload(pub LoginRequest);

impl<S> FromRequest<S> for LoginPayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Bytes::from_request(req, state).await {
            Ok(b) => b,
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                return Err(ApiErrorResponse::with_status(
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "PAYLOAD_TOO_LARGE",
                    "request body too large",
                ));
            }
            Err(rejection) => {
                return Err(ApiErrorResponse::with_status(
                    rejection.status(),
                    "BAD_REQUEST",
                    rejection.body_text(),
                ));
            }
        };

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(LoginPayload(LoginRequest::default()));
        }

        parse_login(&body)
            .map(LoginPayload)
            .map_err(IntoResponse::into_response)
    }
}

/// Only a JSON object is a login form; arrays and scalars are malformed.
fn parse_login(body: &[u8]) -> Result<LoginRequest, StorefrontError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| StorefrontError::MalformedBody(e.to_string()))?;
    if !value.is_object() {
        return Err(StorefrontError::MalformedBody(
            "expected a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|e| StorefrontError::MalformedBody(e.to_string()))
}
