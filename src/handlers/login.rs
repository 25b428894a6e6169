use axum::{Json, extract::State};
use serde::Serialize;
use tracing::info;

use crate::middleware::login_request::LoginPayload;
use crate::service::login::{LoginVerdict, validate};
use crate::{StorefrontError, router::StorefrontState};

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
}

/// POST /api/login -> 200, 400 on a missing field, 401 on bad credentials.
pub async fn login(
    State(state): State<StorefrontState>,
    LoginPayload(form): LoginPayload,
) -> Result<Json<LoginResponse>, StorefrontError> {
    let verdict = validate(
        state.store.as_ref(),
        form.username.as_deref(),
        form.password.as_deref(),
    );
    let username = form.username.unwrap_or_default();

    match verdict {
        LoginVerdict::Accepted => {
            info!(username = %username, "login accepted");
            Ok(Json(LoginResponse { username }))
        }
        LoginVerdict::MissingField => {
            info!("login rejected: missing field");
            Err(StorefrontError::MissingField)
        }
        LoginVerdict::InvalidCredentials => {
            info!(username = %username, "login rejected: invalid credentials");
            Err(StorefrontError::InvalidCredentials)
        }
    }
}
