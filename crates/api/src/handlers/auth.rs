//! Handler for `POST /login`.

use axum::extract::State;
use axum::Json;
use minaret_core::error::CoreError;
use minaret_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Login failure message. Identical for an unknown email and a wrong
/// password so callers cannot enumerate valid accounts.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /login`. Fields default to empty so that a missing
/// field is reported as a 400 validation error rather than a body-decode
/// rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: UserInfo,
}

/// Public credential summary embedded in [`LoginResponse`].
/// The password hash is never serialized.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub role: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// POST /login
///
/// Authenticate against the static credential list and issue a signed token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    // 1. Both fields are required.
    if input.email.trim().is_empty() || input.password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email and password are required".into(),
        )));
    }

    // 2. Find the credential by exact email equality.
    let credential = state
        .credentials
        .find_by_email(&input.email)
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    // 3. Verify the password against the stored hash.
    let password_valid = verify_password(&input.password, &credential.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    // 4. Issue the token.
    let token = generate_token(
        credential.id,
        &credential.email,
        &credential.role,
        &state.config.jwt,
    )
    .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = credential.id, role = %credential.role, "Login succeeded");

    Ok(Json(LoginResponse {
        success: true,
        token,
        user: UserInfo {
            id: credential.id,
            email: credential.email.clone(),
            role: credential.role.clone(),
            name: credential.name.clone(),
        },
    }))
}
