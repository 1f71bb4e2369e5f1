use axum::{extract::State, Json};
use tracing::instrument;

use crate::auth::jwt::sign_token;
use crate::dtos::token::{TokenRequest, TokenResponse};
use crate::error::AppError;
use crate::state::AppState;

// POST /jwt - Issue a session token for the supplied identity
#[instrument(skip(state, payload), fields(email = %payload.email))]
pub async fn issue_token(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    payload.validate()?;
    let token = sign_token(payload.email.trim(), payload.extra, &state.jwt_secret)?;
    Ok(Json(TokenResponse { token }))
}
