use axum::{extract::State, Json};
use tracing::{info, instrument};

use crate::dtos::common::InsertAck;
use crate::dtos::user::{RegisterUserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

// POST /newUserApi - Create the user unless the email is already registered
#[instrument(skip(state, payload), fields(email = %payload.email))]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<Json<InsertAck>, AppError> {
    payload.validate()?;

    if state.store.find_user_by_email(payload.email.trim()).await?.is_some() {
        info!("User already registered, skipping insert");
        return Ok(Json(InsertAck::skipped("user already exists")));
    }

    // A concurrent registration can win between the lookup and the insert.
    match state.store.insert_user(payload.into_user()).await {
        Ok(id) => Ok(Json(InsertAck::inserted(id))),
        Err(AppError::Conflict(_)) => {
            info!("User registered concurrently, skipping insert");
            Ok(Json(InsertAck::skipped("user already exists")))
        }
        Err(e) => Err(e),
    }
}

// GET /allUsers - Admin only
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.store.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
