use axum::{extract::State, Json};
use tracing::instrument;

use crate::dtos::common::InsertAck;
use crate::dtos::saved_ad::CreateSavedAdRequest;
use crate::error::AppError;
use crate::state::AppState;

// POST /newSavedAd - Insert a saved ad; duplicates are allowed
#[instrument(skip(state, payload), fields(saved_by = %payload.saved_by))]
pub async fn create_saved_ad(
    State(state): State<AppState>,
    Json(payload): Json<CreateSavedAdRequest>,
) -> Result<Json<InsertAck>, AppError> {
    payload.validate()?;
    let id = state.store.insert_saved_ad(payload.into_saved_ad()).await?;
    Ok(Json(InsertAck::inserted(id)))
}
