use axum::{extract::State, Extension, Json};
use tracing::{instrument, warn};

use crate::dtos::common::InsertAck;
use crate::dtos::listing::CreateListingRequest;
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

// POST /newCarSellByUser - Insert a listing; requires a session
#[instrument(skip(state, auth, payload), fields(seller = %payload.seller_email))]
pub async fn create_listing(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<CreateListingRequest>,
) -> Result<Json<InsertAck>, AppError> {
    payload.validate()?;

    // Ownership is not enforced; a mismatch is only logged.
    if !payload.seller_email.trim().eq_ignore_ascii_case(&auth.email) {
        warn!(session = %auth.email, "Listing seller differs from session email");
    }

    let id = state.store.insert_listing(payload.into_listing()).await?;
    Ok(Json(InsertAck::inserted(id)))
}
