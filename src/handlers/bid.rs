use axum::{extract::State, Extension, Json};
use tracing::{info, instrument, warn};

use crate::dtos::bid::PlaceBidRequest;
use crate::dtos::common::InsertAck;
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

// POST /newBid - Bump the listing's bid counter, then record the bid
#[instrument(skip(state, auth, payload), fields(product_id = %payload.product_id, bidder = %auth.email))]
pub async fn place_bid(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<PlaceBidRequest>,
) -> Result<Json<InsertAck>, AppError> {
    let listing_id = payload.validate()?;

    if !state.store.increment_bid_count(&listing_id).await? {
        warn!("Bid rejected, listing not found");
        return Err(AppError::not_found("Listing not found"));
    }

    // Not transactional: a failure here leaves the counter one ahead.
    let id = state
        .store
        .insert_bid(payload.into_bid(listing_id, auth.email))
        .await?;
    info!(bid_id = %id, "Bid recorded");
    Ok(Json(InsertAck::inserted(id)))
}
