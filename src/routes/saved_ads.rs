use axum::{Router, routing::post};
use crate::state::AppState;
use crate::handlers::saved_ad::create_saved_ad;

pub fn routes() -> Router<AppState> {
    Router::new().route("/newSavedAd", post(create_saved_ad))
}
