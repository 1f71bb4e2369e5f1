use axum::{Router, routing::post, middleware};
use crate::state::AppState;
use crate::handlers::bid::place_bid;
use crate::middleware::auth::require_auth;

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/newBid", post(place_bid))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}
