use axum::{Router, routing::post, middleware};
use crate::state::AppState;
use crate::handlers::listing::create_listing;
use crate::middleware::auth::require_auth;

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/newCarSellByUser", post(create_listing))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}
