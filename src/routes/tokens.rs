use axum::{Router, routing::post};
use crate::state::AppState;
use crate::handlers::token::issue_token;

pub fn routes() -> Router<AppState> {
    Router::new().route("/jwt", post(issue_token))
}
