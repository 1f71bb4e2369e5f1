use axum::{Router, routing::{post, get}, middleware};
use crate::state::AppState;
use crate::handlers::user::{register_user, list_users};
use crate::middleware::auth::{require_admin, require_auth};

pub fn routes(state: &AppState) -> Router<AppState> {
    let open = Router::new()
        .route("/newUserApi", post(register_user));

    // Route layers run outermost-last: session check first, then the role gate.
    let admin = Router::new()
        .route("/allUsers", get(list_users))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    open.merge(admin)
}
