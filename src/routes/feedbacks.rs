use axum::{Router, routing::{post, get}};
use crate::state::AppState;
use crate::handlers::feedback::{create_feedback, get_feedback_by, recent_feedback};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/userFeedback", post(create_feedback))
        .route("/singleFeedback/{id}", get(get_feedback_by))
        .route("/allFeedbacks", get(recent_feedback))
}
