use axum::{
    extract::{Path, State},
    Json,
};
use tracing::instrument;

use crate::dtos::common::InsertAck;
use crate::dtos::feedback::{CreateFeedbackRequest, FeedbackResponse, RECENT_FEEDBACK_LIMIT};
use crate::error::AppError;
use crate::state::AppState;

// POST /userFeedback
#[instrument(skip(state, payload), fields(feedback_by = %payload.feedback_by))]
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(payload): Json<CreateFeedbackRequest>,
) -> Result<Json<InsertAck>, AppError> {
    payload.validate()?;
    let id = state.store.insert_feedback(payload.into_feedback()).await?;
    Ok(Json(InsertAck::inserted(id)))
}

// GET /singleFeedback/{id} - First feedback by this submitter, or null
#[instrument(skip(state))]
pub async fn get_feedback_by(
    Path(feedback_by): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Option<FeedbackResponse>>, AppError> {
    let feedback = state.store.find_feedback_by(&feedback_by).await?;
    Ok(Json(feedback.map(FeedbackResponse::from)))
}

// GET /allFeedbacks - Most recent entries, newest first
#[instrument(skip(state))]
pub async fn recent_feedback(
    State(state): State<AppState>,
) -> Result<Json<Vec<FeedbackResponse>>, AppError> {
    let feedback = state.store.recent_feedback(RECENT_FEEDBACK_LIMIT).await?;
    Ok(Json(feedback.into_iter().map(FeedbackResponse::from).collect()))
}
