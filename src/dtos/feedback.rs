use chrono::{DateTime, Utc};
use mongodb::bson::DateTime as BsonDateTime;
use serde::{Deserialize, Serialize};

use crate::dtos::common::require_text;
use crate::error::AppError;
use crate::models::feedback::Feedback;

/// Number of entries returned by the recent-feedback listing.
pub const RECENT_FEEDBACK_LIMIT: i64 = 5;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackRequest {
    pub feedback_by: String,
    pub message: String,
    pub rating: Option<u8>,
}

impl CreateFeedbackRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text(&self.feedback_by, "feedbackBy")?;
        require_text(&self.message, "message")?;
        if matches!(self.rating, Some(r) if !(1..=5).contains(&r)) {
            return Err(AppError::validation("rating must be between 1 and 5"));
        }
        Ok(())
    }

    pub fn into_feedback(self) -> Feedback {
        Feedback {
            id: None,
            feedback_by: self.feedback_by.trim().to_string(),
            message: self.message,
            rating: self.rating,
            created_at: Some(BsonDateTime::now()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub id: Option<String>,
    pub feedback_by: String,
    pub message: String,
    pub rating: Option<u8>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Feedback> for FeedbackResponse {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id.map(|id| id.to_hex()),
            feedback_by: feedback.feedback_by,
            message: feedback.message,
            rating: feedback.rating,
            created_at: feedback.created_at.map(|d| d.to_chrono()),
        }
    }
}
