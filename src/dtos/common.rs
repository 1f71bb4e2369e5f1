use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::error::AppError;

/// Insert acknowledgement returned by every create route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl InsertAck {
    pub fn inserted(id: ObjectId) -> Self {
        Self {
            acknowledged: true,
            inserted_id: Some(id.to_hex()),
            message: None,
        }
    }

    /// No-op sentinel: nothing was written.
    pub fn skipped(message: &'static str) -> Self {
        Self {
            acknowledged: false,
            inserted_id: None,
            message: Some(message),
        }
    }
}

pub fn require_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn require_email(value: &str, field: &str) -> Result<(), AppError> {
    require_text(value, field)?;
    match value.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(AppError::validation(format!("{field} must be a valid email"))),
    }
}

pub fn parse_object_id(value: &str, field: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value.trim())
        .map_err(|_| AppError::validation(format!("{field} is not a valid id")))
}
