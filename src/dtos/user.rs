use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use mongodb::bson::DateTime as BsonDateTime;

use crate::dtos::common::require_email;
use crate::error::AppError;
use crate::models::user::{User, DEFAULT_ROLE};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub email: String,
    pub name: Option<String>,
    pub photo_url: Option<String>,
}

impl RegisterUserRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_email(&self.email, "email")
    }

    /// Roles are never taken from the request body; admins are promoted in the database.
    pub fn into_user(self) -> User {
        User {
            id: None,
            email: self.email.trim().to_string(),
            role: DEFAULT_ROLE.to_string(),
            name: self.name,
            photo_url: self.photo_url,
            created_at: Some(BsonDateTime::now()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Option<String>,
    pub email: String,
    pub role: String,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()),
            email: user.email,
            role: user.role,
            name: user.name,
            photo_url: user.photo_url,
            created_at: user.created_at.map(|d| d.to_chrono()),
        }
    }
}
