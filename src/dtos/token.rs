use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dtos::common::require_email;
use crate::error::AppError;

/// Claims set by the server or checked by the verifier; callers may not supply them.
const RESERVED_CLAIMS: [&str; 5] = ["exp", "iat", "nbf", "aud", "iss"];

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_email(&self.email, "email")?;
        for reserved in RESERVED_CLAIMS {
            if self.extra.contains_key(reserved) {
                return Err(AppError::validation(format!("{reserved} cannot be supplied")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
