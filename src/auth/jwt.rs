use chrono::{Utc, Duration};
use jsonwebtoken::{encode, decode, Header, Validation, EncodingKey, DecodingKey, Algorithm};
use serde::{Serialize, Deserialize};
use serde_json::{Map, Value};
use crate::error::AppError;

/// Session lifetime.
pub const TOKEN_TTL_HOURS: i64 = 72;

/// Caller-supplied identity plus issue/expiry timestamps. Fields beyond
/// `email` are carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub exp: usize,
    pub iat: usize,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub fn sign_token(email: &str, extra: Map<String, Value>, secret: &str) -> Result<String, AppError> {
    let now = Utc::now();
    let exp = now + Duration::hours(TOKEN_TTL_HOURS);
    let claims = Claims {
        email: email.to_string(),
        iat: now.timestamp() as usize,
        exp: exp.timestamp() as usize,
        extra,
    };
    encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AppError::internal(format!("Token signing failed: {e}")))
}

/// Expired, malformed and tampered tokens all collapse to `Unauthorized`.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|d| d.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "Token rejected");
        AppError::Unauthorized
    })
}
