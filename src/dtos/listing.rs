use chrono::{Datelike, Utc};
use mongodb::bson::DateTime;
use serde::Deserialize;

use crate::dtos::common::{require_email, require_text};
use crate::error::AppError;
use crate::models::listing::Listing;

const OLDEST_MODEL_YEAR: i32 = 1886;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    pub seller_email: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub mileage: Option<i64>,
    pub condition: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl CreateListingRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_email(&self.seller_email, "sellerEmail")?;
        require_text(&self.brand, "brand")?;
        require_text(&self.model, "model")?;

        let next_year = Utc::now().year() + 1;
        if self.year < OLDEST_MODEL_YEAR || self.year > next_year {
            return Err(AppError::validation(format!(
                "year must be between {OLDEST_MODEL_YEAR} and {next_year}"
            )));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(AppError::validation("price must be positive"));
        }
        if matches!(self.mileage, Some(m) if m < 0) {
            return Err(AppError::validation("mileage cannot be negative"));
        }
        Ok(())
    }

    /// New listings always start with zero bids.
    pub fn into_listing(self) -> Listing {
        Listing {
            id: None,
            seller_email: self.seller_email.trim().to_string(),
            brand: self.brand.trim().to_string(),
            model: self.model.trim().to_string(),
            year: self.year,
            price: self.price,
            mileage: self.mileage,
            condition: self.condition,
            location: self.location,
            description: self.description,
            images: self.images,
            total_bids: 0,
            created_at: Some(DateTime::now()),
        }
    }
}
