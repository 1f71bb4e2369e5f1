use mongodb::bson::DateTime;
use serde::Deserialize;

use crate::dtos::common::{parse_object_id, require_email};
use crate::error::AppError;
use crate::models::saved_ad::SavedAd;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSavedAdRequest {
    pub saved_by: String,
    pub listing_id: String,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

impl CreateSavedAdRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_email(&self.saved_by, "savedBy")?;
        parse_object_id(&self.listing_id, "listingId")?;
        Ok(())
    }

    pub fn into_saved_ad(self) -> SavedAd {
        SavedAd {
            id: None,
            saved_by: self.saved_by.trim().to_string(),
            listing_id: self.listing_id.trim().to_string(),
            title: self.title,
            price: self.price,
            image: self.image,
            created_at: Some(DateTime::now()),
        }
    }
}
