use mongodb::bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

use crate::dtos::common::parse_object_id;
use crate::error::AppError;
use crate::models::bid::Bid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBidRequest {
    pub product_id: String,
    pub amount: f64,
    pub message: Option<String>,
}

impl PlaceBidRequest {
    /// Returns the parsed listing id on success.
    pub fn validate(&self) -> Result<ObjectId, AppError> {
        let listing_id = parse_object_id(&self.product_id, "productId")?;
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(AppError::validation("amount must be positive"));
        }
        Ok(listing_id)
    }

    pub fn into_bid(self, listing_id: ObjectId, bidder_email: String) -> Bid {
        Bid {
            id: None,
            product_id: listing_id.to_hex(),
            bidder_email,
            amount: self.amount,
            message: self.message,
            created_at: Some(DateTime::now()),
        }
    }
}
