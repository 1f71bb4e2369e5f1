use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// A used-car sale post. `total_bids` is only ever changed by an atomic
/// increment when a bid is placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
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
    #[serde(default)]
    pub total_bids: i64,
    #[serde(default)]
    pub created_at: Option<DateTime>,
}
