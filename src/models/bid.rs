use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Hex id of the listing this bid targets.
    pub product_id: String,
    pub bidder_email: String,
    pub amount: f64,
    pub message: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
}
