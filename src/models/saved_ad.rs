use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAd {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub saved_by: String,
    pub listing_id: String,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
}
