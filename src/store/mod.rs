// src/store/mod.rs
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::AppError;
use crate::models::{bid::Bid, feedback::Feedback, listing::Listing, saved_ad::SavedAd, user::User};

#[cfg(test)]
pub mod memory;

/// Document-store operations used by the route handlers. Each method maps to
/// a single collection call.
#[async_trait]
pub trait MarketStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Fails with `AppError::Conflict` when the email is already taken.
    async fn insert_user(&self, user: User) -> Result<ObjectId, AppError>;

    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    async fn insert_listing(&self, listing: Listing) -> Result<ObjectId, AppError>;

    async fn insert_saved_ad(&self, ad: SavedAd) -> Result<ObjectId, AppError>;

    async fn insert_feedback(&self, feedback: Feedback) -> Result<ObjectId, AppError>;

    async fn find_feedback_by(&self, feedback_by: &str) -> Result<Option<Feedback>, AppError>;

    /// Newest first, at most `limit` entries.
    async fn recent_feedback(&self, limit: i64) -> Result<Vec<Feedback>, AppError>;

    /// Atomically bumps `totalBids` on the listing. Returns whether a listing matched.
    async fn increment_bid_count(&self, listing_id: &ObjectId) -> Result<bool, AppError>;

    async fn insert_bid(&self, bid: Bid) -> Result<ObjectId, AppError>;
}
