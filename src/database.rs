// src/database.rs
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Client, Collection, Database, IndexModel,
};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::models::{bid::Bid, feedback::Feedback, listing::Listing, saved_ad::SavedAd, user::User};
use crate::store::MarketStore;

pub const USERS: &str = "usersList";
pub const LISTINGS: &str = "oldCarsByUsers";
pub const SAVED_ADS: &str = "savedAdsList";
pub const FEEDBACK: &str = "allFeedbacks";
pub const BIDS: &str = "allBids";

/// Connects once and pings the deployment so a bad URI fails at startup.
pub async fn create_client(uri: &str) -> Result<Client, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    client.database("admin").run_command(doc! { "ping": 1 }).await?;
    info!("Pinged deployment, MongoDB connection established");
    Ok(client)
}

#[derive(Clone)]
pub struct MongoStore {
    users: Collection<User>,
    listings: Collection<Listing>,
    saved_ads: Collection<SavedAd>,
    feedback: Collection<Feedback>,
    bids: Collection<Bid>,
}

impl MongoStore {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(USERS),
            listings: db.collection(LISTINGS),
            saved_ads: db.collection(SAVED_ADS),
            feedback: db.collection(FEEDBACK),
            bids: db.collection(BIDS),
        }
    }

    /// Backs the one-account-per-email rule with a unique index.
    pub async fn ensure_indexes(&self) -> Result<(), mongodb::error::Error> {
        let email_unique = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.users.create_index(email_unique).await?;
        info!("Unique index on {USERS}.email ensured");
        Ok(())
    }
}

const DUPLICATE_KEY: i32 = 11000;

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == DUPLICATE_KEY
    )
}

fn inserted_object_id(id: Bson) -> Result<ObjectId, AppError> {
    id.as_object_id()
        .ok_or_else(|| AppError::internal(format!("Unexpected inserted id: {id}")))
}

#[async_trait]
impl MarketStore for MongoStore {
    #[instrument(skip(self))]
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.find_one(doc! { "email": email }).await?)
    }

    #[instrument(skip(self, user))]
    async fn insert_user(&self, user: User) -> Result<ObjectId, AppError> {
        let result = self.users.insert_one(user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::conflict("Email already registered")
            } else {
                AppError::from(e)
            }
        })?;
        inserted_object_id(result.inserted_id)
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.users.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self, listing))]
    async fn insert_listing(&self, listing: Listing) -> Result<ObjectId, AppError> {
        let result = self.listings.insert_one(listing).await?;
        inserted_object_id(result.inserted_id)
    }

    #[instrument(skip(self, ad))]
    async fn insert_saved_ad(&self, ad: SavedAd) -> Result<ObjectId, AppError> {
        let result = self.saved_ads.insert_one(ad).await?;
        inserted_object_id(result.inserted_id)
    }

    #[instrument(skip(self, feedback))]
    async fn insert_feedback(&self, feedback: Feedback) -> Result<ObjectId, AppError> {
        let result = self.feedback.insert_one(feedback).await?;
        inserted_object_id(result.inserted_id)
    }

    #[instrument(skip(self))]
    async fn find_feedback_by(&self, feedback_by: &str) -> Result<Option<Feedback>, AppError> {
        Ok(self.feedback.find_one(doc! { "feedbackBy": feedback_by }).await?)
    }

    #[instrument(skip(self))]
    async fn recent_feedback(&self, limit: i64) -> Result<Vec<Feedback>, AppError> {
        // ObjectIds embed their creation time, so `_id` descending is insertion-reverse.
        let cursor = self
            .feedback
            .find(doc! {})
            .sort(doc! { "_id": -1 })
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self))]
    async fn increment_bid_count(&self, listing_id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .listings
            .update_one(doc! { "_id": *listing_id }, doc! { "$inc": { "totalBids": 1_i64 } })
            .await?;
        Ok(result.matched_count == 1)
    }

    #[instrument(skip(self, bid))]
    async fn insert_bid(&self, bid: Bid) -> Result<ObjectId, AppError> {
        let result = self.bids.insert_one(bid).await?;
        inserted_object_id(result.inserted_id)
    }
}
