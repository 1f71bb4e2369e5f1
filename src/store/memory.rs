use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::MarketStore;
use crate::error::AppError;
use crate::models::{bid::Bid, feedback::Feedback, listing::Listing, saved_ad::SavedAd, user::User};

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    listings: Vec<Listing>,
    saved_ads: Vec<SavedAd>,
    feedback: Vec<Feedback>,
    bids: Vec<Bid>,
}

/// In-process store used by tests. Every call also bumps a counter so tests
/// can assert that a request never reached the store.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
    calls: Mutex<usize>,
    hide_users: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Collections> {
        *self.calls.lock().unwrap() += 1;
        self.inner.lock().unwrap()
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    pub fn users(&self) -> Vec<User> {
        self.inner.lock().unwrap().users.clone()
    }

    pub fn listing(&self, id: &ObjectId) -> Option<Listing> {
        self.inner
            .lock()
            .unwrap()
            .listings
            .iter()
            .find(|l| l.id.as_ref() == Some(id))
            .cloned()
    }

    /// Lets tests drive the handler down the insert-conflict path.
    pub fn hide_users_from_lookup(&self) {
        *self.hide_users.lock().unwrap() = true;
    }

    pub fn bids(&self) -> Vec<Bid> {
        self.inner.lock().unwrap().bids.clone()
    }

    pub fn saved_ads(&self) -> Vec<SavedAd> {
        self.inner.lock().unwrap().saved_ads.clone()
    }
}

#[async_trait]
impl MarketStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        if *self.hide_users.lock().unwrap() {
            return Ok(None);
        }
        Ok(self.lock().users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, mut user: User) -> Result<ObjectId, AppError> {
        let mut guard = self.lock();
        if guard.users.iter().any(|u| u.email == user.email) {
            return Err(AppError::conflict("Email already registered"));
        }
        let id = ObjectId::new();
        user.id = Some(id);
        guard.users.push(user);
        Ok(id)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.lock().users.clone())
    }

    async fn insert_listing(&self, mut listing: Listing) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        listing.id = Some(id);
        self.lock().listings.push(listing);
        Ok(id)
    }

    async fn insert_saved_ad(&self, mut ad: SavedAd) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        ad.id = Some(id);
        self.lock().saved_ads.push(ad);
        Ok(id)
    }

    async fn insert_feedback(&self, mut feedback: Feedback) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        feedback.id = Some(id);
        self.lock().feedback.push(feedback);
        Ok(id)
    }

    async fn find_feedback_by(&self, feedback_by: &str) -> Result<Option<Feedback>, AppError> {
        Ok(self
            .lock()
            .feedback
            .iter()
            .find(|f| f.feedback_by == feedback_by)
            .cloned())
    }

    async fn recent_feedback(&self, limit: i64) -> Result<Vec<Feedback>, AppError> {
        let take = usize::try_from(limit).unwrap_or(0);
        Ok(self.lock().feedback.iter().rev().take(take).cloned().collect())
    }

    async fn increment_bid_count(&self, listing_id: &ObjectId) -> Result<bool, AppError> {
        let mut guard = self.lock();
        match guard.listings.iter_mut().find(|l| l.id.as_ref() == Some(listing_id)) {
            Some(listing) => {
                listing.total_bids += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert_bid(&self, mut bid: Bid) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        bid.id = Some(id);
        self.lock().bids.push(bid);
        Ok(id)
    }
}
