// src/state.rs
use std::sync::Arc;

use crate::store::MarketStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MarketStore>,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn MarketStore>, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            jwt_secret: jwt_secret.into(),
        }
    }
}
