pub mod bid;
pub mod common;
pub mod feedback;
pub mod listing;
pub mod saved_ad;
pub mod token;
pub mod user;
