pub mod bid;
pub mod feedback;
pub mod listing;
pub mod saved_ad;
pub mod user;
