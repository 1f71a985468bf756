pub mod dto;
pub mod seed;

pub use dto::*;
pub use seed::{seed_activity_feed, seed_metrics};
