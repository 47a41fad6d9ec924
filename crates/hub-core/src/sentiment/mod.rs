//! Sentiment domain: per-group breakdowns and the immutable store.

pub mod dataset;
pub mod model;
pub mod store;

pub use dataset::sentiment_store;
pub use model::{SentimentCategory, SentimentGroupRecord, SentimentSlice};
pub use store::SentimentStore;
