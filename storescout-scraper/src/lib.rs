pub mod aggregate;
pub mod appstore;
pub mod client;
pub mod dedup;
pub mod error;
pub mod gplay;
pub mod normalize;
pub mod settings;
pub mod source;
pub mod types;

pub use aggregate::{AggregateOptions, aggregate_reviews};
pub use client::StoreClient;
pub use dedup::dedup_reviews;
pub use error::{AggregationError, FetchError, MalformedRecordError};
pub use normalize::normalize_review;
pub use settings::{Settings, settings_path};
pub use source::{AppStoreSource, PlayStoreSource, ReviewSource, create_source};
pub use types::RawReview;
