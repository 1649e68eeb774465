use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod country;
pub mod ident;
pub mod platform;
pub mod sort;

pub use country::{default_countries, is_valid_country};
pub use ident::{is_numeric_app_id, is_valid_package_name};
pub use platform::{Platform, PlatformParseError};
pub use sort::{SortOrder, SortOrderParseError};

/// App metadata fetched from a storefront.
///
/// Built fresh per query and never mutated afterwards — a new lookup
/// replaces the whole record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppInfo {
    /// Store identifier: reverse-DNS package name (Play) or numeric ID (App Store)
    pub app_id: String,

    pub title: String,

    pub developer: String,

    /// Average score on the store's 1-5 scale
    pub rating: Option<f64>,

    /// Number of ratings submitted
    pub ratings_count: Option<u64>,

    /// Number of written reviews
    pub reviews_count: Option<u64>,

    /// Install-count string as the store reports it (e.g., "1,000,000+")
    pub installs: Option<String>,

    pub description: Option<String>,

    /// Storefront this record came from
    pub platform: Platform,
}

/// A single user review in canonical form.
///
/// `review_id` is only unique within one country's raw fetch — country
/// mirrors can hand out different ids for the same review, so cross-country
/// deduplication derives its own key instead of trusting this field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub review_id: String,

    pub user_name: String,

    /// Star rating, always within 1..=5
    pub rating: u8,

    pub date: NaiveDate,

    /// Review body, trimmed; `None` when the user left a rating only
    pub text: Option<String>,

    #[serde(default)]
    pub thumbs_up: u64,

    /// Developer reply, if any
    pub reply_text: Option<String>,

    /// Two-letter code of the country endpoint the review was fetched from
    pub source_country: String,
}

impl Review {
    /// Whether the review carries any written text.
    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

/// A per-country fetch failure recorded during aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryFailure {
    pub country: String,
    pub message: String,
}

/// The ordered result of one multi-country aggregation call, with provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSet {
    pub reviews: Vec<Review>,

    /// Countries queried, in the order they were processed
    pub countries_queried: Vec<String>,

    /// Countries whose fetch failed (the run still succeeded if any other
    /// country returned data)
    #[serde(default)]
    pub failed: Vec<CountryFailure>,

    /// Records fetched across all countries before deduplication
    pub raw_count: usize,

    /// Records remaining after deduplication
    pub deduped_count: usize,

    /// Records remaining after the optional text-only filter
    pub final_count: usize,
}

impl ReviewSet {
    /// Number of reviews in the final sequence.
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Duplicates removed by the cross-country dedup pass.
    pub fn duplicates_removed(&self) -> usize {
        self.raw_count.saturating_sub(self.deduped_count)
    }
}
