//! Apple App Store fetchers, backed by the public iTunes customer-reviews
//! RSS feed. The feed returns at most 500 reviews per (app, country) pair;
//! its first entry is app metadata, the rest are reviews.

use storescout_core::{AppInfo, Platform, SortOrder, is_numeric_app_id, is_valid_country};

use crate::client::StoreClient;
use crate::error::FetchError;
use crate::types::{RawReview, RssDocument, RssFeed};

const FEED_BASE: &str = "https://itunes.apple.com";

/// Hard cap imposed by the RSS feed itself.
const FEED_MAX_REVIEWS: usize = 500;

fn sort_param(sort: SortOrder) -> &'static str {
    // The feed only distinguishes recency from helpfulness; a rating sort
    // maps to the helpfulness feed like the vote-based orders do.
    match sort {
        SortOrder::Newest => "mostRecent",
        SortOrder::Rating | SortOrder::Helpfulness => "mostHelpful",
    }
}

fn feed_url(app_id: &str, country: &str, sort: SortOrder) -> String {
    format!(
        "{FEED_BASE}/{country}/rss/customerreviews/id={app_id}/sortBy={}/json",
        sort_param(sort)
    )
}

fn validate(app_id: &str, country: &str) -> Result<(), FetchError> {
    if !is_numeric_app_id(app_id) {
        return Err(FetchError::InvalidIdentifier {
            id: app_id.to_string(),
            expected: Platform::AppStore.identifier_hint(),
        });
    }
    if !is_valid_country(country) {
        return Err(FetchError::InvalidCountry(country.to_string()));
    }
    Ok(())
}

fn fetch_feed(
    client: &StoreClient,
    app_id: &str,
    country: &str,
    sort: SortOrder,
) -> Result<RssFeed, FetchError> {
    validate(app_id, country)?;
    let text = client.get_text(&feed_url(app_id, country, sort))?;
    let doc: RssDocument = serde_json::from_str(&text)
        .map_err(|e| FetchError::UpstreamFormat(format!("failed to parse review feed: {e}")))?;
    Ok(doc.feed)
}

/// Fetch app metadata for one (app, country) pair.
///
/// The RSS feed only exposes a handful of fields for the app itself, so
/// rating and count fields stay unset.
pub fn fetch_app_info(
    client: &StoreClient,
    app_id: &str,
    country: &str,
) -> Result<AppInfo, FetchError> {
    let feed = fetch_feed(client, app_id, country, SortOrder::Newest)?;
    let entry = feed.app_entry().ok_or(FetchError::NotFound)?;

    Ok(AppInfo {
        app_id: app_id.to_string(),
        title: entry.app_name().unwrap_or("N/A").to_string(),
        developer: entry.artist_name().unwrap_or("N/A").to_string(),
        rating: None,
        ratings_count: None,
        reviews_count: None,
        installs: None,
        description: None,
        platform: Platform::AppStore,
    })
}

/// Fetch up to `count` raw reviews for one (app, country) pair.
///
/// An app with no reviews yields an empty list, not an error.
pub fn fetch_reviews(
    client: &StoreClient,
    app_id: &str,
    country: &str,
    count: usize,
    sort: SortOrder,
) -> Result<Vec<RawReview>, FetchError> {
    let feed = fetch_feed(client, app_id, country, sort)?;
    let max = count.min(FEED_MAX_REVIEWS);

    Ok(feed
        .review_entries()
        .iter()
        .take(max)
        .map(|entry| RawReview::AppStore(Box::new(entry.clone())))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_url() {
        assert_eq!(
            feed_url("284882215", "us", SortOrder::Newest),
            "https://itunes.apple.com/us/rss/customerreviews/id=284882215/sortBy=mostRecent/json"
        );
        assert_eq!(
            feed_url("284882215", "gb", SortOrder::Helpfulness),
            "https://itunes.apple.com/gb/rss/customerreviews/id=284882215/sortBy=mostHelpful/json"
        );
    }

    #[test]
    fn test_validate_rejects_package_name() {
        let err = validate("com.instagram.android", "us").unwrap_err();
        assert!(matches!(err, FetchError::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_country() {
        let err = validate("284882215", "usa").unwrap_err();
        assert!(matches!(err, FetchError::InvalidCountry(_)));
    }
}
