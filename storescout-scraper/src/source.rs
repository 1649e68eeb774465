use storescout_core::{AppInfo, Platform, SortOrder};

use crate::appstore;
use crate::client::StoreClient;
use crate::error::FetchError;
use crate::gplay;
use crate::types::RawReview;

/// A storefront backend the aggregator can drive.
///
/// Implementations perform single, blocking queries for one (country,
/// language) pair; everything above this trait is network-agnostic, which
/// is also what makes the aggregation pipeline testable without one.
pub trait ReviewSource {
    /// Storefront this source queries.
    fn platform(&self) -> Platform;

    /// Fetch app metadata for one (app, country) pair.
    fn app_info(&self, app_id: &str, country: &str, lang: &str) -> Result<AppInfo, FetchError>;

    /// Fetch up to `count` raw review payloads for one (app, country) pair.
    fn reviews(
        &self,
        app_id: &str,
        country: &str,
        lang: &str,
        count: usize,
        sort: SortOrder,
    ) -> Result<Vec<RawReview>, FetchError>;
}

/// Google Play backend.
pub struct PlayStoreSource {
    client: StoreClient,
}

impl PlayStoreSource {
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            client: StoreClient::new()?,
        })
    }
}

impl ReviewSource for PlayStoreSource {
    fn platform(&self) -> Platform {
        Platform::PlayStore
    }

    fn app_info(&self, app_id: &str, country: &str, lang: &str) -> Result<AppInfo, FetchError> {
        gplay::fetch_app_info(&self.client, app_id, country, lang)
    }

    fn reviews(
        &self,
        app_id: &str,
        country: &str,
        lang: &str,
        count: usize,
        sort: SortOrder,
    ) -> Result<Vec<RawReview>, FetchError> {
        gplay::fetch_reviews(&self.client, app_id, country, lang, count, sort)
    }
}

/// Apple App Store backend.
pub struct AppStoreSource {
    client: StoreClient,
}

impl AppStoreSource {
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            client: StoreClient::new()?,
        })
    }
}

impl ReviewSource for AppStoreSource {
    fn platform(&self) -> Platform {
        Platform::AppStore
    }

    fn app_info(&self, app_id: &str, country: &str, _lang: &str) -> Result<AppInfo, FetchError> {
        appstore::fetch_app_info(&self.client, app_id, country)
    }

    // The review feed has no language parameter; the country picks the
    // storefront locale.
    fn reviews(
        &self,
        app_id: &str,
        country: &str,
        _lang: &str,
        count: usize,
        sort: SortOrder,
    ) -> Result<Vec<RawReview>, FetchError> {
        appstore::fetch_reviews(&self.client, app_id, country, count, sort)
    }
}

/// Construct the backend for a platform.
pub fn create_source(platform: Platform) -> Result<Box<dyn ReviewSource>, FetchError> {
    Ok(match platform {
        Platform::PlayStore => Box::new(PlayStoreSource::new()?),
        Platform::AppStore => Box::new(AppStoreSource::new()?),
    })
}
