//! Multi-country review aggregation.
//!
//! Sequential per-country fetches feed the normalizer; after the loop the
//! combined sequence is deduplicated and optionally filtered to text-only
//! reviews. Per-country failures degrade the result instead of aborting it.

use storescout_core::{CountryFailure, Platform, Review, ReviewSet, SortOrder, default_countries};

use crate::dedup::dedup_reviews;
use crate::error::AggregationError;
use crate::normalize::normalize_review;
use crate::source::ReviewSource;

/// Options for one aggregation run.
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Countries to query, in processing order
    pub countries: Vec<String>,
    /// Language code passed to the fetcher (where the storefront supports it)
    pub language: String,
    /// Reviews requested per country
    pub count_per_country: usize,
    /// Sort order requested from each country endpoint
    pub sort: SortOrder,
    /// Drop reviews that carry no written text
    pub text_only: bool,
}

impl AggregateOptions {
    /// Default options for a platform: its eight default countries,
    /// English, 100 reviews per country, newest first, no filter.
    pub fn new(platform: Platform) -> Self {
        Self {
            countries: default_countries(platform)
                .iter()
                .map(|c| c.to_string())
                .collect(),
            language: "en".to_string(),
            count_per_country: 100,
            sort: SortOrder::default(),
            text_only: false,
        }
    }
}

/// Fetch, normalize, deduplicate, and filter reviews across countries.
///
/// Countries are processed strictly in the supplied order. A country whose
/// fetch fails is recorded and skipped; malformed records are dropped
/// individually. Fails only when every country fetch failed — a partial
/// result always beats no result.
pub fn aggregate_reviews(
    source: &dyn ReviewSource,
    app_id: &str,
    options: &AggregateOptions,
) -> Result<ReviewSet, AggregationError> {
    let mut collected: Vec<Review> = Vec::new();
    let mut failed: Vec<CountryFailure> = Vec::new();
    let mut raw_count = 0usize;

    log::info!(
        "Fetching reviews from {} countries for {}",
        options.countries.len(),
        app_id
    );

    for country in &options.countries {
        log::info!("Fetching from country: {country}");
        match source.reviews(
            app_id,
            country,
            &options.language,
            options.count_per_country,
            options.sort,
        ) {
            Ok(raw) => {
                raw_count += raw.len();
                for record in &raw {
                    match normalize_review(record, country) {
                        Ok(review) => collected.push(review),
                        Err(e) => {
                            log::debug!("Skipping malformed record from {country}: {e}");
                        }
                    }
                }
            }
            Err(e) => {
                log::warn!("Fetch failed for country {country}: {e}");
                failed.push(CountryFailure {
                    country: country.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    if !options.countries.is_empty() && failed.len() == options.countries.len() {
        return Err(AggregationError { failures: failed });
    }

    let deduped = dedup_reviews(collected);
    let deduped_count = deduped.len();

    let reviews: Vec<Review> = if options.text_only {
        deduped.into_iter().filter(|r| r.has_text()).collect()
    } else {
        deduped
    };
    let final_count = reviews.len();

    log::info!(
        "Aggregation complete: {raw_count} fetched, {deduped_count} unique, {final_count} returned"
    );

    Ok(ReviewSet {
        reviews,
        countries_queried: options.countries.clone(),
        failed,
        raw_count,
        deduped_count,
        final_count,
    })
}

#[cfg(test)]
#[path = "tests/aggregate_tests.rs"]
mod tests;
