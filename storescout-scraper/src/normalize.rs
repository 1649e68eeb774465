//! Mapping from raw per-storefront payloads to canonical [`Review`] records.

use chrono::{DateTime, NaiveDate};
use storescout_core::Review;

use crate::error::MalformedRecordError;
use crate::types::{PlayReview, RawReview, RssEntry};

/// Fallback user name when a storefront omits the author.
const ANONYMOUS: &str = "Anonymous";

/// Normalize one raw review into the canonical field set.
///
/// Missing optional fields default (`thumbs_up` 0, `reply_text` none);
/// a missing or out-of-range required field fails the whole record — the
/// caller drops it and moves on.
pub fn normalize_review(raw: &RawReview, country: &str) -> Result<Review, MalformedRecordError> {
    match raw {
        RawReview::Play(review) => normalize_play(review, country),
        RawReview::AppStore(entry) => normalize_rss(entry, country),
    }
}

fn normalize_play(raw: &PlayReview, country: &str) -> Result<Review, MalformedRecordError> {
    let rating = raw
        .score
        .ok_or_else(|| MalformedRecordError::new("rating", "missing"))?;
    let rating = validate_rating(rating)?;

    let seconds = raw
        .timestamp
        .ok_or_else(|| MalformedRecordError::new("date", "missing timestamp"))?;
    let date = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| {
            MalformedRecordError::new("date", format!("timestamp {seconds} out of range"))
        })?
        .date_naive();

    Ok(Review {
        review_id: raw.review_id.clone().unwrap_or_default(),
        user_name: raw
            .user_name
            .clone()
            .unwrap_or_else(|| ANONYMOUS.to_string()),
        rating,
        date,
        text: clean_text(raw.text.as_deref()),
        thumbs_up: raw.thumbs_up.unwrap_or(0).max(0) as u64,
        reply_text: clean_text(raw.reply_text.as_deref()),
        source_country: country.to_ascii_lowercase(),
    })
}

fn normalize_rss(entry: &RssEntry, country: &str) -> Result<Review, MalformedRecordError> {
    let rating_label = entry
        .rating_label()
        .ok_or_else(|| MalformedRecordError::new("rating", "missing"))?;
    let rating = rating_label
        .parse::<i64>()
        .map_err(|_| MalformedRecordError::new("rating", format!("not a number: {rating_label}")))
        .and_then(validate_rating)?;

    let updated = entry
        .updated_label()
        .ok_or_else(|| MalformedRecordError::new("date", "missing"))?;
    let date = parse_feed_date(updated)
        .ok_or_else(|| MalformedRecordError::new("date", format!("unparseable date: {updated}")))?;

    Ok(Review {
        review_id: entry.id_label().unwrap_or_default().to_string(),
        user_name: entry.author_name().unwrap_or(ANONYMOUS).to_string(),
        rating,
        date,
        text: clean_text(entry.content_label()),
        thumbs_up: entry.vote_sum_value(),
        reply_text: None,
        source_country: country.to_ascii_lowercase(),
    })
}

fn validate_rating(value: i64) -> Result<u8, MalformedRecordError> {
    if (1..=5).contains(&value) {
        Ok(value as u8)
    } else {
        Err(MalformedRecordError::new(
            "rating",
            format!("{value} outside 1..=5"),
        ))
    }
}

/// Feed timestamps are RFC 3339 with an offset; plain dates show up in
/// older feed renderings.
fn parse_feed_date(value: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
}

fn clean_text(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
