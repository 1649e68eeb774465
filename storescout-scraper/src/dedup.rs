//! Cross-country review deduplication.
//!
//! Country mirrors hand out different platform ids for the same review, so
//! the key is derived from content, never from `review_id`.

use std::collections::HashSet;

use chrono::NaiveDate;
use storescout_core::Review;

/// Composite identity of a review across country mirrors.
///
/// Comparison is exact and case-sensitive; text and user name are
/// whitespace-trimmed first.
#[derive(Debug, PartialEq, Eq, Hash)]
struct DedupKey {
    user_name: String,
    rating: u8,
    date: NaiveDate,
    text: String,
}

fn key_for(review: &Review) -> DedupKey {
    DedupKey {
        user_name: review.user_name.trim().to_string(),
        rating: review.rating,
        date: review.date,
        text: review.text.as_deref().unwrap_or("").trim().to_string(),
    }
}

/// Drop reviews whose composite key was already seen, preserving first-seen
/// order. The kept copy retains its own `source_country`; later sightings
/// from other countries are discarded entirely.
pub fn dedup_reviews(reviews: Vec<Review>) -> Vec<Review> {
    let mut seen = HashSet::with_capacity(reviews.len());
    let mut unique = Vec::with_capacity(reviews.len());

    for review in reviews {
        if seen.insert(key_for(&review)) {
            unique.push(review);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(user: &str, rating: u8, date: &str, text: &str, country: &str, id: &str) -> Review {
        Review {
            review_id: id.to_string(),
            user_name: user.to_string(),
            rating,
            date: date.parse().unwrap(),
            text: if text.is_empty() {
                None
            } else {
                Some(text.to_string())
            },
            thumbs_up: 0,
            reply_text: None,
            source_country: country.to_string(),
        }
    }

    #[test]
    fn test_identical_content_across_countries_collapses() {
        let input = vec![
            review("Ann", 5, "2024-01-15", "Great app!", "us", "id-us"),
            review("Ann", 5, "2024-01-15", "Great app!", "gb", "id-gb"),
        ];
        let out = dedup_reviews(input);
        assert_eq!(out.len(), 1);
        // First occurrence wins, including its provenance.
        assert_eq!(out[0].source_country, "us");
        assert_eq!(out[0].review_id, "id-us");
    }

    #[test]
    fn test_same_id_different_content_kept() {
        // review_id is untrustworthy in both directions.
        let input = vec![
            review("Ann", 5, "2024-01-15", "Great app!", "us", "id-1"),
            review("Bob", 5, "2024-01-15", "Great app!", "gb", "id-1"),
        ];
        assert_eq!(dedup_reviews(input).len(), 2);
    }

    #[test]
    fn test_order_preserved() {
        let input = vec![
            review("Ann", 5, "2024-01-15", "First", "us", "1"),
            review("Bob", 4, "2024-01-16", "Second", "us", "2"),
            review("Ann", 5, "2024-01-15", "First", "gb", "3"),
            review("Cyd", 3, "2024-01-17", "Third", "jp", "4"),
        ];
        let out = dedup_reviews(input);
        let texts: Vec<_> = out.iter().map(|r| r.text.as_deref().unwrap()).collect();
        assert_eq!(texts, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            review("Ann", 5, "2024-01-15", "Great app!", "us", "1"),
            review("Ann", 5, "2024-01-15", "Great app!", "gb", "2"),
            review("Bob", 4, "2024-01-16", "Fine", "us", "3"),
        ];
        let once = dedup_reviews(input);
        let twice = dedup_reviews(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_never_grows() {
        let input = vec![
            review("Ann", 5, "2024-01-15", "a", "us", "1"),
            review("Bob", 4, "2024-01-15", "b", "us", "2"),
            review("Ann", 5, "2024-01-15", "a", "gb", "3"),
        ];
        let n = input.len();
        assert!(dedup_reviews(input).len() <= n);
    }

    #[test]
    fn test_whitespace_trimmed_text_matches() {
        let input = vec![
            review("Ann", 5, "2024-01-15", "Great app!", "us", "1"),
            review("Ann", 5, "2024-01-15", "  Great app!  ", "gb", "2"),
        ];
        assert_eq!(dedup_reviews(input).len(), 1);
    }

    #[test]
    fn test_case_sensitive_text_differs() {
        let input = vec![
            review("Ann", 5, "2024-01-15", "Great app!", "us", "1"),
            review("Ann", 5, "2024-01-15", "great app!", "gb", "2"),
        ];
        assert_eq!(dedup_reviews(input).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_reviews(Vec::new()).is_empty());
    }
}
