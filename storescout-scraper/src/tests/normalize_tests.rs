use super::*;
use crate::types::{Label, RawReview, RssAuthor};

fn play_raw() -> PlayReview {
    PlayReview {
        review_id: Some("gp:abc".to_string()),
        user_name: Some("Ann".to_string()),
        score: Some(5),
        timestamp: Some(1705276800), // 2024-01-15 UTC
        text: Some("Great app!".to_string()),
        thumbs_up: Some(12),
        reply_text: Some("Thanks!".to_string()),
    }
}

fn rss_raw() -> RssEntry {
    RssEntry {
        id: Some(Label {
            label: "1000001".to_string(),
        }),
        author: Some(RssAuthor {
            name: Some(Label {
                label: "Ann".to_string(),
            }),
        }),
        rating: Some(Label {
            label: "5".to_string(),
        }),
        updated: Some(Label {
            label: "2024-01-15T07:00:00-07:00".to_string(),
        }),
        content: Some(Label {
            label: "Great app!".to_string(),
        }),
        vote_sum: Some(Label {
            label: "3".to_string(),
        }),
        ..Default::default()
    }
}

#[test]
fn test_play_round_trip() {
    // A fully populated payload must carry every canonical field through.
    let review = normalize_review(&RawReview::Play(play_raw()), "US").unwrap();
    assert_eq!(review.review_id, "gp:abc");
    assert_eq!(review.user_name, "Ann");
    assert_eq!(review.rating, 5);
    assert_eq!(review.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert_eq!(review.text.as_deref(), Some("Great app!"));
    assert_eq!(review.thumbs_up, 12);
    assert_eq!(review.reply_text.as_deref(), Some("Thanks!"));
    assert_eq!(review.source_country, "us");
}

#[test]
fn test_rss_round_trip() {
    let review = normalize_review(&RawReview::AppStore(Box::new(rss_raw())), "us").unwrap();
    assert_eq!(review.review_id, "1000001");
    assert_eq!(review.user_name, "Ann");
    assert_eq!(review.rating, 5);
    assert_eq!(review.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert_eq!(review.text.as_deref(), Some("Great app!"));
    assert_eq!(review.thumbs_up, 3);
    assert_eq!(review.reply_text, None);
}

#[test]
fn test_missing_rating_fails() {
    let mut raw = play_raw();
    raw.score = None;
    let err = normalize_review(&RawReview::Play(raw), "us").unwrap_err();
    assert_eq!(err.field, "rating");
}

#[test]
fn test_out_of_range_rating_fails() {
    for bad in [0, 6, -1] {
        let mut raw = play_raw();
        raw.score = Some(bad);
        let err = normalize_review(&RawReview::Play(raw), "us").unwrap_err();
        assert_eq!(err.field, "rating");
    }
}

#[test]
fn test_missing_date_fails() {
    let mut raw = play_raw();
    raw.timestamp = None;
    let err = normalize_review(&RawReview::Play(raw), "us").unwrap_err();
    assert_eq!(err.field, "date");
}

#[test]
fn test_unparseable_rss_date_fails() {
    let mut raw = rss_raw();
    raw.updated = Some(Label {
        label: "yesterday".to_string(),
    });
    let err = normalize_review(&RawReview::AppStore(Box::new(raw)), "us").unwrap_err();
    assert_eq!(err.field, "date");
}

#[test]
fn test_plain_rss_date_accepted() {
    let mut raw = rss_raw();
    raw.updated = Some(Label {
        label: "2024-01-15".to_string(),
    });
    let review = normalize_review(&RawReview::AppStore(Box::new(raw)), "us").unwrap();
    assert_eq!(review.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
}

#[test]
fn test_empty_text_becomes_none() {
    let mut raw = play_raw();
    raw.text = Some("   ".to_string());
    let review = normalize_review(&RawReview::Play(raw), "us").unwrap();
    assert_eq!(review.text, None);

    let mut raw = play_raw();
    raw.text = None;
    let review = normalize_review(&RawReview::Play(raw), "us").unwrap();
    assert_eq!(review.text, None);
}

#[test]
fn test_optional_fields_default() {
    let mut raw = play_raw();
    raw.thumbs_up = None;
    raw.reply_text = None;
    raw.user_name = None;
    let review = normalize_review(&RawReview::Play(raw), "us").unwrap();
    assert_eq!(review.thumbs_up, 0);
    assert_eq!(review.reply_text, None);
    assert_eq!(review.user_name, "Anonymous");
}
