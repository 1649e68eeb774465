use serde::{Deserialize, Deserializer};

/// A raw review payload, one variant per storefront.
///
/// Only the normalizer consumes this, so upstream format churn stays
/// contained to the fetchers and this module.
#[derive(Debug, Clone)]
pub enum RawReview {
    Play(PlayReview),
    AppStore(Box<RssEntry>),
}

/// One review decoded from the Play Store batchexecute payload.
///
/// The wire format is positional arrays, so the fetcher builds this struct
/// field by field; everything it couldn't locate stays `None` and the
/// normalizer decides whether the record is usable.
#[derive(Debug, Clone, Default)]
pub struct PlayReview {
    pub review_id: Option<String>,
    pub user_name: Option<String>,
    pub score: Option<i64>,
    /// Unix timestamp in seconds
    pub timestamp: Option<i64>,
    pub text: Option<String>,
    pub thumbs_up: Option<i64>,
    pub reply_text: Option<String>,
}

/// Top-level iTunes customer-reviews RSS document (JSON rendering).
#[derive(Debug, Deserialize)]
pub struct RssDocument {
    pub feed: RssFeed,
}

/// The feed body. `entry` is absent when the app has no reviews, a single
/// object when there is exactly one entry, and an array otherwise.
#[derive(Debug, Default, Deserialize)]
pub struct RssFeed {
    #[serde(default, deserialize_with = "entry_list")]
    pub entry: Vec<RssEntry>,
}

impl RssFeed {
    /// The app-metadata entry, when present (always first in the feed).
    pub fn app_entry(&self) -> Option<&RssEntry> {
        self.entry.first()
    }

    /// Review entries: everything after the leading app-metadata entry.
    pub fn review_entries(&self) -> &[RssEntry] {
        if self.entry.len() > 1 {
            &self.entry[1..]
        } else {
            &[]
        }
    }
}

/// One feed entry. Fields are `label`-wrapped objects in the JSON rendering.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RssEntry {
    #[serde(default)]
    pub id: Option<Label>,
    #[serde(default)]
    pub author: Option<RssAuthor>,
    #[serde(default, rename = "im:rating")]
    pub rating: Option<Label>,
    #[serde(default)]
    pub updated: Option<Label>,
    #[serde(default)]
    pub content: Option<Label>,
    #[serde(default, rename = "im:voteSum")]
    pub vote_sum: Option<Label>,
    #[serde(default, rename = "im:name")]
    pub name: Option<Label>,
    #[serde(default, rename = "im:artist")]
    pub artist: Option<Label>,
}

impl RssEntry {
    pub fn id_label(&self) -> Option<&str> {
        self.id.as_ref().map(|l| l.label.as_str())
    }

    pub fn author_name(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|a| a.name.as_ref())
            .map(|l| l.label.as_str())
    }

    pub fn rating_label(&self) -> Option<&str> {
        self.rating.as_ref().map(|l| l.label.as_str())
    }

    pub fn updated_label(&self) -> Option<&str> {
        self.updated.as_ref().map(|l| l.label.as_str())
    }

    pub fn content_label(&self) -> Option<&str> {
        self.content.as_ref().map(|l| l.label.as_str())
    }

    pub fn vote_sum_value(&self) -> u64 {
        self.vote_sum
            .as_ref()
            .and_then(|l| l.label.parse().ok())
            .unwrap_or(0)
    }

    pub fn app_name(&self) -> Option<&str> {
        self.name.as_ref().map(|l| l.label.as_str())
    }

    pub fn artist_name(&self) -> Option<&str> {
        self.artist.as_ref().map(|l| l.label.as_str())
    }
}

/// A `{"label": "..."}` wrapper as used throughout the feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RssAuthor {
    #[serde(default)]
    pub name: Option<Label>,
}

fn entry_list<'de, D>(deserializer: D) -> Result<Vec<RssEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(Box<RssEntry>),
        Many(Vec<RssEntry>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(entry)) => vec![*entry],
        Some(OneOrMany::Many(entries)) => entries,
    })
}
