//! JSON export of query results.
//!
//! Each export writes one pretty-printed JSON document to a timestamped
//! file inside the output directory. The result object is passed in
//! explicitly; nothing here holds state between calls.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use storescout_core::{AppInfo, ReviewSet};

mod error;

pub use error::ExportError;

/// Filename timestamp, second resolution — collisions within one second
/// overwrite, which matches one-export-per-user-action usage.
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Write an app-metadata document to `app_info_{timestamp}.json`.
///
/// Returns the path of the written file.
pub fn write_app_info(info: &AppInfo, dir: &Path) -> Result<PathBuf, ExportError> {
    write_document(dir, "app_info", info)
}

/// Write an aggregated review set to `reviews_{timestamp}.json`.
pub fn write_review_set(set: &ReviewSet, dir: &Path) -> Result<PathBuf, ExportError> {
    write_document(dir, "reviews", set)
}

fn write_document<T: Serialize>(dir: &Path, prefix: &str, value: &T) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;

    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
    let path = dir.join(format!("{prefix}_{timestamp}.json"));

    let contents = serde_json::to_string_pretty(value)?;
    fs::write(&path, contents)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storescout_core::{Platform, Review};

    fn temp_export_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("storescout-export-{tag}-{}", std::process::id()))
    }

    fn sample_set() -> ReviewSet {
        ReviewSet {
            reviews: vec![Review {
                review_id: "r1".to_string(),
                user_name: "Ann".to_string(),
                rating: 5,
                date: "2024-01-15".parse().unwrap(),
                text: Some("Great app!".to_string()),
                thumbs_up: 12,
                reply_text: None,
                source_country: "us".to_string(),
            }],
            countries_queried: vec!["us".to_string(), "gb".to_string()],
            failed: Vec::new(),
            raw_count: 2,
            deduped_count: 1,
            final_count: 1,
        }
    }

    #[test]
    fn test_write_review_set() {
        let dir = temp_export_dir("reviews");
        let path = write_review_set(&sample_set(), &dir).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("reviews_"));
        assert!(name.ends_with(".json"));

        let contents = fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(doc["reviews"][0]["user_name"], "Ann");
        assert_eq!(doc["reviews"][0]["rating"], 5);
        assert_eq!(doc["reviews"][0]["date"], "2024-01-15");
        assert_eq!(doc["reviews"][0]["source_country"], "us");
        assert_eq!(doc["raw_count"], 2);
        assert_eq!(doc["deduped_count"], 1);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_app_info() {
        let dir = temp_export_dir("info");
        let info = AppInfo {
            app_id: "com.example.app".to_string(),
            title: "Example".to_string(),
            developer: "Example Inc.".to_string(),
            rating: Some(4.5),
            ratings_count: Some(1000),
            reviews_count: None,
            installs: Some("1,000,000+".to_string()),
            description: None,
            platform: Platform::PlayStore,
        };
        let path = write_app_info(&info, &dir).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(doc["app_id"], "com.example.app");
        assert_eq!(doc["platform"], "play");
        assert_eq!(doc["rating"], 4.5);

        let _ = fs::remove_dir_all(&dir);
    }
}
