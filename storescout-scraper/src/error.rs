use storescout_core::CountryFailure;

/// Errors from a single storefront fetch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error (HTTP {status}): {message}")]
    Status { status: u16, message: String },

    #[error("App not found on the storefront")]
    NotFound,

    #[error("Unexpected upstream response format: {0}")]
    UpstreamFormat(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid app identifier '{id}': expected {expected}")]
    InvalidIdentifier { id: String, expected: &'static str },

    #[error("Invalid country code: {0}")]
    InvalidCountry(String),
}

/// A single raw review record could not be decoded into the canonical shape.
///
/// Callers drop the record and continue; no partial review is ever built.
#[derive(Debug, Clone, thiserror::Error)]
#[error("malformed review record ({field}): {reason}")]
pub struct MalformedRecordError {
    pub field: &'static str,
    pub reason: String,
}

impl MalformedRecordError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Every country fetch in an aggregation run failed.
///
/// Partial failures never produce this — they are reported in the
/// result's provenance instead.
#[derive(Debug, thiserror::Error)]
#[error("all {} country fetches failed", .failures.len())]
pub struct AggregationError {
    pub failures: Vec<CountryFailure>,
}
