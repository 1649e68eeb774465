use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Storefront fetch failed
    #[error("{0}")]
    Fetch(#[from] storescout_scraper::FetchError),

    /// Every country fetch in an aggregation run failed
    #[error("{0}")]
    Aggregation(#[from] storescout_scraper::AggregationError),

    /// Export failed
    #[error("Export error: {0}")]
    Export(#[from] storescout_export::ExportError),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad command-line argument
    #[error("{0}")]
    InvalidArgument(String),
}

impl CliError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
