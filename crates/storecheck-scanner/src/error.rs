use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no in-stock entry with a parseable price among {scanned} listing entries")]
    NoCandidates { scanned: usize },

    #[error("expected amount {expected} does not appear on the page")]
    AmountMissing { expected: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate limited by {url} (retry after {retry_after_secs}s)")]
    RateLimited { url: String, retry_after_secs: u64 },

    #[error("page not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}
