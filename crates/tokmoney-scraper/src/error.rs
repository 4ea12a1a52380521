use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("failed to read page {path}: {source}")]
    PageIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid text pattern for {chain} discovery: {source}")]
    InvalidPattern {
        chain: String,
        #[source]
        source: regex::Error,
    },

    #[error("malformed message: {0}")]
    Message(#[from] serde_json::Error),
}
