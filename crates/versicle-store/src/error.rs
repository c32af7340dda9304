use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Home directory not found")]
    NoHomeDirectory,

    #[error("Cannot derive a cache file name from URL: {0}")]
    CacheName(String),

    #[error("Could not download {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not download {url}: HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to load {corpus}: {source}")]
    Load {
        corpus: &'static str,
        #[source]
        source: Box<StoreError>,
    },
}
