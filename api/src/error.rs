use reqwest::StatusCode;

/// Failure of a single wash-history fetch.
///
/// The underlying transport and decoding errors are carried as-is so the
/// caller can decide how to present or recover from them.
#[derive(Debug, thiserror::Error, strum::EnumIs)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid client identifier: {0:?}")]
    InvalidSubject(String),

    #[error("invalid page request: page {page}, page size {page_size}")]
    InvalidPage { page: u32, page_size: u32 },
}
