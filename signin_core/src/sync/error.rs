use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can happen while processing requests
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't parse a URL, for example if the base URL was invalid.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// We couldn't serialize the request body.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// We couldn't talk to the server, for example because DNS failed or the
    /// connection was refused.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
