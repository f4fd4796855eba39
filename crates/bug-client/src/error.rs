use thiserror::Error;

/// A failed request against the bugs API
///
/// Callers treat every variant the same way: the request failed.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, RequestError>;
