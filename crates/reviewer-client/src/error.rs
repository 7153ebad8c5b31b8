use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Everything that can go wrong talking to the review service.
///
/// Only the transport layer produces these; the page controller logs them and degrades
/// rather than passing them on.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: StatusCode },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to open {url}: {reason}")]
    Browser { url: String, reason: String },
}
