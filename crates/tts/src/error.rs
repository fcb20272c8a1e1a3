use url::ParseError;

use crate::synthesis::response::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[source] ParseError),

    #[error("failed to request: {0}")]
    RequestError(#[source] reqwest::Error),

    #[error("synthesis rejected: {} ({})", .0.message, .0.status)]
    UnsuccessfulRequest(ApiError),

    #[error("failed to decode audio content: {0}")]
    DecodeError(#[source] base64::DecodeError),

    #[error("unexpected response body: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}
