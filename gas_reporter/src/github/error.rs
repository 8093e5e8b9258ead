//!
//! The source-control host API error.
//!

///
/// The source-control host API error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or the response could not be read.
    #[error("Request to {url} failed: {error}")]
    Request {
        /// The requested URL.
        url: String,
        /// The underlying HTTP client error.
        error: reqwest::Error,
    },
    /// The host responded with an error status.
    #[error("Request to {url} failed with status {status}: {body}")]
    Status {
        /// The requested URL.
        url: String,
        /// The response status.
        status: reqwest::StatusCode,
        /// The response text.
        body: String,
    },
    /// The response body has an unexpected shape.
    #[error("Response from {url} is invalid: {error}")]
    Decoding {
        /// The requested URL.
        url: String,
        /// The underlying JSON error.
        error: serde_json::Error,
    },
}
