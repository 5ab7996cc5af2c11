// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Client-side error taxonomy for the product API.
///
/// Every operation returns one of these as a value; nothing is swallowed at
/// the call boundary, the caller decides whether to log, retry, or display.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Draft rejected before any request was issued.
    #[error("{0}")]
    Validation(String),

    /// No product with the given id in the local view.
    #[error("{0}")]
    NotFound(String),

    /// The server answered and reported a failure, either through a non-2xx
    /// status or an in-body `success: false`.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// The request never completed: connection, TLS, timeout, body read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body does not match the expected envelope.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn remote(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::Remote {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}
