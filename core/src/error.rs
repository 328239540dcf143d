//! Error types for the Teamwork API client.
//!
//! # Design
//! Every failure surfaces to the immediate caller; nothing is retried.
//! Argument and id problems are raised before any request is sent. Remote
//! 4xx/5xx responses are not errors at this layer: their JSON body is
//! handed back like any other payload, so there is no status variant here.

use thiserror::Error;

/// Errors returned by the client, its transport and the resource handles.
#[derive(Debug, Error)]
pub enum ApiError {
    /// None of the supplied argument names is recognized by the call.
    #[error("This call only accepts these arguments: {}", accepted.join(" | "))]
    InvalidArgument { accepted: Vec<String> },

    /// An id-scoped call was made on a handle created without an id.
    #[error("{resource} call requires an id")]
    MissingId { resource: &'static str },

    /// The transport could not complete the exchange (DNS, connect, TLS, I/O).
    #[error("transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The response body could not be decoded as JSON.
    #[error("deserialization failed: {0}")]
    DeserializationError(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(#[source] serde_json::Error),

    /// A required environment variable is absent or empty.
    #[error("missing configuration: {0} is not set")]
    MissingConfig(&'static str),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        ApiError::Transport(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
