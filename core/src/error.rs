//! Error types for the catalog API client.
//!
//! # Design
//! `NullReference` is the only error the query builder itself surfaces.
//! Everything that can go wrong once a request leaves the builder (the
//! transport, a rejecting status, an undecodable body) carries the raw data
//! needed to diagnose it. `Request` wraps any of those with the operation,
//! URL and payload of the call that failed.

use crate::operation::Operation;

/// Errors returned by the query builder and `Client`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// An absent query was serialized.
    #[error("null reference instance")]
    NullReference,

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The service answered with a status of 400 or above.
    #[error("bad HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body is not the expected JSON.
    #[error("decoding response failed: {message}")]
    Decode { message: String, body: String },

    /// The caller's transport failed before a response arrived.
    #[error("transport failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("{operation} request to {url} failed: {source}")]
    Request {
        operation: Operation,
        url: String,
        payload: String,
        #[source]
        source: Box<ApiError>,
    },
}

impl ApiError {
    /// The innermost error, looking through `Request` wrappers.
    pub fn root(&self) -> &ApiError {
        match self {
            ApiError::Request { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Serialization(e.to_string())
    }
}
