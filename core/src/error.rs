//! Error types for the admin API client core.
//!
//! # Design
//! The core classifies nothing on the way back from the transport: transport
//! failures keep the transport's own error type. `ApiError` covers only what
//! the core itself can fail at (encoding a payload) plus the opt-in
//! `HttpResponse::json` helper.

use thiserror::Error;

/// Errors produced while building requests or decoding response bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// A request payload or filter could not be serialized.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
