//! Error types for the taskcal request layer.
//!
//! Rejections are structural: a non-success HTTP status carries the decoded
//! response body in the same shape a success would have produced, so callers
//! branch on data rather than catching a generic exception. The layer itself
//! performs no retries, no logging and no recovery.

use thiserror::Error;

use crate::client::Payload;

/// The network call itself failed and no response was received
/// (DNS, connection refused, platform-level timeout).
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Errors surfaced by [`crate::Api`] calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure with no response available.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-success status. `payload` is the
    /// response body decoded by the same rules as a success payload.
    #[error("HTTP {status}: {payload}")]
    Status { status: u16, payload: Payload },

    /// The response body did not parse in the negotiated mode.
    #[error("decode error: {0}")]
    Decode(String),

    /// The request body could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for request-layer operations.
pub type ApiResult<T> = Result<T, ApiError>;
