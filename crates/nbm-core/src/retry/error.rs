//! Per-attempt download error type for retry classification.

use thiserror::Error;

use crate::storage::WriteError;

/// Error from a single download attempt (transport failure, bad HTTP status,
/// short body, or local write failure). Classified by [`crate::retry::classify`]
/// to decide whether the attempt is repeated.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u16),
    /// Request failed in transit (connect, timeout, reset, decode).
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    /// Body ended short of the announced Content-Length (server closed early).
    #[error("truncated body: expected {expected} bytes, got {received}")]
    Truncated { expected: u64, received: u64 },
    /// Local filesystem failure while persisting the body.
    #[error(transparent)]
    Write(#[from] WriteError),
}
