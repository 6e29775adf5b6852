//! Retry and backoff policy.
//!
//! This module encapsulates error classification (timeouts, throttling,
//! connection failures, bad statuses, local I/O) and exponential backoff
//! decisions so the downloader applies one consistent policy across attempts.

mod classify;
mod error;
mod policy;

pub use classify::{classify, classify_http_status, classify_network_error};
pub use error::FetchError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
