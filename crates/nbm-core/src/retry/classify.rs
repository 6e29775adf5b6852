//! Classify HTTP status and transport errors into retry policy error kinds.

use crate::retry::error::FetchError;
use crate::retry::policy::ErrorKind;

/// Classify an HTTP status code for retry decisions.
pub fn classify_http_status(code: u16) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Throttled,
        500..=599 => ErrorKind::Http5xx(code),
        _ => ErrorKind::Other,
    }
}

/// Classify a reqwest error for retry decisions.
pub fn classify_network_error(e: &reqwest::Error) -> ErrorKind {
    if e.is_timeout() {
        return ErrorKind::Timeout;
    }
    if e.is_connect() || e.is_request() || e.is_body() || e.is_decode() {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

/// Classify a fetch error into an ErrorKind.
pub fn classify(e: &FetchError) -> ErrorKind {
    match e {
        FetchError::Network(ne) => classify_network_error(ne),
        FetchError::Http(code) => classify_http_status(*code),
        FetchError::Truncated { .. } => ErrorKind::Connection,
        FetchError::Write(_) => ErrorKind::Io,
    }
}
