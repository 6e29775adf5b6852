//! Per-file download pipeline.
//!
//! Every work item runs the same state machine: skip when the destination
//! already exists, otherwise stream the body into a `.part` file and rename
//! it into place, retrying transient failures with backoff. Cancellation is
//! raced against each await, so an interrupted task drops its partial file
//! and still reports a terminal outcome.

use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::retry::{classify, FetchError, RetryDecision, RetryPolicy};
use crate::storage::PartWriter;

/// One expected file: where it comes from and where it lands.
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub category: String,
    pub filename: String,
    pub url: String,
    pub dest_path: PathBuf,
}

/// Terminal result of one work item. Reported exactly once per item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Destination already existed; nothing was fetched.
    Skipped,
    /// Fetched completely and renamed into place.
    Downloaded,
    /// All attempts failed, or the run was cancelled first.
    Failed,
}

/// Run one work item to its terminal outcome.
pub async fn download_file(
    client: &reqwest::Client,
    item: &WorkItem,
    policy: &RetryPolicy,
    cancel: &CancellationToken,
) -> Outcome {
    if item.dest_path.exists() {
        info!("File skipped {}", item.url);
        return Outcome::Skipped;
    }

    let mut attempt = 1u32;
    loop {
        if cancel.is_cancelled() {
            error!("ERROR {} cancelled", item.url);
            return Outcome::Failed;
        }

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                // Dropping the attempt future drops its PartWriter, which
                // removes the temp file.
                error!("ERROR {} cancelled", item.url);
                return Outcome::Failed;
            }
            result = fetch_once(client, item) => result,
        };

        match result {
            Ok(_bytes) => {
                info!("File downloaded {}", item.url);
                return Outcome::Downloaded;
            }
            Err(err) => {
                error!("ERROR {} attempt {}: {}", item.url, attempt, err);
                match policy.decide(attempt, classify(&err)) {
                    RetryDecision::NoRetry => return Outcome::Failed,
                    RetryDecision::RetryAfter(delay) => {
                        tokio::select! {
                            biased;
                            _ = cancel.cancelled() => {
                                error!("ERROR {} cancelled", item.url);
                                return Outcome::Failed;
                            }
                            _ = tokio::time::sleep(delay) => {}
                        }
                        attempt += 1;
                    }
                }
            }
        }
    }
}

/// One streamed GET attempt: status check, body chunks into a `.part` writer,
/// short-body check against Content-Length, then atomic commit.
async fn fetch_once(client: &reqwest::Client, item: &WorkItem) -> Result<u64, FetchError> {
    let mut response = client.get(item.url.as_str()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http(status.as_u16()));
    }
    let expected = response.content_length();

    let mut writer = PartWriter::create(&item.dest_path).await?;
    while let Some(chunk) = response.chunk().await? {
        writer.write_chunk(&chunk).await?;
    }
    if let Some(expected) = expected {
        let received = writer.bytes_written();
        if received != expected {
            return Err(FetchError::Truncated { expected, received });
        }
    }
    Ok(writer.commit().await?)
}
