//! Bounded fan-out over the work set.
//!
//! Keeps up to `max_concurrent` downloads running at once; when one finishes,
//! the next queued item is started until the queue is empty. On cancellation
//! no new tasks start and the unstarted remainder is folded in as failures,
//! so every item still reaches a terminal outcome.

use tokio_util::sync::CancellationToken;

use crate::downloader::{self, Outcome, WorkItem};
use crate::retry::RetryPolicy;

use super::RunSummary;

pub(super) async fn run_downloads(
    client: reqwest::Client,
    items: Vec<WorkItem>,
    policy: RetryPolicy,
    max_concurrent: usize,
    cancel: CancellationToken,
) -> RunSummary {
    let max_concurrent = max_concurrent.max(1);
    let mut summary = RunSummary::default();
    let mut queue = items.into_iter();
    let mut join_set = tokio::task::JoinSet::new();

    loop {
        if !cancel.is_cancelled() {
            while join_set.len() < max_concurrent {
                let Some(item) = queue.next() else {
                    break;
                };
                let client = client.clone();
                let token = cancel.clone();
                join_set.spawn(async move {
                    downloader::download_file(&client, &item, &policy, &token).await
                });
            }
        }

        let Some(res) = join_set.join_next().await else {
            break;
        };
        match res {
            Ok(outcome) => summary.record(outcome),
            Err(err) => {
                tracing::warn!("download task join: {}", err);
                summary.record(Outcome::Failed);
            }
        }
    }

    // Cancelled before the queue drained: the remainder still gets a terminal outcome.
    for item in queue {
        tracing::error!("ERROR {} cancelled", item.url);
        summary.record(Outcome::Failed);
    }

    summary
}
