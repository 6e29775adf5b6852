//! Mirror run orchestration: discover, prepare directories, fan out, summarize.

mod run;
mod summary;

pub use summary::RunSummary;

use anyhow::{Context, Result};
use std::path::Path;
use tokio_util::sync::CancellationToken;

use crate::catalog::{self, Catalog};
use crate::config::MirrorConfig;
use crate::downloader::WorkItem;
use crate::storage;

/// Run one full mirror pass: discovery, directory setup, bounded downloads.
///
/// Discovery failure is fatal. Per-file failures are not: every work item
/// reaches its own terminal outcome and the counts land in the summary.
pub async fn run_mirror(
    cfg: &MirrorConfig,
    download_dir: &Path,
    cancel: CancellationToken,
) -> Result<RunSummary> {
    let client = cfg.http_client().context("failed to build HTTP client")?;

    storage::ensure_dir(download_dir).await?;

    let catalog = catalog::discover(&client, &cfg.api_base)
        .await
        .context("catalog discovery failed")?;

    let items = plan_work(&catalog, &cfg.api_base, download_dir).await?;
    tracing::info!(
        "{} categories, {} files to consider",
        catalog.len(),
        items.len()
    );

    let summary = run::run_downloads(
        client,
        items,
        cfg.retry_policy(),
        cfg.max_concurrent,
        cancel,
    )
    .await;

    tracing::info!(
        "run complete: {} downloaded, {} skipped, {} failed",
        summary.downloaded,
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}

/// Ensure per-category directories exist and materialize the work set, in
/// catalog order.
async fn plan_work(
    catalog: &Catalog,
    api_base: &str,
    download_dir: &Path,
) -> Result<Vec<WorkItem>> {
    let base = api_base.trim_end_matches('/');
    let mut items = Vec::new();
    for (category, descriptor) in catalog {
        let category_dir = download_dir.join(category);
        storage::ensure_dir(&category_dir).await?;
        for filename in descriptor.filenames() {
            let url = format!("{base}/{category}/{filename}");
            let dest_path = category_dir.join(&filename);
            items.push(WorkItem {
                category: category.clone(),
                filename,
                url,
                dest_path,
            });
        }
    }
    Ok(items)
}
