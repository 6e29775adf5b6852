//! `nbm run` – mirror the catalog into the download directory.

use anyhow::Result;
use nbm_core::config::MirrorConfig;
use nbm_core::scheduler;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

pub async fn run_mirror(
    cfg: &MirrorConfig,
    download_dir: Option<PathBuf>,
    concurrency: Option<usize>,
) -> Result<()> {
    let mut cfg = cfg.clone();
    if let Some(n) = concurrency {
        cfg.max_concurrent = n;
    }
    let download_dir = download_dir.unwrap_or_else(|| cfg.download_dir.clone());

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, stopping downloads");
            interrupt.cancel();
        }
    });

    let summary = scheduler::run_mirror(&cfg, &download_dir, cancel).await?;

    println!(
        "Downloaded {}, skipped {}, failed {} (of {} files).",
        summary.downloaded,
        summary.skipped,
        summary.failed,
        summary.total()
    );
    if !summary.is_clean() {
        anyhow::bail!("{} file(s) did not download", summary.failed);
    }
    Ok(())
}
