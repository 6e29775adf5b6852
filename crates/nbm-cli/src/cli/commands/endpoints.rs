//! `nbm endpoints` – list the catalog's categories and filename ranges.

use anyhow::{Context, Result};
use nbm_core::catalog;
use nbm_core::config::MirrorConfig;

pub async fn run_endpoints(cfg: &MirrorConfig) -> Result<()> {
    let client = cfg.http_client().context("failed to build HTTP client")?;
    let catalog = catalog::discover(&client, &cfg.api_base).await?;
    if catalog.is_empty() {
        println!("Catalog is empty.");
    } else {
        println!(
            "{:<16} {:>8} {:>8} {:<6} {:>8}",
            "CATEGORY", "MIN", "MAX", "FORMAT", "FILES"
        );
        for (category, desc) in &catalog {
            println!(
                "{:<16} {:>8} {:>8} {:<6} {:>8}",
                category,
                format!("{:0>width$}", desc.min, width = desc.width),
                format!("{:0>width$}", desc.max, width = desc.width),
                desc.format,
                desc.count()
            );
        }
    }
    Ok(())
}
