//! Catalog discovery: fetch `/endpoints` and derive the expected file set.
//!
//! One GET per run; the response maps category names to `{min, max, format}`
//! descriptors from which every expected filename follows. Any transport,
//! parse, or validation failure here is fatal to the run.

mod expand;
mod wire;

pub use expand::EndpointDescriptor;

use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

/// Discovered categories, ordered by name so runs visit them deterministically.
pub type Catalog = BTreeMap<String, EndpointDescriptor>;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The API base from config is not a valid absolute URL.
    #[error("invalid API base {base:?}: {source}")]
    BadBase {
        base: String,
        #[source]
        source: url::ParseError,
    },
    /// The endpoints request failed in transit or returned a non-2xx status.
    #[error("endpoints request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The response body is not JSON of the expected shape.
    #[error("malformed endpoints body: {0}")]
    Parse(#[from] serde_json::Error),
    /// A descriptor failed validation (bounds, format, or category name).
    #[error("bad descriptor for category {category:?}: {reason}")]
    Descriptor { category: String, reason: String },
}

/// Fetch and validate the catalog from `{api_base}/endpoints`.
pub async fn discover(
    client: &reqwest::Client,
    api_base: &str,
) -> Result<Catalog, DiscoveryError> {
    let endpoint = format!("{}/endpoints", api_base.trim_end_matches('/'));
    let url = Url::parse(&endpoint).map_err(|source| DiscoveryError::BadBase {
        base: api_base.to_string(),
        source,
    })?;

    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    let raw: wire::RawCatalog = serde_json::from_str(&body)?;

    let mut catalog = Catalog::new();
    for (category, entry) in raw {
        validate_category(&category)?;
        let descriptor =
            EndpointDescriptor::from_raw(&category, &entry.min, &entry.max, &entry.format)?;
        catalog.insert(category, descriptor);
    }
    Ok(catalog)
}

/// Category names become path components on disk and in URLs; reject anything
/// that could escape the download root.
fn validate_category(category: &str) -> Result<(), DiscoveryError> {
    let bad = category.is_empty()
        || category == "."
        || category == ".."
        || category.contains(['/', '\\', '\0']);
    if bad {
        return Err(DiscoveryError::Descriptor {
            category: category.to_string(),
            reason: "name is not a safe path component".to_string(),
        });
    }
    Ok(())
}
