//! Validated endpoint descriptors and filename expansion.

use super::DiscoveryError;

/// One category's file range: numeric bounds, the zero-pad width implied by
/// the raw `min` token, and the file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub min: u64,
    pub max: u64,
    pub width: usize,
    pub format: String,
}

impl EndpointDescriptor {
    /// Validate raw bounds and format into a descriptor.
    ///
    /// The pad width is the character count of `min` exactly as served, so
    /// `{"min": "0001", "max": "0525"}` yields `0001..0525` while
    /// `{"min": 0, "max": 9}` yields unpadded `0..9`.
    pub(super) fn from_raw(
        category: &str,
        min: &str,
        max: &str,
        format: &str,
    ) -> Result<Self, DiscoveryError> {
        let bound = |field: &str, raw: &str| {
            raw.parse::<u64>().map_err(|_| DiscoveryError::Descriptor {
                category: category.to_string(),
                reason: format!("{field} is not an unsigned integer: {raw:?}"),
            })
        };
        let min_n = bound("min", min)?;
        let max_n = bound("max", max)?;
        if min_n > max_n {
            return Err(DiscoveryError::Descriptor {
                category: category.to_string(),
                reason: format!("min {min_n} exceeds max {max_n}"),
            });
        }
        if format.is_empty() || format.starts_with('.') || format.contains(['/', '\\']) {
            return Err(DiscoveryError::Descriptor {
                category: category.to_string(),
                reason: format!("format is not a bare extension: {format:?}"),
            });
        }
        Ok(Self {
            min: min_n,
            max: max_n,
            width: min.len(),
            format: format.to_string(),
        })
    }

    /// Number of files this descriptor expands to (bounds are inclusive).
    pub fn count(&self) -> u64 {
        self.max.saturating_sub(self.min).saturating_add(1)
    }

    /// All expected filenames in ascending ID order: each ID zero-padded to
    /// `width` with the extension appended. Lazy and restartable; re-deriving
    /// yields the identical sequence.
    pub fn filenames(&self) -> impl Iterator<Item = String> + '_ {
        let width = self.width;
        (self.min..=self.max).map(move |n| format!("{:0>width$}.{}", n, self.format, width = width))
    }
}
