//! Terminal outcome counters for one mirror run.

use crate::downloader::Outcome;

/// Counts of terminal outcomes. Every work item lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Fold one terminal outcome into the counts.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Downloaded => self.downloaded += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    /// Total items that reached a terminal outcome.
    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.failed
    }

    /// True when nothing failed (skips are success).
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}
