//! Copy report accumulation and serialization
//!
//! The walker records every copy, prune, and skip here; `finalize`
//! stamps the report when the walk completes. The report serializes to
//! JSON for `--json` output.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Why a file was not copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Exact name in the excluded-filenames set.
    Name,
    /// Extension in the excluded-extensions set.
    Extension,
    /// Name starts with the reserved `__` prefix.
    Prefix,
    /// Name matched an extra ignore pattern.
    Pattern,
}

/// Per-reason skip counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkippedCounts {
    pub by_name: usize,
    pub by_extension: usize,
    pub by_prefix: usize,
    pub by_pattern: usize,
}

impl SkippedCounts {
    pub fn total(&self) -> usize {
        self.by_name + self.by_extension + self.by_prefix + self.by_pattern
    }
}

/// Outcome of a mirror run.
#[derive(Debug, Clone, Serialize)]
pub struct CopyReport {
    /// The tree copied from.
    pub source: PathBuf,
    /// The tree copied to.
    pub dest: PathBuf,
    /// Whether this was a dry run (nothing was written).
    pub dry_run: bool,
    /// Non-root directories mirrored at the destination.
    pub dirs_created: usize,
    /// Files copied (or, in a dry run, that would have been copied).
    pub files_copied: usize,
    /// Subdirectories pruned by a directory rule or ignore pattern.
    pub dirs_pruned: usize,
    /// Files rejected by the file filters.
    pub skipped: SkippedCounts,
    /// When the walk finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl CopyReport {
    pub fn new(source: &Path, dest: &Path, dry_run: bool) -> Self {
        Self {
            source: source.to_path_buf(),
            dest: dest.to_path_buf(),
            dry_run,
            dirs_created: 0,
            files_copied: 0,
            dirs_pruned: 0,
            skipped: SkippedCounts::default(),
            generated_at: None,
        }
    }

    pub fn record_dir_created(&mut self) {
        self.dirs_created += 1;
    }

    pub fn record_dir_pruned(&mut self) {
        self.dirs_pruned += 1;
    }

    pub fn record_file_copied(&mut self) {
        self.files_copied += 1;
    }

    pub fn record_skipped(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::Name => self.skipped.by_name += 1,
            SkipReason::Extension => self.skipped.by_extension += 1,
            SkipReason::Prefix => self.skipped.by_prefix += 1,
            SkipReason::Pattern => self.skipped.by_pattern += 1,
        }
    }

    pub fn total_skipped(&self) -> usize {
        self.skipped.total()
    }

    /// Stamp the report once the walk has completed.
    pub fn finalize(&mut self) {
        self.generated_at = Some(Utc::now());
    }
}
