//! Configuration types for mirror runs

use std::path::PathBuf;

/// Name of the external prop allow-list file, resolved against the source
/// root when no explicit path is given.
pub const PROP_ALLOW_FILE: &str = "AllowedProps.txt";

/// Configuration for a mirror run.
///
/// Everything the walk needs is carried here explicitly; nothing is read
/// from process-wide state.
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// The tree being copied from.
    pub source_root: PathBuf,
    /// The tree being copied to. Created if missing.
    pub dest_root: PathBuf,
    /// Path to the line-delimited Models/Props allow-list.
    pub allow_file: PathBuf,
    /// Walk and report without creating directories or copying files.
    pub dry_run: bool,
}

impl MirrorConfig {
    /// Build a configuration with the allow-list at its default location
    /// under the source root.
    pub fn new(source_root: impl Into<PathBuf>, dest_root: impl Into<PathBuf>) -> Self {
        let source_root = source_root.into();
        let allow_file = source_root.join(PROP_ALLOW_FILE);
        Self {
            source_root,
            dest_root: dest_root.into(),
            allow_file,
            dry_run: false,
        }
    }
}
