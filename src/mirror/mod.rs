//! Filtered mirroring of a source tree into a destination
//!
//! The walk is strictly sequential and top-down: each directory is read,
//! its subdirectories are pruned by the rule matching its relative path,
//! the directory is mirrored at the destination, surviving files are
//! copied, and then the walk descends.
//!
//! # Module Structure
//!
//! - `config` - the explicit run configuration
//! - `filter` - per-path directory rules and the file predicate
//! - `utils` - name matching helpers
//! - `walker` - the traversal and copy loop

mod config;
mod filter;
mod utils;
mod walker;

// Re-export public types
pub use config::{MirrorConfig, PROP_ALLOW_FILE};
pub use filter::{DirRule, RESERVED_PREFIX};
pub use walker::{CopyOutput, MirrorWalker};
