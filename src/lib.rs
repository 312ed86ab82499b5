//! relstage - mirror a game data tree into a release staging directory

pub mod error;
pub mod mirror;
pub mod output;
pub mod report;
pub mod rules;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::MirrorError;
pub use mirror::{CopyOutput, MirrorConfig, MirrorWalker};
pub use output::{ConsoleOutput, JsonOutput};
pub use report::{CopyReport, SkipReason};
pub use rules::{FilterRules, PropAllowList};
