//! Error types for mirroring operations

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a mirror run.
///
/// There is no recovery: the first error terminates the walk and is
/// reported at the process boundary.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// The prop allow-list file could not be read.
    #[error("cannot read allow-list '{path}': {source}")]
    AllowList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A rules file was given but could not be read.
    #[error("cannot read rules file '{path}': {source}")]
    RulesRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A rules file was read but is not valid JSON for `FilterRules`.
    #[error("invalid rules file '{path}': {source}")]
    RulesParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A source directory could not be listed.
    #[error("cannot read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A destination directory could not be created.
    #[error("cannot create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file copy failed.
    #[error("cannot copy '{src}' to '{dest}': {source}")]
    Copy {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing console or JSON output failed.
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}
