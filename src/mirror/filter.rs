//! Directory and file filtering for the walk
//!
//! Directory rules are selected by the relative path of the directory
//! being visited, compared segment by segment. At most one rule applies
//! per level; everywhere else the walk is unrestricted.

use std::collections::HashSet;

use crate::report::SkipReason;
use crate::rules::{FilterRules, PropAllowList};

use super::utils::{extension_of, matches_any};

/// File names starting with this prefix are never copied.
pub const RESERVED_PREFIX: &str = "__";

/// The directory rule in force at one level of the walk.
#[derive(Debug)]
pub enum DirRule<'a> {
    /// Drop subdirectories named in the set.
    Deny(&'a HashSet<String>),
    /// Keep only subdirectories named in the set.
    Allow(&'a HashSet<String>),
    /// Keep only subdirectories named in the external allow-list.
    AllowListed(&'a PropAllowList),
    /// No rule at this level.
    Unrestricted,
}

impl<'a> DirRule<'a> {
    /// Select the rule for a directory given its path relative to the
    /// source root, decomposed into segments. The segment comparison is
    /// exact and case-sensitive.
    pub fn for_path(
        rules: &'a FilterRules,
        props: &'a PropAllowList,
        segments: &[String],
    ) -> Self {
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        match segments.as_slice() {
            [] => DirRule::Deny(&rules.exclude_root_dirs),
            ["Models", "Actors"] | ["Models", "Motion"] => DirRule::Allow(&rules.allowed_actors),
            ["Models", "Props"] => DirRule::AllowListed(props),
            ["Textures"] => DirRule::Deny(&rules.exclude_textures),
            _ => DirRule::Unrestricted,
        }
    }

    /// Whether a subdirectory with this name survives the rule.
    pub fn permits(&self, name: &str) -> bool {
        match self {
            DirRule::Deny(set) => !set.contains(name),
            DirRule::Allow(set) => set.contains(name),
            DirRule::AllowListed(props) => props.contains(name),
            DirRule::Unrestricted => true,
        }
    }
}

/// Why a file is skipped, or `None` if it should be copied.
///
/// Checks run in the order the original release script applied them:
/// exact name, extension, reserved prefix, then extra ignore patterns.
pub fn file_skip_reason(rules: &FilterRules, name: &str) -> Option<SkipReason> {
    if rules.exclude_files.contains(name) {
        return Some(SkipReason::Name);
    }
    if let Some(ext) = extension_of(name) {
        if rules.exclude_extensions.contains(ext) {
            return Some(SkipReason::Extension);
        }
    }
    if name.starts_with(RESERVED_PREFIX) {
        return Some(SkipReason::Prefix);
    }
    if matches_any(&rules.ignore_patterns, name) {
        return Some(SkipReason::Pattern);
    }
    None
}
