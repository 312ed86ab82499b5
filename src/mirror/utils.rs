//! Shared name-matching helpers for the walk

use std::path::Path;

use glob::Pattern;

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Check a name against a list of ignore patterns. A pattern matches on
/// exact equality or as a glob.
pub fn matches_any(patterns: &[String], name: &str) -> bool {
    patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Extension of a file name: the substring after the last dot, or `None`
/// when there is none (dotfiles like `.gitignore` have no extension).
pub fn extension_of(name: &str) -> Option<&str> {
    Path::new(name).extension().and_then(|ext| ext.to_str())
}
