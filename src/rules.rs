//! Filter rule sets and the external prop allow-list
//!
//! All rules are loaded once before the walk starts and never mutated
//! afterward. The built-in defaults match the VerusEdit data layout this
//! tool was written for; a JSON rules file can override any subset of them.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::MirrorError;

/// Name-based filter sets applied during the walk.
///
/// Deserializes from a JSON object where every key is optional; missing
/// keys keep their built-in defaults, unknown keys are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterRules {
    /// File extensions (without the leading dot) that are never copied.
    pub exclude_extensions: HashSet<String>,
    /// Exact file names that are never copied.
    pub exclude_files: HashSet<String>,
    /// Directory names pruned at the source root only.
    pub exclude_root_dirs: HashSet<String>,
    /// The only directory names kept under Models/Actors and Models/Motion.
    pub allowed_actors: HashSet<String>,
    /// Directory names pruned under Textures.
    pub exclude_textures: HashSet<String>,
    /// Extra glob patterns matched against entry names at every level.
    pub ignore_patterns: Vec<String>,
}

impl FilterRules {
    /// Parse rules from a JSON string, normalizing extension entries so
    /// both `"png"` and `".png"` spell the same rule.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let mut rules: Self = serde_json::from_str(text)?;
        rules.exclude_extensions = rules
            .exclude_extensions
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();
        Ok(rules)
    }

    /// Load rules from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, MirrorError> {
        let text = fs::read_to_string(path).map_err(|source| MirrorError::RulesRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| MirrorError::RulesParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            exclude_extensions: string_set(&["py", "7z", "zip", "flac", "ini", "png"]),
            exclude_files: string_set(&[
                "AllowedProps.txt",
                "Foo.xxx",
                "ProjectDir.txt",
                "Antigul.dds",
                "Antigul.mat",
                "G3_Music0_SHORT.ogg",
                "G3_Music1_SHORT.ogg",
                "G3_Music2_SHORT.ogg",
                "TODO.txt",
                "Island.dds",
                "Island.xml",
            ]),
            exclude_root_dirs: string_set(&["Geometry"]),
            allowed_actors: string_set(&[
                "Agent",
                "Blueberry",
                "Bulldozer",
                "Gulman",
                "Lamantina",
                "Soldier",
                "Strawberry",
                "VANO",
                "MAD",
            ]),
            exclude_textures: string_set(&["Elevation", "Maps", "Splat"]),
            ignore_patterns: Vec::new(),
        }
    }
}

fn string_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Ordered allow-list of prop directory names, read from a plain text
/// file with one name per line.
///
/// Governs which subdirectories survive under Models/Props. Order is
/// preserved from the file; membership tests are exact string matches.
#[derive(Debug, Clone, Default)]
pub struct PropAllowList {
    entries: Vec<String>,
}

impl PropAllowList {
    /// Read the allow-list file. A missing or unreadable file is fatal.
    pub fn load(path: &Path) -> Result<Self, MirrorError> {
        let text = fs::read_to_string(path).map_err(|source| MirrorError::AllowList {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    /// Parse allow-list entries from text. Blank lines are dropped; CRLF
    /// line endings are tolerated.
    pub fn from_text(text: &str) -> Self {
        let entries = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { entries }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
