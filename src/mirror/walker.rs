//! MirrorWalker - sequential filtered copy of a source tree

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MirrorError;
use crate::report::CopyReport;
use crate::rules::{FilterRules, PropAllowList};

use super::config::MirrorConfig;
use super::filter::{DirRule, file_skip_reason};
use super::utils::matches_any;

/// Callback for copy progress - receives each destination path before
/// the file is written, then the finished report.
pub trait CopyOutput {
    fn file_copied(&mut self, dest: &Path) -> std::io::Result<()>;

    fn finish(&mut self, report: &CopyReport) -> std::io::Result<()>;
}

/// Walks the source tree top-down, prunes directories by the rule in
/// force at each level, mirrors surviving directories under the
/// destination root, and copies surviving files byte-for-byte.
///
/// The walk is synchronous and single-threaded; the first error aborts
/// the run.
pub struct MirrorWalker {
    config: MirrorConfig,
    rules: FilterRules,
}

impl MirrorWalker {
    pub fn new(config: MirrorConfig, rules: FilterRules) -> Self {
        Self { config, rules }
    }

    /// Run the full mirror: load the prop allow-list, create the
    /// destination root, then walk and copy. Returns the finished report.
    pub fn run<O: CopyOutput>(&self, output: &mut O) -> Result<CopyReport, MirrorError> {
        let props = PropAllowList::load(&self.config.allow_file)?;

        let mut report = CopyReport::new(
            &self.config.source_root,
            &self.config.dest_root,
            self.config.dry_run,
        );

        if !self.config.dry_run {
            fs::create_dir_all(&self.config.dest_root).map_err(|source| {
                MirrorError::CreateDir {
                    path: self.config.dest_root.clone(),
                    source,
                }
            })?;
        }

        let mut segments = Vec::new();
        self.walk_dir(
            &self.config.source_root,
            &mut segments,
            &props,
            output,
            &mut report,
        )?;

        report.finalize();
        output.finish(&report)?;
        Ok(report)
    }

    fn walk_dir<O: CopyOutput>(
        &self,
        dir: &Path,
        segments: &mut Vec<String>,
        props: &PropAllowList,
        output: &mut O,
        report: &mut CopyReport,
    ) -> Result<(), MirrorError> {
        let read_dir_err = |source| MirrorError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut subdirs = Vec::new();
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_dir_err)? {
            let entry = entry.map_err(read_dir_err)?;
            let file_type = entry.file_type().map_err(read_dir_err)?;
            // Symlinks are never followed or copied
            if file_type.is_symlink() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if file_type.is_dir() {
                subdirs.push(name);
            } else if file_type.is_file() {
                files.push(name);
            }
        }
        subdirs.sort();
        files.sort();

        // Prune subdirectories before descending: a pruned directory is
        // never visited and never appears at the destination
        let rule = DirRule::for_path(&self.rules, props, segments);
        subdirs.retain(|name| {
            if matches_any(&self.rules.ignore_patterns, name) || !rule.permits(name) {
                report.record_dir_pruned();
                return false;
            }
            true
        });

        // Mirror this directory before touching its files; the root was
        // created by run(). Already-existing directories are tolerated.
        let dest_dir = self.dest_path(segments);
        if !segments.is_empty() {
            if !self.config.dry_run {
                fs::create_dir_all(&dest_dir).map_err(|source| MirrorError::CreateDir {
                    path: dest_dir.clone(),
                    source,
                })?;
            }
            report.record_dir_created();
        }

        for name in &files {
            if let Some(reason) = file_skip_reason(&self.rules, name) {
                report.record_skipped(reason);
                continue;
            }
            let src = dir.join(name);
            let dest = dest_dir.join(name);
            output.file_copied(&dest)?;
            if !self.config.dry_run {
                fs::copy(&src, &dest).map_err(|source| MirrorError::Copy { src, dest, source })?;
            }
            report.record_file_copied();
        }

        for name in subdirs {
            let sub = dir.join(&name);
            segments.push(name);
            self.walk_dir(&sub, segments, props, output, report)?;
            segments.pop();
        }

        Ok(())
    }

    fn dest_path(&self, segments: &[String]) -> PathBuf {
        let mut path = self.config.dest_root.clone();
        for segment in segments {
            path.push(segment);
        }
        path
    }
}
