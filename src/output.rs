//! Console and JSON output for mirror runs
//!
//! Both implement the `CopyOutput` observer driven by the walker:
//! `ConsoleOutput` prints each destination path as it is copied and a
//! summary line at the end; `JsonOutput` stays silent during the walk
//! and prints the report as pretty-printed JSON.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::mirror::CopyOutput;
use crate::report::CopyReport;

/// Console output - one line per copied file, summary at the end.
pub struct ConsoleOutput {
    stdout: StandardStream,
    quiet: bool,
}

impl ConsoleOutput {
    pub fn new(use_color: bool, quiet: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
            quiet,
        }
    }
}

impl CopyOutput for ConsoleOutput {
    fn file_copied(&mut self, dest: &Path) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.stdout, "{}", dest.display())
    }

    fn finish(&mut self, report: &CopyReport) -> io::Result<()> {
        self.stdout.set_color(ColorSpec::new().set_bold(true))?;
        write!(
            self.stdout,
            "{} directories, {} files",
            report.dirs_created, report.files_copied
        )?;
        self.stdout.reset()?;
        if report.total_skipped() > 0 || report.dirs_pruned > 0 {
            write!(
                self.stdout,
                " ({} files skipped, {} directories pruned)",
                report.total_skipped(),
                report.dirs_pruned
            )?;
        }
        if report.dry_run {
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(self.stdout, " [dry run]")?;
            self.stdout.reset()?;
        }
        writeln!(self.stdout)
    }
}

/// JSON output - silent during the walk, report printed at the end.
pub struct JsonOutput;

impl CopyOutput for JsonOutput {
    fn file_copied(&mut self, _dest: &Path) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, report: &CopyReport) -> io::Result<()> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        println!("{}", json);
        Ok(())
    }
}
