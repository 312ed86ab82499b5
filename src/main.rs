//! CLI entry point for relstage

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use relstage::{ConsoleOutput, FilterRules, JsonOutput, MirrorConfig, MirrorWalker};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "relstage")]
#[command(about = "Mirror a game data tree into a release staging directory")]
#[command(version)]
struct Args {
    /// Source data tree to mirror
    #[arg(default_value = ".")]
    source: PathBuf,

    /// Destination root for the staged release tree
    #[arg(short = 'o', long = "out", value_name = "DIR")]
    out: PathBuf,

    /// Prop allow-list file (default: SOURCE/AllowedProps.txt)
    #[arg(long = "allow-file", value_name = "FILE")]
    allow_file: Option<PathBuf>,

    /// JSON file overriding the built-in filter sets
    #[arg(long = "rules", value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Skip entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Walk and report without copying anything
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Suppress per-file output lines
    #[arg(short = 'q', long = "quiet", conflicts_with = "json")]
    quiet: bool,

    /// Output the copy report in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let mut rules = match args.rules {
        Some(ref path) => FilterRules::from_file(path).unwrap_or_else(|e| {
            eprintln!("relstage: {}", e);
            process::exit(1);
        }),
        None => FilterRules::default(),
    };
    rules.ignore_patterns.extend(args.ignore.iter().cloned());

    let source = if args.source.is_absolute() {
        args.source.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.source)
    };

    let mut config = MirrorConfig::new(source, args.out.clone());
    config.dry_run = args.dry_run;
    if let Some(ref path) = args.allow_file {
        config.allow_file = path.clone();
    }

    let walker = MirrorWalker::new(config, rules);

    let result = if args.json {
        walker.run(&mut JsonOutput).map(|_| ())
    } else {
        let mut output = ConsoleOutput::new(should_use_color(args.color), args.quiet);
        walker.run(&mut output).map(|_| ())
    };

    if let Err(e) = result {
        eprintln!("relstage: {}", e);
        process::exit(1);
    }
}
