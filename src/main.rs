//! CLI entry point for sizetree

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use sizetree::{OutputConfig, SizeWalker, TreeFormatter, WalkerConfig};
use termcolor::WriteColor;

const USAGE: &str = "Usage: sizetree <dir1> <dir2> ...";

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
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sizetree")]
#[command(about = "Print every subdirectory with the cumulative size of its contents")]
#[command(version)]
struct Args {
    /// Directories to report on
    #[arg(value_name = "DIR")]
    dirs: Vec<PathBuf>,

    /// Keep the filesystem's enumeration order instead of sorting by name
    #[arg(short = 'U', long = "unsorted")]
    unsorted: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let args = Args::parse();

    if args.dirs.is_empty() {
        println!("{}", USAGE);
        process::exit(1);
    }

    let walker = SizeWalker::new(WalkerConfig {
        sort_entries: !args.unsorted,
        ..Default::default()
    });
    let mut formatter = TreeFormatter::stdout(OutputConfig {
        use_color: should_use_color(args.color),
    });

    for dir in &args.dirs {
        if let Err(e) = report(dir, &walker, &mut formatter) {
            eprintln!("sizetree: error writing output: {}", e);
            process::exit(1);
        }
    }
}

/// Print the header and size tree for one command-line directory.
fn report<W: WriteColor>(
    dir: &Path,
    walker: &SizeWalker,
    formatter: &mut TreeFormatter<W>,
) -> io::Result<()> {
    formatter.header(dir)?;
    let summary = walker.walk(dir, formatter)?;
    log::debug!(
        "{}: {} directories, {} errors",
        dir.display(),
        summary.directories,
        summary.errors
    );
    formatter.flush()
}
