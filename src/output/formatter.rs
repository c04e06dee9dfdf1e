//! Text formatter for size trees
//!
//! Renders walker events as indented lines:
//!
//! ```text
//! src (0.12 MB)
//!   tree (0.05 MB)
//! Error accessing src/locked: Permission denied (os error 13)
//! ```

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::ScanError;
use crate::tree::{TreeOutput, format_megabytes};

use super::config::OutputConfig;

/// Line formatter over any color-capable writer.
///
/// Without color the output is plain text, so `termcolor::NoColor` or a
/// non-TTY stdout yield the exact report lines.
pub struct TreeFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl TreeFormatter<StandardStream> {
    /// Formatter writing to stdout. Terminal detection is left to the caller.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Blank line followed by `Directory tree for {root}:`.
    pub fn header(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.out)?;
        self.set_color(ColorSpec::new().set_bold(true))?;
        write!(self.out, "Directory tree for {}:", root.display())?;
        self.out.reset()?;
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn set_color(&mut self, spec: &ColorSpec) -> io::Result<()> {
        if self.config.use_color {
            self.out.set_color(spec)?;
        }
        Ok(())
    }
}

impl<W: WriteColor> TreeOutput for TreeFormatter<W> {
    fn directory(&mut self, name: &str, bytes: u64, indent: &str) -> io::Result<()> {
        write!(self.out, "{}", indent)?;
        self.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.out, "{}", name)?;
        self.out.reset()?;
        write!(self.out, " ")?;
        self.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(self.out, "({} MB)", format_megabytes(bytes))?;
        self.out.reset()?;
        writeln!(self.out)
    }

    fn error(&mut self, err: &ScanError, indent: &str) -> io::Result<()> {
        write!(self.out, "{}", indent)?;
        self.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        match err {
            ScanError::NotFound { path } => {
                write!(self.out, "Directory not found: {}", path.display())?
            }
            ScanError::Access { path, source } => {
                write!(self.out, "Error accessing {}: {}", path.display(), source)?
            }
        }
        self.out.reset()?;
        writeln!(self.out)
    }
}
