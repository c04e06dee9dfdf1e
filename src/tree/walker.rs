//! SizeWalker - prints every subdirectory with its cumulative size

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

use super::config::WalkerConfig;
use super::size::subtree_size;

/// Callback for walker output - receives one event per report line.
pub trait TreeOutput {
    /// A subdirectory and the total size of its subtree.
    fn directory(&mut self, name: &str, bytes: u64, indent: &str) -> io::Result<()>;

    /// A directory that could not be found, listed or sized.
    fn error(&mut self, err: &ScanError, indent: &str) -> io::Result<()>;
}

/// Counters gathered over one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub errors: usize,
}

/// One directory found while listing its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Subdir {
    name: String,
    path: PathBuf,
    /// Reached through a symlink; sized from its target but never descended
    is_link: bool,
}

/// Result of listing one directory.
///
/// A listing that fails partway keeps the subdirectories read before the
/// failure; they are reported first and the error line follows them.
#[derive(Debug)]
struct Listing {
    subdirs: Vec<Subdir>,
    error: Option<io::Error>,
}

/// Pending work on the explicit traversal stack.
#[derive(Debug)]
enum Work {
    /// List the subdirectories of `path`; their lines get `indent`.
    List { path: PathBuf, indent: String },
    /// Size one subdirectory, report it, then queue its own listing.
    Child { subdir: Subdir, indent: String },
    /// Report a listing failure once the siblings read before it are done.
    Failed { error: ScanError, indent: String },
}

/// Depth-first walker over subdirectories.
///
/// Files are never reported on their own; they only count toward the size of
/// every directory above them. Failures are reported through the output and
/// never stop the walk. Only errors writing to the output are returned.
pub struct SizeWalker {
    config: WalkerConfig,
}

impl SizeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root`, reporting its subdirectories at the top level.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> io::Result<WalkSummary> {
        self.walk_with_indent(root, "", output)
    }

    /// Walk `root`, reporting its subdirectories with `indent` in front.
    pub fn walk_with_indent<O: TreeOutput>(
        &self,
        root: &Path,
        indent: &str,
        output: &mut O,
    ) -> io::Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        let mut stack = vec![Work::List {
            path: root.to_path_buf(),
            indent: indent.to_string(),
        }];

        while let Some(work) = stack.pop() {
            match work {
                Work::List { path, indent } => {
                    self.list(path, indent, &mut stack, &mut summary, output)?
                }
                Work::Child { subdir, indent } => {
                    self.visit_child(subdir, indent, &mut stack, &mut summary, output)?
                }
                Work::Failed { error, indent } => {
                    summary.errors += 1;
                    output.error(&error, &indent)?
                }
            }
        }

        Ok(summary)
    }

    fn list<O: TreeOutput>(
        &self,
        path: PathBuf,
        indent: String,
        stack: &mut Vec<Work>,
        summary: &mut WalkSummary,
        output: &mut O,
    ) -> io::Result<()> {
        log::debug!("listing {}", path.display());

        if !path.exists() {
            summary.errors += 1;
            return output.error(&ScanError::NotFound { path }, &indent);
        }

        let listing = match fs::read_dir(&path) {
            Ok(entries) => collect_listing(entries.map(classify_entry), self.config.sort_entries),
            Err(e) => Listing {
                subdirs: Vec::new(),
                error: Some(e),
            },
        };

        schedule(listing, &path, &indent, stack);
        Ok(())
    }

    fn visit_child<O: TreeOutput>(
        &self,
        subdir: Subdir,
        indent: String,
        stack: &mut Vec<Work>,
        summary: &mut WalkSummary,
        output: &mut O,
    ) -> io::Result<()> {
        let Subdir { name, path, is_link } = subdir;

        let size = if is_link {
            fs::canonicalize(&path).and_then(|target| subtree_size(&target))
        } else {
            subtree_size(&path)
        };

        match size {
            Ok(bytes) => {
                summary.directories += 1;
                output.directory(&name, bytes, &indent)?;
                if !is_link {
                    let child_indent = format!("{}{}", indent, self.config.indent_unit);
                    stack.push(Work::List {
                        path,
                        indent: child_indent,
                    });
                }
                Ok(())
            }
            Err(e) => {
                log::warn!("cannot size {}: {}", path.display(), e);
                summary.errors += 1;
                output.error(&ScanError::access(path, e), &indent)
            }
        }
    }
}

impl Default for SizeWalker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}

/// Turn a raw entry into a `Subdir`, or `None` when it is not a directory.
/// Symlinks are followed to decide, so a link to a directory counts as one.
fn classify_entry(entry: io::Result<fs::DirEntry>) -> io::Result<Option<Subdir>> {
    let entry = entry?;
    let is_link = entry.file_type()?.is_symlink();
    let path = entry.path();
    if !path.is_dir() {
        return Ok(None);
    }
    Ok(Some(Subdir {
        name: entry.file_name().to_string_lossy().to_string(),
        path,
        is_link,
    }))
}

/// Gather subdirectories until the first failure.
fn collect_listing<I>(entries: I, sort: bool) -> Listing
where
    I: IntoIterator<Item = io::Result<Option<Subdir>>>,
{
    let mut subdirs = Vec::new();
    let mut error = None;
    for entry in entries {
        match entry {
            Ok(Some(subdir)) => subdirs.push(subdir),
            Ok(None) => {}
            Err(e) => {
                error = Some(e);
                break;
            }
        }
    }

    if sort {
        subdirs.sort_by(|a, b| a.name.cmp(&b.name));
    }
    Listing { subdirs, error }
}

/// Push a listing onto the stack so its children pop in order, then its error.
fn schedule(listing: Listing, path: &Path, indent: &str, stack: &mut Vec<Work>) {
    if let Some(e) = listing.error {
        log::warn!("cannot list {}: {}", path.display(), e);
        stack.push(Work::Failed {
            error: ScanError::access(path, e),
            indent: indent.to_string(),
        });
    }

    // Reversed so the first child is popped first
    for subdir in listing.subdirs.into_iter().rev() {
        stack.push(Work::Child {
            subdir,
            indent: indent.to_string(),
        });
    }
}
