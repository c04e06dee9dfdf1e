//! Subtree size computation

use std::fs;
use std::io;
use std::path::Path;

use ignore::WalkBuilder;

const MB: u64 = 1024 * 1024;

/// Sum the byte length of every regular file below `root`, at any depth.
///
/// Every ignore rule is disabled so hidden and gitignored files are counted.
/// Symlinked directories are not descended. A symlink to a file counts the
/// target's length, and a dangling symlink fails the whole computation.
/// Directories that cannot be listed are skipped.
pub fn subtree_size(root: &Path) -> io::Result<u64> {
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .parents(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .build();

    let mut total: u64 = 0;
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                log::debug!("skipping unreadable entry under {}: {}", root.display(), err);
                continue;
            }
        };

        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }

        // Follows symlinks, so a dangling link surfaces as an error here
        let meta = fs::metadata(entry.path())?;
        if meta.is_file() {
            total = total.saturating_add(meta.len());
        }
    }

    Ok(total)
}

/// Format a byte count as megabytes with two decimals, e.g. `2.00`.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / MB as f64)
}
