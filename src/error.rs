//! Errors reported while scanning a directory tree

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A failure scoped to one directory of the traversal.
///
/// These never abort a walk: the walker turns them into inline report lines
/// and moves on to the next sibling.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    /// Enumeration or sizing failed. Displays as the underlying I/O message.
    #[error("{source}")]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub fn access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Access {
            path: path.into(),
            source,
        }
    }

    /// Path of the directory the error belongs to.
    pub fn path(&self) -> &Path {
        match self {
            ScanError::NotFound { path } => path,
            ScanError::Access { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ScanError::NotFound {
            path: PathBuf::from("missing/dir"),
        };
        assert_eq!(err.to_string(), "missing/dir does not exist");
    }

    #[test]
    fn test_access_displays_io_message() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let err = ScanError::access("locked", source);
        assert_eq!(err.to_string(), "Permission denied");
        assert_eq!(err.path(), Path::new("locked"));
    }
}
