//! Sizetree - print a directory tree with the cumulative size of every subdirectory

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::ScanError;
pub use output::{OutputConfig, TreeFormatter};
pub use tree::{SizeWalker, TreeOutput, WalkSummary, WalkerConfig, format_megabytes, subtree_size};
