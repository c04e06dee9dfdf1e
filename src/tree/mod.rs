//! Directory tree walking and size aggregation
//!
//! `SizeWalker` visits every subdirectory depth-first and hands each one,
//! with the size of its whole subtree, to a `TreeOutput`.

mod config;
mod size;
mod walker;

pub use config::WalkerConfig;
pub use size::{format_megabytes, subtree_size};
pub use walker::{SizeWalker, TreeOutput, WalkSummary};
