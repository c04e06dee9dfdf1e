//! Report formatting and display

mod config;
mod formatter;

pub use config::OutputConfig;
pub use formatter::TreeFormatter;
