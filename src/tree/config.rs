//! Configuration types for the size walker

/// Indent added per nesting level.
const DEFAULT_INDENT_UNIT: &str = "  ";

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Sort subdirectories by name. When false, the OS enumeration order is kept.
    pub sort_entries: bool,
    /// Prefix added to the indent each time the walk descends one level
    pub indent_unit: String,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            sort_entries: true,
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
        }
    }
}
