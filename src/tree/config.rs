//! Configuration for tree walking

/// Name prefix marking hidden entries (files and directories alike).
pub const HIDDEN_PREFIX: char = '.';

/// Name prefix of transient office/editor lock files. Applies to files only;
/// a directory with this prefix is a regular directory.
pub const LOCK_FILE_PREFIX: &str = "~$";

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Disable hidden and lock-file filtering.
    pub show_all: bool,
    /// Sort each directory's children by name instead of keeping the raw
    /// listing order reported by the filesystem.
    pub sort_children: bool,
    /// Glob patterns excluding entries by name, applied even with `show_all`.
    pub ignore_patterns: Vec<String>,
}

impl WalkConfig {
    /// Whether an entry name should be excluded from the tree.
    ///
    /// `is_dir` matters because lock-file filtering never applies to
    /// directories.
    pub fn excludes(&self, name: &str, is_dir: bool) -> bool {
        if !self.show_all {
            if name.starts_with(HIDDEN_PREFIX) {
                return true;
            }
            if !is_dir && name.starts_with(LOCK_FILE_PREFIX) {
                return true;
            }
        }
        self.ignore_patterns
            .iter()
            .any(|pattern| name == pattern || glob_match(pattern, name))
    }
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    glob::Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
