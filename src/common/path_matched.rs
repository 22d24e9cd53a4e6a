//! Path-matching trait for documents scoped to file patterns.
//!
//! Instruction documents declare an `applyTo` glob list; the assistant reads
//! an instruction only while working on a file it matches.

use std::path::Path;

/// Trait for documents that support path-based filtering.
pub trait PathMatched {
    /// Get the glob patterns this entry matches.
    ///
    /// Returns `None` if the entry is global and matches every file.
    /// Returns `Some(&[])` if no patterns were declared (matches nothing).
    fn path_patterns(&self) -> Option<&[String]>;

    /// Check if this entry matches the given file path.
    ///
    /// Default behavior:
    /// - No patterns (`None`) → matches all files
    /// - Empty patterns → matches no files
    /// - Has patterns → matches if any pattern matches
    fn matches_path(&self, path: &Path) -> bool {
        match self.path_patterns() {
            None => true,
            Some(patterns) => {
                let path_str = path.to_string_lossy();
                patterns.iter().any(|p| glob_match(p, &path_str))
            }
        }
    }

    fn is_global(&self) -> bool {
        self.path_patterns().is_none()
    }
}

/// Match a glob against a path string, falling back to substring match
/// for patterns that do not compile.
pub fn glob_match(pattern: &str, path: &str) -> bool {
    let options = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    glob::Pattern::new(pattern)
        .map(|p| p.matches_with(path, options))
        .unwrap_or_else(|_| path.contains(pattern))
}
