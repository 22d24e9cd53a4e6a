use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::common::relative_to;

/// Find regular files under `base` matching any of `patterns`.
///
/// Results are deduplicated and sorted by path. Files whose path relative to
/// `base` matches an `exclude` glob are dropped.
pub fn find_files(
    base: &Path,
    patterns: &[String],
    exclude: &[String],
) -> crate::Result<Vec<PathBuf>> {
    let excludes = exclude
        .iter()
        .map(|p| glob::Pattern::new(p))
        .collect::<Result<Vec<_>, _>>()?;

    let escaped_base = glob::Pattern::escape(&base.to_string_lossy());
    let mut found = BTreeSet::new();

    for pattern in patterns {
        let full = Path::new(&escaped_base).join(pattern);
        for entry in glob::glob(&full.to_string_lossy())? {
            match entry {
                Ok(path) => {
                    found.insert(path);
                }
                Err(e) => tracing::warn!("Skipping unreadable path: {}", e),
            }
        }
    }

    Ok(found
        .into_iter()
        .filter(|p| p.is_file())
        .filter(|p| {
            let rel = relative_to(p, base);
            !excludes.iter().any(|ex| ex.matches_path(&rel))
        })
        .collect())
}
