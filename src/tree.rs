//! Builds the `tree`-style listing shown at the top of a snapshot.

use crate::error::SnapshotError;
use crate::filter::ExclusionSet;
use crate::types::FileSystemEntry;
use std::path::Path;

const BRANCH: &str = "├── ";
const LAST: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// Returns one display line per descendant of `dir`, each starting with
/// `prefix`.
///
/// Entries are ordered directories first, then by lowercased name. Excluded
/// directories are rendered with a ` [skipped]` suffix and not descended into.
///
/// # Errors
///
/// Returns [`SnapshotError::Io`] if any directory cannot be listed.
pub fn build_tree_lines(
    dir: &Path,
    prefix: &str,
    exclusions: &ExclusionSet,
) -> Result<Vec<String>, SnapshotError> {
    let mut entries = FileSystemEntry::list(dir)?;
    entries.sort_by_cached_key(FileSystemEntry::tree_key);

    let mut lines = Vec::with_capacity(entries.len());
    let count = entries.len();
    for (index, entry) in entries.into_iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { LAST } else { BRANCH };
        let line = format!("{}{}{}", prefix, connector, entry.name);

        if !entry.is_dir() {
            lines.push(line);
            continue;
        }
        if exclusions.is_excluded(&entry.name) {
            tracing::debug!("Skipping excluded directory: {}", entry.path.display());
            lines.push(format!("{} [skipped]", line));
            continue;
        }
        lines.push(line);
        let continuation = if is_last { BLANK } else { PIPE };
        lines.extend(build_tree_lines(
            &entry.path,
            &format!("{}{}", prefix, continuation),
            exclusions,
        )?);
    }
    Ok(lines)
}
