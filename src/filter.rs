//! Name-based rules deciding what gets descended into and what gets dumped.

use crate::error::SnapshotError;
use crate::options::{DEFAULT_OUTPUT_NAME, SnapshotOptions};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;
use std::path::Path;

/// Directory names that are listed in the tree but never traversed.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive match on the directory's own name.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Files that are listed in the tree but whose content is left out.
#[derive(Debug, Clone, Default)]
pub struct ContentSkipSet {
    extensions: BTreeSet<String>,
    names: BTreeSet<String>,
    globs: Option<GlobSet>,
}

impl ContentSkipSet {
    pub fn new(options: &SnapshotOptions) -> Result<Self, SnapshotError> {
        let mut names = options.skip_names.clone();
        names.insert(DEFAULT_OUTPUT_NAME.to_string());
        if let Some(output_name) = options.output.file_name() {
            names.insert(output_name.to_string_lossy().into_owned());
        }
        let globs = if options.skip_globs.is_empty() {
            None
        } else {
            let mut builder = GlobSetBuilder::new();
            for pattern in &options.skip_globs {
                let glob = Glob::new(pattern).map_err(|e| {
                    SnapshotError::Pattern(format!("Invalid glob pattern '{}': {}", pattern, e))
                })?;
                builder.add(glob);
            }
            Some(
                builder
                    .build()
                    .map_err(|e| {
                        SnapshotError::Pattern(format!("Failed to build glob set: {}", e))
                    })?,
            )
        };
        Ok(Self {
            extensions: options
                .skip_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
            names,
            globs,
        })
    }

    pub fn should_include(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };
        if self.names.contains(&*name) {
            return false;
        }
        if let Some(globs) = &self.globs {
            if globs.is_match(&*name) {
                return false;
            }
        }
        match path.extension() {
            Some(ext) => !self
                .extensions
                .contains(&ext.to_string_lossy().to_lowercase()),
            None => true,
        }
    }
}

/// Both rule sets, compiled once per run.
#[derive(Debug, Clone)]
pub struct SnapshotFilter {
    pub exclusions: ExclusionSet,
    pub content: ContentSkipSet,
}

impl SnapshotFilter {
    pub fn new(options: &SnapshotOptions) -> Result<Self, SnapshotError> {
        Ok(Self {
            exclusions: ExclusionSet::new(options.excluded_dirs.iter().cloned()),
            content: ContentSkipSet::new(options)?,
        })
    }
}
