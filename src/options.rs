use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// File name used for the snapshot when no output path is given.
pub const DEFAULT_OUTPUT_NAME: &str = "project_snapshot.txt";

/// Directories shown in the tree but never descended into.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".next",
    ".contentlayer",
    "node_modules",
    "dist",
    "build",
    "coverage",
    "__pycache__",
];

/// Extensions (lowercase, no dot) whose content is left out of the dump.
pub const DEFAULT_SKIP_EXTENSIONS: &[&str] = &[
    "pdf", "png", "jpg", "jpeg", "gif", "webp", "ico", "icns", "svg", "ttf", "otf", "woff",
    "woff2", "mp3", "mp4", "mov", "zip", "gz", "tar",
];

/// Order in which file contents are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentOrder {
    /// Work-list order: each popped directory emits its files, subdirectories
    /// are pushed and visited last-in first-out.
    #[default]
    Stack,
    /// Same order as the rendered tree: depth-first, directories first.
    Tree,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub excluded_dirs: BTreeSet<String>,
    pub skip_extensions: BTreeSet<String>,
    pub skip_names: BTreeSet<String>,
    pub skip_globs: Vec<String>,
    pub order: ContentOrder,
}
impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(".").join(DEFAULT_OUTPUT_NAME),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            skip_extensions: DEFAULT_SKIP_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            skip_names: BTreeSet::new(),
            skip_globs: Vec::new(),
            order: ContentOrder::Stack,
        }
    }
}
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    options: SnapshotOptions,
}
impl SnapshotBuilder {
    /// Starts from the defaults with the output placed at
    /// `<root>/project_snapshot.txt`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            options: SnapshotOptions {
                output: root.join(DEFAULT_OUTPUT_NAME),
                root,
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn exclude_dir(mut self, name: impl Into<String>) -> Self {
        self.options.excluded_dirs.insert(name.into());
        self
    }
    pub fn exclude_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options
            .excluded_dirs
            .extend(names.into_iter().map(Into::into));
        self
    }
    /// Accepts `png`, `.png` or `.PNG` alike.
    pub fn skip_extension(mut self, ext: impl AsRef<str>) -> Self {
        self.options.skip_extensions.insert(normalize_extension(ext.as_ref()));
        self
    }
    pub fn skip_extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in exts {
            self = self.skip_extension(ext);
        }
        self
    }
    pub fn skip_name(mut self, name: impl Into<String>) -> Self {
        self.options.skip_names.insert(name.into());
        self
    }
    pub fn skip_globs(mut self, patterns: Vec<String>) -> Self {
        self.options.skip_globs = patterns;
        self
    }
    pub fn order(mut self, order: ContentOrder) -> Self {
        self.options.order = order;
        self
    }
    pub fn build(self) -> SnapshotOptions {
        self.options
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}
