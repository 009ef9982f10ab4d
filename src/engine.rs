use crate::error::SnapshotError;
use crate::filter::SnapshotFilter;
use crate::options::{ContentOrder, SnapshotOptions};
use crate::output::{self, OutputFormat};
use crate::tree::build_tree_lines;
use crate::types::{FileSection, FileSystemEntry, SnapshotDocument};
use std::fs;
use std::path::{Path, PathBuf};
use std::vec;

enum Cursor {
    Stack {
        dirs: Vec<PathBuf>,
        files: vec::IntoIter<PathBuf>,
    },
    Tree {
        frames: Vec<vec::IntoIter<FileSystemEntry>>,
    },
}

/// Lazily yields the files whose content belongs in the snapshot.
///
/// Directories are listed only when the traversal reaches them. To start
/// over, build a new `ContentFiles`.
pub struct ContentFiles {
    filter: SnapshotFilter,
    cursor: Cursor,
    pending: Option<PathBuf>,
}

impl ContentFiles {
    pub fn new(options: &SnapshotOptions) -> Result<Self, SnapshotError> {
        let filter = SnapshotFilter::new(options)?;
        Ok(Self::with_filter(&options.root, filter, options.order))
    }

    pub(crate) fn with_filter(root: &Path, filter: SnapshotFilter, order: ContentOrder) -> Self {
        let (cursor, pending) = match order {
            ContentOrder::Stack => (
                Cursor::Stack {
                    dirs: vec![root.to_path_buf()],
                    files: Vec::new().into_iter(),
                },
                None,
            ),
            ContentOrder::Tree => (
                Cursor::Tree { frames: Vec::new() },
                Some(root.to_path_buf()),
            ),
        };
        Self {
            filter,
            cursor,
            pending,
        }
    }

    fn next_stack(&mut self) -> Option<Result<PathBuf, SnapshotError>> {
        let Cursor::Stack { dirs, files } = &mut self.cursor else {
            return None;
        };
        loop {
            if let Some(file) = files.next() {
                return Some(Ok(file));
            }
            let current = dirs.pop()?;
            let mut entries = match FileSystemEntry::list(&current) {
                Ok(entries) => entries,
                Err(e) => return Some(Err(e)),
            };
            entries.sort_by_cached_key(FileSystemEntry::name_key);
            let mut included = Vec::new();
            for entry in entries {
                if entry.is_dir() {
                    if !self.filter.exclusions.is_excluded(&entry.name) {
                        dirs.push(entry.path);
                    }
                } else if self.filter.content.should_include(&entry.path) {
                    included.push(entry.path);
                }
            }
            *files = included.into_iter();
        }
    }

    fn next_tree(&mut self) -> Option<Result<PathBuf, SnapshotError>> {
        let Cursor::Tree { frames } = &mut self.cursor else {
            return None;
        };
        loop {
            if let Some(dir) = self.pending.take() {
                let mut entries = match FileSystemEntry::list(&dir) {
                    Ok(entries) => entries,
                    Err(e) => return Some(Err(e)),
                };
                entries.sort_by_cached_key(FileSystemEntry::tree_key);
                frames.push(entries.into_iter());
            }
            let frame = frames.last_mut()?;
            match frame.next() {
                Some(entry) if entry.is_dir() => {
                    if !self.filter.exclusions.is_excluded(&entry.name) {
                        self.pending = Some(entry.path);
                    }
                }
                Some(entry) => {
                    if self.filter.content.should_include(&entry.path) {
                        return Some(Ok(entry.path));
                    }
                }
                None => {
                    frames.pop();
                }
            }
        }
    }
}

impl Iterator for ContentFiles {
    type Item = Result<PathBuf, SnapshotError>;
    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor {
            Cursor::Stack { .. } => self.next_stack(),
            Cursor::Tree { .. } => self.next_tree(),
        }
    }
}

/// Reads a file as UTF-8 text.
///
/// Invalid byte sequences are replaced with U+FFFD instead of failing; the
/// returned flag tells whether that happened. Line endings are normalized to
/// `\n`.
pub fn read_file_content(path: &Path) -> Result<(String, bool), SnapshotError> {
    let bytes = fs::read(path).map_err(|e| SnapshotError::io(path, e))?;
    let (text, lossy) = match String::from_utf8(bytes) {
        Ok(text) => (text, false),
        Err(e) => {
            tracing::info!("Invalid UTF-8 in {}, decoding lossily", path.display());
            (String::from_utf8_lossy(e.as_bytes()).into_owned(), true)
        }
    };
    Ok((normalize_newlines(text), lossy))
}

fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Checks that `root` is an existing directory and returns its canonical form.
pub fn resolve_root(root: &Path) -> Result<PathBuf, SnapshotError> {
    let absolute = std::path::absolute(root).map_err(|e| SnapshotError::io(root, e))?;
    if !absolute.is_dir() {
        return Err(SnapshotError::InvalidRoot { path: absolute });
    }
    fs::canonicalize(&absolute).map_err(|e| SnapshotError::io(&absolute, e))
}

/// Builds the snapshot document for `options.root` without writing anything.
pub fn snapshot(options: &SnapshotOptions) -> Result<SnapshotDocument, SnapshotError> {
    tracing::debug!("Starting snapshot with root: {}", options.root.display());
    let root = resolve_root(&options.root)?;
    let filter = SnapshotFilter::new(options)?;
    let tree = build_tree_lines(&root, "", &filter.exclusions)?;

    let mut files = Vec::new();
    for path in ContentFiles::with_filter(&root, filter, options.order) {
        let path = path?;
        tracing::debug!("Reading {}", path.display());
        let (content, lossy) = read_file_content(&path)?;
        let relative = path.strip_prefix(&root).unwrap_or(&path).to_path_buf();
        files.push(FileSection {
            path: relative,
            content: content.trim_end().to_string(),
            lossy,
        });
    }
    Ok(SnapshotDocument { tree, files })
}

/// Builds the snapshot and writes it to `options.output`, replacing any
/// previous file. Returns the absolute output path.
pub fn write_snapshot(
    options: &SnapshotOptions,
    format: OutputFormat,
) -> Result<PathBuf, SnapshotError> {
    let output_path =
        std::path::absolute(&options.output).map_err(|e| SnapshotError::io(&options.output, e))?;
    let document = snapshot(options)?;
    output::write_document_to_file(&document, format, &output_path)?;
    tracing::info!(
        "Wrote {} file sections to {}",
        document.files.len(),
        output_path.display()
    );
    Ok(output_path)
}
