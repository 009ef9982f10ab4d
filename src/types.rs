use crate::error::SnapshotError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// One child of a listed directory.
#[derive(Debug, Clone)]
pub struct FileSystemEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Whether the path is a regular file. Broken symlinks and special files
    /// are neither this nor a directory.
    pub is_file: bool,
}

impl FileSystemEntry {
    /// Lists the immediate children of `dir` in filesystem order.
    ///
    /// Symlinks are followed when classifying; anything that is not a
    /// directory is rendered as a file.
    pub fn list(dir: &Path) -> Result<Vec<Self>, SnapshotError> {
        let read_dir = fs::read_dir(dir).map_err(|e| SnapshotError::io(dir, e))?;
        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| SnapshotError::io(dir, e))?;
            let path = entry.path();
            let kind = if path.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(Self {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_file: path.is_file(),
                path,
                kind,
            });
        }
        Ok(entries)
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Sort key used by the tree view: non-files first, then by lowercased
    /// name.
    pub(crate) fn tree_key(&self) -> (bool, String) {
        (self.is_file, self.name.to_lowercase())
    }

    pub(crate) fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// The content block for one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSection {
    /// Path relative to the snapshot root.
    pub path: PathBuf,
    /// File text with trailing whitespace removed.
    pub content: String,
    /// Set when invalid UTF-8 was replaced with U+FFFD.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub lossy: bool,
}

/// The complete snapshot, ready to be rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDocument {
    /// Display lines of the tree view, without the header.
    pub tree: Vec<String>,
    /// Content blocks in emission order.
    pub files: Vec<FileSection>,
}

impl SnapshotDocument {
    /// Renders the plain-text snapshot:
    ///
    /// ```text
    /// Project structure:
    ///
    /// <tree lines>
    ///
    ///
    /// ======= <path> =======
    /// <content>
    ///
    /// ```
    pub fn render_text(&self) -> String {
        let mut sections: Vec<String> =
            Vec::with_capacity(self.tree.len() + self.files.len() * 3 + 4);
        sections.push("Project structure:".to_string());
        sections.push(String::new());
        sections.extend(self.tree.iter().cloned());
        sections.push(String::new());
        sections.push(String::new());
        for file in &self.files {
            sections.push(format!("======= {} =======", file.path.display()));
            sections.push(file.content.clone());
            sections.push(String::new());
        }
        sections.join("\n")
    }
}
