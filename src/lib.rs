//! # Snaptree
//!
//! `snaptree` captures a project directory as a single text document: a
//! `tree`-style view of the whole hierarchy followed by the contents of every
//! text file, each under a `======= <path> =======` header.
//!
//! Some directories (`node_modules`, `.git`, build output, ...) are listed in
//! the tree with a `[skipped]` marker but never descended into. Binary assets
//! such as images, fonts and archives stay in the tree but their content is
//! left out. Files that are not valid UTF-8 are decoded lossily.
//!
//! # Example
//!
//! ```no_run
//! use snaptree::{ContentOrder, OutputFormat, SnapshotBuilder, write_snapshot};
//!
//! let options = SnapshotBuilder::new(".")
//!     .exclude_dir("target")
//!     .skip_extension("lock")
//!     .order(ContentOrder::Stack)
//!     .build();
//!
//! let written = write_snapshot(&options, OutputFormat::Text).expect("Failed to write snapshot");
//! println!("Snapshot written to {}", written.display());
//! ```

mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{ContentFiles, read_file_content, resolve_root, snapshot, write_snapshot};
pub use error::SnapshotError;
pub use filter::{ContentSkipSet, ExclusionSet, SnapshotFilter};
pub use options::{
    ContentOrder, DEFAULT_EXCLUDED_DIRS, DEFAULT_OUTPUT_NAME, DEFAULT_SKIP_EXTENSIONS,
    SnapshotBuilder, SnapshotOptions,
};
pub use output::OutputFormat;
pub use tree::build_tree_lines;
pub use types::{EntryKind, FileSection, FileSystemEntry, SnapshotDocument};
