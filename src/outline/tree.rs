//! Directory tree rendering.
//!
//! Renders an arbitrary directory (a role's `files/` or `templates/`) as an
//! indented tree: subdirectories first, each fully expanded, then files.
//! Both groups are sorted by name.

use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use crate::error::{OutlineError, OutlineResult};

/// Indentation per nesting level.
pub const INDENT: &str = "  ";

/// Marker in front of directory lines.
pub const DIRECTORY_MARKER: &str = "📁";

/// Marker in front of file lines.
pub const FILE_MARKER: &str = "📄";

/// Indentation for the given nesting depth.
pub fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Kind of a rendered tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Directory,
    File,
}

/// One line of a rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeLine {
    /// Nesting depth of the line
    pub depth: usize,

    /// Whether the node is a directory or a file
    pub kind: NodeKind,

    /// Entry name (not the full path)
    pub name: String,
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            NodeKind::Directory => DIRECTORY_MARKER,
            NodeKind::File => FILE_MARKER,
        };
        write!(f, "{}{} {}", indent(self.depth), marker, self.name)
    }
}

/// Render `directory` as a tree whose top line sits at `depth`.
///
/// Fails with [`OutlineError::NotADirectory`] if `directory` is missing or
/// is not a directory. Directory listings are read lazily as the iterator
/// advances. Symlinks are followed; a link back to an ancestor ends the
/// tree with an [`OutlineError::Io`].
pub fn render(directory: &Path, depth: usize) -> OutlineResult<TreeLines> {
    if !directory.is_dir() {
        return Err(OutlineError::NotADirectory(directory.to_path_buf()));
    }

    let walker = WalkDir::new(directory).follow_links(true).sort_by(directories_first).into_iter();
    Ok(TreeLines { walker, root: directory.to_path_buf(), depth, done: false })
}

/// Directories before files, then by name.
fn directories_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.file_type()
        .is_dir()
        .cmp(&a.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Lazily produced lines of a directory tree.
#[derive(Debug)]
pub struct TreeLines {
    walker: walkdir::IntoIter,

    /// Directory being rendered
    root: PathBuf,

    /// Depth of the top line
    depth: usize,

    /// Set after the first error
    done: bool,
}

impl Iterator for TreeLines {
    type Item = OutlineResult<TreeLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.walker.next()? {
            Ok(entry) => {
                let kind =
                    if entry.file_type().is_dir() { NodeKind::Directory } else { NodeKind::File };
                Some(Ok(TreeLine {
                    depth: self.depth + entry.depth(),
                    kind,
                    name: entry.file_name().to_string_lossy().into_owned(),
                }))
            }
            Err(e) => {
                self.done = true;
                Some(Err(walk_error(&self.root, e)))
            }
        }
    }
}

fn walk_error(root: &Path, error: walkdir::Error) -> OutlineError {
    let path = error.path().unwrap_or(root).to_path_buf();
    let message = error.to_string();
    let source = error.into_io_error().unwrap_or_else(|| io::Error::other(message));
    OutlineError::io(path, source)
}
