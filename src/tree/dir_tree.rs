//! The in-memory tree aggregate produced by a walk

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;

/// A path handed to a projection was not under the tree's root.
///
/// Trees only ever contain paths built by joining child names onto the root,
/// so hitting this means a caller mixed paths from different trees. It is a
/// logic error, not a recoverable condition.
#[derive(Debug, Clone, Error)]
#[error("path {} is not under root {}", path.display(), root.display())]
pub struct OutsideRootError {
    pub path: PathBuf,
    pub root: PathBuf,
}

/// An ordered mapping from directory path to its immediate child names.
///
/// Keys appear in pre-order: a directory always precedes its descendants.
/// Children interleave file and subdirectory names in listing order (or
/// sorted order, when the walk was configured to sort). Whether a child is
/// itself a directory is determined by key membership: subdirectories have
/// their own entry, files do not.
#[derive(Debug, Clone)]
pub struct DirTree {
    root: PathBuf,
    entries: IndexMap<PathBuf, Vec<String>>,
}

impl DirTree {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            root,
            entries: IndexMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, dir: PathBuf, children: Vec<String>) {
        self.entries.insert(dir, children);
    }

    /// The normalized absolute root the tree was walked from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Display label for the root: its basename, or `"root"` for paths
    /// without one (e.g. `/`).
    pub fn root_label(&self) -> String {
        self.root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "root".to_string())
    }

    /// Iterate directories in pre-order, each with its ordered children.
    pub fn entries(&self) -> impl Iterator<Item = (&Path, &[String])> {
        self.entries
            .iter()
            .map(|(path, children)| (path.as_path(), children.as_slice()))
    }

    /// Children of `dir`, or `None` if `dir` is not a directory in this tree.
    pub fn children(&self, dir: &Path) -> Option<&[String]> {
        self.entries.get(dir).map(Vec::as_slice)
    }

    /// Whether `path` is one of the tree's directories.
    pub fn contains_dir(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Whether the child `name` of `dir` is a subdirectory (as opposed to a
    /// file).
    pub fn is_dir_child(&self, dir: &Path, name: &str) -> bool {
        self.entries.contains_key(&dir.join(name))
    }

    /// Nesting depth of `path` relative to the root (root = 0, its children
    /// = 1, and so on).
    pub fn depth(&self, path: &Path) -> Result<usize, OutsideRootError> {
        path.strip_prefix(&self.root)
            .map(|relative| relative.components().count())
            .map_err(|_| OutsideRootError {
                path: path.to_path_buf(),
                root: self.root.clone(),
            })
    }

    /// Number of directories in the tree, the root included.
    pub fn dir_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of file children across all directories.
    pub fn file_count(&self) -> usize {
        self.entries()
            .map(|(dir, children)| {
                children
                    .iter()
                    .filter(|name| !self.is_dir_child(dir, name))
                    .count()
            })
            .sum()
    }
}
