//! TreeWalker - builds the directory tree in memory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::config::WalkConfig;
use super::dir_tree::DirTree;

/// Errors aborting a tree walk.
///
/// Any directory that fails to read aborts the whole walk: a partial tree
/// would silently misrepresent the subtree to everything downstream.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The root (or a directory that vanished mid-walk) does not exist.
    #[error("directory not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A directory could not be read due to missing permissions.
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// The root path exists but is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Any other I/O failure while reading a directory.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => WalkError::NotFound { path },
            io::ErrorKind::PermissionDenied => WalkError::PermissionDenied { path },
            _ => WalkError::Io { path, source },
        }
    }
}

/// Walks a root directory into a [`DirTree`].
///
/// Traversal is pre-order and uses an explicit worklist rather than
/// recursion, so arbitrarily deep trees cannot overflow the stack. Symlinks
/// are listed as leaf children but never followed.
pub struct TreeWalker {
    config: WalkConfig,
}

impl TreeWalker {
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and every reachable subdirectory.
    ///
    /// The root is canonicalized first; a missing root fails with
    /// [`WalkError::NotFound`] and a non-directory root with
    /// [`WalkError::NotADirectory`] instead of producing an empty tree.
    pub fn walk(&self, root: &Path) -> Result<DirTree, WalkError> {
        let root = fs::canonicalize(root)
            .map_err(|e| WalkError::from_io(root.to_path_buf(), e))?;
        if !root.is_dir() {
            return Err(WalkError::NotADirectory { path: root });
        }

        let mut tree = DirTree::new(root.clone());
        let mut pending = vec![root];

        while let Some(dir) = pending.pop() {
            let (children, subdirs) = self.read_children(&dir)?;
            tree.insert(dir, children);
            // LIFO worklist: push in reverse so subdirectories pop in
            // children order, keeping the key order pre-order.
            pending.extend(subdirs.into_iter().rev());
        }

        Ok(tree)
    }

    /// One directory's filtered children plus the subdirectory paths to
    /// descend into, both in emission order.
    fn read_children(&self, dir: &Path) -> Result<(Vec<String>, Vec<PathBuf>), WalkError> {
        let reader =
            fs::read_dir(dir).map_err(|e| WalkError::from_io(dir.to_path_buf(), e))?;

        let mut listed = Vec::new();
        for entry in reader {
            let entry = entry.map_err(|e| WalkError::from_io(dir.to_path_buf(), e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            // file_type does not follow symlinks, so a symlinked directory
            // counts as a leaf and is never descended into.
            let is_dir = entry
                .file_type()
                .map_err(|e| WalkError::from_io(entry.path(), e))?
                .is_dir();
            if self.config.excludes(&name, is_dir) {
                continue;
            }
            listed.push((name, is_dir));
        }

        if self.config.sort_children {
            listed.sort_by(|a, b| a.0.cmp(&b.0));
        }

        let subdirs = listed
            .iter()
            .filter(|(_, is_dir)| *is_dir)
            .map(|(name, _)| dir.join(name))
            .collect();
        let children = listed.into_iter().map(|(name, _)| name).collect();
        Ok((children, subdirs))
    }
}
