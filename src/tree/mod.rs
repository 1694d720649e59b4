//! Directory tree acquisition
//!
//! [`TreeWalker`] turns a root directory into a [`DirTree`]: an ordered
//! mapping from each directory to its immediate child names, built once per
//! invocation and consumed read-only by the projections.

mod config;
mod dir_tree;
mod walker;

pub use config::{HIDDEN_PREFIX, LOCK_FILE_PREFIX, WalkConfig, glob_match};
pub use dir_tree::{DirTree, OutsideRootError};
pub use walker::{TreeWalker, WalkError};
