//! Persisting projection documents to disk
//!
//! Each export runs from a freshly acquired tree and returns the written
//! paths as an explicit [`ExportPaths`] value; a "refresh" is simply the
//! caller walking again and re-exporting. Existing files are overwritten so
//! the persisted documents always match the latest walk.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::graph::plan_graph;
use crate::output::{write_graph_json, write_placements_json};
use crate::tabular::project_placements;
use crate::tree::{DirTree, OutsideRootError};

/// Errors while writing projection documents.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Layout(#[from] OutsideRootError),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where a pipeline run persisted its documents. Held by the caller; there
/// is no process-wide record of past exports.
#[derive(Debug, Clone, Default)]
pub struct ExportPaths {
    pub tabular: Option<PathBuf>,
    pub graph: Option<PathBuf>,
}

/// File name for the tabular document of `tree`.
pub fn placements_file_name(tree: &DirTree) -> String {
    format!("folder_structure_{}.json", tree.root_label())
}

/// File name for the graph document of `tree`.
pub fn graph_file_name(tree: &DirTree) -> String {
    format!("tree_visualization_{}.json", tree.root_label())
}

fn write_file<F>(path: PathBuf, write: F) -> Result<PathBuf, ExportError>
where
    F: FnOnce(File) -> io::Result<()>,
{
    File::create(&path)
        .and_then(write)
        .map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

/// Write the tabular projection into `dest_dir`, returning the file path.
pub fn export_placements(tree: &DirTree, dest_dir: &Path) -> Result<PathBuf, ExportError> {
    let records = project_placements(tree)?;
    write_file(dest_dir.join(placements_file_name(tree)), |file| {
        write_placements_json(file, &records)
    })
}

/// Write the graph document into `dest_dir`, returning the file path.
pub fn export_graph(
    tree: &DirTree,
    dest_dir: &Path,
    wrap_width: usize,
) -> Result<PathBuf, ExportError> {
    let model = plan_graph(tree, wrap_width)?;
    write_file(dest_dir.join(graph_file_name(tree)), |file| {
        write_graph_json(file, &model)
    })
}

/// Write both projections into `dest_dir`.
pub fn export_all(
    tree: &DirTree,
    dest_dir: &Path,
    wrap_width: usize,
) -> Result<ExportPaths, ExportError> {
    Ok(ExportPaths {
        tabular: Some(export_placements(tree, dest_dir)?),
        graph: Some(export_graph(tree, dest_dir, wrap_width)?),
    })
}
