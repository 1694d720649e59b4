//! Trellis - project a directory tree into spreadsheet placements and a
//! hierarchical graph layout

pub mod export;
pub mod graph;
pub mod label;
pub mod output;
pub mod tabular;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use export::{ExportError, ExportPaths, export_all, export_graph, export_placements};
pub use graph::{GraphEdge, GraphModel, GraphNode, LayoutPlan, Orientation, plan_graph};
pub use label::{DEFAULT_WRAP_WIDTH, wrap_label};
pub use output::{print_graph_json, print_placements, print_placements_json};
pub use tabular::{PlacementRecord, project_placements};
pub use tree::{DirTree, OutsideRootError, TreeWalker, WalkConfig, WalkError};
