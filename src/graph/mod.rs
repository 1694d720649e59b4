//! Hierarchical graph projection
//!
//! Turns a [`crate::tree::DirTree`] into a node-per-entry, edge-per-relation
//! document with an orientation and spacing plan derived from the tree's
//! shape, ready for a layered graph renderer.

mod planner;
mod types;

pub use planner::{
    CANVAS_MARGIN, LEFT_RIGHT_LEVEL_SEPARATION, LEFT_RIGHT_NODE_SPACING, MAX_CANVAS_HEIGHT,
    PER_NODE_HEIGHT, TOP_DOWN_CANVAS_HEIGHT, TOP_DOWN_LEVEL_SEPARATION, TOP_DOWN_NODE_SPACING,
    WIDE_LEVEL_THRESHOLD, plan_graph,
};
pub use types::{GraphEdge, GraphModel, GraphNode, LayoutPlan, Orientation};
