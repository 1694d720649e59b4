//! Graph layout planning: nodes, edges and shape-derived spacing

use std::collections::BTreeMap;

use crate::label::wrap_label;
use crate::tree::{DirTree, OutsideRootError};

use super::types::{GraphEdge, GraphModel, GraphNode, LayoutPlan, Orientation};

/// Widest level allowed before the layout rotates to left-right. Wide
/// shallow trees overflow screen width top-down, so width becomes the
/// scroll axis instead.
pub const WIDE_LEVEL_THRESHOLD: usize = 15;

pub const TOP_DOWN_LEVEL_SEPARATION: u32 = 220;
pub const TOP_DOWN_NODE_SPACING: u32 = 480;
/// Top-down canvases keep a fixed height; depth scrolls vertically.
pub const TOP_DOWN_CANVAS_HEIGHT: u32 = 1000;

pub const LEFT_RIGHT_LEVEL_SEPARATION: u32 = 320;
pub const LEFT_RIGHT_NODE_SPACING: u32 = 160;
/// Estimated vertical room per node in a left-right layout.
pub const PER_NODE_HEIGHT: u32 = 40;
pub const CANVAS_MARGIN: u32 = 300;
/// Ceiling on the estimated canvas height, bounding output size.
pub const MAX_CANVAS_HEIGHT: u32 = 6000;

impl LayoutPlan {
    /// Choose orientation and spacing for a tree whose widest level holds
    /// `widest_level` nodes.
    pub fn for_widest_level(widest_level: usize) -> Self {
        if widest_level > WIDE_LEVEL_THRESHOLD {
            let estimated = (widest_level as u32).saturating_mul(PER_NODE_HEIGHT) + CANVAS_MARGIN;
            LayoutPlan {
                orientation: Orientation::LeftRight,
                level_separation: LEFT_RIGHT_LEVEL_SEPARATION,
                node_spacing: LEFT_RIGHT_NODE_SPACING,
                estimated_height: estimated.min(MAX_CANVAS_HEIGHT),
            }
        } else {
            LayoutPlan {
                orientation: Orientation::TopDown,
                level_separation: TOP_DOWN_LEVEL_SEPARATION,
                node_spacing: TOP_DOWN_NODE_SPACING,
                estimated_height: TOP_DOWN_CANVAS_HEIGHT,
            }
        }
    }
}

/// Project a tree into a graph document: one node per entry, one edge per
/// parent/child relation, plus a [`LayoutPlan`] derived from the per-level
/// node counts.
///
/// Node ids are the entries' absolute paths, unique by construction: every
/// entry is some directory's child exactly once, and the root is added up
/// front. Every non-root node therefore carries exactly one incoming edge.
pub fn plan_graph(tree: &DirTree, wrap_width: usize) -> Result<GraphModel, OutsideRootError> {
    let mut nodes = vec![GraphNode {
        id: tree.root().to_string_lossy().into_owned(),
        label: wrap_label(&tree.root_label(), wrap_width).join("\n"),
        level: 0,
    }];
    let mut edges = Vec::new();

    for (dir, children) in tree.entries() {
        let dir_id = dir.to_string_lossy().into_owned();
        for name in children {
            let child = dir.join(name);
            let level = tree.depth(&child)?;
            nodes.push(GraphNode {
                id: child.to_string_lossy().into_owned(),
                label: wrap_label(name, wrap_width).join("\n"),
                level,
            });
            edges.push(GraphEdge {
                from: dir_id.clone(),
                to: child.to_string_lossy().into_owned(),
            });
        }
    }

    let mut level_counts: BTreeMap<usize, usize> = BTreeMap::new();
    for node in &nodes {
        *level_counts.entry(node.level).or_insert(0) += 1;
    }
    let widest_level = level_counts.values().copied().max().unwrap_or(0);

    Ok(GraphModel {
        nodes,
        edges,
        plan: LayoutPlan::for_widest_level(widest_level),
    })
}
