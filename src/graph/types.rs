//! Serializable graph document types
//!
//! The document shape matches what a hierarchical renderer consumes:
//! `{nodes, edges, orientation, levelSeparation, nodeSpacing,
//! estimatedHeight}`, with `level` driving layered placement and
//! `orientation` the layout direction.

use serde::Serialize;

/// One entry of the tree as a graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    /// Normalized absolute path; unique across the graph.
    pub id: String,
    /// Wrapped display label, lines joined with `\n`.
    pub label: String,
    /// Depth from the root (root = 0).
    pub level: usize,
}

/// A parent-to-child relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

/// Layout direction for the rendered hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    /// Levels stack vertically; suits narrow, deep trees.
    TopDown,
    /// Levels run horizontally so a wide level scrolls instead of
    /// overflowing the screen width.
    LeftRight,
}

/// Spacing and sizing parameters derived from the tree's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPlan {
    pub orientation: Orientation,
    pub level_separation: u32,
    pub node_spacing: u32,
    pub estimated_height: u32,
}

/// The full graph document handed to a rendering sink.
#[derive(Debug, Clone, Serialize)]
pub struct GraphModel {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    #[serde(flatten)]
    pub plan: LayoutPlan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_flattens_plan_fields() {
        let model = GraphModel {
            nodes: vec![GraphNode {
                id: "/r".to_string(),
                label: "r".to_string(),
                level: 0,
            }],
            edges: Vec::new(),
            plan: LayoutPlan {
                orientation: Orientation::TopDown,
                level_separation: 220,
                node_spacing: 480,
                estimated_height: 1000,
            },
        };
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["orientation"], "TopDown");
        assert_eq!(json["levelSeparation"], 220);
        assert_eq!(json["nodeSpacing"], 480);
        assert_eq!(json["estimatedHeight"], 1000);
        assert_eq!(json["nodes"][0]["id"], "/r");
        assert_eq!(json["nodes"][0]["level"], 0);
    }
}
