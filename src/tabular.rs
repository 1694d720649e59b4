//! Tabular projection: nesting rendered as column indentation
//!
//! Each directory becomes an emphasized header row at a column equal to its
//! depth; each file becomes a plain row one column further in. The output is
//! sink-agnostic: any spreadsheet-like writer that preserves row/column
//! positions can consume it.

use serde::Serialize;

use crate::tree::{DirTree, OutsideRootError};

/// One positioned cell of the tabular layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementRecord {
    pub row: usize,
    pub column: usize,
    pub label: String,
    /// Folder headers are emphasized (rendered bold); file rows are not.
    pub emphasized: bool,
}

/// Project a tree into its ordered placement records.
///
/// Row 0 is always the root label. Directories are processed in the tree's
/// pre-order key order, so every directory's header row precedes all of its
/// descendants' rows and rows increase by exactly one per record.
pub fn project_placements(tree: &DirTree) -> Result<Vec<PlacementRecord>, OutsideRootError> {
    let mut records = vec![PlacementRecord {
        row: 0,
        column: 0,
        label: tree.root_label(),
        emphasized: true,
    }];

    for (dir, children) in tree.entries() {
        let depth = tree.depth(dir)?;
        if dir != tree.root() {
            let label = dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            records.push(PlacementRecord {
                row: records.len(),
                column: depth,
                label,
                emphasized: true,
            });
        }
        for name in children {
            if tree.is_dir_child(dir, name) {
                continue; // subdirectories get their own header row
            }
            records.push(PlacementRecord {
                row: records.len(),
                column: depth + 1,
                label: name.clone(),
                emphasized: false,
            });
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;
    use crate::tree::{TreeWalker, WalkConfig};

    fn walk_sorted(fixture: &TestTree) -> DirTree {
        TreeWalker::new(WalkConfig {
            sort_children: true,
            ..Default::default()
        })
        .walk(fixture.path())
        .unwrap()
    }

    #[test]
    fn nested_tree_places_rows_and_columns() {
        let fixture = TestTree::new();
        fixture.file("a/x.txt", "");
        fixture.file("y.txt", "");

        let tree = walk_sorted(&fixture);
        let records = project_placements(&tree).unwrap();
        let summary: Vec<_> = records
            .iter()
            .map(|r| (r.row, r.column, r.label.as_str(), r.emphasized))
            .collect();

        assert_eq!(
            summary,
            vec![
                (0, 0, tree.root_label().as_str(), true),
                (1, 1, "y.txt", false),
                (2, 1, "a", true),
                (3, 2, "x.txt", false),
            ]
        );
    }

    #[test]
    fn rows_increase_by_one_and_columns_track_depth() {
        let fixture = TestTree::new();
        fixture.file("a/b/c/deep.txt", "");
        fixture.file("a/b/mid.txt", "");
        fixture.file("a/shallow.txt", "");
        fixture.file("top.txt", "");

        let tree = walk_sorted(&fixture);
        let records = project_placements(&tree).unwrap();

        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.row, i);
        }
        // Columns never skip a nesting level on the way down.
        for pair in records.windows(2) {
            assert!(pair[1].column <= pair[0].column + 1);
        }
        assert_eq!(records[0].column, 0);
        assert!(records.iter().skip(1).all(|r| r.column >= 1));

        let columns: Vec<_> = records.iter().map(|r| (r.label.clone(), r.column)).collect();
        let expected = [
            ("a", 1),
            ("b", 2),
            ("c", 3),
            ("deep.txt", 4),
            ("mid.txt", 3),
            ("shallow.txt", 2),
            ("top.txt", 1),
        ];
        for (label, column) in expected {
            assert!(
                columns.contains(&(label.to_string(), column)),
                "missing {label} at column {column} in {columns:?}"
            );
        }
    }

    #[test]
    fn directory_rows_precede_their_descendants() {
        let fixture = TestTree::new();
        fixture.file("outer/inner/leaf.txt", "");

        let tree = walk_sorted(&fixture);
        let records = project_placements(&tree).unwrap();
        let row_of = |label: &str| {
            records
                .iter()
                .find(|r| r.label == label)
                .map(|r| r.row)
                .unwrap()
        };

        assert!(row_of("outer") < row_of("inner"));
        assert!(row_of("inner") < row_of("leaf.txt"));
    }

    #[test]
    fn empty_root_projects_only_its_header() {
        let fixture = TestTree::new();
        let tree = walk_sorted(&fixture);
        let records = project_placements(&tree).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].row, 0);
        assert_eq!(records[0].column, 0);
        assert!(records[0].emphasized);
    }

    #[test]
    fn serializes_with_stable_field_names() {
        let record = PlacementRecord {
            row: 2,
            column: 1,
            label: "x.txt".to_string(),
            emphasized: false,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["row"], 2);
        assert_eq!(json["column"], 1);
        assert_eq!(json["label"], "x.txt");
        assert_eq!(json["emphasized"], false);
    }
}
