//! JSON output formatting

use std::io::{self, Write};

use serde::Serialize;

use crate::graph::GraphModel;
use crate::tabular::PlacementRecord;

fn write_pretty<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(writer, "{}", json)
}

/// Print placement records as a JSON array to stdout.
pub fn print_placements_json(records: &[PlacementRecord]) -> io::Result<()> {
    write_placements_json(io::stdout().lock(), records)
}

/// Write placement records as a JSON array.
pub fn write_placements_json<W: Write>(writer: W, records: &[PlacementRecord]) -> io::Result<()> {
    write_pretty(writer, records)
}

/// Print the graph document to stdout.
pub fn print_graph_json(model: &GraphModel) -> io::Result<()> {
    write_graph_json(io::stdout().lock(), model)
}

/// Write the graph document.
pub fn write_graph_json<W: Write>(writer: W, model: &GraphModel) -> io::Result<()> {
    write_pretty(writer, model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::LayoutPlan;

    #[test]
    fn placements_serialize_as_an_array() {
        let records = vec![PlacementRecord {
            row: 0,
            column: 0,
            label: "root".to_string(),
            emphasized: true,
        }];
        let mut buf = Vec::new();
        write_placements_json(&mut buf, &records).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["label"], "root");
    }

    #[test]
    fn graph_document_matches_sink_contract() {
        let model = GraphModel {
            nodes: Vec::new(),
            edges: Vec::new(),
            plan: LayoutPlan::for_widest_level(1),
        };
        let mut buf = Vec::new();
        write_graph_json(&mut buf, &model).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        for key in ["nodes", "edges", "orientation", "levelSeparation", "nodeSpacing", "estimatedHeight"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["orientation"], "TopDown");
    }
}
