//! Output sinks for the two projections
//!
//! - `console`: indentation-and-bold rendering of placement records
//! - `json`: the sink-contract JSON documents for both projections

mod console;
mod json;

pub use console::{format_placements, print_placements};
pub use json::{print_graph_json, print_placements_json, write_graph_json, write_placements_json};
