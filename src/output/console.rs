//! Console rendering of the tabular projection
//!
//! Columns become two-space indentation steps and emphasized rows render
//! bold, so the console view mirrors what a spreadsheet sink would show.

use std::io::{self, Write};

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tabular::PlacementRecord;

const INDENT: &str = "  ";

/// Print placement records to stdout, bolding emphasized rows when color is
/// enabled, followed by a directory/file summary line.
pub fn print_placements(records: &[PlacementRecord], use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for record in records {
        write!(stdout, "{}", INDENT.repeat(record.column))?;
        if record.emphasized {
            stdout.set_color(ColorSpec::new().set_bold(true))?;
        }
        writeln!(stdout, "{}", record.label)?;
        if record.emphasized {
            stdout.reset()?;
        }
    }

    let dir_count = records.iter().filter(|r| r.emphasized).count();
    let file_count = records.len() - dir_count;
    writeln!(stdout)?;
    writeln!(stdout, "{} directories, {} files", dir_count, file_count)?;
    Ok(())
}

/// Render placement records to a string, without color. Used by tests and
/// callers that want the console form somewhere other than stdout.
pub fn format_placements(records: &[PlacementRecord]) -> String {
    let mut output = String::new();
    for record in records {
        output.push_str(&INDENT.repeat(record.column));
        output.push_str(&record.label);
        output.push('\n');
    }
    let dir_count = records.iter().filter(|r| r.emphasized).count();
    let file_count = records.len() - dir_count;
    output.push_str(&format!("\n{} directories, {} files\n", dir_count, file_count));
    output
}
