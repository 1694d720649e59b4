//! CLI entry point for trellis

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use trellis::{
    DEFAULT_WRAP_WIDTH, TreeWalker, WalkConfig, export_all, plan_graph, print_graph_json,
    print_placements, print_placements_json, project_placements,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(about = "Project a directory tree into spreadsheet placements and a graph layout")]
#[command(version)]
struct Args {
    /// Directory to project
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Include hidden entries and office lock files
    #[arg(short, long)]
    all: bool,

    /// Sort each directory's children by name instead of listing order
    #[arg(long)]
    sort: bool,

    /// Exclude entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Print the tabular projection as JSON instead of rendering it
    #[arg(long = "json")]
    json: bool,

    /// Print the graph layout document as JSON
    #[arg(short = 'g', long = "graph", conflicts_with = "json")]
    graph: bool,

    /// Wrap node labels at this many characters
    #[arg(short = 'w', long = "wrap", default_value_t = DEFAULT_WRAP_WIDTH)]
    wrap: usize,

    /// Write both projection documents into DIR and print their paths
    #[arg(
        long = "export",
        value_name = "DIR",
        num_args = 0..=1,
        default_missing_value = "."
    )]
    export: Option<PathBuf>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let config = WalkConfig {
        show_all: args.all,
        sort_children: args.sort,
        ignore_patterns: args.ignore.clone(),
    };

    let tree = match TreeWalker::new(config).walk(&args.path) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("trellis: {}", e);
            process::exit(1);
        }
    };

    if let Some(dest) = &args.export {
        let paths = match export_all(&tree, dest, args.wrap) {
            Ok(paths) => paths,
            Err(e) => {
                eprintln!("trellis: {}", e);
                process::exit(1);
            }
        };
        if let Some(path) = paths.tabular {
            println!("{}", path.display());
        }
        if let Some(path) = paths.graph {
            println!("{}", path.display());
        }
        return;
    }

    let result = if args.graph {
        match plan_graph(&tree, args.wrap) {
            Ok(model) => print_graph_json(&model),
            Err(e) => {
                eprintln!("trellis: {}", e);
                process::exit(1);
            }
        }
    } else {
        let records = match project_placements(&tree) {
            Ok(records) => records,
            Err(e) => {
                eprintln!("trellis: {}", e);
                process::exit(1);
            }
        };
        if args.json {
            print_placements_json(&records)
        } else {
            print_placements(&records, should_use_color(args.color))
        }
    };

    if let Err(e) = result {
        eprintln!("trellis: error writing output: {}", e);
        process::exit(1);
    }
}
