use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use shipgraph::edge_list::{read_edge_list, ReadOptions};
use shipgraph::graph::Graph;
use shipgraph::report::{write_adjacency, write_forest_edges, write_summary, Summary};

/// Parse a field delimiter: a single character, or one of the escapes `\t`, `tab`, `space`
fn parse_delimiter(s: &str) -> Result<char, String> {
    match s {
        "\\t" | "tab" => return Ok('\t'),
        "space" => return Ok(' '),
        _ => {}
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err("Empty delimiter".to_string()),
        _ => Err(format!("Delimiter must be a single character, got '{s}'")),
    }
}

/// shipgraph - connectivity and minimum spanning tree for weighted route networks
///
/// Reads an undirected edge list (source,destination,weight per line), prints the
/// adjacency structure, whether the network is connected, and the total MST weight
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Edge list file (gzip-compressed if it ends in .gz/.bgz)
    #[clap(value_name = "INPUT", default_value = "network.txt")]
    input: String,

    /// Field delimiter
    #[clap(short = 'd', long = "delimiter", default_value = ",", value_parser = parse_delimiter)]
    delimiter: char,

    /// Warn about and skip malformed records instead of failing
    #[clap(long = "skip-malformed")]
    skip_malformed: bool,

    /// Do not print the adjacency listing
    #[clap(long = "no-adjacency")]
    no_adjacency: bool,

    /// Also print the selected spanning-forest edges
    #[clap(long = "show-mst")]
    show_mst: bool,

    /// Output file (stdout if not specified)
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Quiet mode (errors only)
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

fn init_logging(args: &Args) {
    let level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let options = ReadOptions {
        delimiter: args.delimiter,
        skip_malformed: args.skip_malformed,
    };
    let records = read_edge_list(&args.input, &options)?;

    let graph: Graph = records.into_iter().collect();
    log::info!(
        "Built graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create output file {path}"))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if !args.no_adjacency {
        write_adjacency(&mut out, &graph)?;
    }

    let forest = graph.minimum_spanning_forest();
    let summary = Summary::from_forest(&graph, &forest);
    if !summary.connected {
        log::info!(
            "Network has {} connected components; MST total is a spanning forest",
            summary.component_count
        );
    }
    write_summary(&mut out, &summary)?;

    if args.show_mst {
        write_forest_edges(&mut out, &forest)?;
    }

    out.flush()?;
    Ok(())
}
