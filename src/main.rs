use clap::{Parser, Subcommand};
use dfsgraph::{
    GraphError, GraphResult,
    fs::{LoadedGraph, load_graph},
    search::graph_algo::{can_reach_with_stats, self_loops_with_stats},
    statistics::Stats,
};
use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Depth-first queries over graphs described in JSON files
#[derive(Parser, Debug)]
#[command(name = "dfsgraph")]
#[command(
    about = "Depth-first queries over vertex, airport and adjacency-map graphs",
    long_about = None
)]
struct Args {
    /// Path to the graph description file (JSON)
    #[arg(short, long)]
    graph: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print reachable values shorter than a given length (vertex graphs)
    Short {
        /// Vertex to start from
        #[arg(short, long)]
        start: String,

        /// Values must be strictly shorter than this many characters
        #[arg(short, long)]
        max_len: usize,
    },

    /// Print the longest reachable value (vertex graphs)
    Longest {
        #[arg(short, long)]
        start: String,
    },

    /// Print every reachable node that points at itself
    Loops {
        #[arg(short, long)]
        start: String,
    },

    /// Tell whether one node can be reached from another
    Reach {
        #[arg(short, long)]
        from: String,

        #[arg(short, long)]
        to: String,
    },

    /// Print the keys that cannot be reached from a start key (adjacency maps)
    Unreachable {
        /// Key to start from. Without it, every key is unreachable
        #[arg(short, long)]
        start: Option<String>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Short { .. } => "short",
            Command::Longest { .. } => "longest",
            Command::Loops { .. } => "loops",
            Command::Reach { .. } => "reach",
            Command::Unreachable { .. } => "unreachable",
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Answers `command` on `graph`, writing the answer to `out`.
///
/// Returns the counters of every walk the query needed.
fn run(graph: &LoadedGraph, command: &Command, out: &mut impl Write) -> GraphResult<Stats> {
    let unsupported = || GraphError::UnsupportedCommand {
        command: command.name(),
        kind: graph.kind(),
    };

    let mut stats = Stats::new();
    match (command, graph) {
        (Command::Short { start, max_len }, LoadedGraph::Vertices(named)) => {
            let start = named.require(start)?;
            named
                .graph
                .write_short_values(Some(start), *max_len, out, &mut stats)?;
        }
        (Command::Longest { start }, LoadedGraph::Vertices(named)) => {
            let start = named.require(start)?;
            let longest = named.graph.longest_value_with_stats(Some(start), &mut stats);
            writeln!(out, "{longest}")?;
        }
        (Command::Loops { start }, LoadedGraph::Vertices(named)) => {
            let start = named.require(start)?;
            named.graph.write_self_loops(Some(start), out, &mut stats)?;
        }
        (Command::Loops { start }, LoadedGraph::Airports(network)) => {
            let start = network
                .find(start)
                .ok_or_else(|| GraphError::UnknownAirport(start.clone()))?;
            for id in self_loops_with_stats(network, Some(start), &mut stats) {
                writeln!(out, "{}", network.airport(id).code())?;
            }
        }
        (Command::Loops { start }, LoadedGraph::Adjacency(map)) => {
            for key in self_loops_with_stats(map, Some(start.clone()), &mut stats) {
                writeln!(out, "{key}")?;
            }
        }
        (Command::Reach { from, to }, LoadedGraph::Vertices(named)) => {
            let (from, to) = (named.require(from)?, named.require(to)?);
            let reached = named
                .graph
                .can_reach_with_stats(Some(from), Some(to), &mut stats);
            writeln!(out, "{reached}")?;
        }
        (Command::Reach { from, to }, LoadedGraph::Airports(network)) => {
            let from = network
                .find(from)
                .ok_or_else(|| GraphError::UnknownAirport(from.clone()))?;
            let to = network
                .find(to)
                .ok_or_else(|| GraphError::UnknownAirport(to.clone()))?;
            let reached = network.can_reach_with_stats(Some(from), Some(to), &mut stats);
            writeln!(out, "{reached}")?;
        }
        (Command::Reach { from, to }, LoadedGraph::Adjacency(map)) => {
            let reached = can_reach_with_stats(map, Some(from), Some(to), &mut stats);
            writeln!(out, "{reached}")?;
        }
        (Command::Unreachable { start }, LoadedGraph::Adjacency(map)) => {
            let mut keys: Vec<String> = map
                .unreachable_with_stats(start.as_ref(), &mut stats)
                .into_iter()
                .collect();
            keys.sort();
            for key in keys {
                writeln!(out, "{key}")?;
            }
        }
        _ => return Err(unsupported()),
    }
    Ok(stats)
}

fn query(args: &Args) -> GraphResult<Stats> {
    info!("Loading graph from {}", args.graph.display());
    let graph = load_graph(&args.graph)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = run(&graph, &args.command, &mut out)?;
    out.flush()?;
    Ok(stats)
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match query(&args) {
        Ok(stats) => {
            info!(
                command = args.command.name(),
                traversals = stats.get_traversals(),
                nodes_visited = stats.get_nodes_visited(),
                edges_examined = stats.get_edges_examined(),
                "query completed"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
