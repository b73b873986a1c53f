//! Command implementations and argument parsing for the minspan CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use minspan_core::{WeightedGraph, minimum_spanning_forest};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "minspan", about = "Compute minimum spanning forests of weighted graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning forest of an edge-list file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a plain-text edge list: one `u v w` triple per line, with
    /// `#` comments and blank lines ignored.
    pub path: PathBuf,

    /// Number of vertices; defaults to the largest endpoint plus one.
    #[arg(long)]
    pub vertices: Option<usize>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading the edge list.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list contained a malformed line.
    #[error("{path}:{line}: {message}")]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// One-based line number of the offending line.
        line: usize,
        /// Description of the problem.
        message: String,
    },
    /// Graph construction or the MST computation failed.
    #[error(transparent)]
    Core(#[from] minspan_core::Error),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name derived from the input file.
    pub graph_name: String,
    /// Number of edges in the input graph.
    pub input_edge_count: usize,
    /// The computed minimum spanning forest.
    pub forest: WeightedGraph,
}

impl ExecutionSummary {
    /// Returns the total weight of the forest.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.forest.edges().iter().map(|edge| edge.weight()).sum()
    }

    /// Returns the number of connected components the forest spans.
    ///
    /// A forest over `n` vertices with `m` edges always has `n - m` trees.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.forest.vertex_count() - self.forest.edge_count()
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, parsing, or computation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use minspan_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1 1.0\n1 2 2.0\n0 2 5.0\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         vertices: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.forest.edge_count(), 2);
/// assert_eq!(summary.total_weight(), 3.0);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, vertices = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand { path, vertices } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));

    let triples = load_edge_list(&path)?;
    let vertex_count = vertices.unwrap_or_else(|| derive_vertex_count(&triples));
    span.record("vertices", field::display(vertex_count));

    let mut graph = WeightedGraph::new(vertex_count)?;
    for (u, v, w) in &triples {
        graph.set_edge(*u, *v, *w)?;
    }

    let forest = minimum_spanning_forest(&graph)?;
    let summary = ExecutionSummary {
        graph_name: derive_graph_name(&path),
        input_edge_count: graph.edge_count(),
        forest,
    };
    info!(
        graph = summary.graph_name.as_str(),
        forest_edges = summary.forest.edge_count(),
        components = summary.component_count(),
        "command completed"
    );
    Ok(summary)
}

/// Reads and parses an edge-list file into `(u, v, w)` triples.
#[instrument(name = "cli.load_edge_list", err, fields(path = field::Empty))]
pub(super) fn load_edge_list(path: &Path) -> Result<Vec<(usize, usize, f64)>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_edge_list(BufReader::new(file), path)
}

pub(super) fn parse_edge_list(
    reader: impl BufRead,
    path: &Path,
) -> Result<Vec<(usize, usize, f64)>, CliError> {
    let mut triples = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        triples.push(parse_triple(content).map_err(|message| CliError::Parse {
            path: path.to_path_buf(),
            line: index + 1,
            message,
        })?);
    }
    Ok(triples)
}

fn parse_triple(content: &str) -> Result<(usize, usize, f64), String> {
    let mut tokens = content.split_whitespace();
    let (Some(u), Some(v), Some(w), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(format!("expected `u v w`, got `{content}`"));
    };
    let u: usize = u
        .parse()
        .map_err(|_| format!("invalid vertex index `{u}`"))?;
    let v: usize = v
        .parse()
        .map_err(|_| format!("invalid vertex index `{v}`"))?;
    let w: f64 = w.parse().map_err(|_| format!("invalid weight `{w}`"))?;
    if !w.is_finite() {
        return Err(format!("edge weight must be finite, got `{w}`"));
    }
    Ok((u, v, w))
}

fn derive_vertex_count(triples: &[(usize, usize, f64)]) -> usize {
    triples
        .iter()
        .map(|&(u, v, _)| u.max(v) + 1)
        .max()
        .unwrap_or(0)
}

fn derive_graph_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "graph".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// Forest edges follow the header, one tab-separated `u v w` triple per
/// line in ascending `(u, v)` order.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graph: {}", summary.graph_name)?;
    writeln!(writer, "vertices: {}", summary.forest.vertex_count())?;
    writeln!(writer, "input edges: {}", summary.input_edge_count)?;
    writeln!(writer, "forest edges: {}", summary.forest.edge_count())?;
    writeln!(writer, "components: {}", summary.component_count())?;
    writeln!(writer, "total weight: {}", summary.total_weight())?;
    for edge in summary.forest.edges() {
        writeln!(writer, "{}\t{}\t{}", edge.u(), edge.v(), edge.weight())?;
    }
    Ok(())
}
