//! Command-line interface orchestration for the minspan CLI.
//!
//! Offers a `run` command that loads a plain-text edge list, computes the
//! minimum spanning forest, and renders the selected edges with a summary.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli,
};
