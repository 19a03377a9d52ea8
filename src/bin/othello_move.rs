//! Compute one computer move.
//!
//! Reads a move request (JSON) from stdin and writes the response to stdout.
//! Logs go to stderr.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use othello::protocol::handle_request;
use othello::{AIEngine, EngineConfig};

/// Compute the computer's Othello move for a position given on stdin.
#[derive(Parser)]
#[command(name = "othello-move", about = "Compute one Othello move from a JSON request")]
struct Cli {
    /// Difficulty: easy, medium or hard (overrides the config file)
    #[arg(long)]
    difficulty: Option<String>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "othello.toml")]
    config: PathBuf,

    /// Override the per-search node budget
    #[arg(long)]
    node_budget: Option<u64>,

    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = EngineConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?
        .with_overrides(cli.difficulty.as_deref(), cli.node_budget)
        .context("invalid configuration")?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading request from stdin")?;

    let engine = AIEngine::from_config(&config);
    let response = handle_request(&input, &engine).context("handling move request")?;
    info!(difficulty = %config.difficulty, response = ?response.mv, "move computed");

    let body = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{body}").context("writing response")?;
    Ok(())
}
