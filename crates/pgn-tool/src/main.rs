//! pgn-tool - parse, merge and re-emit PGN game collections.
//!
//! Reads a PGN file (or stdin with `-`), and writes the result to stdout.
//! Settings come from `pgn-tool.toml`, see [`config::ToolConfig`].

mod commands;
mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::ToolConfig;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pgn-tool")]
#[command(about = "Parse, merge and re-emit PGN game collections")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Re-emit every game in canonical form
    Format {
        /// PGN file, or - for stdin
        input: PathBuf,
    },
    /// Merge all games into as few trees of variations as possible
    Merge {
        /// PGN file, or - for stdin
        input: PathBuf,
    },
    /// List every line of a single game
    Lines {
        /// PGN file, or - for stdin
        input: PathBuf,
    },
    /// Print a single game and its move tree as JSON
    DumpTree {
        /// PGN file, or - for stdin
        input: PathBuf,
    },
    /// List the lines of a move tree saved as JSON
    ShowTree {
        /// JSON file, or - for stdin
        input: PathBuf,
    },
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ToolConfig::load_from(path)?,
        None => ToolConfig::load()?,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(config.level()?.into())
                .from_env_lossy(),
        )
        .init();

    let output = match &cli.command {
        Commands::Format { input } => commands::format(&read_input(input)?, &config)?,
        Commands::Merge { input } => commands::merge(&read_input(input)?, &config)?,
        Commands::Lines { input } => commands::lines(&read_input(input)?)?,
        Commands::DumpTree { input } => commands::dump_tree(&read_input(input)?)?,
        Commands::ShowTree { input } => commands::show_tree(&read_input(input)?)?,
    };
    println!("{output}");
    Ok(())
}
