//! CLI command definitions

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// CLI arguments for trivia-api
#[derive(Parser, Debug)]
#[command(name = "trivia-api")]
#[command(author, version, about = "Trivia question bank served over HTTP")]
#[command(long_about = r#"
Trivia API serves a question bank over HTTP: categories, paginated question
lists, search, question creation and deletion, and a quiz mode that hands out
one unseen random question per turn.

Configuration files are loaded from (in priority order):
1. TRIVIA_<SECTION>__<KEY>  Environment variables
2. --config <path>          Explicit config file
3. ./trivia.toml            Project-level config
4. ~/.config/trivia-api/config.toml   Global config

Example:
  trivia-api --seed
  trivia-api --bind 0.0.0.0:8080 --database ./trivia.db -v
  trivia-api --in-memory --seed
"#)]
pub struct Cli {
    /// Address to listen on (overrides server.bind)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// SQLite database file (overrides database.path)
    #[arg(short, long, value_name = "PATH", conflicts_with = "in_memory")]
    pub database: Option<PathBuf>,

    /// Use a throwaway in-memory database
    #[arg(long)]
    pub in_memory: bool,

    /// Load starter categories and questions into an empty database
    #[arg(long)]
    pub seed: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
