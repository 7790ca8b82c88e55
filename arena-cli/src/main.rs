//! Arena CLI - Command-line interface
//!
//! Commands:
//! - tournament: Run an elimination tournament
//! - list: Show games and agent types

mod tournament_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tournament_cmd::TournamentArgs;

#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Game-playing agents and elimination tournaments")]
struct Cli {
    /// Seed for random agents (default 42)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an elimination tournament
    Tournament(TournamentArgs),
    /// List games and agent types
    List,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the leaderboards
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tournament(args) => tournament_cmd::run(args, cli.seed),
        Commands::List => {
            tournament_cmd::list();
            Ok(())
        }
    }
}
