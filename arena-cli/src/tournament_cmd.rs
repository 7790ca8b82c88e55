//! Tournament command - elimination tournament between named agents
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_settings(), play_tournament(), report_results()
//! - Level 3: parse_players(), apply_overrides()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use arena_tournament::{
    format_final_leaderboard, format_leaderboard, registry, GameKind, PlayerSpec, TournamentResult,
    TournamentSettings,
};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Debug)]
pub struct TournamentArgs {
    /// Game to play (connect4, tictactoe)
    #[arg(long)]
    pub game: Option<String>,

    /// Add a player; give at least two
    #[arg(long = "player", num_args = 2, value_names = ["NAME", "TYPE"])]
    pub players: Vec<String>,

    /// Play each match once only, without the mirrored game
    #[arg(long)]
    pub no_seat_permutation: bool,

    /// Iterations per pairing before draw retries start
    #[arg(long)]
    pub num_iterations: Option<u32>,

    /// Give up on a tied pairing after this many extra iterations
    #[arg(long)]
    pub max_draw_retries: Option<u32>,

    /// Tournament settings JSON file; flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log every game, not just rounds
    #[arg(long, short)]
    pub verbose: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run tournament command
///
/// 1. Build settings from the config file and flags
/// 2. Play the tournament, printing a leaderboard after each round
/// 3. Report the final ranking
pub fn run(args: TournamentArgs, seed: Option<u64>) -> Result<()> {
    let settings = build_settings(&args, seed)?;

    // Reject unknown games or agent types before anything is played
    registry::validate(&settings).context("Invalid tournament settings")?;

    let result = play_tournament(&settings, args.json)?;

    report_results(&result, args.json)
}

/// List games and agent types
pub fn list() {
    for kind in GameKind::ALL {
        println!("{}", kind);
        for agent_type in kind.agent_types() {
            println!("  {:<10} {}", agent_type, kind.describe(agent_type).unwrap_or(""));
        }
    }
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Combine the optional settings file with command-line flags
fn build_settings(args: &TournamentArgs, seed: Option<u64>) -> Result<TournamentSettings> {
    let mut settings = match &args.config {
        Some(path) => {
            let loaded = TournamentSettings::from_file(path)
                .with_context(|| format!("Failed to load tournament settings: {}", path.display()))?;
            tracing::info!("Loaded tournament settings from {}", path.display());
            loaded
        }
        None => {
            let Some(game) = &args.game else {
                bail!("--game is required unless --config is given");
            };
            TournamentSettings::new(game.clone(), Vec::new())
        }
    };

    apply_overrides(&mut settings, args, seed)?;
    Ok(settings)
}

fn play_tournament(settings: &TournamentSettings, json: bool) -> Result<TournamentResult> {
    let result = registry::run_with(settings, |report| {
        if !json {
            print!("{}", format_leaderboard(report));
        }
    })
    .context("Tournament aborted")?;
    Ok(result)
}

fn report_results(result: &TournamentResult, json: bool) -> Result<()> {
    if json {
        print_json_results(result)
    } else {
        print!("{}", format_final_leaderboard(result));
        Ok(())
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Pair up `--player NAME TYPE` values
fn parse_players(values: &[String]) -> Result<Vec<PlayerSpec>> {
    if values.len() % 2 != 0 {
        bail!("--player takes a name and a type");
    }
    Ok(values
        .chunks(2)
        .map(|pair| PlayerSpec::new(pair[0].clone(), pair[1].clone()))
        .collect())
}

fn apply_overrides(settings: &mut TournamentSettings, args: &TournamentArgs, seed: Option<u64>) -> Result<()> {
    if let Some(game) = &args.game {
        settings.game = game.clone();
    }
    if !args.players.is_empty() {
        settings.players = parse_players(&args.players)?;
    }

    let config = &mut settings.config;
    if args.no_seat_permutation {
        config.seat_permutation = false;
    }
    if let Some(n) = args.num_iterations {
        config.num_iterations = n;
    }
    if let Some(cap) = args.max_draw_retries {
        config.max_draw_retries = Some(cap);
    }
    if let Some(s) = seed {
        config.seed = Some(s);
    }
    if args.verbose {
        config.verbose = true;
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Print results as JSON
fn print_json_results(result: &TournamentResult) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        winner: Option<&'a str>,
        ranking: Vec<&'a str>,
        #[serde(flatten)]
        result: &'a TournamentResult,
    }

    let output = JsonOutput {
        winner: result.winner(),
        ranking: result.ranking(),
        result,
    };
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize results")?;
    println!("{}", json);
    Ok(())
}
