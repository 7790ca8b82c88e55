//! Arena Tournament - Elimination tournaments between agents
//!
//! This crate provides tournament infrastructure:
//! - Single games between two agents on a canonical state
//! - Pairings with mirrored seating and draw retries
//! - Round-robin elimination until one agent is left
//! - Registry of games and agent types, text leaderboards
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_elimination, registry::run (orchestration)
//! - Level 2: play_round, play_pairing (phases)
//! - Level 3: run_simulation, play_game, lowest_scorer (steps)
//! - Level 4: utilities, configuration, reports

mod config;
mod error;
mod game_runner;
mod match_play;
pub mod registry;
pub mod report;
mod simulator;
mod tournament;

#[cfg(test)]
mod testing;

pub use config::{PlayerSpec, TournamentConfig, TournamentSettings, DEFAULT_SEED};
pub use error::{Result, TournamentError};
pub use game_runner::{GameOutcome, GameRunner};
pub use match_play::{play_pairing, PairingRecord};
pub use registry::{GameKind, AGENT_TYPES};
pub use report::{format_final_leaderboard, format_leaderboard};
pub use simulator::Simulator;
pub use tournament::{
    lowest_scorer, round_robin_pairings, run_elimination, run_elimination_with, RoundReport, Standing,
    TournamentResult, TournamentState,
};
