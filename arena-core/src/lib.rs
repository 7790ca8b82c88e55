//! Arena Core - Game contract, search engine and agents
//!
//! This crate provides everything needed to play two-player games between
//! automated agents:
//! - Game state contract (`GameState`) and bundled games (Connect Four, Tic-Tac-Toe)
//! - Ordered search scores with exact win/loss values
//! - Depth-limited minimax and alpha-beta search
//! - Pluggable position evaluators and per-game heuristics
//! - Agents: search-based, random and rule-based

pub mod game;
pub mod error;
pub mod score;
pub mod eval;
pub mod ai;
pub mod agent;
pub mod connect4;
pub mod tictactoe;
pub mod heuristics;

#[cfg(test)]
mod testing;

// Re-exports for convenient access
pub use game::{GameState, Player};
pub use error::ArenaError;
pub use score::Score;
pub use eval::{Evaluator, Flat};
pub use ai::{choose_action, SearchConfig, SearchOutcome};
pub use agent::{ActionTally, Agent, FirstLegalAgent, NoActionPolicy, RandomAgent, SearchAgent};
pub use connect4::{Connect4, Connect4Action};
pub use tictactoe::{TicTacToe, TicTacToeAction};
pub use heuristics::{LineEvaluator, LineWeights, OpenLinesEvaluator, ThreatEvaluator};
