//! Tournament errors
//!
//! Level 4 - Utilities and configuration

use arena_core::ArenaError;

/// Errors raised while configuring or running a tournament
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("unknown game type '{0}'")]
    UnknownGameType(String),

    #[error("agent type '{agent_type}' is not available for game '{game}'")]
    UnknownAgentType { game: String, agent_type: String },

    #[error("a tournament needs at least 2 players, got {0}")]
    NotEnoughPlayers(usize),

    #[error("player name '{0}' is used more than once")]
    DuplicatePlayer(String),

    /// An agent failed mid-match; the tournament cannot continue
    #[error("match {first} vs {second} failed: {source}")]
    Match {
        first: String,
        second: String,
        source: ArenaError,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TournamentError>;
