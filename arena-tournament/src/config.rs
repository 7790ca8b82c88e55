//! Configuration types for tournament play
//!
//! Level 4 - Utilities and configuration

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TournamentError};

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 42;

/// How pairings are played
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Play every match a second time with the seats swapped
    pub seat_permutation: bool,
    /// Minimum iterations per pairing (at least one is always played)
    pub num_iterations: u32,
    /// Stop replaying a tied pairing after this many extra iterations.
    /// `None` keeps replaying until the tie breaks, which never happens for
    /// two agents that always draw.
    pub max_draw_retries: Option<u32>,
    /// Base seed for random agents (`None` = [`DEFAULT_SEED`])
    pub seed: Option<u64>,
    /// Log every game at info level instead of debug
    pub verbose: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            seat_permutation: true,
            num_iterations: 1,
            max_draw_retries: None,
            seed: None,
            verbose: false,
        }
    }
}

impl TournamentConfig {
    pub fn with_seat_permutation(mut self, enabled: bool) -> Self {
        self.seat_permutation = enabled;
        self
    }

    pub fn with_iterations(mut self, num_iterations: u32) -> Self {
        self.num_iterations = num_iterations;
        self
    }

    /// Cap the draw-retry loop
    pub fn with_max_draw_retries(mut self, retries: u32) -> Self {
        self.max_draw_retries = Some(retries);
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Seed actually used for random agents
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Iterations played before the draw check applies
    pub fn min_iterations(&self) -> u32 {
        self.num_iterations.max(1)
    }
}

/// One tournament entrant: a unique name and an agent type
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub agent_type: String,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>, agent_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            agent_type: agent_type.into(),
        }
    }
}

/// Everything needed to run a tournament
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentSettings {
    /// Game selector, e.g. `connect4`
    pub game: String,
    pub players: Vec<PlayerSpec>,
    #[serde(default)]
    pub config: TournamentConfig,
}

impl TournamentSettings {
    pub fn new(game: impl Into<String>, players: Vec<PlayerSpec>) -> Self {
        Self {
            game: game.into(),
            players,
            config: TournamentConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TournamentConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TournamentError::Config(e.to_string()))
    }

    /// Load settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| TournamentError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Check the player list: at least two entrants, no repeated names
    pub fn validate(&self) -> Result<()> {
        if self.players.len() < 2 {
            return Err(TournamentError::NotEnoughPlayers(self.players.len()));
        }
        let mut seen = FxHashSet::default();
        for player in &self.players {
            if !seen.insert(player.name.as_str()) {
                return Err(TournamentError::DuplicatePlayer(player.name.clone()));
            }
        }
        Ok(())
    }
}
