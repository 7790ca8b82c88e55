//! Game and agent-type registry
//!
//! Resolves the string selectors used by the CLI and JSON settings into
//! concrete games and agents. Every agent is built before the first match,
//! so an unknown type fails the whole tournament up front.

use std::fmt;
use std::str::FromStr;

use arena_core::heuristics::{LineEvaluator, OpenLinesEvaluator, ThreatEvaluator};
use arena_core::{
    Agent, Connect4, FirstLegalAgent, GameState, NoActionPolicy, RandomAgent, SearchAgent, SearchConfig, TicTacToe,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{PlayerSpec, TournamentSettings};
use crate::error::{Result, TournamentError};
use crate::tournament::{run_elimination_with, RoundReport, TournamentResult};

/// Agent type names accepted for every game
pub const AGENT_TYPES: [&str; 4] = ["minimax", "alphabeta", "random", "first"];

/// Depth of the plain minimax agent
pub const MINIMAX_DEPTH: u32 = 4;
/// Depth of the alpha-beta agent
pub const ALPHA_BETA_DEPTH: u32 = 5;

/// Games the arena can host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Connect4,
    TicTacToe,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::Connect4, GameKind::TicTacToe];

    pub fn name(self) -> &'static str {
        match self {
            GameKind::Connect4 => "connect4",
            GameKind::TicTacToe => "tictactoe",
        }
    }

    /// Agent types available for this game
    pub fn agent_types(self) -> &'static [&'static str] {
        &AGENT_TYPES
    }

    /// Short description of an agent type, `None` if unknown
    pub fn describe(self, agent_type: &str) -> Option<&'static str> {
        let description = match (self, agent_type) {
            (GameKind::Connect4, "minimax") => "minimax, depth 4, threat heuristic, strict",
            (GameKind::Connect4, "alphabeta") => "alpha-beta, depth 5, line heuristic, lenient",
            (GameKind::TicTacToe, "minimax") => "minimax, depth 4, open-lines heuristic, strict",
            (GameKind::TicTacToe, "alphabeta") => "alpha-beta, depth 5, open-lines heuristic, lenient",
            (_, "random") => "uniformly random legal action",
            (_, "first") => "always the first legal action",
            _ => return None,
        };
        Some(description)
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameKind {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self> {
        GameKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TournamentError::UnknownGameType(s.to_string()))
    }
}

// ============================================================================
// AGENT FACTORIES
// ============================================================================

fn unknown_agent(game: GameKind, spec: &PlayerSpec) -> TournamentError {
    TournamentError::UnknownAgentType {
        game: game.name().to_string(),
        agent_type: spec.agent_type.clone(),
    }
}

/// Agent types every game supports; `None` for the search types
fn baseline_agent<G: GameState>(spec: &PlayerSpec, seed: u64) -> Option<Box<dyn Agent<G>>> {
    match spec.agent_type.as_str() {
        "random" => Some(Box::new(RandomAgent::new(spec.name.clone(), seed))),
        "first" => Some(Box::new(FirstLegalAgent::new(spec.name.clone()))),
        _ => None,
    }
}

fn connect4_agent(spec: &PlayerSpec, seed: u64) -> Result<Box<dyn Agent<Connect4>>> {
    let agent: Box<dyn Agent<Connect4>> = match spec.agent_type.as_str() {
        "minimax" => Box::new(SearchAgent::<Connect4, _>::new(
            spec.name.clone(),
            SearchConfig::minimax(MINIMAX_DEPTH),
            ThreatEvaluator,
        )),
        "alphabeta" => Box::new(
            SearchAgent::<Connect4, _>::new(
                spec.name.clone(),
                SearchConfig::alpha_beta(ALPHA_BETA_DEPTH),
                LineEvaluator::default(),
            )
            .with_policy(NoActionPolicy::Lenient),
        ),
        _ => baseline_agent(spec, seed).ok_or_else(|| unknown_agent(GameKind::Connect4, spec))?,
    };
    Ok(agent)
}

fn tictactoe_agent(spec: &PlayerSpec, seed: u64) -> Result<Box<dyn Agent<TicTacToe>>> {
    let agent: Box<dyn Agent<TicTacToe>> = match spec.agent_type.as_str() {
        "minimax" => Box::new(SearchAgent::<TicTacToe, _>::new(
            spec.name.clone(),
            SearchConfig::minimax(MINIMAX_DEPTH),
            OpenLinesEvaluator,
        )),
        "alphabeta" => Box::new(
            SearchAgent::<TicTacToe, _>::new(
                spec.name.clone(),
                SearchConfig::alpha_beta(ALPHA_BETA_DEPTH),
                OpenLinesEvaluator,
            )
            .with_policy(NoActionPolicy::Lenient),
        ),
        _ => baseline_agent(spec, seed).ok_or_else(|| unknown_agent(GameKind::TicTacToe, spec))?,
    };
    Ok(agent)
}

/// Build one agent per entrant; random agents get `seed + index`
fn build_agents<G: GameState>(
    settings: &TournamentSettings,
    build: fn(&PlayerSpec, u64) -> Result<Box<dyn Agent<G>>>,
) -> Result<Vec<Box<dyn Agent<G>>>> {
    let base = settings.config.effective_seed();
    settings
        .players
        .iter()
        .enumerate()
        .map(|(i, spec)| build(spec, base.wrapping_add(i as u64)))
        .collect()
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Check settings and build every agent without playing anything
pub fn validate(settings: &TournamentSettings) -> Result<GameKind> {
    let kind: GameKind = settings.game.parse()?;
    settings.validate()?;
    match kind {
        GameKind::Connect4 => build_agents(settings, connect4_agent).map(|_| kind),
        GameKind::TicTacToe => build_agents(settings, tictactoe_agent).map(|_| kind),
    }
}

/// Run a tournament from settings
pub fn run(settings: &TournamentSettings) -> Result<TournamentResult> {
    run_with(settings, |_| {})
}

/// Run a tournament from settings, calling `on_round` after each round
pub fn run_with<F>(settings: &TournamentSettings, on_round: F) -> Result<TournamentResult>
where
    F: FnMut(&RoundReport),
{
    let kind: GameKind = settings.game.parse()?;
    settings.validate()?;
    info!(
        "{} tournament with {} players, seat permutation {}, {} iteration(s)",
        kind,
        settings.players.len(),
        settings.config.seat_permutation,
        settings.config.num_iterations
    );

    match kind {
        GameKind::Connect4 => {
            let mut agents = build_agents(settings, connect4_agent)?;
            run_elimination_with(&mut agents, &Connect4::new, &settings.config, on_round)
        }
        GameKind::TicTacToe => {
            let mut agents = build_agents(settings, tictactoe_agent)?;
            run_elimination_with(&mut agents, &TicTacToe::new, &settings.config, on_round)
        }
    }
}
