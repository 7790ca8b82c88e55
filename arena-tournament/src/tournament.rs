//! Tournament execution - round-robin elimination
//!
//! Level 1 - Orchestration and Level 2 - Phases

use arena_core::{Agent, GameState};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::info;

use crate::config::TournamentConfig;
use crate::error::{Result, TournamentError};
use crate::match_play::{play_pairing, PairingRecord};

/// Score of one agent in one round
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Standing {
    pub name: String,
    pub score: f64,
}

/// Everything that happened in one elimination round
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundReport {
    /// 1-based round number
    pub round: u32,
    /// Round scores in enumeration order
    pub standings: Vec<Standing>,
    pub pairings: Vec<PairingRecord>,
    pub eliminated: String,
}

impl RoundReport {
    /// Standings sorted by score, best first (ties keep enumeration order)
    pub fn leaderboard(&self) -> Vec<&Standing> {
        let mut sorted: Vec<&Standing> = self.standings.iter().collect();
        sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
        sorted
    }
}

/// Result of a tournament
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TournamentResult {
    pub rounds: Vec<RoundReport>,
    /// Least fit first, winner last
    pub elimination_order: Vec<String>,
}

impl TournamentResult {
    /// Last agent standing
    pub fn winner(&self) -> Option<&str> {
        self.elimination_order.last().map(String::as_str)
    }

    /// Final ranking, winner first
    pub fn ranking(&self) -> Vec<&str> {
        self.elimination_order.iter().rev().map(String::as_str).collect()
    }
}

/// Mutable state threaded through the elimination loop
#[derive(Clone, Debug, Default)]
pub struct TournamentState {
    /// Indices of agents still in the tournament, in enumeration order
    pub remaining: Vec<usize>,
    /// Cumulative score by name for the current round
    pub scores: FxHashMap<String, f64>,
    pub elimination_order: Vec<String>,
    pub round: u32,
}

impl TournamentState {
    pub fn new(agent_count: usize) -> Self {
        Self {
            remaining: (0..agent_count).collect(),
            ..Default::default()
        }
    }

    pub fn is_over(&self) -> bool {
        self.remaining.len() <= 1
    }

    fn add(&mut self, name: &str, score: f64) {
        *self.scores.entry(name.to_string()).or_insert(0.0) += score;
    }
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Run an elimination tournament (Level 1 orchestration)
///
/// Every round, each remaining pair plays a pairing; the agent with the
/// strictly lowest round score leaves (ties go to the one enumerated first).
/// Rounds repeat until one agent is left.
pub fn run_elimination<G: GameState>(
    agents: &mut [Box<dyn Agent<G>>],
    factory: &dyn Fn() -> G,
    config: &TournamentConfig,
) -> Result<TournamentResult> {
    run_elimination_with(agents, factory, config, |_| {})
}

/// Like [`run_elimination`], calling `on_round` as each round finishes
pub fn run_elimination_with<G, F>(
    agents: &mut [Box<dyn Agent<G>>],
    factory: &dyn Fn() -> G,
    config: &TournamentConfig,
    mut on_round: F,
) -> Result<TournamentResult>
where
    G: GameState,
    F: FnMut(&RoundReport),
{
    check_entrants(agents)?;

    let mut state = TournamentState::new(agents.len());
    let mut rounds = Vec::new();

    while !state.is_over() {
        let report = play_round(agents, factory, config, &mut state)?;
        on_round(&report);
        rounds.push(report);
    }

    if let Some(&last) = state.remaining.first() {
        let winner = agents[last].name().to_string();
        info!("{} wins the tournament", winner);
        state.elimination_order.push(winner);
    }

    Ok(TournamentResult {
        rounds,
        elimination_order: state.elimination_order,
    })
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Play every pairing among the remaining agents and eliminate one
fn play_round<G: GameState>(
    agents: &mut [Box<dyn Agent<G>>],
    factory: &dyn Fn() -> G,
    config: &TournamentConfig,
    state: &mut TournamentState,
) -> Result<RoundReport> {
    state.round += 1;
    state.scores.clear();
    info!("round {}: {} agents remaining", state.round, state.remaining.len());

    for &i in &state.remaining {
        agents[i].on_new_round(state.round);
        state.scores.insert(agents[i].name().to_string(), 0.0);
    }

    let mut pairings = Vec::new();
    for (a, b) in round_robin_pairings(state.remaining.len()) {
        let (i, j) = (state.remaining[a], state.remaining[b]);
        let (first, second) = pair_mut(agents, i, j);

        let record = play_pairing(first, second, factory, config).map_err(|source| TournamentError::Match {
            first: first.name().to_string(),
            second: second.name().to_string(),
            source,
        })?;

        state.add(&record.first, record.first_score);
        state.add(&record.second, record.second_score);
        pairings.push(record);
    }

    let standings: Vec<Standing> = state
        .remaining
        .iter()
        .map(|&i| {
            let name = agents[i].name().to_string();
            let score = state.scores.get(&name).copied().unwrap_or(0.0);
            Standing { name, score }
        })
        .collect();

    let scores: Vec<f64> = standings.iter().map(|s| s.score).collect();
    let Some(position) = lowest_scorer(&scores) else {
        return Err(TournamentError::NotEnoughPlayers(0));
    };
    let eliminated = agents[state.remaining.remove(position)].name().to_string();
    info!("round {}: {} eliminated", state.round, eliminated);
    state.elimination_order.push(eliminated.clone());

    Ok(RoundReport {
        round: state.round,
        standings,
        pairings,
        eliminated,
    })
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// All unordered pairs of `0..n` in enumeration order
pub fn round_robin_pairings(n: usize) -> Vec<(usize, usize)> {
    let mut pairings = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            pairings.push((i, j));
        }
    }
    pairings
}

/// Position of the strictly lowest score; ties go to the earliest
pub fn lowest_scorer(scores: &[f64]) -> Option<usize> {
    let mut lowest: Option<usize> = None;
    for (i, &score) in scores.iter().enumerate() {
        if lowest.map_or(true, |l| score < scores[l]) {
            lowest = Some(i);
        }
    }
    lowest
}

/// Two distinct agents borrowed mutably, `i` first
fn pair_mut<G: GameState>(agents: &mut [Box<dyn Agent<G>>], i: usize, j: usize) -> (&mut dyn Agent<G>, &mut dyn Agent<G>) {
    debug_assert!(i < j);
    let (head, tail) = agents.split_at_mut(j);
    (&mut *head[i], &mut *tail[0])
}

fn check_entrants<G: GameState>(agents: &[Box<dyn Agent<G>>]) -> Result<()> {
    if agents.len() < 2 {
        return Err(TournamentError::NotEnoughPlayers(agents.len()));
    }
    let mut seen = FxHashSet::default();
    for agent in agents {
        if !seen.insert(agent.name()) {
            return Err(TournamentError::DuplicatePlayer(agent.name().to_string()));
        }
    }
    Ok(())
}
