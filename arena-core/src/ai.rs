//! Depth-limited minimax search with optional alpha-beta pruning
//!
//! One recursive routine serves both modes. Scores are always taken from the
//! point of view of the player acting at the root: nodes where that player
//! moves maximize, all others minimize. Every ply works on its own clone of
//! the state.

use crate::error::ArenaError;
use crate::eval::Evaluator;
use crate::game::{GameState, Player};
use crate::score::Score;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Search parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to look ahead from the root
    pub depth: u32,
    /// Stop examining siblings once `beta <= alpha`
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            pruning: true,
        }
    }
}

impl SearchConfig {
    /// Plain minimax at the given depth
    pub fn minimax(depth: u32) -> Self {
        Self {
            depth,
            pruning: false,
        }
    }

    /// Alpha-beta at the given depth
    pub fn alpha_beta(depth: u32) -> Self {
        Self {
            depth,
            pruning: true,
        }
    }
}

/// Result of a root search
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOutcome<A> {
    /// Chosen action
    pub action: A,
    /// Value of the chosen action from the root player's point of view
    pub score: Score,
    /// Positions visited, root included
    pub nodes: u64,
}

// ============================================================================
// ROOT SEARCH
// ============================================================================

/// Choose an action for the player to move in `state`.
///
/// Actions are examined in enumeration order and the first one with a
/// strictly better value wins, so equal values keep the earlier action.
/// Pruning changes how many nodes are visited, never the chosen action.
///
/// Fails with [`ArenaError::NoLegalAction`] when `state` offers no valid
/// action.
pub fn choose_action<G, E>(
    state: &G,
    config: &SearchConfig,
    evaluator: &E,
) -> Result<SearchOutcome<G::Action>, ArenaError>
where
    G: GameState,
    E: Evaluator<G> + ?Sized,
{
    let actions = state.possible_actions();
    if actions.is_empty() {
        return Err(ArenaError::NoLegalAction);
    }

    let mut search = Search {
        root: state.acting_player(),
        evaluator,
        pruning: config.pruning,
        nodes: 1,
    };

    let child_depth = config.depth.saturating_sub(1);
    let mut alpha = Score::Loss;
    let mut best: Option<(G::Action, Score)> = None;

    for action in actions {
        if !state.validate_action(&action) {
            continue;
        }
        let mut child = state.clone();
        child.update(action);
        let value = search.search(&child, child_depth, alpha, Score::Win);

        if best.map_or(true, |(_, b)| value > b) {
            best = Some((action, value));
            alpha = alpha.max(value);
        }
        if value == Score::Win {
            break;
        }
    }

    let (action, score) = best.ok_or(ArenaError::NoLegalAction)?;

    tracing::debug!(
        "search depth={} pruning={} chose {:?} score={} nodes={}",
        config.depth,
        config.pruning,
        action,
        score,
        search.nodes
    );

    Ok(SearchOutcome {
        action,
        score,
        nodes: search.nodes,
    })
}

// ============================================================================
// RECURSION
// ============================================================================

struct Search<'e, E: ?Sized> {
    root: Player,
    evaluator: &'e E,
    pruning: bool,
    nodes: u64,
}

impl<'e, E: ?Sized> Search<'e, E> {
    fn heuristic<G>(&self, state: &G) -> Score
    where
        G: GameState,
        E: Evaluator<G>,
    {
        Score::value(self.evaluator.evaluate(state, self.root))
    }

    fn search<G>(&mut self, state: &G, depth: u32, mut alpha: Score, mut beta: Score) -> Score
    where
        G: GameState,
        E: Evaluator<G>,
    {
        self.nodes += 1;

        // Finished positions are scored exactly, whatever depth remains
        if state.is_finished() {
            return Score::terminal(state, self.root);
        }
        if depth == 0 {
            return self.heuristic(state);
        }

        let maximizing = state.acting_player() == self.root;
        let mut best: Option<Score> = None;

        for action in state.possible_actions() {
            if !state.validate_action(&action) {
                continue;
            }
            let mut child = state.clone();
            child.update(action);
            let value = self.search(&child, depth - 1, alpha, beta);

            if maximizing {
                if best.map_or(true, |b| value > b) {
                    best = Some(value);
                }
                if value == Score::Win {
                    return value;
                }
                alpha = alpha.max(value);
            } else {
                if best.map_or(true, |b| value < b) {
                    best = Some(value);
                }
                if value == Score::Loss {
                    return value;
                }
                beta = beta.min(value);
            }

            if self.pruning && beta <= alpha {
                break;
            }
        }

        // A stuck but unfinished position falls back to the heuristic
        best.unwrap_or_else(|| self.heuristic(state))
    }
}

// ============================================================================
// TESTS
// ============================================================================
