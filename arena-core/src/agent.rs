//! Agents: anything that can pick an action for a game state
//!
//! Search-based agents wrap a [`SearchConfig`] and an evaluator; random and
//! rule-based agents sit behind the same trait so the match loop never has to
//! tell them apart.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::ai::{choose_action, SearchConfig};
use crate::error::ArenaError;
use crate::eval::Evaluator;
use crate::game::{GameState, Player};

// ============================================================================
// AGENT TRAIT
// ============================================================================

/// A participant in a match.
///
/// The event hooks are observers. They may update internal counters but must
/// not change the state they are shown.
pub trait Agent<G: GameState> {
    /// Name used as the scoring key
    fn name(&self) -> &str;

    /// Choose an action for the acting player in `state`
    fn act(&mut self, state: &G) -> Result<G::Action, ArenaError>;

    /// A new game starts and this agent plays `seat`
    fn on_new_game(&mut self, _seat: Player) {}

    /// `actor` played `action`, producing `state`
    fn on_action_taken(&mut self, _actor: Player, _action: &G::Action, _state: &G) {}

    fn on_game_ended(&mut self, _state: &G) {}

    /// A new tournament round begins
    fn on_new_round(&mut self, _round: u32) {}
}

/// What to do when asked to act with no legal action available
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoActionPolicy {
    /// Fail with [`ArenaError::NoLegalAction`]
    #[default]
    Strict,
    /// Return the game's sentinel action and carry on
    Lenient,
}

impl NoActionPolicy {
    /// Outcome of acting with nothing to play
    pub fn fallback<G: GameState>(self) -> Result<G::Action, ArenaError> {
        match self {
            NoActionPolicy::Strict => Err(ArenaError::NoLegalAction),
            NoActionPolicy::Lenient => Ok(G::no_action()),
        }
    }
}

// ============================================================================
// OPPONENT MODELLING
// ============================================================================

/// How often each action has been observed
#[derive(Clone, Debug)]
pub struct ActionTally<A> {
    counts: FxHashMap<A, u32>,
    total: u32,
}

impl<A> Default for ActionTally<A> {
    fn default() -> Self {
        Self {
            counts: FxHashMap::default(),
            total: 0,
        }
    }
}

impl<A: std::hash::Hash + Eq> ActionTally<A> {
    pub fn record(&mut self, action: A) {
        *self.counts.entry(action).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn count(&self, action: &A) -> u32 {
        self.counts.get(action).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Share of observations that were `action` (0.0 when nothing was seen)
    pub fn frequency(&self, action: &A) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.count(action) as f32 / self.total as f32
        }
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }
}

// ============================================================================
// SEARCH AGENT
// ============================================================================

/// Agent that picks actions with minimax or alpha-beta search
pub struct SearchAgent<G: GameState, E> {
    name: String,
    config: SearchConfig,
    policy: NoActionPolicy,
    evaluator: E,
    seat: Option<Player>,
    opponent_moves: ActionTally<G::Action>,
    nodes_searched: u64,
}

impl<G: GameState, E: Evaluator<G>> SearchAgent<G, E> {
    pub fn new(name: impl Into<String>, config: SearchConfig, evaluator: E) -> Self {
        Self {
            name: name.into(),
            config,
            policy: NoActionPolicy::default(),
            evaluator,
            seat: None,
            opponent_moves: ActionTally::default(),
            nodes_searched: 0,
        }
    }

    /// Set the no-legal-action policy
    pub fn with_policy(mut self, policy: NoActionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn policy(&self) -> NoActionPolicy {
        self.policy
    }

    /// Opponent actions seen in the current game
    pub fn opponent_moves(&self) -> &ActionTally<G::Action> {
        &self.opponent_moves
    }

    /// Positions visited across every search this agent has run
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

impl<G: GameState, E: Evaluator<G>> Agent<G> for SearchAgent<G, E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn act(&mut self, state: &G) -> Result<G::Action, ArenaError> {
        match choose_action(state, &self.config, &self.evaluator) {
            Ok(outcome) => {
                self.nodes_searched += outcome.nodes;
                Ok(outcome.action)
            }
            Err(ArenaError::NoLegalAction) => self.policy.fallback::<G>(),
            Err(e) => Err(e),
        }
    }

    fn on_new_game(&mut self, seat: Player) {
        self.seat = Some(seat);
        self.opponent_moves.clear();
    }

    fn on_action_taken(&mut self, actor: Player, action: &G::Action, _state: &G) {
        if self.seat.is_some_and(|seat| seat != actor) {
            self.opponent_moves.record(*action);
        }
    }

    fn on_game_ended(&mut self, _state: &G) {
        tracing::debug!(
            "{}: observed {} opponent moves, {} nodes searched so far",
            self.name,
            self.opponent_moves.total(),
            self.nodes_searched
        );
    }
}

// ============================================================================
// BASELINE AGENTS
// ============================================================================

/// Agent that plays a uniformly random legal action
pub struct RandomAgent {
    name: String,
    policy: NoActionPolicy,
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            policy: NoActionPolicy::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn with_policy(mut self, policy: NoActionPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<G: GameState> Agent<G> for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn act(&mut self, state: &G) -> Result<G::Action, ArenaError> {
        match state.possible_actions().choose(&mut self.rng) {
            Some(action) => Ok(*action),
            None => self.policy.fallback::<G>(),
        }
    }
}

/// Rule-based agent that always plays the first legal action
pub struct FirstLegalAgent {
    name: String,
    policy: NoActionPolicy,
}

impl FirstLegalAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            policy: NoActionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: NoActionPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<G: GameState> Agent<G> for FirstLegalAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn act(&mut self, state: &G) -> Result<G::Action, ArenaError> {
        match state.possible_actions().first() {
            Some(action) => Ok(*action),
            None => self.policy.fallback::<G>(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
