//! Game state contract shared by every game the arena can play
//!
//! The search engine, the agents and the match runner only ever talk to a
//! game through [`GameState`]. Concrete games live in their own modules.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Seat at the table. All arena games are two-player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First = 0,
    Second = 1,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::First, Player::Second];

    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Seat index (0 or 1)
    pub fn index(self) -> usize {
        self as usize
    }
}

// ============================================================================
// STATE CONTRACT
// ============================================================================

/// A snapshot of a game in progress.
///
/// `Clone` must produce an independent copy: mutating the clone never affects
/// the original. The search engine relies on this to explore hypothetical
/// lines without touching the canonical match state.
///
/// Once [`is_finished`](GameState::is_finished) returns `true` it must keep
/// returning `true`, and no further action may validate.
pub trait GameState: Clone {
    /// A discrete choice available to the acting player.
    type Action: Copy + Eq + Hash + Debug;

    /// Legal actions in enumeration order. Search breaks ties in favour of
    /// the earliest action in this list.
    fn possible_actions(&self) -> Vec<Self::Action>;

    /// Whether `action` may be applied to this state.
    fn validate_action(&self, action: &Self::Action) -> bool;

    /// Apply `action` in place. Callers must validate first; behaviour for an
    /// invalid action is unspecified.
    fn update(&mut self, action: Self::Action);

    fn is_finished(&self) -> bool;

    /// Player whose turn it is.
    fn acting_player(&self) -> Player;

    /// Winner of a finished game, `None` for a draw or an unfinished game.
    fn winner(&self) -> Option<Player>;

    /// Signed outcome for `player` once the game is finished.
    fn result(&self, player: Player) -> f64;

    /// Placeholder action meaning "no legal move available".
    fn no_action() -> Self::Action;
}
