//! Position evaluation
//!
//! An [`Evaluator`] scores non-terminal positions. Search never asks it about
//! a finished state; those are scored exactly by [`Score::terminal`].
//!
//! [`Score::terminal`]: crate::score::Score::terminal

use crate::game::{GameState, Player};

/// Pluggable heuristic for non-terminal positions.
///
/// Implementations must be pure, deterministic and finite.
pub trait Evaluator<G: GameState> {
    /// Score `state` from `perspective`'s point of view (higher is better)
    fn evaluate(&self, state: &G, perspective: Player) -> f32;
}

impl<G, F> Evaluator<G> for F
where
    G: GameState,
    F: Fn(&G, Player) -> f32,
{
    fn evaluate(&self, state: &G, perspective: Player) -> f32 {
        self(state, perspective)
    }
}

/// Evaluator that rates every position as even
#[derive(Clone, Copy, Debug, Default)]
pub struct Flat;

impl<G: GameState> Evaluator<G> for Flat {
    fn evaluate(&self, _state: &G, _perspective: Player) -> f32 {
        0.0
    }
}
