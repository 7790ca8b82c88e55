//! Search scores over the extended reals
//!
//! `Loss` and `Win` stand for −∞ and +∞ and are reserved for certain
//! outcomes. Everything a heuristic produces is a finite `Value`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

use crate::game::{GameState, Player};

/// Totally ordered score: `Loss < Value(_) < Win`
#[derive(Clone, Copy, Debug)]
pub enum Score {
    /// Certain loss (−∞)
    Loss,
    /// Finite heuristic or draw value
    Value(f32),
    /// Certain win (+∞)
    Win,
}

impl Score {
    /// Wrap a heuristic estimate.
    ///
    /// NaN maps to 0 and infinities are clamped to the finite range, so a
    /// heuristic can never compare equal to a certain outcome.
    pub fn value(v: f32) -> Self {
        if v.is_nan() {
            return Score::Value(0.0);
        }
        // `+ 0.0` folds -0.0 into 0.0 so both compare equal under total_cmp
        Score::Value(v.clamp(-f32::MAX, f32::MAX) + 0.0)
    }

    /// Exact score of a finished state from `perspective`'s point of view
    pub fn terminal<G: GameState>(state: &G, perspective: Player) -> Self {
        match state.winner() {
            Some(p) if p == perspective => Score::Win,
            Some(_) => Score::Loss,
            None => Score::value(state.result(perspective) as f32),
        }
    }

    /// True for `Win` and `Loss`
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Score::Value(_))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Score::Loss, Score::Loss) | (Score::Win, Score::Win) => Ordering::Equal,
            (Score::Loss, _) | (_, Score::Win) => Ordering::Less,
            (_, Score::Loss) | (Score::Win, _) => Ordering::Greater,
            (Score::Value(a), Score::Value(b)) => a.total_cmp(b),
        }
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        match self {
            Score::Loss => Score::Win,
            Score::Win => Score::Loss,
            Score::Value(v) => Score::value(-v),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Loss => write!(f, "-inf"),
            Score::Win => write!(f, "+inf"),
            Score::Value(v) => write!(f, "{}", v),
        }
    }
}
