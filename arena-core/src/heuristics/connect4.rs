//! Connect Four heuristics
//!
//! - THREAT: rewards discs that already sit in a line of three or more
//! - LINE: scores every four-cell window, with a centre-column bonus

use serde::{Deserialize, Serialize};

use crate::connect4::{Connect4, CONNECT, LINE_DIRECTIONS};
use crate::eval::Evaluator;
use crate::game::Player;

// ============================================================================
// THREAT EVALUATOR
// ============================================================================

/// Per-disc line bonus
const THREAT_VALUE: f32 = 100.0;

/// Counts discs that are part of a line of three or more.
///
/// Each such disc and direction is worth `+100` for the perspective player
/// and `-100` for the opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreatEvaluator;

impl Evaluator<Connect4> for ThreatEvaluator {
    fn evaluate(&self, state: &Connect4, perspective: Player) -> f32 {
        let mut score = 0.0;
        for row in 0..state.rows() as isize {
            for col in 0..state.cols() as isize {
                let Some(owner) = state.cell(row, col) else { continue };
                let sign = if owner == perspective { 1.0 } else { -1.0 };
                for (dr, dc) in LINE_DIRECTIONS {
                    if state.run_length(row, col, dr, dc, owner) >= CONNECT - 1 {
                        score += sign * THREAT_VALUE;
                    }
                }
            }
        }
        score
    }
}

// ============================================================================
// LINE EVALUATOR
// ============================================================================

/// Weights for [`LineEvaluator`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineWeights {
    /// Window with three own discs and one empty cell
    pub three: f32,
    /// Window with two own discs and two empty cells
    pub two: f32,
    /// Penalty for a window with three opponent discs and one empty cell
    pub opponent_three: f32,
    /// Per disc in the centre column
    pub center: f32,
}

impl Default for LineWeights {
    fn default() -> Self {
        Self {
            three: 100.0,
            two: 10.0,
            opponent_three: 80.0,
            center: 3.0,
        }
    }
}

/// Scores all four-cell windows on the grid
#[derive(Clone, Debug, Default)]
pub struct LineEvaluator {
    pub weights: LineWeights,
}

impl LineEvaluator {
    pub fn new(weights: LineWeights) -> Self {
        Self { weights }
    }

    fn score_window(&self, mine: usize, theirs: usize) -> f32 {
        let w = &self.weights;
        match (mine, theirs) {
            (3, 0) => w.three,
            (2, 0) => w.two,
            (0, 3) => -w.opponent_three,
            _ => 0.0,
        }
    }
}

impl Evaluator<Connect4> for LineEvaluator {
    fn evaluate(&self, state: &Connect4, perspective: Player) -> f32 {
        let mut score = 0.0;
        let span = CONNECT as isize - 1;

        for row in 0..state.rows() as isize {
            for col in 0..state.cols() as isize {
                for (dr, dc) in LINE_DIRECTIONS {
                    if !state.in_bounds(row + dr * span, col + dc * span) {
                        continue;
                    }
                    let (mut mine, mut theirs) = (0, 0);
                    for i in 0..CONNECT as isize {
                        match state.cell(row + dr * i, col + dc * i) {
                            Some(p) if p == perspective => mine += 1,
                            Some(_) => theirs += 1,
                            None => {}
                        }
                    }
                    score += self.score_window(mine, theirs);
                }
            }
        }

        let center = (state.cols() / 2) as isize;
        for row in 0..state.rows() as isize {
            match state.cell(row, center) {
                Some(p) if p == perspective => score += self.weights.center,
                Some(_) => score -= self.weights.center,
                None => {}
            }
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_even() {
        let state = Connect4::new();
        assert_eq!(ThreatEvaluator.evaluate(&state, Player::First), 0.0);
        assert_eq!(LineEvaluator::default().evaluate(&state, Player::First), 0.0);
    }

    #[test]
    fn test_threat_counts_lines_of_three() {
        let state = Connect4::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "OO.....",
            "XXX....",
        ])
        .unwrap();
        // Three X discs each in a horizontal line of three
        assert_eq!(ThreatEvaluator.evaluate(&state, Player::First), 300.0);
        assert_eq!(ThreatEvaluator.evaluate(&state, Player::Second), -300.0);
    }

    #[test]
    fn test_line_evaluator_penalises_opponent_three() {
        let state = Connect4::from_rows(&[
            ".......",
            ".......",
            ".......",
            "O......",
            "O......",
            "O.XX..X",
        ])
        .unwrap();
        let eval = LineEvaluator::default();
        // X: three open twos (+30), centre disc (+3), O's vertical three (-80)
        assert_eq!(eval.evaluate(&state, Player::First), -47.0);
        // O: vertical three (+100), vertical two (+10), X centre disc (-3)
        assert_eq!(eval.evaluate(&state, Player::Second), 107.0);
    }

    #[test]
    fn test_line_evaluator_prefers_open_three() {
        let three = Connect4::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XXX.OO.",
        ])
        .unwrap();
        let eval = LineEvaluator::default();
        assert!(eval.evaluate(&three, Player::First) > 0.0);
        assert!(eval.evaluate(&three, Player::Second) < 0.0);
    }

    #[test]
    fn test_center_weight() {
        let state = Connect4::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "...X...",
        ])
        .unwrap();
        let only_center = LineEvaluator::new(LineWeights {
            three: 0.0,
            two: 0.0,
            opponent_three: 0.0,
            center: 5.0,
        });
        assert_eq!(only_center.evaluate(&state, Player::First), 5.0);
        assert_eq!(only_center.evaluate(&state, Player::Second), -5.0);
    }
}
