//! Tic-Tac-Toe heuristic

use crate::eval::Evaluator;
use crate::game::Player;
use crate::tictactoe::{TicTacToe, LINES};

/// Scores lines that are still open for one side.
///
/// A line holding only one player's marks is worth 10 with two marks and 1
/// with a single mark; mixed or empty lines are worth nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenLinesEvaluator;

fn line_value(marks: usize) -> f32 {
    match marks {
        2 => 10.0,
        1 => 1.0,
        _ => 0.0,
    }
}

impl Evaluator<TicTacToe> for OpenLinesEvaluator {
    fn evaluate(&self, state: &TicTacToe, perspective: Player) -> f32 {
        let mut score = 0.0;
        for line in &LINES {
            let (mut mine, mut theirs) = (0, 0);
            for &i in line {
                match state.cell(i) {
                    Some(p) if p == perspective => mine += 1,
                    Some(_) => theirs += 1,
                    None => {}
                }
            }
            if theirs == 0 {
                score += line_value(mine);
            } else if mine == 0 {
                score -= line_value(theirs);
            }
        }
        score
    }
}
