//! Tic-Tac-Toe on a 3x3 board

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{GameState, Player};

/// The eight winning lines as cell indices (row-major)
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Mark a cell (0..9, row-major). `TicTacToeAction::NONE` is the sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeAction(pub u8);

impl TicTacToeAction {
    pub const NONE: TicTacToeAction = TicTacToeAction(u8::MAX);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicTacToe {
    cells: [Option<Player>; 9],
    marks: u8,
    winner: Option<Player>,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, index: usize) -> Option<Player> {
        self.cells.get(index).copied().flatten()
    }

    fn line_owner(&self, line: &[usize; 3]) -> Option<Player> {
        let first = self.cells[line[0]]?;
        line.iter().all(|&i| self.cells[i] == Some(first)).then_some(first)
    }
}

impl GameState for TicTacToe {
    type Action = TicTacToeAction;

    fn possible_actions(&self) -> Vec<TicTacToeAction> {
        if self.is_finished() {
            return Vec::new();
        }
        (0..9u8)
            .filter(|&i| self.cells[i as usize].is_none())
            .map(TicTacToeAction)
            .collect()
    }

    fn validate_action(&self, action: &TicTacToeAction) -> bool {
        !self.is_finished() && (action.0 as usize) < 9 && self.cells[action.0 as usize].is_none()
    }

    fn update(&mut self, action: TicTacToeAction) {
        let player = self.acting_player();
        let Some(slot) = self.cells.get_mut(action.0 as usize) else { return };
        *slot = Some(player);
        self.marks += 1;
        if LINES.iter().any(|line| self.line_owner(line) == Some(player)) {
            self.winner = Some(player);
        }
    }

    fn is_finished(&self) -> bool {
        self.winner.is_some() || self.marks == 9
    }

    fn acting_player(&self) -> Player {
        if self.marks % 2 == 0 {
            Player::First
        } else {
            Player::Second
        }
    }

    fn winner(&self) -> Option<Player> {
        self.winner
    }

    fn result(&self, player: Player) -> f64 {
        match self.winner {
            Some(w) if w == player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }

    fn no_action() -> TicTacToeAction {
        TicTacToeAction::NONE
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            for cell in row {
                let ch = match cell {
                    Some(Player::First) => 'X',
                    Some(Player::Second) => 'O',
                    None => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
