//! Connect Four
//!
//! Discs drop into the lowest empty cell of a column. Four in a row
//! horizontally, vertically or diagonally wins; a full grid is a draw.
//! Row 0 is the top of the grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{GameState, Player};

// ============================================================================
// CONSTANTS
// ============================================================================

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Discs in a line needed to win
pub const CONNECT: usize = 4;

/// Line directions as (d_row, d_col): horizontal, vertical, two diagonals
pub const LINE_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

// ============================================================================
// TYPES
// ============================================================================

/// Drop a disc into a column. `Connect4Action::NONE` is the sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connect4Action(pub i32);

impl Connect4Action {
    pub const NONE: Connect4Action = Connect4Action(-1);

    /// Column index, `None` for the sentinel
    pub fn column(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connect4 {
    rows: usize,
    cols: usize,
    grid: Vec<Option<Player>>,
    to_move: Player,
    winner: Option<Player>,
    discs: usize,
}

impl Default for Connect4 {
    fn default() -> Self {
        Self::new()
    }
}

impl Connect4 {
    /// Standard 6x7 grid
    pub fn new() -> Self {
        Self::with_size(DEFAULT_ROWS, DEFAULT_COLS)
    }

    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            grid: vec![None; rows * cols],
            to_move: Player::First,
            winner: None,
            discs: 0,
        }
    }

    /// Build a position from text rows, top row first.
    ///
    /// `X` is `Player::First`, `O` is `Player::Second`, `.` is empty. The
    /// player to move follows from the disc counts.
    pub fn from_rows(rows: &[&str]) -> anyhow::Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if height == 0 || width == 0 {
            anyhow::bail!("empty grid");
        }

        let mut state = Self::with_size(height, width);
        let (mut first, mut second) = (0usize, 0usize);

        for (r, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                anyhow::bail!("row {} has {} cells, expected {}", r, line.chars().count(), width);
            }
            for (c, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'X' => Some(Player::First),
                    'O' => Some(Player::Second),
                    '.' => None,
                    other => anyhow::bail!("unknown cell '{}' at row {} col {}", other, r, c),
                };
                match cell {
                    Some(Player::First) => first += 1,
                    Some(Player::Second) => second += 1,
                    None => {}
                }
                state.grid[r * width + c] = cell;
            }
        }

        state.to_move = match first.checked_sub(second) {
            Some(0) => Player::First,
            Some(1) => Player::Second,
            _ => anyhow::bail!("impossible disc counts: X={} O={}", first, second),
        };
        state.discs = first + second;
        state.winner = state.find_winner();
        Ok(state)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Disc at (row, col), `None` if empty or out of bounds
    pub fn cell(&self, row: isize, col: isize) -> Option<Player> {
        if self.in_bounds(row, col) {
            self.grid[row as usize * self.cols + col as usize]
        } else {
            None
        }
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    pub fn discs_played(&self) -> usize {
        self.discs
    }

    /// Consecutive discs of `player` through (row, col) along one direction,
    /// counting the cell itself.
    pub fn run_length(&self, row: isize, col: isize, d_row: isize, d_col: isize, player: Player) -> usize {
        if self.cell(row, col) != Some(player) {
            return 0;
        }
        let mut length = 1;
        for sign in [1, -1] {
            let (mut r, mut c) = (row + sign * d_row, col + sign * d_col);
            while self.cell(r, c) == Some(player) {
                length += 1;
                r += sign * d_row;
                c += sign * d_col;
            }
        }
        length
    }

    /// Row a disc dropped into `col` would land on
    fn landing_row(&self, col: usize) -> Option<usize> {
        (0..self.rows).rev().find(|&r| self.grid[r * self.cols + col].is_none())
    }

    fn find_winner(&self) -> Option<Player> {
        for row in 0..self.rows as isize {
            for col in 0..self.cols as isize {
                if let Some(player) = self.cell(row, col) {
                    for (dr, dc) in LINE_DIRECTIONS {
                        if self.run_length(row, col, dr, dc, player) >= CONNECT {
                            return Some(player);
                        }
                    }
                }
            }
        }
        None
    }
}

// ============================================================================
// STATE CONTRACT
// ============================================================================

impl GameState for Connect4 {
    type Action = Connect4Action;

    fn possible_actions(&self) -> Vec<Connect4Action> {
        if self.is_finished() {
            return Vec::new();
        }
        (0..self.cols)
            .filter(|&c| self.grid[c].is_none())
            .filter_map(|c| i32::try_from(c).ok().map(Connect4Action))
            .collect()
    }

    fn validate_action(&self, action: &Connect4Action) -> bool {
        match action.column() {
            Some(col) if col < self.cols => !self.is_finished() && self.grid[col].is_none(),
            _ => false,
        }
    }

    fn update(&mut self, action: Connect4Action) {
        let Some(col) = action.column() else { return };
        let Some(row) = self.landing_row(col) else { return };

        let player = self.to_move;
        self.grid[row * self.cols + col] = Some(player);
        self.discs += 1;

        let won = LINE_DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.run_length(row as isize, col as isize, dr, dc, player) >= CONNECT);
        if won {
            self.winner = Some(player);
        }
        self.to_move = player.opponent();
    }

    fn is_finished(&self) -> bool {
        self.winner.is_some() || self.discs == self.rows * self.cols
    }

    fn acting_player(&self) -> Player {
        self.to_move
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

    fn no_action() -> Connect4Action {
        Connect4Action::NONE
    }
}

impl fmt::Display for Connect4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let ch = match self.grid[row * self.cols + col] {
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
