// 3x3 board as a plain Copy value: every transition returns a fresh board
pub mod notation;

use serde::{Deserialize, Serialize};
use crate::error::InvalidMoveError;

pub const SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self { Player::X => Player::O, Player::O => Player::X }
    }

    pub fn as_char(self) -> char {
        match self { Player::X => 'X', Player::O => 'O' }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self { Self { row, col } }

    /// Row-major index 0..9; `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < SIZE * SIZE { Some(Self::new(index / SIZE, index % SIZE)) } else { None }
    }

    pub fn index(self) -> usize { self.row * SIZE + self.col }

    fn in_bounds(self) -> bool { self.row < SIZE && self.col < SIZE }
}

/// Rows, then columns, then the main diagonal, then the anti-diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    pub fn initial() -> Self { Self::default() }

    /// Builds a board from raw cells. Piece counts are not checked; boards
    /// that legal play cannot reach are outside the engine's contract.
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self { Self { cells } }

    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] { &self.cells }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| **c == Cell::Empty).count()
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().flatten().filter(|c| **c == Cell::Mark(player)).count()
    }

    /// Side to move, derived from the number of empty cells (X moves first).
    /// `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        if self.is_terminal() { return None; }
        if self.empty_count() % 2 == 1 { Some(Player::X) } else { Some(Player::O) }
    }

    /// Empty cells in row-major order, or `None` for a finished game.
    /// The order is a convenience only; treat the result as a set.
    pub fn legal_moves(&self) -> Option<Vec<Move>> {
        if self.is_terminal() { return None; }
        let mut moves = Vec::with_capacity(self.empty_count());
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if *cell == Cell::Empty { moves.push(Move::new(row, col)); }
            }
        }
        Some(moves)
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        mv.in_bounds() && !self.is_terminal() && self.cells[mv.row][mv.col] == Cell::Empty
    }

    /// Returns the board after the side to move marks `mv`. `self` is untouched.
    pub fn apply(&self, mv: Move) -> Result<Board, InvalidMoveError> {
        let player = match self.current_player() {
            Some(p) if self.is_legal(mv) => p,
            _ => return Err(InvalidMoveError { row: mv.row, col: mv.col }),
        };
        let mut next = *self;
        next.cells[mv.row][mv.col] = Cell::Mark(player);
        Ok(next)
    }

    /// Owner of the first fully marked line, scanning `LINES` in order.
    /// `None` for both ongoing games and draws; use `is_terminal` to tell them apart.
    pub fn winner(&self) -> Option<Player> {
        LINES.into_iter().find_map(|line| {
            let [a, b, c] = line.map(|(r, col)| self.cells[r][col]);
            match a {
                Cell::Mark(p) if a == b && b == c => Some(p),
                _ => None,
            }
        })
    }

    pub fn is_full(&self) -> bool { self.empty_count() == 0 }

    pub fn is_terminal(&self) -> bool { self.winner().is_some() || self.is_full() }

    /// +1 if X owns a line, -1 if O does, 0 otherwise. Only meaningful on terminal boards.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }
}
