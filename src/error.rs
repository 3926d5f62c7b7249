use thiserror::Error;

/// Raised by `Board::apply` when the move is not in the board's legal moves:
/// out-of-range coordinates, an occupied cell, or a finished game.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid move: ({row}, {col}) is not a legal move on this board")]
pub struct InvalidMoveError {
    pub row: usize,
    pub col: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid move '{input}': expected a row and column in 0-2, e.g. '1,2'")]
    Move { input: String },

    #[error("invalid board: expected 9 cells, got {got}")]
    BoardLength { got: usize },

    #[error("invalid character '{character}' in board (use X, O or .)")]
    BoardCell { character: char },
}
