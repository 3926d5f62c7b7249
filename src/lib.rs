// Tic-tac-toe engine: board rules, exhaustive minimax, perft and self-play
pub mod board;
pub mod error;
pub mod perft;
pub mod search;
pub mod selfplay;

pub use board::{Board, Cell, Move, Player};
pub use error::{InvalidMoveError, ParseError};
pub use search::{best_move, SearchResult, Searcher};
