pub mod minimax;

pub use minimax::{best_move, SearchResult, Searcher};
