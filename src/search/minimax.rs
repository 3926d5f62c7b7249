use log::debug;
use crate::board::{Board, Move, Player};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub bestmove: Option<Move>,
    /// Minimax value from X's point of view: +1, 0 or -1.
    pub score: i32,
    pub nodes: u64,
}

/// Plain exhaustive minimax: no pruning, no memoization.
#[derive(Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let res = match board.current_player() {
            None => SearchResult { bestmove: None, score: board.utility(), nodes: 0 },
            Some(side) => {
                let best = self.pick_best(board, side);
                SearchResult { bestmove: best.map(|(m, _)| m), score: best.map_or(0, |(_, v)| v), nodes: self.nodes }
            }
        };
        debug!("minimax: best={:?} score={} nodes={}", res.bestmove.map(|m| m.to_string()), res.score, res.nodes);
        res
    }

    /// Minimax value of every legal root move, in move-generation order.
    pub fn score_moves(&mut self, board: &Board) -> Vec<(Move, i32)> {
        let Some(side) = board.current_player() else { return Vec::new() };
        let moves = board.legal_moves().unwrap_or_default();
        moves.into_iter()
            .filter_map(|mv| board.apply(mv).ok().map(|child| (mv, self.child_value(&child, side))))
            .collect()
    }

    // Fold keeps the first move that reaches the best value: strict `>` for X, `<` for O.
    fn pick_best(&mut self, board: &Board, side: Player) -> Option<(Move, i32)> {
        self.score_moves(board).into_iter().fold(None, |best, (mv, v)| match best {
            Some((_, bv)) if !improves(side, v, bv) => best,
            _ => Some((mv, v)),
        })
    }

    fn child_value(&mut self, child: &Board, side: Player) -> i32 {
        match side {
            Player::X => self.min_value(child),
            Player::O => self.max_value(child),
        }
    }

    fn max_value(&mut self, board: &Board) -> i32 {
        self.nodes += 1;
        let Some(moves) = board.legal_moves() else { return board.utility() };
        moves.into_iter()
            .filter_map(|mv| board.apply(mv).ok())
            .map(|child| self.min_value(&child))
            .max()
            .unwrap_or_else(|| board.utility())
    }

    fn min_value(&mut self, board: &Board) -> i32 {
        self.nodes += 1;
        let Some(moves) = board.legal_moves() else { return board.utility() };
        moves.into_iter()
            .filter_map(|mv| board.apply(mv).ok())
            .map(|child| self.max_value(&child))
            .min()
            .unwrap_or_else(|| board.utility())
    }
}

fn improves(side: Player, v: i32, best: i32) -> bool {
    match side {
        Player::X => v > best,
        Player::O => v < best,
    }
}

/// Optimal move for the side to move, or `None` on a finished board.
pub fn best_move(board: &Board) -> Option<Move> {
    Searcher::default().search(board).bestmove
}
