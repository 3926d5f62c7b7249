// Game-tree enumeration by cloning child boards (boards are Copy, no unmake needed)
use std::collections::HashSet;
use crate::board::{Board, Player};

pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let Some(moves) = board.legal_moves() else { return 0 };
    moves.into_iter()
        .filter_map(|m| board.apply(m).ok())
        .map(|child| perft(&child, depth - 1))
        .sum()
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTally {
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

impl GameTally {
    pub fn total(&self) -> u64 { self.x_wins + self.o_wins + self.draws }

    fn add(self, other: GameTally) -> GameTally {
        GameTally {
            x_wins: self.x_wins + other.x_wins,
            o_wins: self.o_wins + other.o_wins,
            draws: self.draws + other.draws,
        }
    }
}

/// Outcomes of every complete game playable from `board`.
pub fn count_games(board: &Board) -> GameTally {
    let Some(moves) = board.legal_moves() else {
        return match board.winner() {
            Some(Player::X) => GameTally { x_wins: 1, ..GameTally::default() },
            Some(Player::O) => GameTally { o_wins: 1, ..GameTally::default() },
            None => GameTally { draws: 1, ..GameTally::default() },
        };
    };
    moves.into_iter()
        .filter_map(|m| board.apply(m).ok())
        .map(|child| count_games(&child))
        .fold(GameTally::default(), GameTally::add)
}

/// Every distinct board reachable by legal play from `board`, `board` included.
pub fn reachable_positions(board: &Board) -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![*board];
    while let Some(b) = stack.pop() {
        if !seen.insert(b) { continue; }
        for m in b.legal_moves().unwrap_or_default() {
            if let Ok(child) = b.apply(m) { stack.push(child); }
        }
    }
    seen
}
