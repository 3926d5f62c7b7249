use rand::{SeedableRng, Rng};
use rand::rngs::SmallRng;
use log::info;
use serde::{Deserialize, Serialize};
use crate::board::{Board, Move, Player};
use crate::error::InvalidMoveError;
use crate::search::best_move;
use std::fs::{File, create_dir_all};
use std::io::{Write, BufRead, BufWriter, BufReader};
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Engine,
    Random,
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "engine" | "e" => Ok(PlayerKind::Engine),
            "random" | "r" => Ok(PlayerKind::Random),
            _ => Err(format!("unknown player kind '{s}' (use 'engine' or 'random')")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub seed: u64,
    pub random_plies: usize, // opening plies chosen at random regardless of player kind
    pub x: PlayerKind,
    pub o: PlayerKind,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 1, seed: 42, random_plies: 0, x: PlayerKind::Engine, o: PlayerKind::Engine }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub result: i8, // 1 X win, 0 draw, -1 O win
}

pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let games: Vec<GameRecord> = (0..params.games).map(|_| play_game(params, &mut rng)).collect();
    let x_wins = games.iter().filter(|g| g.result > 0).count();
    let o_wins = games.iter().filter(|g| g.result < 0).count();
    info!("self-play: {} games, X wins {}, O wins {}, draws {}",
        games.len(), x_wins, o_wins, games.len() - x_wins - o_wins);
    games
}

pub fn play_game(params: &SelfPlayParams, rng: &mut SmallRng) -> GameRecord {
    let mut board = Board::initial();
    let mut record = GameRecord { moves: Vec::new(), result: 0 };
    while let Some(side) = board.current_player() {
        let kind = if record.moves.len() < params.random_plies {
            PlayerKind::Random
        } else {
            match side { Player::X => params.x, Player::O => params.o }
        };
        let mv = match kind {
            PlayerKind::Engine => best_move(&board),
            PlayerKind::Random => select_random_move(&board, rng),
        };
        let Some(next) = mv.and_then(|m| board.apply(m).ok().map(|b| (m, b))) else { break };
        record.moves.push(next.0);
        board = next.1;
    }
    record.result = board.utility() as i8;
    record
}

fn select_random_move(board: &Board, rng: &mut SmallRng) -> Option<Move> {
    let moves = board.legal_moves()?;
    if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
}

/// Re-plays a record from the empty board.
pub fn replay(game: &GameRecord) -> Result<Board, InvalidMoveError> {
    Board::from_moves(&game.moves)
}

/// Writes one JSON object per line.
pub fn write_games<P: AsRef<Path>>(games: &[GameRecord], path: P) -> std::io::Result<()> {
    if let Some(dir) = path.as_ref().parent() {
        if !dir.as_os_str().is_empty() { create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

pub fn read_games<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<GameRecord>> {
    let f = BufReader::new(File::open(path)?);
    let mut games = Vec::new();
    for line in f.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        games.push(serde_json::from_str(&line)?);
    }
    Ok(games)
}
