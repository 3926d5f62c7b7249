use anyhow::Result;
use clap::Parser;
use log::info;
use noughts::{Board, Move, Player, Searcher};
use std::io::{self, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic-tac-toe against the minimax engine", long_about = None)]
struct Args {
    /// Your side: 'x', 'o', or 'none' to watch the engine play itself
    #[arg(long, default_value = "x")]
    human: String,

    /// Starting board, e.g. "X.O/.X./..." (defaults to the empty board)
    #[arg(long)]
    board: Option<String>,

    /// Print the minimax value of every legal move before each engine move
    #[arg(long)]
    analyze: bool,
}

fn parse_side(side: &str) -> Result<Option<Player>> {
    match side.to_lowercase().as_str() {
        "x" => Ok(Some(Player::X)),
        "o" => Ok(Some(Player::O)),
        "none" | "n" => Ok(None),
        _ => anyhow::bail!("Invalid side: use 'x', 'o' or 'none'"),
    }
}

fn get_human_move(board: &Board) -> Result<Option<Move>> {
    loop {
        print!("Enter your move as row,col (e.g., 1,1) or 'quit': ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 { return Ok(None); }
        let input = input.trim();
        if input == "quit" { return Ok(None); }

        match input.parse::<Move>() {
            Ok(mv) if board.is_legal(mv) => return Ok(Some(mv)),
            Ok(mv) => println!("Illegal move: {} is already taken", mv),
            Err(e) => println!("{}", e),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let human = parse_side(&args.human)?;

    let mut board = match args.board {
        Some(s) => s.parse::<Board>()?,
        None => Board::initial(),
    };

    while let Some(side) = board.current_player() {
        println!("\n{}'s turn\n{}", side.as_char(), board);

        let mv = if Some(side) == human {
            match get_human_move(&board)? {
                Some(mv) => mv,
                None => { println!("Thanks for playing!"); return Ok(()); }
            }
        } else {
            let mut searcher = Searcher::default();
            if args.analyze {
                for (m, v) in searcher.score_moves(&board) { println!("  {} -> {:+}", m, v); }
            }
            let t0 = Instant::now();
            let res = searcher.search(&board);
            info!("searched {} nodes in {:.3}s", res.nodes, t0.elapsed().as_secs_f64());
            let Some(mv) = res.bestmove else { break };
            println!("Engine plays: {}", mv);
            mv
        };
        board = board.apply(mv)?;
    }

    println!("\n{}", board);
    match board.winner() {
        Some(p) => println!("\n{} wins!", p.as_char()),
        None => println!("\nGame is a draw!"),
    }
    Ok(())
}
