use clap::Parser;
use noughts::Board;
use noughts::perft::{count_games, perft, reachable_positions};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the tic-tac-toe engine")]
struct Args {
    /// Search depth in plies
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board string or "startpos"
    #[arg(value_name = "BOARD", default_value = "startpos")]
    board: String,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Also count complete games by outcome and distinct reachable positions
    #[arg(long, default_value_t = false)]
    tally: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board = if args.board == "startpos" { Board::initial() } else { args.board.parse::<Board>()? };

    let t0 = Instant::now();
    let nodes = perft(&board, args.depth);
    let dt = t0.elapsed().as_secs_f64();
    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { f64::INFINITY };
        println!("nodes: {} elapsed: {:.3}s nps: {:.0}", nodes, dt, nps);
    } else {
        println!("nodes: {}", nodes);
    }

    if args.tally {
        let t = count_games(&board);
        println!("games: {} (X wins {}, O wins {}, draws {})", t.total(), t.x_wins, t.o_wins, t.draws);
        println!("positions: {}", reachable_positions(&board).len());
    }
    Ok(())
}
