use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use noughts::selfplay::{play_game, write_games, PlayerKind, SelfPlayParams};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "noughts-selfplay", about = "Generate self-play games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Opening plies played at random before the players take over
    #[arg(long, default_value_t = 2)]
    random_plies: usize,
    /// Kind of player for X: engine or random
    #[arg(long, default_value = "engine")]
    x: PlayerKind,
    /// Kind of player for O: engine or random
    #[arg(long, default_value = "engine")]
    o: PlayerKind,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams { games: a.games, seed: a.seed, random_plies: a.random_plies, x: a.x, o: a.o };
    eprintln!("Generating {} games (x={:?}, o={:?}, random_plies={}, seed={})", a.games, a.x, a.o, a.random_plies, a.seed);

    let pb = ProgressBar::new(params.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games ({eta})")?);
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let games: Vec<_> = (0..params.games).map(|_| {
        let g = play_game(&params, &mut rng);
        pb.inc(1);
        g
    }).collect();
    pb.finish_and_clear();

    let x_wins = games.iter().filter(|g| g.result > 0).count();
    let o_wins = games.iter().filter(|g| g.result < 0).count();
    eprintln!("X wins {}, O wins {}, draws {}", x_wins, o_wins, games.len() - x_wins - o_wins);

    write_games(&games, &a.out)?;
    eprintln!("Wrote {} games to {}", games.len(), a.out.display());
    Ok(())
}
