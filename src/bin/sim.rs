#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use tictactoe::{select_move, GameEngine, GameMode, GameStatus, Mark};

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <games> <seed>", args[0]);
        std::process::exit(1);
    }
    let games: u64 = args[1].parse()?;
    let seed: u64 = args[2].parse()?;
    if games == 0 {
        eprintln!("Usage: {} <games> <seed> (games must be > 0)", args[0]);
        std::process::exit(1);
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut x_wins = 0u64;
    let mut o_wins = 0u64;
    let mut draws = 0u64;
    let mut total_moves = 0u64;

    for _ in 0..games {
        // PvP mode with both sides driven by the heuristic, so the engine
        // enforces every rule on both players.
        let mut engine = GameEngine::new(GameMode::PvP);
        while engine.status() == GameStatus::InProgress {
            let index = select_move(engine.board(), engine.current_player(), &mut rng);
            engine
                .apply_move(index)
                .map_err(|e| anyhow::anyhow!(e))?;
            total_moves += 1;
        }
        match engine.status() {
            GameStatus::Won(Mark::X) => x_wins += 1,
            GameStatus::Won(Mark::O) => o_wins += 1,
            _ => draws += 1,
        }
    }

    let result = json!({
        "games": games,
        "x_wins": x_wins,
        "o_wins": o_wins,
        "draws": draws,
        "avg_moves": total_moves as f64 / games as f64,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
