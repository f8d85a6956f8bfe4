#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    cell_name, init_logging, parse_cell, print_board, status_line, GameEngine, GameMode,
    COMPUTER_MOVE_DELAY_MS,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, value_enum, default_value_t = Mode::Pvc, help = "Play against another human or against the computer")]
    mode: Mode,
    #[arg(long, help = "Fix RNG seed for reproducible computer play (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = COMPUTER_MOVE_DELAY_MS, help = "Pause before the computer replies, in milliseconds")]
    delay_ms: u64,
}

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum Mode {
    Pvp,
    Pvc,
}

#[cfg(feature = "std")]
impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Pvp => GameMode::PvP,
            Mode::Pvc => GameMode::PvC,
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut engine = GameEngine::new(cli.mode.into());

    println!("Tic-tac-toe. Enter a cell (e.g. B2 or 5), or a command:");
    println!("  restart | mode pvp | mode pvc | quit");

    let stdin = io::stdin();
    loop {
        let state = engine.state();
        println!();
        print_board(&state);
        println!("{}", status_line(&state));
        if state.status.is_over() {
            println!("Type r for a new game, mode pvp or mode pvc to switch, q to quit.");
        }

        if engine.computer_to_move() {
            // Input is not read while the reply is pending, so the human
            // cannot move during the computer's turn.
            std::thread::sleep(Duration::from_millis(cli.delay_ms));
            let record = engine
                .play_computer_turn(&mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("Computer plays {}", cell_name(record.index));
            continue;
        }

        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        match line {
            "" => {}
            "q" | "quit" => break,
            "r" | "restart" => engine.restart(),
            "mode pvp" => engine.switch_mode(GameMode::PvP),
            "mode pvc" => engine.switch_mode(GameMode::PvC),
            _ => match parse_cell(line) {
                Some(index) => {
                    if let Err(e) = engine.apply_move(index) {
                        // Ignorable input: the state is unchanged and the
                        // status line keeps showing whose turn it is.
                        log::debug!("move on {} ignored: {}", cell_name(index), e);
                    }
                }
                None => println!("Invalid input"),
            },
        }
    }
    Ok(())
}
