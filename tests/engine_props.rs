use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{select_move, GameEngine, GameMode, GameStatus, Mark, WIN_LINES};

/// Drive a PvP engine through an arbitrary index sequence, dropping
/// rejections the way a frontend would.
fn engine_after(moves: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new(GameMode::PvP);
    for &index in moves {
        let _ = engine.apply_move(index);
    }
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// X always has equal or one more mark than O, and the two sides never
    /// share a cell.
    #[test]
    fn mark_counts_stay_balanced(moves in prop::collection::vec(0..9usize, 0..40)) {
        let engine = engine_after(&moves);
        let xs = engine.board().count(Mark::X);
        let os = engine.board().count(Mark::O);
        prop_assert!(xs == os || xs == os + 1);
        prop_assert!((engine.board().marks(Mark::X) & engine.board().marks(Mark::O)).is_empty());
    }

    /// A won game owns one of the eight fixed lines; a drawn game has a
    /// full board and no owned line.
    #[test]
    fn status_matches_the_board(moves in prop::collection::vec(0..9usize, 0..40)) {
        let engine = engine_after(&moves);
        match engine.status() {
            GameStatus::Won(mark) => {
                let line = engine.winning_line().unwrap();
                prop_assert!(WIN_LINES.contains(&line));
                for &index in line.iter() {
                    prop_assert_eq!(engine.board().cell(index).unwrap(), Some(mark));
                }
            }
            GameStatus::Drawn => {
                prop_assert!(engine.board().is_full());
                prop_assert!(engine.board().winning_line(Mark::X).is_none());
                prop_assert!(engine.board().winning_line(Mark::O).is_none());
            }
            GameStatus::InProgress => {
                prop_assert!(engine.winning_line().is_none());
                prop_assert!(!engine.board().is_full());
            }
        }
    }

    /// A rejected move leaves the state bit-for-bit unchanged, and a move is
    /// rejected exactly when the game is over or the cell is taken.
    #[test]
    fn rejections_are_noops(
        moves in prop::collection::vec(0..9usize, 0..40),
        probe in 0..9usize,
    ) {
        let mut engine = engine_after(&moves);
        let before = engine.state();
        let expect_reject = before.status.is_over() || before.cells[probe].is_some();
        let result = engine.apply_move(probe);
        prop_assert_eq!(result.is_err(), expect_reject);
        if expect_reject {
            prop_assert_eq!(engine.state(), before);
        }
    }

    /// The computer player never selects an occupied cell.
    #[test]
    fn computer_selects_vacant_cells(
        moves in prop::collection::vec(0..9usize, 0..40),
        seed in any::<u64>(),
    ) {
        let engine = engine_after(&moves);
        if engine.status() == GameStatus::InProgress {
            let mut rng = SmallRng::seed_from_u64(seed);
            let index = select_move(engine.board(), engine.current_player(), &mut rng);
            prop_assert!(engine.board().is_vacant(index).unwrap());
        }
    }
}
