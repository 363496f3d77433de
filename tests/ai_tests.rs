use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use tictactoe::{
    best_move, heuristic_move, immediate_win, move_scores, random_move, select_move, Board, Cell,
    Difficulty, GameState, Side,
};

/// Build a snapshot from a 9-char picture such as `"XX_OO____"`.
fn grid(picture: &str) -> GameState {
    let mut state = GameState::new();
    for (idx, ch) in picture.chars().enumerate() {
        state.cells[idx] = match ch {
            'X' => Cell::Player,
            'O' => Cell::Opponent,
            _ => Cell::Empty,
        };
    }
    let (player, opponent) = state.mark_counts();
    state.turn = if player > opponent {
        Side::Opponent
    } else {
        Side::Player
    };
    state.terminal = state.winner().is_some() || state.is_full();
    state
}

#[test]
fn test_hard_answers_corner_with_center() {
    let mut rng = SmallRng::seed_from_u64(1);
    let state = grid("X________");
    assert_eq!(select_move(&state, Difficulty::Hard, &mut rng), Some(4));
}

#[test]
fn test_corner_opening_scores() {
    let scores = move_scores(&grid("X________").cells);
    assert_eq!(scores[0], None);
    assert_eq!(scores[4], Some(0));
    for (idx, score) in scores.iter().enumerate().skip(1) {
        if idx != 4 {
            assert!(score.unwrap() < 0, "cell {} scored {:?}", idx, score);
        }
    }
}

#[test]
fn test_hard_takes_immediate_win() {
    let mut rng = SmallRng::seed_from_u64(1);
    let state = grid("OO_XX_X__");
    assert_eq!(select_move(&state, Difficulty::Hard, &mut rng), Some(2));
    assert_eq!(move_scores(&state.cells)[2], Some(10));
}

#[test]
fn test_hard_blocks() {
    let state = grid("XX__O____");
    assert_eq!(best_move(&state.cells), Some(2));
}

#[test]
fn test_medium_takes_first_winning_cell() {
    let mut rng = SmallRng::seed_from_u64(7);
    let state = grid("XX_OO____");
    assert_eq!(select_move(&state, Difficulty::Medium, &mut rng), Some(5));
}

#[test]
fn test_medium_completes_own_row() {
    let mut rng = SmallRng::seed_from_u64(7);
    let state = grid("OO_XX_X__");
    assert_eq!(select_move(&state, Difficulty::Medium, &mut rng), Some(2));
}

#[test]
fn test_medium_blocks_player() {
    let mut rng = SmallRng::seed_from_u64(7);
    let state = grid("XX__O____");
    assert_eq!(select_move(&state, Difficulty::Medium, &mut rng), Some(2));
}

#[test]
fn test_medium_prefers_win_over_block() {
    // blocking cell 2 comes first in scan order, winning cell 8 must still win
    let mut rng = SmallRng::seed_from_u64(7);
    let state = grid("XX_X__OO_");
    assert_eq!(immediate_win(&state.cells, Side::Player), Some(2));
    assert_eq!(select_move(&state, Difficulty::Medium, &mut rng), Some(8));
}

#[test]
fn test_easy_only_picks_empty_cells() {
    let state = grid("XOX_O_X__");
    let open: Vec<usize> = state.empty_cells().collect();
    let mut rng = SmallRng::seed_from_u64(42);
    let mut seen = [false; 9];
    for _ in 0..200 {
        let idx = select_move(&state, Difficulty::Easy, &mut rng).unwrap();
        assert!(open.contains(&idx));
        seen[idx] = true;
    }
    assert!(open.iter().all(|&idx| seen[idx]));
}

#[test]
fn test_no_move_on_finished_board() {
    let mut rng = SmallRng::seed_from_u64(3);
    let won = grid("XXXOO____");
    let drawn = grid("XOXXOOOXX");
    assert!(drawn.terminal);
    for difficulty in Difficulty::ALL {
        assert_eq!(select_move(&won, difficulty, &mut rng), None);
        assert_eq!(select_move(&drawn, difficulty, &mut rng), None);
    }
}

#[test]
fn test_selection_does_not_touch_snapshot() {
    let mut rng = SmallRng::seed_from_u64(3);
    let state = grid("X___O___X");
    let copy = state;
    for difficulty in Difficulty::ALL {
        select_move(&state, difficulty, &mut rng);
        assert_eq!(state, copy);
    }
}

#[test]
fn test_difficulty_labels() {
    assert_eq!(Difficulty::from_label("HARD"), Difficulty::Hard);
    assert_eq!(Difficulty::from_label("Medium"), Difficulty::Medium);
    assert_eq!(Difficulty::from_label("easy"), Difficulty::Easy);
    assert_eq!(Difficulty::from_label("bogus"), Difficulty::Easy);
    assert_eq!(Difficulty::from_label(""), Difficulty::Easy);
    assert_eq!("hArD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    assert_eq!(Difficulty::Medium.to_string(), "Medium");
}

/// Open position reached by `plies` random moves from an empty board.
fn random_position(seed: u64, plies: usize) -> Option<GameState> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    for _ in 0..plies {
        let idx = random_move(board.cells(), &mut rng)?;
        board.apply_move(idx);
        if board.is_terminal() {
            return None;
        }
    }
    Some(board.state())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn medium_wins_then_blocks(seed in any::<u64>(), plies in 0usize..8) {
        if let Some(state) = random_position(seed, plies) {
            let mut rng = SmallRng::seed_from_u64(seed.rotate_left(17));
            let choice = heuristic_move(&state.cells, &mut rng).unwrap();
            prop_assert!(state.cells[choice].is_empty());
            match (
                immediate_win(&state.cells, Side::Opponent),
                immediate_win(&state.cells, Side::Player),
            ) {
                (Some(win), _) => prop_assert_eq!(choice, win),
                (None, Some(block)) => prop_assert_eq!(choice, block),
                (None, None) => {}
            }
        }
    }
}
