use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use tictactoe::{select_move, Board, Difficulty, Game, MoveOutcome, Side};

/// Walk every Player line of play against Hard; returns the number of
/// finished games.
fn explore(board: &Board, rng: &mut SmallRng) -> usize {
    let mut finished = 0;
    for idx in board.state().empty_cells().collect::<Vec<_>>() {
        let mut next = board.clone();
        match next.apply_move(idx) {
            MoveOutcome::Win(_) => panic!("Player won after {:?}", next.cells()),
            MoveOutcome::Draw => finished += 1,
            MoveOutcome::Rejected(r) => panic!("empty cell {} rejected: {:?}", idx, r),
            MoveOutcome::Continue { .. } => {
                let reply = select_move(&next.state(), Difficulty::Hard, rng)
                    .expect("open board must have a reply");
                match next.apply_move(reply) {
                    MoveOutcome::Win(Side::Opponent) | MoveOutcome::Draw => finished += 1,
                    MoveOutcome::Continue { .. } => finished += explore(&next, rng),
                    other => panic!("unexpected reply outcome {:?}", other),
                }
            }
        }
    }
    finished
}

#[test]
fn test_hard_never_loses() {
    let mut rng = SmallRng::seed_from_u64(0);
    let games = explore(&Board::new(), &mut rng);
    assert!(games > 0);
}

#[test]
fn test_opponent_move_plays_for_opponent() {
    let mut game = Game::with_seed(5);
    game.set_difficulty("hard");
    game.submit_move(0);
    let reply = game.opponent_move();
    assert_eq!(reply.index, Some(4));
    assert_eq!(
        reply.outcome,
        Some(MoveOutcome::Continue { next: Side::Player })
    );
    assert_eq!(game.state().cells[4].side(), Some(Side::Opponent));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn medium_against_random_always_finishes(seed in any::<u64>()) {
        let mut game = Game::with_seed(seed);
        game.set_difficulty("medium");
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut plies = 0;
        while !game.state().terminal {
            let state = game.state();
            let outcome = match state.turn {
                Side::Player => {
                    let idx = select_move(&state, Difficulty::Easy, &mut rng).unwrap();
                    game.submit_move(idx as i64)
                }
                Side::Opponent => game.opponent_move().outcome.unwrap(),
            };
            prop_assert!(outcome.is_accepted());
            plies += 1;
            prop_assert!(plies <= 9);
        }
        prop_assert!(game.opponent_move().index.is_none());
    }
}
