use rand::{rngs::SmallRng, SeedableRng};
use tictactoe::{
    BoardError, Cell, Difficulty, Game, GameState, MoveOutcome, OpponentMove, RejectReason, Side,
};

#[test]
fn test_new_session_defaults() {
    let game = Game::with_seed(1);
    assert_eq!(game.difficulty(), Difficulty::Easy);
    assert_eq!(game.state(), GameState::new());
}

#[test]
fn test_negative_and_large_indices_rejected() {
    let mut game = Game::with_seed(1);
    for index in [-1, -100, 9, 1_000, i64::MIN, i64::MAX] {
        assert_eq!(
            game.submit_move(index),
            MoveOutcome::Rejected(RejectReason::OutOfRange)
        );
    }
    assert_eq!(game.state(), GameState::new());
}

#[test]
fn test_session_flow_to_win() {
    let mut game = Game::with_seed(1);
    assert_eq!(game.submit_move(0).to_string(), "Move successful. It is O's turn.");
    assert_eq!(game.submit_move(3).to_string(), "Move successful. It is X's turn.");
    game.submit_move(1);
    game.submit_move(4);
    assert_eq!(game.submit_move(2), MoveOutcome::Win(Side::Player));
    assert_eq!(game.submit_move(5).to_string(), "Invalid move");
    assert_eq!(game.opponent_move(), OpponentMove::NONE);
    assert_eq!(game.opponent_move().to_string(), "");
}

#[test]
fn test_reset_keeps_difficulty() {
    let mut game = Game::with_seed(1);
    assert_eq!(game.set_difficulty("Hard"), Difficulty::Hard);
    game.submit_move(4);
    game.reset();
    assert_eq!(game.state(), GameState::new());
    assert_eq!(game.difficulty(), Difficulty::Hard);
}

#[test]
fn test_unknown_label_falls_back_to_easy() {
    let mut game = Game::with_seed(1);
    game.set_difficulty("hard");
    assert_eq!(game.set_difficulty("impossible"), Difficulty::Easy);
    assert_eq!(game.difficulty(), Difficulty::Easy);
}

#[test]
fn test_opponent_move_text() {
    let mut game = Game::with_seed(9);
    game.set_difficulty("medium");
    game.submit_move(0);
    let reply = game.opponent_move();
    let index = reply.index.unwrap();
    assert_ne!(index, 0);
    assert_eq!(reply.to_string(), "Move successful. It is X's turn.");
    assert_eq!(game.state().cells[index], Cell::Opponent);
}

#[test]
fn test_engine_can_also_play_for_player() {
    // opponent_move plays for whichever side is to move
    let mut game = Game::with_seed(2);
    let reply = game.opponent_move();
    let index = reply.index.unwrap();
    assert_eq!(game.state().cells[index], Cell::Player);
    assert_eq!(game.state().turn, Side::Opponent);
}

#[test]
fn test_resume_from_snapshot() {
    let mut game = Game::with_seed(1);
    game.submit_move(0);
    game.submit_move(4);
    let snapshot = game.state();

    let mut resumed =
        Game::from_state(snapshot, Difficulty::Hard, SmallRng::seed_from_u64(1)).unwrap();
    assert_eq!(resumed.state(), snapshot);
    assert_eq!(resumed.difficulty(), Difficulty::Hard);
    assert!(resumed.submit_move(8).is_accepted());

    let mut broken = snapshot;
    broken.turn = Side::Opponent;
    assert!(matches!(
        Game::from_state(broken, Difficulty::Easy, SmallRng::seed_from_u64(1)),
        Err(BoardError::TurnMismatch { .. })
    ));
}
