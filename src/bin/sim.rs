use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{AiPlayer, Difficulty, Game, PlayerNode, Side};

/// Random Player against the engine; prints a JSON tally of the results.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} <seed> <games> [difficulty]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;
    let difficulty = args
        .get(3)
        .map(|label| Difficulty::from_label(label))
        .unwrap_or_default();

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut player_wins = 0usize;
    let mut opponent_wins = 0usize;
    let mut draws = 0usize;
    let mut moves = 0usize;

    for round in 0..games {
        let mut game = Game::with_seed(seed.wrapping_add(round as u64 + 1));
        game.set_difficulty(difficulty.name());
        let mut node = PlayerNode::new(game, Box::new(AiPlayer::new(Difficulty::Easy)));
        let state = node.run(&mut rng).await?;
        moves += node.move_count();
        match state.winner() {
            Some(Side::Player) => player_wins += 1,
            Some(Side::Opponent) => opponent_wins += 1,
            None => draws += 1,
        }
    }

    let result = json!({
        "difficulty": difficulty.name(),
        "games": games,
        "player_wins": player_wins,
        "opponent_wins": opponent_wins,
        "draws": draws,
        "moves": moves,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
