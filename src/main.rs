#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    init_logging, protocol::difficulty_message, ui::Names, CliPlayer, Game, GameApi,
    GameState, PlayerNode, Skeleton, Stub, TcpTransport,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, default_value = "Easy", help = "Easy, Medium or Hard (case-insensitive)")]
        difficulty: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Name shown for the X side")]
        name: Option<String>,
    },
    /// Two people sharing one terminal.
    Hotseat {
        #[arg(long, default_value = "")]
        x_name: String,
        #[arg(long, default_value = "")]
        o_name: String,
    },
    /// Host a game session and serve clients one connection at a time.
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play against the engine of a remote session.
    Connect {
        #[arg(long, default_value = "127.0.0.1:8080")]
        connect: String,
        #[arg(long, default_value = "Easy", help = "Easy, Medium or Hard (case-insensitive)")]
        difficulty: String,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            seed,
            name,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut game = Game::with_rng(make_rng(seed));
            let level = game.set_difficulty(&difficulty);
            println!("{}", difficulty_message(&difficulty));
            let mut names = Names::versus_ai(level);
            if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
                names.player = name.trim().to_string();
            }
            let mut node = PlayerNode::new(game, Box::new(CliPlayer::new(names.clone())));
            let mut rng = make_rng(seed.map(|s| s.wrapping_add(1)));
            let state = node.run(&mut rng).await?;
            game_over(&state, &names);
        }
        Commands::Hotseat { x_name, o_name } => {
            let names = Names::hotseat(&x_name, &o_name);
            let mut node = PlayerNode::hotseat(
                Game::new(),
                Box::new(CliPlayer::new(names.clone())),
                Box::new(CliPlayer::new(names.clone())),
            );
            let mut rng = make_rng(None);
            let state = node.run(&mut rng).await?;
            game_over(&state, &names);
        }
        Commands::Serve { bind, seed } => {
            let listener = TcpListener::bind(&bind).await?;
            log::info!("serving on {}", listener.local_addr()?);
            let mut game = Game::with_rng(make_rng(seed));
            loop {
                let (stream, addr) = listener.accept().await?;
                log::info!("client connected from {}", addr);
                let mut skeleton = Skeleton::new(game, TcpTransport::new(stream));
                if let Err(e) = skeleton.run().await {
                    log::warn!("session with {} ended with an error: {}", addr, e);
                }
                game = skeleton.into_engine();
            }
        }
        Commands::Connect {
            connect,
            difficulty,
        } => {
            println!("Connecting to {}...", connect);
            let mut stub = Stub::new(TcpTransport::connect(&connect).await?);
            let level = stub.set_difficulty(&difficulty).await?;
            println!("{}", difficulty_message(&difficulty));
            println!("{}", stub.reset().await?);
            let names = Names::versus_ai(level);
            let mut node = PlayerNode::new(stub, Box::new(CliPlayer::new(names.clone())));
            let mut rng = make_rng(None);
            let state = node.run(&mut rng).await?;
            game_over(&state, &names);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn game_over(state: &GameState, names: &Names) {
    tictactoe::ui::print_board(state);
    match state.winner() {
        Some(side) => println!("{} ({}) wins!", names.of(side), side.mark()),
        None if state.terminal => println!("Draw!"),
        None => println!("Game abandoned."),
    }
}
