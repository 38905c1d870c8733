//! Terminal driver: engine self-play, or play against an engine.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --white human --black alphabeta`
//! `RUST_LOG=debug cargo run --release --bin self_play -- --white greedy --seed 7`
//!
//! Human input is a square pair such as `e2e4`, or one of `moves`, `undo`,
//! `redo`, `reset`, `quit`.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use clap::Parser;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use ray_chess::chess_errors::ChessError;
use ray_chess::engines::engine_select::{build_engine, choose_with_fallback, StrategyKind};
use ray_chess::engines::engine_trait::{Engine, EngineConfig};
use ray_chess::game_state::game_state::GameState;
use ray_chess::search::search_types::DEFAULT_DEPTH;
use ray_chess::utils::algebraic::algebraic_to_square_pair;
use ray_chess::utils::render_game_state::{render_game_state, render_move_log};

#[derive(Debug, Parser)]
#[command(name = "self_play", about = "Play chess in the terminal")]
struct Args {
    /// Player for White: `human` or a strategy name.
    #[arg(long, default_value = "human")]
    white: PlayerKind,

    /// Player for Black: `human` or a strategy name.
    #[arg(long, default_value = "alphabeta")]
    black: PlayerKind,

    /// Search depth in plies for the engines.
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Seed for reproducible engine play.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many plies.
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
}

#[derive(Debug, Clone, Copy)]
enum PlayerKind {
    Human,
    Strategy(StrategyKind),
}

impl FromStr for PlayerKind {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("human") {
            Ok(PlayerKind::Human)
        } else {
            s.parse().map(PlayerKind::Strategy)
        }
    }
}

enum Player {
    Human,
    Engine(Box<dyn Engine>),
}

impl Player {
    fn new(kind: PlayerKind, config: EngineConfig) -> Self {
        match kind {
            PlayerKind::Human => Player::Human,
            PlayerKind::Strategy(strategy) => Player::Engine(build_engine(strategy, config)),
        }
    }

    fn is_human(&self) -> bool {
        matches!(self, Player::Human)
    }
}

enum TurnAction {
    Continue,
    Reset,
    Quit,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = EngineConfig {
        depth: args.depth.max(1),
        seed: args.seed,
    };
    let mut players = [
        Player::new(args.white, config),
        Player::new(args.black, config),
    ];
    let mut fallback_rng: StdRng = config.rng();

    let mut game = GameState::new_game();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}\n", render_game_state(&game));

        let legal_moves = game.get_valid_moves();
        if legal_moves.is_empty() {
            if game.is_checkmate() {
                println!("checkmate, {} wins", game.side_to_move().opposite());
            } else {
                println!("stalemate");
            }
            break;
        }
        if game.move_log().len() >= args.max_plies {
            println!("stopping after {} plies", args.max_plies);
            break;
        }
        if game.is_check() {
            println!("{} is in check", game.side_to_move());
        }

        let side = game.side_to_move();
        let opponent_is_engine = !players[side.opposite().index()].is_human();
        let action = match &mut players[side.index()] {
            Player::Human => {
                print!("{side} to move> ");
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    break;
                };
                handle_human_line(&mut game, &line?, opponent_is_engine)
            }
            Player::Engine(engine) => {
                let out =
                    choose_with_fallback(engine.as_mut(), &mut game, &legal_moves, &mut fallback_rng)?;
                for line in &out.info_lines {
                    tracing::debug!("{line}");
                }
                let Some(mv) = out.best_move else {
                    break;
                };
                game.make_move(mv)?;
                let played = game.last_move().copied().unwrap_or(mv);
                println!("{} ({}) plays {played}", side, engine.name());
                TurnAction::Continue
            }
        };

        match action {
            TurnAction::Continue => {}
            TurnAction::Quit => break,
            TurnAction::Reset => {
                game.reset();
                for player in players.iter_mut() {
                    if let Player::Engine(engine) = player {
                        engine.new_game();
                    }
                }
            }
        }
    }

    println!("{}", render_move_log(game.move_log()));
    Ok(())
}

fn handle_human_line(game: &mut GameState, line: &str, opponent_is_engine: bool) -> TurnAction {
    let command = line.trim().to_ascii_lowercase();
    match command.as_str() {
        "" => TurnAction::Continue,
        "quit" | "q" => TurnAction::Quit,
        "moves" => {
            let moves: Vec<String> = game
                .get_valid_moves()
                .iter()
                .map(|mv| mv.chess_notation())
                .collect();
            println!("{}", moves.join(" "));
            TurnAction::Continue
        }
        "undo" | "u" => {
            // Against an engine, take back its reply as well as our move.
            let plies = if opponent_is_engine { 2 } else { 1 };
            for _ in 0..plies {
                if let Err(err) = game.undo_move() {
                    println!("{err}");
                    break;
                }
            }
            TurnAction::Continue
        }
        "redo" | "r" => {
            let plies = if opponent_is_engine { 2 } else { 1 };
            for _ in 0..plies {
                if let Err(err) = game.redo_move() {
                    println!("{err}");
                    break;
                }
            }
            TurnAction::Continue
        }
        "reset" => TurnAction::Reset,
        text => match algebraic_to_square_pair(text) {
            Ok((start, end)) => match game.legal_move_for(start, end) {
                Some(mv) => {
                    if let Err(err) = game.make_move(mv) {
                        println!("{err}");
                    }
                    TurnAction::Continue
                }
                None => {
                    println!("illegal move: {text}");
                    TurnAction::Continue
                }
            },
            Err(err) => {
                println!("{err}");
                TurnAction::Continue
            }
        },
    }
}

