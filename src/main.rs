mod input;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use triplerow_core::engine::config::{EngineConfig, SearchAlgorithm};
use triplerow_core::engine::search::SearchEngine;
use triplerow_core::engine::{Coordinate, SearchLimit, Searcher};
use triplerow_core::logic::board::Player;
use triplerow_core::logic::game::{GameState, GameStatus};

#[derive(Parser)]
#[command(
    name = "triplerow",
    about = "5x5 tic-tac-toe scored by 3-in-a-row run counts"
)]
struct Args {
    /// Search depth in plies.
    #[arg(long)]
    depth: Option<u8>,

    /// Board width.
    #[arg(long, default_value_t = 5)]
    width: u8,

    /// Board height.
    #[arg(long, default_value_t = 5)]
    height: u8,

    /// Engine configuration file (JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Human (O) against the alpha-beta engine (X). Default mode.
    Play,
    /// Alpha-beta (X) against plain minimax (O).
    Duel,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.width == 0 || args.height == 0 {
        bail!("board dimensions must be positive");
    }

    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading engine config {}", path.display()))?;
            EngineConfig::load_from_json(&json)
                .with_context(|| format!("parsing engine config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(depth) = args.depth {
        config.search_depth = depth;
    }
    info!(
        "starting: {}x{} board, depth {}",
        args.width, args.height, config.search_depth
    );

    let game = GameState::with_size(args.width, args.height);
    match args.command.unwrap_or(Command::Play) {
        Command::Play => play(game, config),
        Command::Duel => duel(game, config),
    }
}

/// Human O against the engine X, engine moving first like the original
/// game.
fn play(mut game: GameState, config: EngineConfig) -> Result<()> {
    let depth = config.search_depth;
    let mut engine = SearchEngine::new(Arc::new(config));
    let stdin = io::stdin();

    println!("{}", render::board_to_string(&game.board));

    while game.status == GameStatus::Playing {
        let coord = match game.turn {
            Player::X => {
                let Some((mv, stats)) = engine.search(&game, SearchLimit::Depth(depth)) else {
                    break;
                };
                println!(
                    "Player X move: ({}, {}) [{} nodes]",
                    mv.x, mv.y, stats.nodes
                );
                mv
            }
            Player::O => prompt_move(&stdin, &game)?,
        };

        game.make_move(coord)
            .map_err(|e| anyhow::anyhow!("move rejected: {e:?}"))?;
        println!("{}", render::board_to_string(&game.board));
    }

    report_outcome(&game);
    Ok(())
}

/// Alpha-beta X against plain minimax O, the head-to-head setup of the
/// original program.
fn duel(mut game: GameState, config: EngineConfig) -> Result<()> {
    let depth = config.search_depth;
    let mut alpha_beta = SearchEngine::new(Arc::new(EngineConfig {
        algorithm: SearchAlgorithm::AlphaBeta,
        ..config.clone()
    }));
    let mut minimax = SearchEngine::new(Arc::new(EngineConfig {
        algorithm: SearchAlgorithm::Minimax,
        ..config
    }));

    println!("{}", render::board_to_string(&game.board));

    while game.status == GameStatus::Playing {
        let engine = match game.turn {
            Player::X => &mut alpha_beta,
            Player::O => &mut minimax,
        };
        let Some((mv, stats)) = engine.search(&game, SearchLimit::Depth(depth)) else {
            break;
        };
        println!(
            "Player {} move: ({}, {}) [{} nodes, {} ms]",
            game.turn.as_char(),
            mv.x,
            mv.y,
            stats.nodes,
            stats.time_ms
        );

        game.make_move(mv)
            .map_err(|e| anyhow::anyhow!("move rejected: {e:?}"))?;
        println!("{}", render::board_to_string(&game.board));
    }

    report_outcome(&game);
    Ok(())
}

/// Reads a move from stdin, re-prompting until it parses and is legal.
fn prompt_move(stdin: &io::Stdin, game: &GameState) -> Result<Coordinate> {
    loop {
        print!("Player O move (x, y): ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line)?;
        if read == 0 {
            bail!("stdin closed");
        }

        let Some((x, y)) = input::parse_coordinate(&line) else {
            println!("Enter two integers, e.g. `2 3` or `(2, 3)`.");
            continue;
        };
        let coord = Coordinate { x, y };
        if let Err(e) = game.board.check_move(coord) {
            println!("Illegal move: {e:?}. Try again.");
            continue;
        }
        return Ok(coord);
    }
}

fn report_outcome(game: &GameState) {
    let (x_runs, o_runs) = game.scores();
    println!("X's score: {x_runs}");
    println!("O's score: {o_runs}");

    match game.status {
        GameStatus::Won(player) => println!("Player {} wins!", player.as_char()),
        GameStatus::Tie => println!("It's a tie!"),
        GameStatus::Playing => println!("Game stopped early."),
    }
}
