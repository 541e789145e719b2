//! Gomoku in the terminal
//!
//! Menu-driven front-end for playing against another person, a random
//! player or the search engine. Options: `--side N`, `--depth N`, `--seed N`.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use log::{error, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use gomoku::game::{parse_move, random_move, Controller, GameMode, GameState, Outcome};
use gomoku::{AIEngine, Board, EngineConfig, GomokuError, Pos, Stone};

fn main() -> ExitCode {
    env_logger::init();

    let config = match EngineConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: gomoku [--side N] [--depth N] [--seed N]");
            return ExitCode::FAILURE;
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: EngineConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut engine = AIEngine::with_config(config);

    let board = match Board::new(config.side) {
        Ok(board) => board,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };
    let mut game = GameState::with_random_first(board, GameMode::TwoPlayer, &mut rng);

    loop {
        println!("[0] quit");
        for (key, desc, _) in GameMode::MENU {
            println!("[{key}] {desc}");
        }
        print!("Choice: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        if line.trim() == "0" {
            return Ok(());
        }
        let Some(mode) = GameMode::from_menu_key(&line) else {
            println!("Invalid input.");
            continue;
        };
        game.reset(mode, &mut rng);

        let outcome = loop {
            println!("{}", game.board);
            let player = game.current_turn;
            let pos = match game.controller(player) {
                Controller::Human => match read_move(&mut lines, &game.board, player)? {
                    Some(pos) => pos,
                    None => return Ok(()),
                },
                Controller::Random => match random_move(&game.board, &mut rng) {
                    Some(pos) => pos,
                    None => break game.board_outcome(),
                },
                Controller::Ai => match engine.get_move(&game.board, player) {
                    Ok(pos) => pos,
                    Err(GomokuError::DrawDetected) => break Some(Outcome::Draw),
                    Err(e) => {
                        warn!("engine refused to move: {e}");
                        break game.board_outcome();
                    }
                },
            };

            match game.play(pos) {
                Ok(Some(outcome)) => break Some(outcome),
                Ok(None) => {}
                Err(e) => println!("{e}"),
            }
        };

        println!("{}", game.board);
        match outcome {
            Some(Outcome::Draw) => println!("\nDraw!"),
            Some(Outcome::Winner(stone)) => println!("\nWinner: {}", stone.symbol()),
            None => println!("\nGame ended."),
        }
    }
}

/// Prompt until the player types a legal move. `None` on end of input.
fn read_move<B: BufRead>(
    lines: &mut io::Lines<B>,
    board: &Board,
    player: Stone,
) -> io::Result<Option<Pos>> {
    loop {
        print!("Place {} on which row,col? ", player.symbol());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match parse_move(&line?) {
            Ok(pos) if board.is_empty(pos) => return Ok(Some(pos)),
            _ => print!("Invalid input. "),
        }
    }
}
