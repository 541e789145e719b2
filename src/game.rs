//! Game state management: turns, modes and outcomes

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pos, Stone};
use crate::error::{GomokuError, Result};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human vs human (hotseat)
    TwoPlayer,
    /// Human vs a computer playing random empty cells
    Random,
    /// Human vs the search engine
    VersusAi,
    /// Engine vs engine
    AiVersusAi,
}

impl GameMode {
    /// Menu entries as `(key, description, mode)`
    pub const MENU: [(&'static str, &'static str, GameMode); 4] = [
        ("1", "human x human", GameMode::TwoPlayer),
        ("2", "human x computer (random)", GameMode::Random),
        ("3", "human x computer (AI)", GameMode::VersusAi),
        ("4", "computer x computer", GameMode::AiVersusAi),
    ];

    pub fn from_menu_key(key: &str) -> Option<GameMode> {
        Self::MENU
            .iter()
            .find(|(k, _, _)| *k == key.trim())
            .map(|&(_, _, mode)| mode)
    }
}

/// Who picks the move for a side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Random,
    Ai,
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Stone),
    Draw,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Stone,
    pub move_history: Vec<(Pos, Stone)>,
    pub outcome: Option<Outcome>,
}

impl GameState {
    /// Start a game where `first` moves first
    pub fn new(board: Board, mode: GameMode, first: Stone) -> Result<Self> {
        if !first.is_player() {
            return Err(GomokuError::InvalidPlayer);
        }
        Ok(Self {
            board,
            mode,
            current_turn: first,
            move_history: Vec::new(),
            outcome: None,
        })
    }

    /// Start a game with a coin flip for the first move
    pub fn with_random_first<R: Rng + ?Sized>(board: Board, mode: GameMode, rng: &mut R) -> Self {
        Self {
            board,
            mode,
            current_turn: coin_flip(rng),
            move_history: Vec::new(),
            outcome: None,
        }
    }

    /// Clear the board for a new game in `mode`, with a fresh coin flip for
    /// the first move. The board side is kept.
    pub fn reset<R: Rng + ?Sized>(&mut self, mode: GameMode, rng: &mut R) {
        self.board.clear();
        self.move_history.clear();
        self.outcome = None;
        self.mode = mode;
        self.current_turn = coin_flip(rng);
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Who chooses the move for `stone`. In single-computer modes the
    /// computer plays White.
    pub fn controller(&self, stone: Stone) -> Controller {
        match self.mode {
            GameMode::TwoPlayer => Controller::Human,
            GameMode::Random if stone == Stone::White => Controller::Random,
            GameMode::VersusAi if stone == Stone::White => Controller::Ai,
            GameMode::AiVersusAi => Controller::Ai,
            GameMode::Random | GameMode::VersusAi => Controller::Human,
        }
    }

    /// Play `pos` for the side to move.
    ///
    /// Returns the outcome once the game ends, `None` while it continues.
    ///
    /// # Errors
    ///
    /// [`GomokuError::GameOver`] after the game ended, or the placement
    /// errors of [`Board::try_place_stone`]. A rejected move does not change
    /// the turn.
    pub fn play(&mut self, pos: Pos) -> Result<Option<Outcome>> {
        if self.is_over() {
            return Err(GomokuError::GameOver);
        }

        let player = self.current_turn;
        self.board.try_place_stone(player, pos)?;
        self.move_history.push((pos, player));

        self.outcome = self.board_outcome();
        if self.outcome.is_none() {
            self.current_turn = player.opponent();
        }

        if let Some(outcome) = self.outcome {
            info!("game over after {} moves: {outcome:?}", self.move_history.len());
        }
        Ok(self.outcome)
    }

    /// Outcome read off the board alone: a winner if someone has five,
    /// a draw once the board is full, `None` while the game can go on
    pub fn board_outcome(&self) -> Option<Outcome> {
        match self.board.winner() {
            Some(stone) => Some(Outcome::Winner(stone)),
            None if self.board.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.move_history.last().map(|&(pos, _)| pos)
    }
}

fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> Stone {
    if rng.gen_bool(0.5) {
        Stone::Black
    } else {
        Stone::White
    }
}

/// Uniformly random empty cell, `None` on a full board
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Pos> {
    board.occupied(Stone::Empty).choose(rng).copied()
}

/// Parse `row,col` as typed by a player
pub fn parse_move(input: &str) -> Result<Pos> {
    let invalid = || GomokuError::InvalidArgument(format!("expected row,col but got {:?}", input.trim()));
    let (row, col) = input.trim().split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok(Pos::new(row, col))
}
