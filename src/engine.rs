//! Main AI engine wrapping the alpha-beta search
//!
//! The engine refuses to move on a finished game, runs the search with the
//! full `(-inf, +inf)` window and reports how long it took.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let mut engine = AIEngine::with_config(EngineConfig::default().with_seed(7));
//! let mut board = Board::new(15).unwrap();
//! board.place_stone(Stone::Black, Pos::new(7, 7));
//!
//! let result = engine.get_move_with_stats(&board, Stone::White).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::{debug, info};

use crate::board::{Board, Pos, Stone, DEFAULT_SIDE, MAX_SIDE, MIN_SIDE};
use crate::error::{GomokuError, Result};
use crate::search::Searcher;

/// Engine configuration.
///
/// Defaults to a 15x15 board searched two plies deep with an unseeded
/// random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Board side used by the game front-end
    pub side: u8,
    /// Search depth in plies
    pub depth: u8,
    /// Seed for candidate ordering; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE,
            depth: 2,
            seed: None,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_side(mut self, side: u8) -> Self {
        self.side = side;
        self
    }

    /// Parse `--side N`, `--depth N` and `--seed N` (program name excluded).
    ///
    /// # Errors
    ///
    /// [`GomokuError::InvalidArgument`] for unknown flags, missing or
    /// malformed values and sides outside `MIN_SIDE..=MAX_SIDE`.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            let flag = flag.as_ref().to_owned();
            let value = args
                .next()
                .ok_or_else(|| GomokuError::InvalidArgument(format!("{flag} needs a value")))?;
            let value = value.as_ref();
            match flag.as_str() {
                "--side" => config.side = parse_value(&flag, value)?,
                "--depth" => config.depth = parse_value(&flag, value)?,
                "--seed" => config.seed = Some(parse_value(&flag, value)?),
                _ => return Err(GomokuError::InvalidArgument(format!("unknown flag {flag}"))),
            }
        }

        if !(MIN_SIDE..=MAX_SIDE).contains(&config.side) {
            return Err(GomokuError::InvalidArgument(format!(
                "--side must be between {MIN_SIDE} and {MAX_SIDE}, got {}",
                config.side
            )));
        }
        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| GomokuError::InvalidArgument(format!("{flag}: cannot parse {value:?}")))
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Best move found
    pub best_move: Option<Pos>,
    /// Score reported by the search
    pub score: f64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Main AI engine for Gomoku.
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let searcher = match config.seed {
            Some(seed) => Searcher::seeded(seed),
            None => Searcher::from_entropy(),
        };
        Self { searcher, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the best move for the given position.
    ///
    /// # Errors
    ///
    /// See [`AIEngine::get_move_with_stats`].
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Result<Pos> {
        self.get_move_with_stats(board, color)?
            .best_move
            .ok_or(GomokuError::DrawDetected)
    }

    /// Get the best move with search statistics.
    ///
    /// # Errors
    ///
    /// - [`GomokuError::GameOver`] if someone already has five in a row
    /// - [`GomokuError::DrawDetected`] if the board is full
    /// - [`GomokuError::InvalidPlayer`] if `color` is `Stone::Empty`
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> Result<MoveResult> {
        if let Some(winner) = board.winner() {
            debug!("refusing to search: {winner:?} already won");
            return Err(GomokuError::GameOver);
        }
        if board.is_full() {
            return Err(GomokuError::DrawDetected);
        }

        let start = Instant::now();
        let result = self.searcher.best_move(board, self.config.depth, color)?;
        #[allow(clippy::cast_possible_truncation)]
        let time_ms = start.elapsed().as_millis() as u64;

        info!(
            "{color:?} plays {:?} (score {}, {} nodes, {time_ms}ms)",
            result.best_move, result.score, result.stats.nodes
        );

        Ok(MoveResult {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.stats.nodes,
        })
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::WIN_SCORE;

    fn engine() -> AIEngine {
        AIEngine::with_config(EngineConfig::default().with_seed(17))
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.side, 15);
        assert_eq!(config.depth, 2);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_config_from_args() {
        let config = EngineConfig::from_args(["--depth", "3", "--seed", "42", "--side", "9"]).unwrap();
        assert_eq!(
            config,
            EngineConfig {
                side: 9,
                depth: 3,
                seed: Some(42)
            }
        );
        assert_eq!(
            EngineConfig::from_args(Vec::<String>::new()).unwrap(),
            EngineConfig::default()
        );
    }

    #[test]
    fn test_config_from_args_errors() {
        assert!(matches!(
            EngineConfig::from_args(["--depth"]),
            Err(GomokuError::InvalidArgument(_))
        ));
        assert!(matches!(
            EngineConfig::from_args(["--depth", "deep"]),
            Err(GomokuError::InvalidArgument(_))
        ));
        assert!(matches!(
            EngineConfig::from_args(["--colour", "black"]),
            Err(GomokuError::InvalidArgument(_))
        ));
        assert!(matches!(
            EngineConfig::from_args(["--side", "4"]),
            Err(GomokuError::InvalidArgument(_))
        ));
        assert!(matches!(
            EngineConfig::from_args(["--side", "40"]),
            Err(GomokuError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_engine_empty_board() {
        let board = Board::new(15).unwrap();
        let result = engine().get_move_with_stats(&board, Stone::Black).unwrap();
        let mv = result.best_move.unwrap();
        assert!(board.is_empty(mv));
        assert!(result.nodes > 1);
    }

    #[test]
    fn test_engine_takes_immediate_win() {
        let mut board = Board::new(15).unwrap();
        for c in 0..4 {
            board.place_stone(Stone::White, Pos::new(9, c));
        }
        board.place_stone(Stone::Black, Pos::new(3, 3));

        let mut engine = engine();
        let result = engine.get_move_with_stats(&board, Stone::White).unwrap();
        assert_eq!(result.best_move, Some(Pos::new(9, 4)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_engine_refuses_finished_game() {
        let mut board = Board::new(15).unwrap();
        for c in 0..5 {
            board.place_stone(Stone::Black, Pos::new(0, c));
        }
        assert_eq!(
            engine().get_move(&board, Stone::White),
            Err(GomokuError::GameOver)
        );
    }

    #[test]
    fn test_engine_refuses_full_board() {
        let mut board = Board::new(5).unwrap();
        for r in 0..5u8 {
            for c in 0..5u8 {
                let stone = if (c / 2 + r) % 2 == 0 { Stone::Black } else { Stone::White };
                board.place_stone(stone, Pos::new(r, c));
            }
        }
        assert_eq!(
            engine().get_move(&board, Stone::Black),
            Err(GomokuError::DrawDetected)
        );
    }
}
