//! Gomoku engine with minimax search
//!
//! Free-style Gomoku on a square board of any side from 5 up:
//! - five or more in a row wins (overlines allowed)
//! - a full board without five is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation and line decomposition
//! - [`rules`]: Win and draw conditions
//! - [`eval`]: Run-based heuristic evaluation
//! - [`search`]: Candidate generation and alpha-beta minimax
//! - [`engine`]: Configured engine used by the front-end
//! - [`game`]: Turn alternation and game modes
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let mut board = Board::new(15).unwrap();
//! let mut engine = AIEngine::with_config(EngineConfig::default().with_seed(1));
//!
//! board.place_stone(Stone::Black, Pos::new(7, 7));
//!
//! // AI responds as White
//! let pos = engine.get_move(&board, Stone::White).unwrap();
//! board.place_stone(Stone::White, pos);
//! assert!(!board.victory());
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_SIDE, MAX_SIDE, MIN_SIDE};
pub use engine::{AIEngine, EngineConfig, MoveResult};
pub use error::{GomokuError, Result};
pub use eval::FORCED_WIN;
pub use search::{SearchResult, Searcher, WIN_SCORE};
