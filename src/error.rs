//! Error type shared by the board, search and game layers

use thiserror::Error;

/// Everything that can go wrong when driving the engine.
///
/// None of these are fatal: a caller can retry with different input or
/// treat `DrawDetected` / `GameOver` as the end of the game.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GomokuError {
    /// Board too small to ever hold five in a row
    #[error("board side {side} is too small, a win needs at least {min}")]
    SideTooSmall { side: u8, min: u8 },

    /// Board too large for the run weights to stay below a forced win
    #[error("board side {side} is too large, the maximum is {max}")]
    SideTooLarge { side: u8, max: u8 },

    #[error("position ({row}, {col}) is outside the {side}x{side} board")]
    OutOfBounds { row: u8, col: u8, side: u8 },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    /// `Stone::Empty` passed where a player was expected
    #[error("an empty stone cannot be played")]
    InvalidPlayer,

    /// No candidate move is left: the game is drawn
    #[error("no candidate moves left, the game is a draw")]
    DrawDetected,

    #[error("the game is already over")]
    GameOver,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, GomokuError>;
