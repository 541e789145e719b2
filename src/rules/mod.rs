//! Game rules for Gomoku
//!
//! Free-style rules: five or more in a row wins, a full board without a
//! winner is a draw. There are no captures and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{has_five_in_row, is_draw, line_winner, winner};
