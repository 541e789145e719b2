//! Evaluation module for Gomoku positions
//!
//! This module provides run detection and scoring for board positions.
//! The evaluation considers:
//! - Runs of one to four stones, weighted by length
//! - How many ends of each run are open
//! - Unstoppable shapes (open four, gap four, five)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, score_line, score_lines, tally, Tally};
pub use patterns::{open_sides_factor, placements, Weights, BASE_WEIGHT, FORCED_WIN};
