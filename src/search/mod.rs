//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation around existing stones
//! - Minimax with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;

pub use alphabeta::{SearchResult, SearchStats, Searcher, DRAW_SCORE, WIN_SCORE};
pub use candidates::{candidate_moves, CANDIDATE_RADIUS};
