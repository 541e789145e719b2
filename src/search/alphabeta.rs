//! Minimax search with alpha-beta pruning
//!
//! The search explores candidate moves (empty cells next to stones) down to a
//! fixed depth and scores the leaves with the board heuristic.
//!
//! Conventions:
//! - White (`-1`) maximizes and raises `alpha`; Black (`+1`) minimizes and
//!   lowers `beta`.
//! - The tentative move at each node is played for the side to move. A move
//!   that wins on the spot returns [`WIN_SCORE`] without searching deeper.
//! - A child's score is compared against the parent's bound as returned,
//!   without negation.
//! - Leaves are scored with `evaluate(player)` for the side to move at the
//!   leaf.
//!
//! Every simulated move works on its own clone of the board; the caller's
//! board is never touched. Candidate order is shuffled with the searcher's
//! random source, which only changes the choice between equally scored moves.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new(15).unwrap();
//! board.place_stone(Stone::Black, Pos::new(7, 7));
//!
//! let mut searcher = Searcher::seeded(42);
//! let result = searcher.best_move(&board, 2, Stone::White).unwrap();
//! if let Some(best_move) = result.best_move {
//!     assert!(board.is_empty(best_move));
//! }
//! ```

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Pos, Stone};
use crate::error::{GomokuError, Result};
use crate::eval::FORCED_WIN;

use super::candidates::candidate_moves;

/// Score of a move that wins immediately
pub const WIN_SCORE: f64 = FORCED_WIN;

/// Score of a node where the board filled up without a winner
pub const DRAW_SCORE: f64 = 0.0;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Nodes scored by the heuristic
    pub leaves: u64,
    /// Board copies made to simulate moves, one per move tried, root moves included
    pub clones: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
}

/// Search result: score and the move that achieves it
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    /// Best move found. Always an empty cell of the searched board.
    pub best_move: Option<Pos>,
    pub stats: SearchStats,
}

/// Outcome of one node of the tree
#[derive(Debug, Clone, Copy, PartialEq)]
enum Node {
    /// No candidate move left
    Draw,
    Scored { score: f64, best_move: Option<Pos> },
}

/// Alpha-beta searcher.
///
/// Holds only the random source used to order candidates, so searches are
/// reproducible when it is seeded.
pub struct Searcher<R = StdRng> {
    rng: R,
    stats: SearchStats,
}

impl Searcher<StdRng> {
    /// Reproducible searcher
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Searcher<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Search with the full `(-inf, +inf)` window
    pub fn best_move(&mut self, board: &Board, depth: u8, player: Stone) -> Result<SearchResult> {
        self.search(board, depth, f64::NEG_INFINITY, f64::INFINITY, player)
    }

    /// Search `depth` plies ahead for `player`.
    ///
    /// # Errors
    ///
    /// - [`GomokuError::InvalidPlayer`] if `player` is `Stone::Empty`
    /// - [`GomokuError::DrawDetected`] if the board has no empty cell
    pub fn search(
        &mut self,
        board: &Board,
        depth: u8,
        alpha: f64,
        beta: f64,
        player: Stone,
    ) -> Result<SearchResult> {
        if !player.is_player() {
            return Err(GomokuError::InvalidPlayer);
        }
        self.stats = SearchStats::default();

        match self.alpha_beta(board, depth, alpha, beta, player) {
            Node::Draw => {
                debug!("search for {player:?}: no candidate moves, draw");
                Err(GomokuError::DrawDetected)
            }
            Node::Scored { score, best_move } => {
                debug!(
                    "search for {:?} at depth {}: score {} move {:?} ({} nodes, {} cutoffs)",
                    player, depth, score, best_move, self.stats.nodes, self.stats.cutoffs
                );
                Ok(SearchResult {
                    score,
                    best_move,
                    stats: self.stats,
                })
            }
        }
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        player: Stone,
    ) -> Node {
        self.stats.nodes += 1;

        let mut moves = candidate_moves(board);
        let Some(&first) = moves.first() else {
            return Node::Draw;
        };

        if depth == 0 {
            self.stats.leaves += 1;
            return Node::Scored {
                score: board.evaluate(player),
                best_move: Some(first),
            };
        }

        moves.shuffle(&mut self.rng);
        let first = moves[0];
        let mut best_move = None;

        for mov in moves {
            let mut child = board.clone();
            self.stats.clones += 1;
            child.place_stone(player, mov);

            // A winning move is always optimal
            if child.victory() {
                return Node::Scored {
                    score: WIN_SCORE,
                    best_move: Some(mov),
                };
            }

            let score = match self.alpha_beta(&child, depth - 1, alpha, beta, player.opponent()) {
                Node::Draw => DRAW_SCORE,
                Node::Scored { score, .. } => score,
            };

            if player.is_maximizer() {
                if score > alpha {
                    alpha = score;
                    best_move = Some(mov);
                }
            } else if score < beta {
                beta = score;
                best_move = Some(mov);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                trace!("cutoff at depth {depth} after {mov}: alpha {alpha} >= beta {beta}");
                break;
            }
        }

        let score = if player.is_maximizer() { alpha } else { beta };
        Node::Scored {
            score,
            // Nothing beat the incoming window: fall back to a legal move
            best_move: best_move.or(Some(first)),
        }
    }
}
