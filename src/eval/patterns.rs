//! Pattern weights for Gomoku evaluation
//!
//! One run of `n` stones must outweigh every run of `n - 1` stones the board
//! could possibly hold. The weights are therefore derived from the number of
//! ways a run can be laid on the board rather than tuned by hand, and they
//! grow with the board side, which is why boards are capped at
//! [`MAX_SIDE`](crate::board::MAX_SIDE): past it a four would outweigh
//! [`FORCED_WIN`].

/// Saturating score for an unstoppable shape (open four, gap four, five)
pub const FORCED_WIN: f64 = 4_294_967_296.0; // 2^32

/// Weight of a lone stone, the base of the whole table
pub const BASE_WEIGHT: f64 = 0.1;

/// Longest run that is scored by weight. Anything longer is a win.
pub const MAX_WEIGHTED_RUN: usize = 4;

/// Multiplier for how many ends of a run are open (next to an empty cell)
#[inline]
pub fn open_sides_factor(open_ends: u8) -> f64 {
    match open_ends {
        0 => 0.1,
        1 => 0.5,
        _ => 1.0,
    }
}

/// Number of ways to lay a straight run of `len` stones on a `side` x `side`
/// board: rows and columns, then both diagonal directions.
pub fn placements(side: u8, len: usize) -> f64 {
    let side = f64::from(side);
    #[allow(clippy::cast_precision_loss)]
    let fits = (side - len as f64 + 1.0).max(0.0);
    2.0 * side * fits + 2.0 * fits * fits
}

/// Run weights indexed by run length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    table: [f64; MAX_WEIGHTED_RUN + 1],
}

impl Weights {
    /// Derive the table for a board of `side`
    pub fn for_side(side: u8) -> Self {
        let mut table = [0.0; MAX_WEIGHTED_RUN + 1];
        table[1] = BASE_WEIGHT;
        for n in 2..=MAX_WEIGHTED_RUN {
            table[n] = (placements(side, n - 1) * table[n - 1]).round();
        }
        Self { table }
    }

    /// Weight of a run of `len` stones. Runs longer than four use the
    /// weight of four; callers treat them as wins before getting here.
    #[inline]
    pub fn weight(&self, len: usize) -> f64 {
        self.table[len.min(MAX_WEIGHTED_RUN)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{MAX_SIDE, MIN_SIDE};

    #[test]
    fn test_weights_15() {
        let w = Weights::for_side(15);
        assert_eq!(w.weight(0), 0.0);
        assert_eq!(w.weight(1), 0.1);
        assert_eq!(w.weight(2), 90.0);
        assert_eq!(w.weight(3), 73_080.0);
        assert_eq!(w.weight(4), 53_202_240.0);
    }

    #[test]
    fn test_weights_grow_super_linearly() {
        for side in 5..=19u8 {
            let w = Weights::for_side(side);
            for n in 2..=MAX_WEIGHTED_RUN {
                assert!(w.weight(n) > 3.0 * w.weight(n - 1), "side {side}, n {n}");
            }
        }
    }

    #[test]
    fn test_longer_run_outweighs_all_shorter_ones() {
        let w = Weights::for_side(15);
        for n in 2..=MAX_WEIGHTED_RUN {
            assert!(w.weight(n) >= placements(15, n - 1) * w.weight(n - 1) - 0.5);
        }
    }

    #[test]
    fn test_forced_win_dominates_every_accepted_side() {
        for side in MIN_SIDE..=MAX_SIDE {
            let w = Weights::for_side(side);
            // A dozen half-open fours still score below one forced win
            assert!(12.0 * w.weight(4) < FORCED_WIN, "side {side}");
            // So do all threes the board could hold at once
            assert!(placements(side, 3) * w.weight(3) < FORCED_WIN, "side {side}");
        }
    }

    #[test]
    fn test_placements() {
        // 5x5: 5 rows * 1 + 5 cols * 1 + 1 + 1 diagonals
        assert_eq!(placements(5, 5), 12.0);
        assert_eq!(placements(15, 1), 900.0);
        assert_eq!(placements(5, 6), 0.0);
    }

    #[test]
    fn test_open_sides_factor() {
        assert_eq!(open_sides_factor(2), 1.0);
        assert_eq!(open_sides_factor(1), 0.5);
        assert_eq!(open_sides_factor(0), 0.1);
    }
}
