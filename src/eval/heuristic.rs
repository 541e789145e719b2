//! Heuristic evaluation function for Gomoku board positions
//!
//! The board is cut into lines for each [`Orientation`] and every line is
//! split into maximal runs of equal cells. A player's runs score by length
//! and by how many of their ends touch an empty cell; the board edge and the
//! opponent's stones both close an end.
//!
//! Some shapes cannot be stopped any more and saturate the score to
//! [`FORCED_WIN`]: five or more, an open four (`_XXXX_`) and a four split by
//! a single gap (`XX_XX`, `XXX_X`).
//!
//! The final score is symmetric: `evaluate(board, p) == -evaluate(board, p.opponent())`.

use itertools::Itertools;

use crate::board::{Board, Orientation, Stone, WIN_LENGTH};

use super::patterns::{open_sides_factor, Weights, FORCED_WIN, MAX_WEIGHTED_RUN};

/// Accumulated score of one player
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tally {
    /// Unstoppable shape found, the rest of the board no longer matters
    Forced,
    Partial(f64),
}

impl Tally {
    #[inline]
    pub fn is_forced(self) -> bool {
        matches!(self, Tally::Forced)
    }

    fn add(self, other: Tally) -> Tally {
        match (self, other) {
            (Tally::Partial(a), Tally::Partial(b)) => Tally::Partial(a + b),
            _ => Tally::Forced,
        }
    }
}

/// One maximal run inside a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    stone: Stone,
    len: usize,
}

/// Split a line into runs. Each end of the line is a wall, modelled as
/// `None` by the neighbour lookup.
fn runs(line: &[Stone]) -> Vec<Run> {
    line.iter()
        .dedup_with_count()
        .map(|(len, &stone)| Run { stone, len })
        .collect()
}

#[inline]
fn is_open(neighbour: Option<&Run>) -> bool {
    matches!(neighbour, Some(run) if run.stone == Stone::Empty)
}

/// Score one line for `player`
pub fn score_line(line: &[Stone], player: Stone, weights: &Weights) -> Tally {
    let runs = runs(line);
    let mut score = 0.0;

    for (i, run) in runs.iter().enumerate() {
        if run.stone != player {
            continue;
        }

        let before = i.checked_sub(1).and_then(|j| runs.get(j));
        let after = runs.get(i + 1);

        if run.len >= WIN_LENGTH {
            return Tally::Forced;
        }

        let open_ends = u8::from(is_open(before)) + u8::from(is_open(after));
        if run.len >= MAX_WEIGHTED_RUN && open_ends == 2 {
            return Tally::Forced;
        }

        // Gap four: player run, one empty cell, player run
        if let (Some(gap), Some(next)) = (after, runs.get(i + 2)) {
            if gap.stone == Stone::Empty
                && gap.len == 1
                && next.stone == player
                && run.len + next.len >= MAX_WEIGHTED_RUN
            {
                return Tally::Forced;
            }
        }

        score += if run.len == 1 {
            weights.weight(1)
        } else {
            weights.weight(run.len) * open_sides_factor(open_ends)
        };
    }

    Tally::Partial(score)
}

/// Score a set of lines of one orientation for `player`
pub fn score_lines(lines: &[Vec<Stone>], player: Stone, weights: &Weights) -> Tally {
    let mut tally = Tally::Partial(0.0);
    for line in lines {
        tally = tally.add(score_line(line, player, weights));
        if tally.is_forced() {
            break;
        }
    }
    tally
}

/// Score of `player`'s stones across every orientation
pub fn tally(board: &Board, player: Stone) -> Tally {
    let weights = Weights::for_side(board.side());
    let mut total = Tally::Partial(0.0);
    for orientation in Orientation::ALL {
        total = total.add(score_lines(&orientation.lines(board), player, &weights));
        if total.is_forced() {
            break;
        }
    }
    total
}

/// Evaluate the board from the perspective of `player`.
///
/// Returns:
/// - `FORCED_WIN` when only `player` holds an unstoppable shape
/// - `-FORCED_WIN` when only the opponent does
/// - `0.0` when both do, or for `Stone::Empty`
/// - otherwise the difference of both players' run scores, kept strictly
///   inside `(-FORCED_WIN, FORCED_WIN)`
#[must_use]
pub fn evaluate(board: &Board, player: Stone) -> f64 {
    if !player.is_player() {
        return 0.0;
    }
    let opponent = player.opponent();

    match (tally(board, player), tally(board, opponent)) {
        (Tally::Forced, Tally::Forced) => 0.0,
        (Tally::Forced, Tally::Partial(_)) => FORCED_WIN,
        (Tally::Partial(_), Tally::Forced) => -FORCED_WIN,
        (Tally::Partial(mine), Tally::Partial(theirs)) => {
            let bound = FORCED_WIN - 1.0;
            (mine - theirs).clamp(-bound, bound)
        }
    }
}
