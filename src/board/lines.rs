//! Decomposition of the board into straight lines
//!
//! Both win detection and evaluation work on lines of cells rather than on
//! the grid directly. Each [`Orientation`] knows how to cut the board into
//! its lines; diagonals shorter than [`WIN_LENGTH`] are dropped since they
//! can never hold a winning run.

use super::{Board, Pos, Stone, WIN_LENGTH};

/// Line orientation used by the win check and the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Rows
    Horizontal,
    /// Columns
    Vertical,
    /// Diagonals (constant `col - row`) and anti-diagonals (constant `row + col`)
    Diagonal,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Diagonal,
    ];

    /// Cut `board` into the lines of this orientation
    pub fn lines(self, board: &Board) -> Vec<Vec<Stone>> {
        match self {
            Orientation::Horizontal => rows(board),
            Orientation::Vertical => columns(board),
            Orientation::Diagonal => {
                let mut lines = diagonals(board);
                lines.extend(anti_diagonals(board));
                lines
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn cell(board: &Board, row: usize, col: usize) -> Stone {
    board.get(Pos::new(row as u8, col as u8)).unwrap_or_default()
}

fn rows(board: &Board) -> Vec<Vec<Stone>> {
    (0..board.side()).map(|r| board.row(r).to_vec()).collect()
}

fn columns(board: &Board) -> Vec<Vec<Stone>> {
    let side = usize::from(board.side());
    (0..side)
        .map(|c| (0..side).map(|r| cell(board, r, c)).collect())
        .collect()
}

fn diagonals(board: &Board) -> Vec<Vec<Stone>> {
    let side = usize::from(board.side());
    let mut lines = Vec::with_capacity(2 * side - 1);
    // Start at the bottom-left corner and walk towards the top-right one
    for start_row in (0..side).rev() {
        lines.push(walk_down_right(board, start_row, 0));
    }
    for start_col in 1..side {
        lines.push(walk_down_right(board, 0, start_col));
    }
    lines.retain(|l| l.len() >= WIN_LENGTH);
    lines
}

fn anti_diagonals(board: &Board) -> Vec<Vec<Stone>> {
    let side = usize::from(board.side());
    let mut lines = Vec::with_capacity(2 * side - 1);
    for start_col in 0..side {
        lines.push(walk_down_left(board, 0, start_col));
    }
    for start_row in 1..side {
        lines.push(walk_down_left(board, start_row, side - 1));
    }
    lines.retain(|l| l.len() >= WIN_LENGTH);
    lines
}

fn walk_down_right(board: &Board, mut row: usize, mut col: usize) -> Vec<Stone> {
    let side = usize::from(board.side());
    let mut line = Vec::with_capacity(side);
    while row < side && col < side {
        line.push(cell(board, row, col));
        row += 1;
        col += 1;
    }
    line
}

fn walk_down_left(board: &Board, mut row: usize, mut col: usize) -> Vec<Stone> {
    let side = usize::from(board.side());
    let mut line = Vec::with_capacity(side);
    loop {
        line.push(cell(board, row, col));
        if row + 1 >= side || col == 0 {
            break;
        }
        row += 1;
        col -= 1;
    }
    line
}
