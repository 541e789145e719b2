//! Candidate move generation
//!
//! Only empty cells next to existing stones are worth searching. On an empty
//! board, or when no stone has an empty neighbour, every empty cell is a
//! candidate.

use std::collections::BTreeSet;

use crate::board::{Board, Pos, Stone};

/// Distance from existing stones at which empty cells become candidates
pub const CANDIDATE_RADIUS: u8 = 1;

/// Candidate moves in row-major order
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    let mut near = BTreeSet::new();
    for player in [Stone::Black, Stone::White] {
        for pos in board.occupied(player) {
            near.extend(
                board
                    .neighbors(pos, CANDIDATE_RADIUS)
                    .into_iter()
                    .filter(|&p| board.is_empty(p)),
            );
        }
    }

    if near.is_empty() {
        board.occupied(Stone::Empty)
    } else {
        near.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_falls_back_to_all_cells() {
        let board = Board::new(15).unwrap();
        let moves = candidate_moves(&board);
        assert_eq!(moves.len(), 225);
        assert_eq!(moves[0], Pos::new(0, 0));
    }

    #[test]
    fn test_single_stone_ring() {
        let mut board = Board::new(15).unwrap();
        board.place_stone(Stone::Black, Pos::new(7, 7));
        let moves = candidate_moves(&board);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Pos::new(7, 7)));
        assert!(moves.contains(&Pos::new(6, 6)));
        assert!(moves.contains(&Pos::new(8, 8)));
    }

    #[test]
    fn test_corner_stone() {
        let mut board = Board::new(15).unwrap();
        board.place_stone(Stone::White, Pos::new(0, 0));
        let moves = candidate_moves(&board);
        assert_eq!(moves, vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]);
    }

    #[test]
    fn test_neighbours_of_both_colors_merged() {
        let mut board = Board::new(15).unwrap();
        board.place_stone(Stone::Black, Pos::new(7, 7));
        board.place_stone(Stone::White, Pos::new(7, 8));
        let moves = candidate_moves(&board);
        // 3x4 block minus the two stones
        assert_eq!(moves.len(), 10);
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }

    #[test]
    fn test_nearly_full_board() {
        let mut board = Board::new(5).unwrap();
        for r in 0..5u8 {
            for c in 0..5u8 {
                if (r, c) != (4, 4) {
                    board.place_stone(Stone::Black, Pos::new(r, c));
                }
            }
        }
        assert_eq!(candidate_moves(&board), vec![Pos::new(4, 4)]);

        board.place_stone(Stone::White, Pos::new(4, 4));
        assert!(candidate_moves(&board).is_empty());
    }
}
