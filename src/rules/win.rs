//! Win and draw conditions
//!
//! A game is won by a maximal run of five or more equal stones along a row,
//! a column, a diagonal or an anti-diagonal. Overlines count. A game is drawn
//! once the board is full without such a run.

use itertools::Itertools;

use crate::board::{Board, Orientation, Stone, WIN_LENGTH};

/// Owner of the first winning run in `line`, if any
pub fn line_winner(line: &[Stone]) -> Option<Stone> {
    line.iter()
        .dedup_with_count()
        .find(|&(len, stone)| stone.is_player() && len >= WIN_LENGTH)
        .map(|(_, &stone)| stone)
}

/// Color with five or more in a row somewhere on the board
pub fn winner(board: &Board) -> Option<Stone> {
    Orientation::ALL.iter().find_map(|orientation| {
        orientation
            .lines(board)
            .iter()
            .find_map(|line| line_winner(line))
    })
}

/// Check if there's 5+ in a row for either color
#[inline]
pub fn has_five_in_row(board: &Board) -> bool {
    winner(board).is_some()
}

/// Full board and nobody has five
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_five_in_row(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn board_15() -> Board {
        Board::new(15).unwrap()
    }

    #[test]
    fn test_empty_board_no_win() {
        let board = board_15();
        assert!(!has_five_in_row(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_horizontal_five() {
        let mut board = board_15();
        for c in 3..8 {
            board.place_stone(Stone::Black, Pos::new(7, c));
        }
        assert_eq!(winner(&board), Some(Stone::Black));
    }

    #[test]
    fn test_vertical_five() {
        let mut board = board_15();
        for r in 10..15 {
            board.place_stone(Stone::White, Pos::new(r, 0));
        }
        assert_eq!(winner(&board), Some(Stone::White));
    }

    #[test]
    fn test_diagonal_five() {
        let mut board = board_15();
        for i in 0..5 {
            board.place_stone(Stone::Black, Pos::new(2 + i, 4 + i));
        }
        assert!(has_five_in_row(&board));
    }

    #[test]
    fn test_anti_diagonal_five_in_corner() {
        let mut board = board_15();
        // Shortest winning anti-diagonal: (10, 14) .. (14, 10)
        for i in 0..5 {
            board.place_stone(Stone::White, Pos::new(10 + i, 14 - i));
        }
        assert_eq!(winner(&board), Some(Stone::White));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let mut board = board_15();
        for c in 0..4 {
            board.place_stone(Stone::Black, Pos::new(0, c));
        }
        assert!(!has_five_in_row(&board));
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut board = board_15();
        for c in [2, 3, 4, 6, 7] {
            board.place_stone(Stone::Black, Pos::new(5, c));
        }
        assert!(!has_five_in_row(&board));
        board.place_stone(Stone::Black, Pos::new(5, 5));
        assert!(has_five_in_row(&board));
    }

    #[test]
    fn test_mixed_colors_break_run() {
        let mut board = board_15();
        for c in 0..5 {
            board.place_stone(Stone::Black, Pos::new(1, c));
        }
        board.place_stone(Stone::White, Pos::new(1, 2));
        assert!(!has_five_in_row(&board));
    }

    #[test]
    fn test_overline_wins() {
        let mut board = board_15();
        for c in 0..7 {
            board.place_stone(Stone::White, Pos::new(14, c));
        }
        assert_eq!(winner(&board), Some(Stone::White));
    }

    #[test]
    fn test_line_winner() {
        use Stone::{Black as B, Empty as E, White as W};
        assert_eq!(line_winner(&[E, B, B, B, B, B, W]), Some(B));
        assert_eq!(line_winner(&[E, E, E, E, E, E]), None);
        assert_eq!(line_winner(&[W, W, W, W, B, W]), None);
    }

    #[test]
    fn test_win_on_every_board_size() {
        for side in 5..=12u8 {
            let mut board = Board::new(side).unwrap();
            for i in 0..5 {
                board.place_stone(Stone::Black, Pos::new(side - 1 - i, side - 5 + i));
            }
            assert!(has_five_in_row(&board), "side {side}");
        }
    }

    #[test]
    fn test_full_board_draw() {
        // Pairs of columns alternate color and shift every row,
        // so no line holds more than two equal stones in a row
        let mut board = Board::new(6).unwrap();
        for r in 0..6u8 {
            for c in 0..6u8 {
                let stone = if (c / 2 + r) % 2 == 0 { Stone::Black } else { Stone::White };
                board.place_stone(stone, Pos::new(r, c));
            }
        }
        assert!(board.is_full());
        assert!(!has_five_in_row(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_win_is_not_draw() {
        let mut board = Board::new(5).unwrap();
        for r in 0..5u8 {
            for c in 0..5u8 {
                board.place_stone(Stone::White, Pos::new(r, c));
            }
        }
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
