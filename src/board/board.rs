//! Board structure: a square grid of stones

use std::fmt;

use rand::Rng;

use super::{Pos, Stone, MAX_SIDE, MIN_SIDE};
use crate::error::{GomokuError, Result};
use crate::eval;
use crate::rules;

/// Game board.
///
/// Cells are stored row-major. The side never changes after construction;
/// stones are only removed by [`Board::clear`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    side: u8,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty board. Fails unless `side` is within
    /// [`MIN_SIDE`]`..=`[`MAX_SIDE`].
    pub fn new(side: u8) -> Result<Self> {
        if side < MIN_SIDE {
            return Err(GomokuError::SideTooSmall {
                side,
                min: MIN_SIDE,
            });
        }
        if side > MAX_SIDE {
            return Err(GomokuError::SideTooLarge {
                side,
                max: MAX_SIDE,
            });
        }
        let side_len = usize::from(side);
        Ok(Self {
            side,
            cells: vec![Stone::Empty; side_len * side_len],
        })
    }

    #[inline]
    pub fn side(&self) -> u8 {
        self.side
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        usize::from(pos.row) * usize::from(self.side) + usize::from(pos.col)
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.side && pos.col < self.side
    }

    /// Get stone at position, `None` when off the board
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if self.contains(pos) {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// Check if position is empty. Off-board positions are never empty.
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Stone::Empty)
    }

    /// Place a stone without any legality check.
    ///
    /// Bounds and emptiness are the caller's responsibility; the search calls
    /// this on every simulated move. Use [`Board::try_place_stone`] for input
    /// coming from a player.
    #[inline]
    pub fn place_stone(&mut self, player: Stone, pos: Pos) {
        debug_assert!(self.contains(pos), "{pos} is off the board");
        let idx = self.index(pos);
        self.cells[idx] = player;
    }

    /// Validated placement for moves read from a player
    pub fn try_place_stone(&mut self, player: Stone, pos: Pos) -> Result<()> {
        if !player.is_player() {
            return Err(GomokuError::InvalidPlayer);
        }
        match self.get(pos) {
            None => Err(GomokuError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                side: self.side,
            }),
            Some(Stone::Empty) => {
                self.place_stone(player, pos);
                Ok(())
            }
            Some(_) => Err(GomokuError::Occupied {
                row: pos.row,
                col: pos.col,
            }),
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
    }

    /// One row of the grid
    #[inline]
    pub fn row(&self, row: u8) -> &[Stone] {
        let side = usize::from(self.side);
        let start = usize::from(row) * side;
        &self.cells[start..start + side]
    }

    /// Iterate `(pos, stone)` over the whole board in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        let side = usize::from(self.side);
        self.cells.iter().enumerate().map(move |(idx, &stone)| {
            #[allow(clippy::cast_possible_truncation)]
            let pos = Pos::new((idx / side) as u8, (idx % side) as u8);
            (pos, stone)
        })
    }

    /// All positions holding `player`. With `Stone::Empty` this lists the
    /// empty cells.
    pub fn occupied(&self, player: Stone) -> Vec<Pos> {
        self.iter()
            .filter(|&(_, stone)| stone == player)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// On-board positions within `radius` of `pos` on both axes, `pos` excluded
    pub fn neighbors(&self, pos: Pos, radius: u8) -> Vec<Pos> {
        let radius = i32::from(radius);
        let mut out = Vec::with_capacity(((2 * radius + 1) * (2 * radius + 1)) as usize);
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = i32::from(pos.row) + dr;
                let c = i32::from(pos.col) + dc;
                if let Some(p) = Pos::checked(r, c, self.side) {
                    out.push(p);
                }
            }
        }
        out
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_player()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|s| s.is_player())
    }

    /// Five or more in a row anywhere on the board
    #[inline]
    pub fn victory(&self) -> bool {
        rules::has_five_in_row(self)
    }

    /// Color owning a winning run, if any
    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        rules::winner(self)
    }

    /// Full board without a winner
    #[inline]
    pub fn draw(&self) -> bool {
        rules::is_draw(self)
    }

    /// Heuristic score from `player`'s point of view
    #[inline]
    pub fn evaluate(&self, player: Stone) -> f64 {
        eval::evaluate(self, player)
    }

    /// Fill every cell uniformly at random. Debugging aid.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = match rng.gen_range(-1i8..=1) {
                1 => Stone::Black,
                -1 => Stone::White,
                _ => Stone::Empty,
            };
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 2 * usize::from(self.side) + 1;
        writeln!(f, "┏{}┓", "━".repeat(width))?;
        for r in 0..self.side {
            let row: Vec<String> = self.row(r).iter().map(|s| s.symbol().to_string()).collect();
            writeln!(f, "┃ {} ┃", row.join(" "))?;
        }
        write!(f, "┗{}┛", "━".repeat(width))
    }
}
