//! Board representation for Gomoku

pub mod board;
pub mod lines;


// Re-exports
pub use board::Board;
pub use lines::Orientation;

/// Smallest side that still admits five in a row
pub const MIN_SIDE: u8 = 5;

/// Largest side the evaluation weights are calibrated for (19x19)
pub const MAX_SIDE: u8 = 19;

/// Traditional board side (15x15)
pub const DEFAULT_SIDE: u8 = 15;

/// Run length needed to win
pub const WIN_LENGTH: usize = 5;

/// Stone colors.
///
/// Black is the `+1` player and White the `-1` player. White is the
/// maximizing side of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Signed encoding: Empty = 0, Black = +1, White = -1
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => -1,
        }
    }

    #[inline]
    pub fn from_value(value: i8) -> Option<Stone> {
        match value {
            0 => Some(Stone::Empty),
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            _ => None,
        }
    }

    /// True for the side that raises alpha during search
    #[inline]
    pub fn is_maximizer(self) -> bool {
        self == Stone::White
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }

    /// Glyph used when printing the board
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => '●',
            Stone::White => '○',
            Stone::Empty => ' ',
        }
    }
}

/// Position on the board.
///
/// Ordering is row-major, which is also the order candidate moves are
/// listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Build a position from signed coordinates, if they fit on a board of `side`
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn checked(row: i32, col: i32, side: u8) -> Option<Self> {
        if Self::is_valid(row, col, side) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, side: u8) -> bool {
        let side = i32::from(side);
        row >= 0 && row < side && col >= 0 && col < side
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
