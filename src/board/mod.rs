//! Board representation for Reversi

pub mod bitboard;
pub mod board;


use std::fmt;
use std::str::FromStr;

use crate::error::ProtocolError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board width and height (8x8)
pub const BOARD_WIDTH: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_WIDTH * BOARD_WIDTH; // 64

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Moves first, written `X` by the protocol
    Black,
    /// Written `O` by the protocol
    White,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Slot of this color's mask in `Board::stones`
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    /// Protocol letter for this color
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }

    /// Parse a protocol letter (`X` or `O`)
    pub fn from_symbol(c: char) -> Option<Color> {
        match c {
            'X' => Some(Color::Black),
            'O' => Some(Color::White),
            _ => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col: u8,
    pub row: u8,
}

impl Pos {
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        debug_assert!(col < BOARD_WIDTH as u8 && row < BOARD_WIDTH as u8);
        Self { col, row }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_WIDTH + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            col: (idx % BOARD_WIDTH) as u8,
            row: (idx / BOARD_WIDTH) as u8,
        }
    }

    /// Whether (x, y) lies on the board
    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_WIDTH as i32 && y >= 0 && y < BOARD_WIDTH as i32
    }

    /// Single-bit mask of this cell
    #[inline]
    pub fn to_mask(self) -> Bitboard {
        Bitboard::from_index(self.to_index())
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Pos {
    type Err = ProtocolError;

    /// Parse algebraic notation: file `A`-`H` (any case) then rank `1`-`8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ProtocolError::UnknownCommand(s.to_string()));
        }

        let x = bytes[0].to_ascii_uppercase() as i32 - b'A' as i32;
        let y = bytes[1] as i32 - b'1' as i32;
        if !Pos::is_valid(x, y) {
            return Err(ProtocolError::CoordinateOutOfRange(s.to_string()));
        }

        Ok(Pos::new(x as u8, y as u8))
    }
}
