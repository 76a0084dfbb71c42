//! Board structure with cached legal moves

use std::fmt;

use super::bitboard::Bitboard;
use super::{Color, Pos, BOARD_WIDTH};
use crate::rules::{flips, possible_moves};

/// Black stones of the opening position (e4, d5)
const START_BLACK: Bitboard = Bitboard(0x0000_0008_1000_0000);
/// White stones of the opening position (d4, e5)
const START_WHITE: Bitboard = Bitboard(0x0000_0010_0800_0000);

/// Game board: one bitboard per color plus the side to move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Stones per color, indexed by `Color::index`
    stones: [Bitboard; 2],
    side_to_move: Color,
    /// Legal moves for `side_to_move`, kept in sync on every mutation
    legal_moves: Bitboard,
}

impl Board {
    /// Opening position with `side_to_move` to play
    pub fn new(side_to_move: Color) -> Self {
        let mut board = Self {
            stones: [START_BLACK, START_WHITE],
            side_to_move,
            legal_moves: Bitboard::EMPTY,
        };
        board.refresh_legal_moves();
        board
    }

    /// Arbitrary position. Returns `None` if the two masks overlap.
    pub fn from_stones(black: Bitboard, white: Bitboard, side_to_move: Color) -> Option<Self> {
        if black.intersects(white) {
            return None;
        }

        let mut board = Self {
            stones: [black, white],
            side_to_move,
            legal_moves: Bitboard::EMPTY,
        };
        board.refresh_legal_moves();
        Some(board)
    }

    /// Get bitboard for a color
    #[inline]
    pub fn stones(&self, color: Color) -> Bitboard {
        self.stones[color.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Cached legal moves for the side to move
    #[inline]
    pub fn legal_moves(&self) -> Bitboard {
        self.legal_moves
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.stones[0] | self.stones[1]
    }

    #[inline]
    pub fn empty(&self) -> Bitboard {
        !self.occupied()
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Color> {
        if self.stones[0].contains(pos) {
            Some(Color::Black)
        } else if self.stones[1].contains(pos) {
            Some(Color::White)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_legal(&self, pos: Pos) -> bool {
        self.legal_moves.contains(pos)
    }

    /// Number of stones of a color
    #[inline]
    pub fn count(&self, color: Color) -> u32 {
        self.stones(color).count()
    }

    /// Own stones minus opponent stones
    #[inline]
    pub fn disc_difference(&self, color: Color) -> i32 {
        self.count(color) as i32 - self.count(color.opponent()) as i32
    }

    /// Hand the turn to the other color
    pub fn switch_side(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
        self.refresh_legal_moves();
    }

    /// Put `color` on move (no-op if it already is)
    pub fn set_side_to_move(&mut self, color: Color) {
        if self.side_to_move != color {
            self.switch_side();
        }
    }

    /// Play the single cell `mv` for the side to move.
    ///
    /// Flips every captured run, passes the turn and refreshes the legal
    /// moves. Legality is the caller's responsibility; `mv` must be empty.
    /// Returns the flipped stones.
    pub fn apply_move(&mut self, mv: Bitboard) -> Bitboard {
        debug_assert!(mv.is_single(), "move must be a single cell");
        debug_assert!(!mv.intersects(self.occupied()), "move onto occupied cell");

        let me = self.side_to_move.index();
        let captured = flips(self, mv);

        self.stones[me] |= mv | captured;
        self.stones[1 - me] ^= captured;

        self.switch_side();
        captured
    }

    fn refresh_legal_moves(&mut self) {
        self.legal_moves = possible_moves(self);
    }

    /// Render the board with legal moves marked `*`
    pub fn render_with_moves(&self) -> String {
        self.render(true)
    }

    fn render(&self, mark_moves: bool) -> String {
        let mut out = String::with_capacity(200);
        out.push_str(" |A|B|C|D|E|F|G|H|\n");

        for row in 0..BOARD_WIDTH as u8 {
            out.push_str(&format!("{}|", row + 1));
            for col in 0..BOARD_WIDTH as u8 {
                let pos = Pos::new(col, row);
                let ch = match self.get(pos) {
                    Some(color) => color.symbol(),
                    None if mark_moves && self.is_legal(pos) => '*',
                    None => '_',
                };
                out.push(ch);
                out.push('|');
            }
            out.push('\n');
        }

        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Color::Black)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
