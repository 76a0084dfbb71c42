//! Compass directions and the shared run-walking primitive

use crate::board::Bitboard;

/// Interior rows only (rank 1 and rank 8 blanked)
const ROW_INTERIOR: Bitboard = Bitboard(0x00FF_FFFF_FFFF_FF00);
/// Interior columns only (files A and H blanked)
const COL_INTERIOR: Bitboard = Bitboard(0x7E7E_7E7E_7E7E_7E7E);
/// Interior rows and columns
const INTERIOR: Bitboard = Bitboard(0x007E_7E7E_7E7E_7E00);

/// The eight compass directions a run of stones can follow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Down,
        Direction::Right,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::Up,
        Direction::Left,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// Cell-index delta of one step (row stride is 8)
    #[inline]
    pub const fn delta(self) -> i8 {
        match self {
            Direction::Down => 8,
            Direction::Right => 1,
            Direction::DownRight => 9,
            Direction::DownLeft => 7,
            Direction::Up => -8,
            Direction::Left => -1,
            Direction::UpRight => -7,
            Direction::UpLeft => -9,
        }
    }

    /// Cells that may sit inside a capturable run along this direction.
    ///
    /// A run cell always has a neighbour on both sides, so the border the
    /// direction crosses is blanked. This also stops a horizontal or
    /// diagonal shift from carrying a bit over into the adjacent row.
    #[inline]
    pub const fn edge_mask(self) -> Bitboard {
        match self {
            Direction::Up | Direction::Down => ROW_INTERIOR,
            Direction::Left | Direction::Right => COL_INTERIOR,
            _ => INTERIOR,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    /// Move every bit one step in this direction
    #[inline]
    pub fn step(self, bb: Bitboard) -> Bitboard {
        bb.shift(self.delta())
    }
}

/// Flood `seed` along `dir` through the cells of `run`.
///
/// Returns every `run` cell reachable from a seed bit by stepping through
/// contiguous `run` cells. The seed cells themselves are not included.
/// Six steps after the first cover the longest interior run of an 8-wide
/// board.
#[inline]
pub fn directional_run(seed: Bitboard, run: Bitboard, dir: Direction) -> Bitboard {
    let mut reach = run & dir.step(seed);
    for _ in 0..6 {
        reach |= run & dir.step(reach);
    }
    reach
}
