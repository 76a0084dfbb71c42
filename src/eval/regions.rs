//! Board regions used by the positional heuristics
//!
//! The board splits into ten disjoint regions by distance and danger
//! relative to the corners. Together they cover every cell.
//!
//! ```text
//!  |A|B|C|D|E|F|G|H|
//! 1|K|C|a|b|b|a|C|K|
//! 2|C|X|c|d|d|c|X|C|
//! 3|a|c|e|f|f|e|c|a|
//! 4|b|d|f|g|g|f|d|b|
//! 5|b|d|f|g|g|f|d|b|
//! 6|a|c|e|f|f|e|c|a|
//! 7|C|X|c|d|d|c|X|C|
//! 8|K|C|a|b|b|a|C|K|
//! ```
//!
//! K = corner, C = C-spot, X = X-spot, a..g = tiers A..G.

use crate::board::{Bitboard, Pos};

pub const CORNERS: Bitboard = Bitboard(0x8100_0000_0000_0081);
/// Edge cells orthogonally adjacent to a corner
pub const C_SPOTS: Bitboard = Bitboard(0x4281_0000_0000_8142);
/// Cells diagonally adjacent to a corner
pub const X_SPOTS: Bitboard = Bitboard(0x0042_0000_0000_4200);
/// Edge cells two steps from a corner
pub const A_TIER: Bitboard = Bitboard(0x2400_8100_0081_0024);
/// Middle edge cells
pub const B_TIER: Bitboard = Bitboard(0x1800_0081_8100_0018);
/// Second ring, next to an X-spot
pub const C_TIER: Bitboard = Bitboard(0x0024_4200_0042_2400);
/// Second ring, middle
pub const D_TIER: Bitboard = Bitboard(0x0018_0042_4200_1800);
/// Corners of the central 4x4 block
pub const E_TIER: Bitboard = Bitboard(0x0000_2400_0024_0000);
/// Edges of the central 4x4 block
pub const F_TIER: Bitboard = Bitboard(0x0000_1824_2418_0000);
/// Central four cells
pub const G_TIER: Bitboard = Bitboard(0x0000_0018_1800_0000);

/// Named board region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Corner,
    CSpot,
    XSpot,
    TierA,
    TierB,
    TierC,
    TierD,
    TierE,
    TierF,
    TierG,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Region::Corner,
        Region::CSpot,
        Region::XSpot,
        Region::TierA,
        Region::TierB,
        Region::TierC,
        Region::TierD,
        Region::TierE,
        Region::TierF,
        Region::TierG,
    ];

    #[inline]
    pub const fn mask(self) -> Bitboard {
        match self {
            Region::Corner => CORNERS,
            Region::CSpot => C_SPOTS,
            Region::XSpot => X_SPOTS,
            Region::TierA => A_TIER,
            Region::TierB => B_TIER,
            Region::TierC => C_TIER,
            Region::TierD => D_TIER,
            Region::TierE => E_TIER,
            Region::TierF => F_TIER,
            Region::TierG => G_TIER,
        }
    }

    /// Region containing `pos`
    pub fn of(pos: Pos) -> Region {
        Region::ALL
            .into_iter()
            .find(|r| r.mask().contains(pos))
            .unwrap_or(Region::TierG)
    }

    /// Fixed desirability of the region, independent of game phase
    #[inline]
    pub const fn static_score(self) -> i32 {
        match self {
            Region::Corner => 10,
            Region::TierA | Region::TierB => 6,
            Region::TierC | Region::TierD => 4,
            Region::TierE => 2,
            Region::TierF => 1,
            Region::XSpot | Region::CSpot => 0,
            Region::TierG => 0,
        }
    }
}

/// One quarter of the board, anchored on a corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// a1..d4
    TopLeft,
    /// e1..h4
    TopRight,
    /// a5..d8
    BottomLeft,
    /// e5..h8
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    #[inline]
    pub const fn mask(self) -> Bitboard {
        match self {
            Quadrant::TopLeft => Bitboard(0x0000_0000_0F0F_0F0F),
            Quadrant::TopRight => Bitboard(0x0000_0000_F0F0_F0F0),
            Quadrant::BottomLeft => Bitboard(0x0F0F_0F0F_0000_0000),
            Quadrant::BottomRight => Bitboard(0xF0F0_F0F0_0000_0000),
        }
    }

    /// Quadrant whose corner is `pos`, if `pos` is a corner
    pub fn of_corner(pos: Pos) -> Option<Quadrant> {
        if !CORNERS.contains(pos) {
            return None;
        }
        Quadrant::ALL.into_iter().find(|q| q.mask().contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_partition_board() {
        let mut union = Bitboard::EMPTY;
        for (i, a) in Region::ALL.iter().enumerate() {
            for b in &Region::ALL[i + 1..] {
                assert!(!a.mask().intersects(b.mask()), "{:?} overlaps {:?}", a, b);
            }
            union |= a.mask();
        }
        assert_eq!(union, Bitboard::FULL);
    }

    #[test]
    fn test_region_sizes() {
        assert_eq!(CORNERS.count(), 4);
        assert_eq!(C_SPOTS.count(), 8);
        assert_eq!(X_SPOTS.count(), 4);
        assert_eq!(A_TIER.count(), 8);
        assert_eq!(B_TIER.count(), 8);
        assert_eq!(C_TIER.count(), 8);
        assert_eq!(D_TIER.count(), 8);
        assert_eq!(E_TIER.count(), 4);
        assert_eq!(F_TIER.count(), 8);
        assert_eq!(G_TIER.count(), 4);
    }

    #[test]
    fn test_region_of() {
        assert_eq!(Region::of("a1".parse().unwrap()), Region::Corner);
        assert_eq!(Region::of("b1".parse().unwrap()), Region::CSpot);
        assert_eq!(Region::of("g7".parse().unwrap()), Region::XSpot);
        assert_eq!(Region::of("c8".parse().unwrap()), Region::TierA);
        assert_eq!(Region::of("h4".parse().unwrap()), Region::TierB);
        assert_eq!(Region::of("c2".parse().unwrap()), Region::TierC);
        assert_eq!(Region::of("b5".parse().unwrap()), Region::TierD);
        assert_eq!(Region::of("f6".parse().unwrap()), Region::TierE);
        assert_eq!(Region::of("d3".parse().unwrap()), Region::TierF);
        assert_eq!(Region::of("e5".parse().unwrap()), Region::TierG);
    }

    #[test]
    fn test_quadrants_partition_board() {
        let union = Quadrant::ALL
            .iter()
            .fold(Bitboard::EMPTY, |acc, q| acc | q.mask());
        assert_eq!(union, Bitboard::FULL);
        for q in Quadrant::ALL {
            assert_eq!(q.mask().count(), 16);
            assert_eq!((q.mask() & CORNERS).count(), 1);
        }
    }

    #[test]
    fn test_quadrant_of_corner() {
        assert_eq!(Quadrant::of_corner("a1".parse().unwrap()), Some(Quadrant::TopLeft));
        assert_eq!(Quadrant::of_corner("h1".parse().unwrap()), Some(Quadrant::TopRight));
        assert_eq!(Quadrant::of_corner("a8".parse().unwrap()), Some(Quadrant::BottomLeft));
        assert_eq!(Quadrant::of_corner("h8".parse().unwrap()), Some(Quadrant::BottomRight));
        assert_eq!(Quadrant::of_corner("b1".parse().unwrap()), None);
    }
}
