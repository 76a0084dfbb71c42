//! Tiered score tables
//!
//! A table holds one bitboard per rank (0 = worst, 14 = best). Each cell
//! belongs to exactly one rank. The four static tables below assign the
//! board regions to ranks for the different game situations.

use crate::board::{Bitboard, Pos};

use super::regions::{
    Quadrant, A_TIER, B_TIER, CORNERS, C_SPOTS, C_TIER, D_TIER, E_TIER, F_TIER, G_TIER, X_SPOTS,
};

/// Number of ranks in a table
pub const RANKS: usize = 15;

/// Highest rank
pub const TOP_RANK: usize = RANKS - 1;

/// Rank-indexed cell sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTable {
    ranks: [Bitboard; RANKS],
}

const fn union(a: Bitboard, b: Bitboard) -> Bitboard {
    Bitboard(a.0 | b.0)
}

impl ScoreTable {
    /// Build a table from `(rank, cells)` pairs. Ranks may repeat.
    pub const fn from_entries(entries: &[(usize, Bitboard)]) -> Self {
        let mut ranks = [Bitboard::EMPTY; RANKS];
        let mut i = 0;
        while i < entries.len() {
            let (rank, cells) = entries[i];
            ranks[rank] = union(ranks[rank], cells);
            i += 1;
        }
        Self { ranks }
    }

    /// Rank of `pos`, or `None` if no rank holds it
    pub fn rank_of(&self, pos: Pos) -> Option<usize> {
        self.ranks.iter().position(|cells| cells.contains(pos))
    }

    #[inline]
    pub fn cells_at(&self, rank: usize) -> Bitboard {
        self.ranks[rank]
    }

    /// Every cell that has a rank
    pub fn coverage(&self) -> Bitboard {
        self.ranks
            .iter()
            .fold(Bitboard::EMPTY, |acc, cells| acc | cells)
    }

    /// Copy of this table whose `quadrant` is taken from `outcome`.
    ///
    /// Cells outside the quadrant keep their current rank.
    #[must_use]
    pub fn with_quadrant(&self, quadrant: Quadrant, outcome: &ScoreTable) -> ScoreTable {
        let keep = !quadrant.mask();
        let take = quadrant.mask();

        let mut ranks = self.ranks;
        for (rank, cells) in ranks.iter_mut().enumerate() {
            *cells = (*cells & keep) | (outcome.ranks[rank] & take);
        }
        ScoreTable { ranks }
    }
}

/// Opening: quiet central moves, edges are fine, corner neighbours are poison
pub const EARLY_GAME: ScoreTable = ScoreTable::from_entries(&[
    (TOP_RANK, CORNERS),
    (10, E_TIER),
    (9, F_TIER),
    (8, A_TIER),
    (7, B_TIER),
    (5, D_TIER),
    (3, C_TIER),
    (1, G_TIER),
    (0, union(C_SPOTS, X_SPOTS)),
]);

/// Mid game: edges overtake the centre
pub const MID_GAME: ScoreTable = ScoreTable::from_entries(&[
    (TOP_RANK, CORNERS),
    (10, A_TIER),
    (9, B_TIER),
    (7, E_TIER),
    (6, F_TIER),
    (4, D_TIER),
    (3, C_TIER),
    (1, G_TIER),
    (0, union(C_SPOTS, X_SPOTS)),
]);

/// Quadrant after we took its corner: neighbours of the corner become safe
pub const CORNER_TAKEN: ScoreTable = ScoreTable::from_entries(&[
    (TOP_RANK, union(CORNERS, C_SPOTS)),
    (13, A_TIER),
    (12, B_TIER),
    (11, X_SPOTS),
    (7, E_TIER),
    (6, F_TIER),
    (5, C_TIER),
    (4, D_TIER),
    (1, G_TIER),
]);

/// Quadrant after the opponent took its corner: stay off its edges
pub const CORNER_LOST: ScoreTable = ScoreTable::from_entries(&[
    (7, B_TIER),
    (6, E_TIER),
    (5, F_TIER),
    (4, A_TIER),
    (3, D_TIER),
    (2, C_TIER),
    (1, G_TIER),
    (0, union(union(CORNERS, C_SPOTS), X_SPOTS)),
]);

#[cfg(test)]
mod tests {
    use super::*;

    const STATIC_TABLES: [ScoreTable; 4] = [EARLY_GAME, MID_GAME, CORNER_TAKEN, CORNER_LOST];

    #[test]
    fn test_static_tables_cover_board() {
        for table in &STATIC_TABLES {
            assert_eq!(table.coverage(), Bitboard::FULL);
        }
    }

    #[test]
    fn test_static_tables_ranks_disjoint() {
        for table in &STATIC_TABLES {
            let total: u32 = (0..RANKS).map(|r| table.cells_at(r).count()).sum();
            assert_eq!(total, 64);
        }
    }

    #[test]
    fn test_corners_rank_highest_early() {
        let a1: Pos = "a1".parse().unwrap();
        assert_eq!(EARLY_GAME.rank_of(a1), Some(TOP_RANK));
        assert_eq!(MID_GAME.rank_of(a1), Some(TOP_RANK));
    }

    #[test]
    fn test_with_quadrant_is_local() {
        let table = EARLY_GAME.with_quadrant(Quadrant::TopLeft, &CORNER_TAKEN);
        let outside = !Quadrant::TopLeft.mask();
        let inside = Quadrant::TopLeft.mask();

        for rank in 0..RANKS {
            assert_eq!(table.cells_at(rank) & outside, EARLY_GAME.cells_at(rank) & outside);
            assert_eq!(table.cells_at(rank) & inside, CORNER_TAKEN.cells_at(rank) & inside);
        }
        assert_eq!(table.coverage(), Bitboard::FULL);
    }

    #[test]
    fn test_with_quadrant_leaves_source_untouched() {
        let before = MID_GAME;
        let _ = before.with_quadrant(Quadrant::BottomRight, &CORNER_LOST);
        assert_eq!(before, MID_GAME);
    }
}
