//! Adaptive positional heuristic
//!
//! Scores a candidate cell by its rank in the active [`ScoreTable`]. The
//! table changes as the game goes on:
//! - after a fixed number of moves the early-game table is swapped for
//!   the mid-game table (once)
//! - when a corner is played, the corner's quadrant is rewritten from
//!   [`CORNER_TAKEN`] or [`CORNER_LOST`], depending on who took it

use log::{info, trace, warn};
use rand::Rng;

use crate::board::{Bitboard, Pos};

use super::regions::{Quadrant, Region};
use super::table::{ScoreTable, CORNER_LOST, CORNER_TAKEN, EARLY_GAME, MID_GAME};

/// Moves (by both sides) played on the early-game table
pub const EARLY_GAME_MOVES: u32 = 12;

/// Game phase of the adaptive table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Early,
    Mid,
}

/// Heuristic state for one game
#[derive(Debug, Clone)]
pub struct AdaptiveHeuristic {
    table: ScoreTable,
    phase: Phase,
    /// Moves left before the mid-game switch
    countdown: u32,
    early_game_moves: u32,
}

impl AdaptiveHeuristic {
    pub fn new() -> Self {
        Self::with_early_game(EARLY_GAME_MOVES)
    }

    /// Heuristic that leaves the early game after `moves` moves
    pub fn with_early_game(moves: u32) -> Self {
        Self {
            table: EARLY_GAME,
            phase: Phase::Early,
            countdown: moves,
            early_game_moves: moves,
        }
    }

    /// Back to the early-game table with a full countdown
    pub fn reset(&mut self) {
        *self = Self::with_early_game(self.early_game_moves);
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    /// Desirability of playing `pos` under the active table
    pub fn score(&self, pos: Pos) -> i32 {
        match self.table.rank_of(pos) {
            Some(rank) => rank as i32,
            None => {
                warn!("cell {} has no rank in the active table, using static score", pos);
                Region::of(pos).static_score()
            }
        }
    }

    /// Best-scoring cell of `legal`, ties broken at random
    pub fn pick_move<R: Rng + ?Sized>(&self, legal: Bitboard, rng: &mut R) -> Option<Pos> {
        select_best(legal, |pos| self.score(pos), rng)
    }

    /// Update the table after `mv` was played by either side.
    pub fn on_move_made(&mut self, mv: Pos, was_enemy: bool) {
        if self.phase == Phase::Early {
            self.countdown = self.countdown.saturating_sub(1);
            if self.countdown == 0 {
                info!("switching to mid-game heuristic");
                self.table = MID_GAME;
                self.phase = Phase::Mid;
            }
        }

        if let Some(quadrant) = Quadrant::of_corner(mv) {
            let outcome = if was_enemy { &CORNER_LOST } else { &CORNER_TAKEN };
            info!(
                "corner {} {} by {}, rescoring {:?}",
                mv,
                if was_enemy { "lost" } else { "taken" },
                if was_enemy { "opponent" } else { "us" },
                quadrant
            );
            self.table = self.table.with_quadrant(quadrant, outcome);
        }
    }
}

impl Default for AdaptiveHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the highest-scoring cell of `candidates`.
///
/// Every cell sharing the maximum score is collected, then one of them is
/// drawn uniformly. Returns `None` when `candidates` is empty.
pub fn select_best<R, F>(candidates: Bitboard, mut score: F, rng: &mut R) -> Option<Pos>
where
    R: Rng + ?Sized,
    F: FnMut(Pos) -> i32,
{
    let mut best_score = i32::MIN;
    let mut best = Bitboard::EMPTY;

    for pos in candidates.iter_ones() {
        let s = score(pos);
        trace!("candidate {} scores {}", pos, s);
        if s > best_score {
            best_score = s;
            best = pos.to_mask();
        } else if s == best_score {
            best |= pos.to_mask();
        }
    }

    random_cell(best, rng)
}

/// Uniformly random set cell of `mask`
pub fn random_cell<R: Rng + ?Sized>(mask: Bitboard, rng: &mut R) -> Option<Pos> {
    let n = mask.count() as usize;
    if n == 0 {
        return None;
    }
    mask.nth_cell(rng.gen_range(0..n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::table::RANKS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pos(s: &str) -> Pos {
        s.parse().unwrap()
    }

    #[test]
    fn test_corner_outscores_neighbours() {
        let h = AdaptiveHeuristic::new();
        assert!(h.score(pos("a1")) > h.score(pos("b1")));
        assert!(h.score(pos("a1")) > h.score(pos("b2")));
        assert!(h.score(pos("a1")) > h.score(pos("d3")));
    }

    #[test]
    fn test_pick_move_prefers_corner() {
        let h = AdaptiveHeuristic::new();
        let mut rng = StdRng::seed_from_u64(7);
        let legal = pos("a1").to_mask() | pos("b2").to_mask() | pos("d3").to_mask();
        assert_eq!(h.pick_move(legal, &mut rng), Some(pos("a1")));
    }

    #[test]
    fn test_pick_move_empty() {
        let h = AdaptiveHeuristic::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(h.pick_move(Bitboard::EMPTY, &mut rng), None);
    }

    #[test]
    fn test_ties_broken_among_best_only() {
        // All four opening moves of black are tier F cells
        let h = AdaptiveHeuristic::new();
        let legal = ["d3", "c4", "f5", "e6"]
            .iter()
            .fold(Bitboard::EMPTY, |acc, s| acc | pos(s).to_mask());
        let with_bad = legal | pos("b2").to_mask();

        let mut seen = Bitboard::EMPTY;
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let mv = h.pick_move(with_bad, &mut rng).unwrap();
            assert!(legal.contains(mv));
            seen |= mv.to_mask();
        }
        assert_eq!(seen, legal);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let h = AdaptiveHeuristic::new();
        let legal = Bitboard(0x0000_1824_2418_0000);
        let a = h.pick_move(legal, &mut StdRng::seed_from_u64(99));
        let b = h.pick_move(legal, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_mid_game_switch() {
        let mut h = AdaptiveHeuristic::with_early_game(3);
        h.on_move_made(pos("d3"), false);
        h.on_move_made(pos("c3"), true);
        assert_eq!(h.phase(), Phase::Early);
        assert_eq!(*h.table(), EARLY_GAME);

        h.on_move_made(pos("c4"), false);
        assert_eq!(h.phase(), Phase::Mid);
        assert_eq!(*h.table(), MID_GAME);

        // Never reverts
        for _ in 0..20 {
            h.on_move_made(pos("f5"), true);
        }
        assert_eq!(*h.table(), MID_GAME);
    }

    #[test]
    fn test_corner_capture_is_local() {
        let mut h = AdaptiveHeuristic::new();
        let before = h.clone();
        h.on_move_made(pos("h8"), false);

        let quadrant = Quadrant::BottomRight.mask();
        for cell in (!quadrant).iter_ones() {
            assert_eq!(h.score(cell), before.score(cell), "cell {} changed", cell);
        }
        // C-spot next to our corner is now attractive
        assert!(h.score(pos("g8")) > before.score(pos("g8")));
    }

    #[test]
    fn test_corner_lost_devalues_quadrant_edges() {
        let mut h = AdaptiveHeuristic::new();
        h.on_move_made(pos("a1"), true);
        let table = h.table();
        for rank in 0..RANKS {
            assert_eq!(
                table.cells_at(rank) & Quadrant::TopLeft.mask(),
                CORNER_LOST.cells_at(rank) & Quadrant::TopLeft.mask()
            );
        }
        assert_eq!(h.score(pos("b1")), 0);
    }

    #[test]
    fn test_non_corner_leaves_table() {
        let mut h = AdaptiveHeuristic::new();
        h.on_move_made(pos("b1"), true);
        assert_eq!(*h.table(), EARLY_GAME);
    }

    #[test]
    fn test_reset_restores_early_game() {
        let mut h = AdaptiveHeuristic::with_early_game(1);
        h.on_move_made(pos("a1"), false);
        assert_eq!(h.phase(), Phase::Mid);
        h.reset();
        assert_eq!(h.phase(), Phase::Early);
        assert_eq!(*h.table(), EARLY_GAME);
    }

    #[test]
    fn test_random_cell_uniform_support() {
        let mask = Bitboard(0b1001_0001);
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = Bitboard::EMPTY;
        for _ in 0..100 {
            seen |= random_cell(mask, &mut rng).unwrap().to_mask();
        }
        assert_eq!(seen, mask);
        assert_eq!(random_cell(Bitboard::EMPTY, &mut rng), None);
    }
}
