//! Move selection strategies
//!
//! All strategies look at the current position only (one ply).

use rand::Rng;

use crate::board::{Bitboard, Board, Color, Pos};

use super::heuristic::{random_cell, select_best, AdaptiveHeuristic};
use super::regions::Region;

/// Central 4x4 block, weighted up by the greedy evaluation
const CENTER_BLOCK: Bitboard = Bitboard(0x0000_3C3C_3C3C_0000);

/// Extra weight of a stone inside `CENTER_BLOCK`
const CENTER_WEIGHT: i32 = 9;

/// How the player picks among its legal moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Strategy {
    /// Positional tiers that adapt to game phase and corner ownership
    #[default]
    Adaptive,
    /// Fixed positional region scores
    Static,
    /// Best weighted disc balance after the move
    Greedy,
    /// Any legal move
    Random,
}

impl Strategy {
    /// Choose a move for the side to move on `board`.
    pub fn choose<R: Rng + ?Sized>(
        self,
        board: &Board,
        heuristic: &AdaptiveHeuristic,
        rng: &mut R,
    ) -> Option<Pos> {
        let legal = board.legal_moves();
        match self {
            Strategy::Adaptive => heuristic.pick_move(legal, rng),
            Strategy::Static => select_best(legal, |pos| Region::of(pos).static_score(), rng),
            Strategy::Greedy => {
                let me = board.side_to_move();
                select_best(
                    legal,
                    |pos| {
                        let mut next = board.clone();
                        next.apply_move(pos.to_mask());
                        weighted_disc_balance(&next, me)
                    },
                    rng,
                )
            }
            Strategy::Random => random_cell(legal, rng),
        }
    }
}

/// Disc balance for `color`, central stones counting extra.
pub fn weighted_disc_balance(board: &Board, color: Color) -> i32 {
    let mine = board.stones(color);
    let theirs = board.stones(color.opponent());

    let plain = mine.count() as i32 - theirs.count() as i32;
    let center = (mine & CENTER_BLOCK).count() as i32 - (theirs & CENTER_BLOCK).count() as i32;

    plain + CENTER_WEIGHT * center
}
