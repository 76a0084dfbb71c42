//! Legal move generation by directional flood fill

use crate::board::{Bitboard, Board};

use super::direction::{directional_run, Direction};

/// Cells where `mine` can play against `theirs`.
///
/// For every direction, the mover's stones are slid across contiguous
/// opponent runs; an empty cell directly beyond a run is a legal move.
pub fn possible_moves_for(mine: Bitboard, theirs: Bitboard) -> Bitboard {
    let empty = !(mine | theirs);
    let mut moves = Bitboard::EMPTY;

    for dir in Direction::ALL {
        let run = directional_run(mine, theirs & dir.edge_mask(), dir);
        moves |= empty & dir.step(run);
    }

    moves
}

/// All legal moves for the side to move on `board`.
#[inline]
pub fn possible_moves(board: &Board) -> Bitboard {
    let side = board.side_to_move();
    possible_moves_for(board.stones(side), board.stones(side.opponent()))
}
