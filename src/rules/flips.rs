//! Capture detection for a placed stone
//!
//! A run of opponent stones is flipped when it lies between the placed
//! stone and another stone of the mover along one of the eight directions.

use crate::board::{Bitboard, Board};

use super::direction::{directional_run, Direction};

/// Opponent stones flipped when `mine` plays the single cell `mv`.
///
/// Walks outward from `mv` in every direction. A direction contributes
/// its run only when the next cell past the run belongs to `mine`.
pub fn captured_by(mine: Bitboard, theirs: Bitboard, mv: Bitboard) -> Bitboard {
    let mut captured = Bitboard::EMPTY;

    for dir in Direction::ALL {
        let run = directional_run(mv, theirs & dir.edge_mask(), dir);
        if mine.intersects(dir.step(run)) {
            captured |= run;
        }
    }

    captured
}

/// Stones the side to move on `board` would flip by playing `mv`.
#[inline]
pub fn flips(board: &Board, mv: Bitboard) -> Bitboard {
    let side = board.side_to_move();
    captured_by(board.stones(side), board.stones(side.opponent()), mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn cells(names: &[&str]) -> Bitboard {
        names
            .iter()
            .map(|n| n.parse::<Pos>().unwrap().to_mask())
            .fold(Bitboard::EMPTY, |acc, m| acc | m)
    }

    #[test]
    fn test_capture_horizontal() {
        // X _ O O X  (X places at b1, flips c1 d1)
        let mine = cells(&["a1", "e1"]);
        let theirs = cells(&["c1", "d1"]);
        let captured = captured_by(mine, theirs, cells(&["b1"]));
        assert_eq!(captured, cells(&["c1", "d1"]));
    }

    #[test]
    fn test_capture_requires_closing_stone() {
        // Run reaches the edge with nothing of ours beyond it
        let mine = cells(&["a1"]);
        let theirs = cells(&["c1", "d1", "e1", "f1", "g1", "h1"]);
        assert!(captured_by(mine, theirs, cells(&["b1"])).is_empty());
    }

    #[test]
    fn test_capture_multiple_directions() {
        // Placing d4 closes a vertical and a diagonal run at once
        let mine = cells(&["d1", "a1"]);
        let theirs = cells(&["d2", "d3", "b2", "c3"]);
        let captured = captured_by(mine, theirs, cells(&["d4"]));
        assert_eq!(captured, cells(&["d2", "d3", "b2", "c3"]));
    }

    #[test]
    fn test_capture_stops_at_empty_gap() {
        let mine = cells(&["a1"]);
        let theirs = cells(&["c1"]);
        assert!(captured_by(mine, theirs, cells(&["d1"])).is_empty());
    }

    #[test]
    fn test_capture_does_not_wrap() {
        // a4 is ours only by wrap-around from h3
        let mine = cells(&["a4"]);
        let theirs = cells(&["h3"]);
        assert!(captured_by(mine, theirs, cells(&["g3"])).is_empty());
    }
}
