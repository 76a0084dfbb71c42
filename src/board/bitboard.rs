//! 64-bit bitboard, one bit per cell (bit index = row * 8 + column)

use std::fmt;

use auto_ops::{impl_op, impl_op_ex};

use super::Pos;

/// Set of board cells packed into a single `u64`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(u64::MAX);

    /// Bitboard with only bit `idx` set
    #[inline]
    pub const fn from_index(idx: usize) -> Self {
        Self(1u64 << idx)
    }

    /// Check if bit is set at position
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (self.0 >> pos.to_index()) & 1 == 1
    }

    /// Whether any bit is shared with `other`
    #[inline]
    pub fn intersects(self, other: Bitboard) -> bool {
        self.0 & other.0 != 0
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether exactly one bit is set
    #[inline]
    pub fn is_single(&self) -> bool {
        self.0.is_power_of_two()
    }

    /// The `n`-th set cell (0-based, ascending bit order)
    pub fn nth_cell(&self, n: usize) -> Option<Pos> {
        self.iter_ones().nth(n)
    }

    /// Shift by a signed cell delta: positive toward higher indices,
    /// negative toward lower. Bits pushed past either end are dropped.
    #[inline]
    pub fn shift(self, delta: i8) -> Bitboard {
        if delta < 0 {
            Bitboard(self.0 >> -delta)
        } else {
            Bitboard(self.0 << delta)
        }
    }

    /// Iterate over set bit positions
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.0 }
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitboard({:#018x})", self.0)
    }
}

impl_op_ex!(& |a: &Bitboard, b: &Bitboard| -> Bitboard { Bitboard(a.0 & b.0) });
impl_op_ex!(| |a: &Bitboard, b: &Bitboard| -> Bitboard { Bitboard(a.0 | b.0) });
impl_op_ex!(^ |a: &Bitboard, b: &Bitboard| -> Bitboard { Bitboard(a.0 ^ b.0) });
impl_op!(! |a: Bitboard| -> Bitboard { Bitboard(!a.0) });
impl_op!(&= |a: &mut Bitboard, b: Bitboard| { a.0 &= b.0 });
impl_op!(|= |a: &mut Bitboard, b: Bitboard| { a.0 |= b.0 });
impl_op!(^= |a: &mut Bitboard, b: Bitboard| { a.0 ^= b.0 });

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        // Get position of lowest set bit
        let idx = self.bits.trailing_zeros() as usize;

        // Clear the bit we just found
        self.bits &= self.bits - 1;

        Some(Pos::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_directions() {
        let b = Bitboard::from_index(27);
        assert_eq!(b.shift(8), Bitboard::from_index(35));
        assert_eq!(b.shift(-8), Bitboard::from_index(19));
        assert_eq!(b.shift(1), Bitboard::from_index(28));
        assert_eq!(b.shift(-9), Bitboard::from_index(18));
    }

    #[test]
    fn test_shift_drops_overflow() {
        assert!(Bitboard::from_index(63).shift(1).is_empty());
        assert!(Bitboard::from_index(0).shift(-1).is_empty());
    }

    #[test]
    fn test_iter_ascending() {
        let b = Bitboard(0b1010_0001);
        let idx: Vec<usize> = b.iter_ones().map(|p| p.to_index()).collect();
        assert_eq!(idx, vec![0, 5, 7]);
        assert_eq!(b.iter_ones().len(), 3);
    }

    #[test]
    fn test_nth_cell() {
        let b = Bitboard(0b1010_0001);
        assert_eq!(b.nth_cell(1), Some(Pos::from_index(5)));
        assert_eq!(b.nth_cell(3), None);
    }

    #[test]
    fn test_operators() {
        let a = Bitboard(0b1100);
        let b = Bitboard(0b1010);
        assert_eq!(a & b, Bitboard(0b1000));
        assert_eq!(a | b, Bitboard(0b1110));
        assert_eq!(a ^ b, Bitboard(0b0110));
        assert_eq!(!Bitboard::EMPTY, Bitboard::FULL);

        let mut c = a;
        c |= b;
        c ^= Bitboard(0b0010);
        assert_eq!(c, Bitboard(0b1100));
    }

    #[test]
    fn test_contains_single_cell() {
        let pos = Pos::new(3, 5);
        let b = pos.to_mask();
        assert!(b.contains(pos));
        assert!(!b.contains(Pos::new(5, 3)));
        assert!(b.is_single());
        assert!(!(b | Pos::new(0, 0).to_mask()).is_single());
    }
}
