use crate::masks::*;
use crate::position::Square;

use std::fmt;
use std::ops::*;

/// A set of squares, one bit per square. Bit `i` is `Square(i)`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// Bitboard with no squares.
    pub const EMPTY: Bitboard = Bitboard(0);
    /// Bitboard of all squares.
    pub const ALL: Bitboard = Bitboard(ALL);
    /// Bitboard of File A.
    pub const FILE_A: Bitboard = Bitboard(FILE_A);
    /// Bitboard of File H.
    pub const FILE_H: Bitboard = Bitboard(FILE_H);
    /// Bitboard of Rank 1.
    pub const RANK_1: Bitboard = Bitboard(RANK_1);
    /// Bitboard of Rank 8.
    pub const RANK_8: Bitboard = Bitboard(RANK_8);

    /// Returns the count of set bits in the `Bitboard`.
    #[inline(always)]
    pub fn popcnt(&self) -> u32 {
        self.0.count_ones()
    }

    /// Returns the number of trailing zeros in the `Bitboard`. For a non-empty
    /// board this is the index of the lowest set bit.
    #[inline(always)]
    pub fn bsf(&self) -> u32 {
        self.0.trailing_zeros()
    }

    /// Toggles off the current lowest significant bit which is set.
    #[inline(always)]
    pub fn toggle_lsb(&mut self) {
        *self &= *self - 1u64;
    }

    /// Returns true iff the `Bitboard` has no bits set.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true iff the `Bitboard` has at least one bit set.
    #[inline(always)]
    pub fn is_not_empty(&self) -> bool {
        self.0 != 0
    }

    /// Returns true iff `sq` is a member of the set.
    #[inline(always)]
    pub fn contains(self, sq: Square) -> bool {
        (self & sq.to_bb()).is_not_empty()
    }

    /// Shifts every bit by `delta` squares: towards rank 8 for a positive delta,
    /// towards rank 1 for a negative one. Bits pushed past either end of the board
    /// are dropped; wrapping across the a/h files is left to the caller to mask.
    #[inline(always)]
    pub fn shift(self, delta: i8) -> Bitboard {
        if delta >= 0 {
            Bitboard(self.0 << delta)
        } else {
            Bitboard(self.0 >> -delta)
        }
    }

    /// Returns the square for a given bitboard.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if not exactly one bit is set.
    #[inline(always)]
    pub fn to_square(&self) -> Square {
        debug_assert!(self.popcnt() == 1);
        Square(self.bsf() as u8)
    }
}

impl_bit_ops!(Bitboard, u64);

impl std::iter::Iterator for Bitboard {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Square> {
        match self.bsf() {
            64 => None,
            x => {
                self.toggle_lsb();
                Some(Square(x as u8))
            }
        }
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Bitboard::EMPTY, |bb, sq| bb | sq.to_bb())
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "   ┌────────────────────────┐")?;
        for rank in (0..8u8).rev() {
            write!(f, " {} │", rank + 1)?;
            for file in 0..8u8 {
                if self.contains(Square(rank * 8 + file)) {
                    write!(f, " 1 ")?;
                } else {
                    write!(f, " . ")?;
                }
            }
            writeln!(f, "│")?;
        }
        writeln!(f, "   └────────────────────────┘")?;
        writeln!(f, "     a  b  c  d  e  f  g  h ")
    }
}
