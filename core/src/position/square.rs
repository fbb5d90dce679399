use crate::bb::Bitboard;
use crate::error::Error;

use std::fmt;
use std::ops::*;
use std::str::FromStr;

/// Represents a single square of a chess board.
///
/// The inner index is `rank * 8 + file`, so `A1` is 0 and `H8` is 63. The external
/// (row, column) coordinates used by callers map onto this with row as the rank
/// (row 0 is White's back rank) and column as the file (column 0 is the a-file).
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(pub u8);

impl_bit_ops!(Square, u8);

impl Square {
    /// Converts external (row, column) coordinates into a `Square`.
    pub fn from_row_col(row: u8, col: u8) -> Result<Self, Error> {
        if row > 7 || col > 7 {
            return Err(Error::InvalidSquare { row, col });
        }
        Ok(Square(row * 8 + col))
    }

    /// Converts the `Square` back into external (row, column) coordinates. This is
    /// the inverse of [`Square::from_row_col`].
    #[inline]
    pub fn to_row_col(self) -> (u8, u8) {
        debug_assert!(self.is_okay());
        (self.rank(), self.file())
    }

    #[inline]
    pub const fn is_okay(&self) -> bool {
        self.0 < 64
    }

    /// Returns the rank that the square lies on.
    #[inline]
    pub fn rank(self) -> u8 {
        (self.0 >> 3) & 0b0000_0111
    }

    /// Returns the file that the square lies on.
    #[inline]
    pub fn file(self) -> u8 {
        self.0 & 0b0000_0111
    }

    /// Converts the given `Square` to its equivalent `Bitboard`.
    #[inline]
    pub fn to_bb(self) -> Bitboard {
        Bitboard(1u64.wrapping_shl(self.0 as u32))
    }
}

// constants
impl Square {
    pub const A1: Square = Square(0);
    #[doc(hidden)]
    pub const B1: Square = Square(1);
    #[doc(hidden)]
    pub const C1: Square = Square(2);
    #[doc(hidden)]
    pub const D1: Square = Square(3);
    #[doc(hidden)]
    pub const E1: Square = Square(4);
    #[doc(hidden)]
    pub const F1: Square = Square(5);
    #[doc(hidden)]
    pub const G1: Square = Square(6);
    #[doc(hidden)]
    pub const H1: Square = Square(7);
    #[doc(hidden)]
    pub const A8: Square = Square(56);
    #[doc(hidden)]
    pub const B8: Square = Square(57);
    #[doc(hidden)]
    pub const C8: Square = Square(58);
    #[doc(hidden)]
    pub const D8: Square = Square(59);
    #[doc(hidden)]
    pub const E8: Square = Square(60);
    #[doc(hidden)]
    pub const F8: Square = Square(61);
    #[doc(hidden)]
    pub const G8: Square = Square(62);
    #[doc(hidden)]
    pub const H8: Square = Square(63);
}

const FILE_NAMES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            FILE_NAMES[self.file() as usize],
            self.rank() + 1
        )
    }
}

/// Error returned when a string is not an algebraic square name such as `e4`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square name: '{0}'")]
pub struct ParseSquareError(String);

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => {
                let file = file as u8 - b'a';
                let rank = rank as u8 - b'1';
                Ok(Square(rank * 8 + file))
            }
            _ => Err(ParseSquareError(s.to_string())),
        }
    }
}
