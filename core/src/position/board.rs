use super::{Piece, Square};
use std::fmt;

/// The occupancy cache: one cell per square holding the piece standing there, or
/// `Piece::None`. It mirrors the piece bitboards in `Position` so that "what is on
/// this square" is a single array read.
#[derive(Clone, Eq, PartialEq)]
pub struct Board {
    arr: [Piece; 64],
}

impl Board {
    pub fn new() -> Self {
        Self {
            arr: [Piece::None; 64],
        }
    }

    /// Returns the Piece at a `Square`, or `Piece::None` if the square is empty.
    #[inline]
    pub fn piece_at_sq(&self, sq: Square) -> Piece {
        debug_assert!(sq.is_okay());
        self.arr[sq.0 as usize]
    }

    /// Remove the piece at the passed `Square`.
    #[inline]
    pub fn remove(&mut self, sq: Square) {
        debug_assert!(sq.is_okay());
        self.arr[sq.0 as usize] = Piece::None;
    }

    /// Place `piece` at the passed `Square`, replacing whatever was there.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `piece` is `Piece::None`; use [`Board::remove`]
    /// to empty a square.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) {
        debug_assert!(sq.is_okay());
        debug_assert!(!piece.is_none());
        self.arr[sq.0 as usize] = piece;
    }

    pub fn pretty_string(&self) -> String {
        let mut s = String::new();

        s.push_str("   ┌────────────────────────┐\n");
        for rank in (0..8u8).rev() {
            s.push_str(&format!(" {} │", rank + 1));
            for file in 0..8u8 {
                s.push_str(&format!(" {} ", self.piece_at_sq(Square(rank * 8 + file))));
            }
            s.push_str("│\n");
        }
        s.push_str("   └────────────────────────┘\n");
        s.push_str("     a  b  c  d  e  f  g  h \n");

        s
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = (Square, Piece);
    type IntoIter = BoardIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        BoardIterator {
            board: self,
            idx: 0,
        }
    }
}

/// Walks every square from a1 to h8, yielding its occupant.
pub struct BoardIterator<'a> {
    board: &'a Board,
    idx: u8,
}

impl<'a> Iterator for BoardIterator<'a> {
    type Item = (Square, Piece);

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= 64 {
            return None;
        }
        let sq = Square(self.idx);
        self.idx += 1;
        Some((sq, self.board.piece_at_sq(sq)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty_string())
    }
}
