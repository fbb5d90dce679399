use crate::masks::{PAWN_PROMO_RANK, PAWN_START_RANK};
use crate::position::{CastleType, Piece, PieceType, Position, Square};
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// What a move does to the position it is played in. A move can be several
    /// things at once, e.g. a capture that promotes.
    pub struct MoveType: u8 {
        const PROMOTION   = 0b00000001;
        const EN_PASSANT  = 0b00000010;
        const CASTLE      = 0b00000100;
        const CAPTURE     = 0b00001000;
        const QUIET       = 0b00010000;
        const DOUBLE_PUSH = 0b00100000;
    }
}

/// A fully specified move: which piece travels from where to where.
///
/// A `Move` carries no classification of its own, since whether it captures or
/// takes en passant depends on the position it is played in. See [`Move::classify`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    piece: Piece,
    orig: Square,
    dest: Square,
}

impl Move {
    pub fn new(piece: Piece, orig: Square, dest: Square) -> Self {
        debug_assert!(!piece.is_none());
        Self { piece, orig, dest }
    }

    #[inline(always)]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline(always)]
    pub fn orig(&self) -> Square {
        self.orig
    }

    #[inline(always)]
    pub fn dest(&self) -> Square {
        self.dest
    }

    /// The castling side if this is a king moving two files, `None` otherwise.
    pub fn castle_type(&self) -> Option<CastleType> {
        if self.piece.type_of() != PieceType::King
            || self.orig.rank() != self.dest.rank()
            || self.orig.file().abs_diff(self.dest.file()) != 2
        {
            return None;
        }
        if self.dest.file() > self.orig.file() {
            Some(CastleType::Kingside)
        } else {
            Some(CastleType::Queenside)
        }
    }

    /// Works out what this move does when played in `position`.
    pub fn classify(&self, position: &Position) -> MoveType {
        let mut ty = MoveType::empty();
        let us = self.piece.player();

        if !position.piece_at_sq(self.dest).is_none() {
            ty |= MoveType::CAPTURE;
        }

        match self.piece.type_of() {
            PieceType::Pawn => {
                if position.ep_square() == Some(self.dest) {
                    ty |= MoveType::EN_PASSANT | MoveType::CAPTURE;
                }
                let step = self.dest.0 as i8 - self.orig.0 as i8;
                if self.orig.to_bb().0 & PAWN_START_RANK[us as usize] != 0
                    && step == 2 * us.pawn_push()
                {
                    ty |= MoveType::DOUBLE_PUSH;
                }
                if self.dest.to_bb().0 & PAWN_PROMO_RANK[us as usize] != 0 {
                    ty |= MoveType::PROMOTION;
                }
            }
            PieceType::King => {
                if self.castle_type().is_some() {
                    ty |= MoveType::CASTLE;
                }
            }
            _ => {}
        }

        if ty.is_empty() {
            ty = MoveType::QUIET;
        }
        ty
    }

    pub fn to_uci_string(&self) -> String {
        format!("{}{}", self.orig, self.dest)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.piece.code(), self.to_uci_string())
    }
}
