use super::Player;
use crate::error::Error;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use std::fmt;
use std::str::FromStr;

/// A coloured piece, or the absence of one. The discriminant doubles as the index
/// of the piece's `Bitboard` inside `Position`, with index 0 holding the empty
/// squares.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, FromPrimitive)]
pub enum Piece {
    None = 0,
    WhitePawn = 1,
    WhiteKnight = 2,
    WhiteBishop = 3,
    WhiteRook = 4,
    WhiteQueen = 5,
    WhiteKing = 6,
    BlackPawn = 7,
    BlackKnight = 8,
    BlackBishop = 9,
    BlackRook = 10,
    BlackQueen = 11,
    BlackKing = 12,
}

/// Every real piece, in bitboard index order.
pub const PIECES: [Piece; 12] = [
    Piece::WhitePawn,
    Piece::WhiteKnight,
    Piece::WhiteBishop,
    Piece::WhiteRook,
    Piece::WhiteQueen,
    Piece::WhiteKing,
    Piece::BlackPawn,
    Piece::BlackKnight,
    Piece::BlackBishop,
    Piece::BlackRook,
    Piece::BlackQueen,
    Piece::BlackKing,
];

impl Piece {
    #[inline(always)]
    pub fn is_none(&self) -> bool {
        *self == Piece::None
    }

    /// Returns the type of the given piece.
    pub fn type_of(&self) -> PieceType {
        match *self {
            Piece::None => PieceType::None,
            Piece::WhitePawn | Piece::BlackPawn => PieceType::Pawn,
            Piece::WhiteKnight | Piece::BlackKnight => PieceType::Knight,
            Piece::WhiteBishop | Piece::BlackBishop => PieceType::Bishop,
            Piece::WhiteRook | Piece::BlackRook => PieceType::Rook,
            Piece::WhiteQueen | Piece::BlackQueen => PieceType::Queen,
            Piece::WhiteKing | Piece::BlackKing => PieceType::King,
        }
    }

    /// Returns the player of the given piece.
    ///
    /// # Panics
    ///
    /// Panics if the given `Piece` is `Piece::None`. This function
    /// should only be used when the `Piece` is guaranteed to not be
    /// `Piece::None`.
    pub fn player(&self) -> Player {
        match *self as u8 {
            0 => panic!("Piece::None has no player"),
            1..=6 => Player::White,
            _ => Player::Black,
        }
    }

    /// Return a `Piece` from a `Player` and a `PieceType`.
    pub fn make(player: Player, piece_type: PieceType) -> Self {
        if piece_type.is_none() {
            return Piece::None;
        }
        let idx = 6 * (player as u8) + piece_type as u8;
        Piece::from_u8(idx).unwrap_or(Piece::None)
    }

    /// Returns a tuple containing the `Player` and `PieceType` of the `Piece`.
    pub fn player_piece(&self) -> (Player, PieceType) {
        (self.player(), self.type_of())
    }

    /// The two-character label used by callers: colour then kind, e.g. `"wp"` or
    /// `"bk"`. The empty label stands for `Piece::None`.
    pub fn code(&self) -> &'static str {
        match self {
            Piece::None => "",
            Piece::WhitePawn => "wp",
            Piece::WhiteKnight => "wn",
            Piece::WhiteBishop => "wb",
            Piece::WhiteRook => "wr",
            Piece::WhiteQueen => "wq",
            Piece::WhiteKing => "wk",
            Piece::BlackPawn => "bp",
            Piece::BlackKnight => "bn",
            Piece::BlackBishop => "bb",
            Piece::BlackRook => "br",
            Piece::BlackQueen => "bq",
            Piece::BlackKing => "bk",
        }
    }
}

impl FromStr for Piece {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        PIECES
            .iter()
            .find(|piece| piece.code() == code)
            .copied()
            .ok_or_else(|| Error::UnknownPiece(code.to_string()))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, FromPrimitive)]
pub enum PieceType {
    None = 0,
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceType {
    pub fn is_none(&self) -> bool {
        *self == PieceType::None
    }

    fn long_name(&self) -> &str {
        match self {
            PieceType::None => "none",
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::None => write!(f, " "),
            Piece::WhitePawn => write!(f, "P"),
            Piece::WhiteKnight => write!(f, "N"),
            Piece::WhiteBishop => write!(f, "B"),
            Piece::WhiteRook => write!(f, "R"),
            Piece::WhiteQueen => write!(f, "Q"),
            Piece::WhiteKing => write!(f, "K"),
            Piece::BlackPawn => write!(f, "p"),
            Piece::BlackKnight => write!(f, "n"),
            Piece::BlackBishop => write!(f, "b"),
            Piece::BlackRook => write!(f, "r"),
            Piece::BlackQueen => write!(f, "q"),
            Piece::BlackKing => write!(f, "k"),
        }
    }
}
