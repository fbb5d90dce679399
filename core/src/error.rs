use crate::position::{Piece, Square};

/// Failures reported by the core. Every variant is a caller error; nothing is
/// retried and the position is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The piece identifier is not one of `{w,b}{p,n,b,r,q,k}`.
    #[error("unrecognized piece: '{0}'")]
    UnknownPiece(String),

    /// A row or column fell outside `0..=7`.
    #[error("invalid square: row {row}, column {col}")]
    InvalidSquare { row: u8, col: u8 },

    /// The piece is not on move, or the move is not among the pseudo-legal
    /// candidates of the piece on its origin.
    #[error("illegal move: {piece} from {orig} to {dest}")]
    IllegalMove {
        piece: Piece,
        orig: Square,
        dest: Square,
    },

    /// Importing a position from an external description is not supported.
    #[error("position import is not supported")]
    ImportUnsupported,
}

pub type Result<T> = std::result::Result<T, Error>;
