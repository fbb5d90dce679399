//! Bitboard chess positions with pseudo-legal move generation.
//!
//! A [`Position`] keeps one `Bitboard` per piece next to a mailbox board.
//! [`MoveGen`] produces the pseudo-legal destinations of a piece, consulting
//! [`attacks`] only to decide whether castling is allowed, and
//! [`Position::make_move`] applies a move while keeping every derived piece of
//! state in step. [`Session`] wraps all of it behind piece codes and
//! (row, column) coordinates.

#[macro_use]
mod macros;

mod masks;
mod precalc;

pub mod attacks;
pub mod bb;
pub mod error;
pub mod mov;
pub mod movegen;
pub mod perft;
pub mod position;
pub mod session;

pub use bb::Bitboard;
pub use error::{Error, Result};
pub use mov::{Move, MoveType};
pub use movegen::MoveGen;
pub use position::{
    CastleType, CastlingRights, Grid, Piece, PieceType, Player, Position, Square,
};
pub use session::Session;
