use super::{Piece, PieceType, Player, Square};
use crate::masks::CASTLING_ROOK_START;

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// The four castling permissions. A flag only ever goes from set to cleared
    /// over the course of a game.
    pub struct CastlingRights: u8 {
        const WHITE_KINGSIDE  = 0b0000_0001;
        const WHITE_QUEENSIDE = 0b0000_0010;
        const BLACK_KINGSIDE  = 0b0000_0100;
        const BLACK_QUEENSIDE = 0b0000_1000;
        const WHITE = Self::WHITE_KINGSIDE.bits | Self::WHITE_QUEENSIDE.bits;
        const BLACK = Self::BLACK_KINGSIDE.bits | Self::BLACK_QUEENSIDE.bits;
    }
}

/// Types of castling.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum CastleType {
    Kingside = 0,
    Queenside = 1,
}

impl CastleType {
    pub const BOTH: [CastleType; 2] = [CastleType::Kingside, CastleType::Queenside];
}

impl CastlingRights {
    /// Return a `CastlingRights` struct representing no castling rights
    /// for either player.
    pub fn none() -> Self {
        Self::empty()
    }

    /// The single flag for one player and side.
    pub fn flag(player: Player, side: CastleType) -> Self {
        match (player, side) {
            (Player::White, CastleType::Kingside) => Self::WHITE_KINGSIDE,
            (Player::White, CastleType::Queenside) => Self::WHITE_QUEENSIDE,
            (Player::Black, CastleType::Kingside) => Self::BLACK_KINGSIDE,
            (Player::Black, CastleType::Queenside) => Self::BLACK_QUEENSIDE,
        }
    }

    /// Both flags belonging to `player`.
    pub fn of_player(player: Player) -> Self {
        match player {
            Player::White => Self::WHITE,
            Player::Black => Self::BLACK,
        }
    }

    pub fn can_castle(&self, player: Player, side: CastleType) -> bool {
        self.contains(Self::flag(player, side))
    }

    /// Returns the rights left after `moving` travels from `from` to `to`.
    ///
    /// A king move gives up both of its player's rights and a rook leaving its home
    /// square gives up that side. Landing on an opponent rook's home square also
    /// clears the opponent's right for that side, since the rook there has either
    /// been captured or already left.
    pub fn update(&self, moving: Piece, from: Square, to: Square) -> Self {
        let mut rights = *self;
        let (us, piece_type) = moving.player_piece();
        let them = !us;

        match piece_type {
            PieceType::King => rights.remove(Self::of_player(us)),
            PieceType::Rook => {
                for side in CastleType::BOTH {
                    if from == CASTLING_ROOK_START[us as usize][side as usize] {
                        rights.remove(Self::flag(us, side));
                    }
                }
            }
            _ => {}
        }

        for side in CastleType::BOTH {
            if to == CASTLING_ROOK_START[them as usize][side as usize] {
                rights.remove(Self::flag(them, side));
            }
        }

        rights
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let letters = [
            (Self::WHITE_KINGSIDE, 'K'),
            (Self::WHITE_QUEENSIDE, 'Q'),
            (Self::BLACK_KINGSIDE, 'k'),
            (Self::BLACK_QUEENSIDE, 'q'),
        ];
        for (flag, letter) in letters {
            if self.contains(flag) {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}
