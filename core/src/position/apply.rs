use super::{Piece, PieceType, Player, Position, Square};
use crate::error::{Error, Result};
use crate::masks::{CASTLING_ROOK_DEST, CASTLING_ROOK_START};
use crate::mov::{Move, MoveType};

use log::{debug, trace, warn};

impl Position {
    /// Make a move on the board and update the `Position`.
    ///
    /// The move is trusted: it should be one of the pseudo-legal moves of its
    /// piece, as returned by [`Position::generate`]. Use [`Position::play`] to
    /// have it checked first.
    ///
    /// The update runs in this order: en passant capture, new en passant square,
    /// castling rights, castling rook, ordinary capture, the move itself with
    /// promotion, and finally the turn.
    pub fn make_move(&mut self, mov: Move) {
        debug_assert_ne!(mov.orig(), mov.dest());
        debug_assert_eq!(self.piece_at_sq(mov.orig()), mov.piece());

        let ty = mov.classify(self);
        let piece = mov.piece();
        let us = piece.player();
        let from = mov.orig();
        let to = mov.dest();
        trace!("making {} ({:?})", mov, ty);

        // En passant: the captured pawn sits behind the destination.
        if ty.contains(MoveType::EN_PASSANT) {
            let cap_sq = Square((to.0 as i8 - us.pawn_push()) as u8);
            let captured = Piece::make(!us, PieceType::Pawn);
            if self.piece_at_sq(cap_sq) == captured {
                self.remove_piece_c(captured, cap_sq);
            }
        }

        self.ep_square = if ty.contains(MoveType::DOUBLE_PUSH) {
            Some(Square((to.0 as i8 - us.pawn_push()) as u8))
        } else {
            None
        };

        let rights = self.castling_rights.update(piece, from, to);
        if rights != self.castling_rights {
            debug!("castling rights {} -> {}", self.castling_rights, rights);
        }
        self.castling_rights = rights;

        if let Some(side) = mov.castle_type() {
            self.relocate_castling_rook(us, side as usize);
        }

        let captured = self.piece_at_sq(to);
        if !captured.is_none() {
            trace!("{} captures {} on {}", piece.code(), captured.code(), to);
            self.remove_piece_c(captured, to);
        }

        self.move_piece_c(piece, from, to);
        if ty.contains(MoveType::PROMOTION) {
            self.remove_piece_c(piece, to);
            self.put_piece_c(Piece::make(us, PieceType::Queen), to);
        }

        self.turn = !self.turn;
        debug_assert!(self.is_consistent(), "{:?}", self);
    }

    /// Moves the rook that goes with a castle of `player` on `side`, if it is
    /// still standing on its home square.
    fn relocate_castling_rook(&mut self, player: Player, side: usize) {
        let r_orig = CASTLING_ROOK_START[player as usize][side];
        let r_dest = CASTLING_ROOK_DEST[player as usize][side];
        let rook = Piece::make(player, PieceType::Rook);

        if self.piece_at_sq(r_orig) == rook && self.piece_at_sq(r_dest).is_none() {
            self.move_piece_c(rook, r_orig, r_dest);
        } else {
            warn!("{} castles without a rook on {}", player, r_orig);
        }
    }

    /// Checks `mov` against the pseudo-legal moves of the piece on its origin and
    /// makes it. Only the side to move may play. On error the position is left
    /// untouched.
    pub fn play(&mut self, mov: Move) -> Result<()> {
        let piece = mov.piece();
        let legal = !piece.is_none()
            && piece.player() == self.turn
            && self.piece_at_sq(mov.orig()) == piece
            && self.generate(piece, mov.orig()).contains(mov.dest());

        if !legal {
            warn!("rejected {}", mov);
            return Err(Error::IllegalMove {
                piece,
                orig: mov.orig(),
                dest: mov.dest(),
            });
        }

        self.make_move(mov);
        Ok(())
    }
}
