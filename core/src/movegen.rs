use crate::attacks;
use crate::bb::Bitboard;
use crate::masks::{
    CASTLING_KING_DEST, CASTLING_PATH, CASTLING_ROOK_START, EP_CAPTURE_RANK, FILE_A, FILE_H,
    KING_START, PAWN_START_RANK, RANK_1, RANK_8,
};
use crate::mov::Move;
use crate::position::{CastleType, Piece, PieceType, Player, Position, Square};
use crate::precalc::boards::{king_attacks, knight_attacks, pawn_attacks};

use log::trace;

/// One sliding direction: the shift taking a square to its neighbour, and the
/// squares from which a further step would leave the board.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Ray {
    pub delta: i8,
    pub edge: Bitboard,
}

impl Ray {
    const fn new(delta: i8, edge: u64) -> Self {
        Self {
            delta,
            edge: Bitboard(edge),
        }
    }
}

pub(crate) const ROOK_RAYS: [Ray; 4] = [
    Ray::new(8, RANK_8),
    Ray::new(-8, RANK_1),
    Ray::new(1, FILE_H),
    Ray::new(-1, FILE_A),
];

pub(crate) const BISHOP_RAYS: [Ray; 4] = [
    Ray::new(9, RANK_8 | FILE_H),
    Ray::new(7, RANK_8 | FILE_A),
    Ray::new(-7, RANK_1 | FILE_H),
    Ray::new(-9, RANK_1 | FILE_A),
];

pub struct MoveGen {}

impl MoveGen {
    /// Pseudo-legal destinations for `piece` standing on `sq`.
    ///
    /// Destinations respect piece geometry, the board edges, blocking and the
    /// capture rules, but a move may still leave the mover's own king in check.
    /// The piece does not have to actually stand on `sq`; the rest of the
    /// position is read as it is.
    pub fn destinations(position: &Position, piece: Piece, sq: Square) -> Bitboard {
        if piece.is_none() {
            return Bitboard::EMPTY;
        }
        InnerMoveGen::new(position, piece.player()).moves_bb(piece.type_of(), sq)
    }

    /// Generates every pseudo-legal move of the side to move.
    pub fn generate_all(position: &Position) -> Vec<Move> {
        const ORDER: [PieceType; 6] = [
            PieceType::Pawn,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Rook,
            PieceType::Queen,
            PieceType::King,
        ];

        let us = position.turn();
        let gen = InnerMoveGen::new(position, us);
        let mut moves = Vec::with_capacity(48);

        for piece_type in ORDER {
            let piece = Piece::make(us, piece_type);
            for orig in position.piece_bb(us, piece_type) {
                for dest in gen.moves_bb(piece_type, orig) {
                    moves.push(Move::new(piece, orig, dest));
                }
            }
        }
        moves
    }
}

struct InnerMoveGen<'a> {
    position: &'a Position,
    us: Player,
    us_occ: Bitboard,
    them_occ: Bitboard,
}

impl<'a> InnerMoveGen<'a> {
    fn new(position: &'a Position, us: Player) -> Self {
        Self {
            position,
            us,
            us_occ: position.get_occupied_player(us),
            them_occ: position.get_occupied_player(!us),
        }
    }

    #[inline]
    fn occupied(&self) -> Bitboard {
        self.us_occ | self.them_occ
    }

    fn moves_bb(&self, piece_type: PieceType, sq: Square) -> Bitboard {
        debug_assert!(sq.is_okay());
        match piece_type {
            PieceType::None => Bitboard::EMPTY,
            PieceType::Pawn => self.pawn_moves(sq),
            PieceType::Knight => Bitboard(knight_attacks(sq.to_bb().0)) & !self.us_occ,
            PieceType::Bishop => self.slide(sq, &BISHOP_RAYS),
            PieceType::Rook => self.slide(sq, &ROOK_RAYS),
            PieceType::Queen => self.slide(sq, &ROOK_RAYS) | self.slide(sq, &BISHOP_RAYS),
            PieceType::King => {
                (Bitboard(king_attacks(sq.to_bb().0)) & !self.us_occ) | self.castling_moves(sq)
            }
        }
    }

    /// Casts each ray from `sq` one square at a time. A ray stops at the board
    /// edge, before one of our pieces, or on the first enemy piece it meets.
    fn slide(&self, sq: Square, rays: &[Ray]) -> Bitboard {
        let mut moves = Bitboard::EMPTY;
        for ray in rays {
            let mut cur = sq.to_bb();
            for _ in 0..7 {
                if (cur & ray.edge).is_not_empty() {
                    break;
                }
                cur = cur.shift(ray.delta);
                if (cur & self.us_occ).is_not_empty() {
                    break;
                }
                moves |= cur;
                if (cur & self.them_occ).is_not_empty() {
                    break;
                }
            }
        }
        moves
    }

    fn pawn_moves(&self, sq: Square) -> Bitboard {
        let us = self.us;
        let from = sq.to_bb();
        let empty = !self.occupied();

        let single = from.shift(us.pawn_push()) & empty;
        let mut moves = single;
        if single.is_not_empty() && (from.0 & PAWN_START_RANK[us as usize]) != 0 {
            moves |= single.shift(us.pawn_push()) & empty;
        }

        let ep = self.position.ep_bb() & Bitboard(EP_CAPTURE_RANK[us as usize]);
        moves |= Bitboard(pawn_attacks(from.0, us)) & (self.them_occ | ep);
        moves
    }

    fn castling_moves(&self, sq: Square) -> Bitboard {
        let us = self.us;
        let mut moves = Bitboard::EMPTY;
        if sq != KING_START[us as usize]
            || self.position.piece_at_sq(sq) != Piece::make(us, PieceType::King)
        {
            return moves;
        }

        for side in CastleType::BOTH {
            if !self.position.castling_rights().can_castle(us, side) {
                continue;
            }
            let rook_sq = CASTLING_ROOK_START[us as usize][side as usize];
            if self.position.piece_at_sq(rook_sq) != Piece::make(us, PieceType::Rook) {
                continue;
            }
            if (Bitboard(CASTLING_PATH[us as usize][side as usize]) & self.occupied())
                .is_not_empty()
            {
                continue;
            }
            if attacks::castle_path_attacked(self.position, us, side) {
                trace!("{:?} castle for {} blocked by an attacked square", side, us);
                continue;
            }
            moves |= CASTLING_KING_DEST[us as usize][side as usize].to_bb();
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::CastlingRights;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn bb(names: &[&str]) -> Bitboard {
        names.iter().map(|name| sq(name)).collect()
    }

    fn dests(position: &Position, piece: Piece, from: &str) -> Bitboard {
        position.generate(piece, sq(from))
    }

    /// Both kings on their home squares with all rights and every rook at home.
    fn castling_position() -> Position {
        let mut pos = Position::blank();
        pos.put_piece(Piece::WhiteKing, Square::E1)
            .put_piece(Piece::WhiteRook, Square::A1)
            .put_piece(Piece::WhiteRook, Square::H1)
            .put_piece(Piece::BlackKing, Square::E8)
            .put_piece(Piece::BlackRook, Square::A8)
            .put_piece(Piece::BlackRook, Square::H8)
            .set_castling_rights(CastlingRights::all());
        pos
    }

    #[test]
    fn queenside_knight_from_the_start() {
        let pos = Position::start_pos();
        assert_eq!(dests(&pos, Piece::WhiteKnight, "b1"), bb(&["a3", "c3"]));
        assert_eq!(dests(&pos, Piece::BlackKnight, "g8"), bb(&["f6", "h6"]));
    }

    #[test]
    fn nothing_else_moves_from_the_start() {
        let pos = Position::start_pos();
        for piece_sq in ["a1", "c1", "d1", "e1", "f1", "h1"] {
            let piece = pos.piece_at_sq(sq(piece_sq));
            assert!(dests(&pos, piece, piece_sq).is_empty(), "{} on {}", piece, piece_sq);
        }
    }

    #[test]
    fn knight_on_the_rim_does_not_wrap() {
        let pos = Position::blank();
        assert_eq!(dests(&pos, Piece::WhiteKnight, "h4"), bb(&["g2", "f3", "f5", "g6"]));
        assert_eq!(dests(&pos, Piece::BlackKnight, "a8"), bb(&["b6", "c7"]));
    }

    #[test]
    fn knight_captures_but_does_not_land_on_own_pieces() {
        let mut pos = Position::blank();
        pos.put_piece(Piece::WhiteKnight, sq("d4"))
            .put_piece(Piece::WhitePawn, sq("e6"))
            .put_piece(Piece::BlackPawn, sq("c6"));
        let moves = dests(&pos, Piece::WhiteKnight, "d4");
        assert!(moves.contains(sq("c6")));
        assert!(!moves.contains(sq("e6")));
        assert_eq!(moves.popcnt(), 7);
    }

    #[test]
    fn rook_rays_stop_at_blockers() {
        let mut pos = Position::blank();
        pos.put_piece(Piece::WhiteRook, sq("d4"))
            .put_piece(Piece::WhitePawn, sq("d6"))
            .put_piece(Piece::BlackPawn, sq("f4"));
        assert_eq!(
            dests(&pos, Piece::WhiteRook, "d4"),
            bb(&["d5", "d3", "d2", "d1", "e4", "f4", "c4", "b4", "a4"])
        );
    }

    #[test]
    fn rook_in_the_corner_sees_two_lines() {
        let pos = Position::blank();
        let moves = dests(&pos, Piece::BlackRook, "h8");
        assert_eq!(moves.popcnt(), 14);
        assert!(moves.contains(Square::A8));
        assert!(moves.contains(sq("h1")));
        assert!(!moves.contains(sq("a7")));
    }

    #[test]
    fn bishop_rays_do_not_wrap_files() {
        let pos = Position::blank();
        assert_eq!(
            dests(&pos, Piece::WhiteBishop, "a4"),
            bb(&["b5", "c6", "d7", "e8", "b3", "c2", "d1"])
        );
        assert_eq!(
            dests(&pos, Piece::WhiteBishop, "h1"),
            bb(&["g2", "f3", "e4", "d5", "c6", "b7", "a8"])
        );
    }

    #[test]
    fn bishop_captures_first_enemy_only() {
        let mut pos = Position::blank();
        pos.put_piece(Piece::BlackBishop, sq("c1"))
            .put_piece(Piece::WhiteKnight, sq("e3"))
            .put_piece(Piece::WhiteKnight, sq("f4"))
            .put_piece(Piece::BlackPawn, sq("b2"));
        assert_eq!(dests(&pos, Piece::BlackBishop, "c1"), bb(&["d2", "e3"]));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let mut pos = Position::blank();
        pos.put_piece(Piece::WhiteQueen, sq("d4"))
            .put_piece(Piece::BlackPawn, sq("f6"))
            .put_piece(Piece::WhitePawn, sq("d5"));
        let queen = dests(&pos, Piece::WhiteQueen, "d4");
        let rook = dests(&pos, Piece::WhiteRook, "d4");
        let bishop = dests(&pos, Piece::WhiteBishop, "d4");
        assert_eq!(queen, rook | bishop);
        assert!(queen.contains(sq("f6")));
        assert!(!queen.contains(sq("g7")));
        assert!(!queen.contains(sq("d5")));
        assert_eq!(queen.popcnt(), 21);
    }

    #[test]
    fn pawn_pushes() {
        let pos = Position::start_pos();
        assert_eq!(dests(&pos, Piece::WhitePawn, "e2"), bb(&["e3", "e4"]));
        assert_eq!(dests(&pos, Piece::BlackPawn, "c7"), bb(&["c6", "c5"]));

        let mut pos = Position::blank();
        pos.put_piece(Piece::WhitePawn, sq("e3"));
        assert_eq!(dests(&pos, Piece::WhitePawn, "e3"), bb(&["e4"]));
    }

    #[test]
    fn blocked_pawns() {
        let mut pos = Position::start_pos();
        pos.put_piece(Piece::BlackKnight, sq("e3"))
            .put_piece(Piece::BlackKnight, sq("d4"));
        assert!(dests(&pos, Piece::WhitePawn, "e2").is_empty());
        assert_eq!(dests(&pos, Piece::WhitePawn, "d2"), bb(&["d3", "e3"]));
    }

    #[test]
    fn pawn_captures_diagonally() {
        let mut pos = Position::blank();
        pos.put_piece(Piece::BlackPawn, sq("b5"))
            .put_piece(Piece::WhiteRook, sq("a4"))
            .put_piece(Piece::WhiteRook, sq("c4"))
            .put_piece(Piece::BlackRook, sq("b4"));
        assert_eq!(dests(&pos, Piece::BlackPawn, "b5"), bb(&["a4", "c4"]));
    }

    #[test]
    fn pawn_on_the_edge_does_not_wrap() {
        let mut pos = Position::blank();
        pos.put_piece(Piece::WhitePawn, sq("h4"))
            .put_piece(Piece::BlackPawn, sq("a6"))
            .put_piece(Piece::BlackPawn, sq("g5"));
        assert_eq!(dests(&pos, Piece::WhitePawn, "h4"), bb(&["h5", "g5"]));
    }

    #[test]
    fn en_passant_capture_is_offered() {
        let mut pos = Position::start_pos();
        for (piece, from, to) in [
            (Piece::WhitePawn, "e2", "e4"),
            (Piece::BlackKnight, "b8", "c6"),
            (Piece::WhitePawn, "e4", "e5"),
            (Piece::BlackPawn, "d7", "d5"),
        ] {
            pos.make_move(Move::new(piece, sq(from), sq(to)));
        }
        assert_eq!(pos.ep_square(), Some(sq("d6")));
        assert_eq!(dests(&pos, Piece::WhitePawn, "e5"), bb(&["e6", "d6"]));
    }

    #[test]
    fn en_passant_square_only_counts_on_its_rank() {
        let mut pos = Position::start_pos();
        pos.make_move(Move::new(Piece::WhitePawn, sq("e2"), sq("e4")));
        assert_eq!(pos.ep_square(), Some(sq("e3")));
        // A white pawn next to e3 must not capture onto it.
        pos.put_piece(Piece::WhitePawn, sq("d2"));
        assert_eq!(dests(&pos, Piece::WhitePawn, "d2"), bb(&["d3", "d4"]));
    }

    #[test]
    fn king_steps() {
        let mut pos = Position::blank();
        pos.put_piece(Piece::WhiteKing, sq("a1"))
            .put_piece(Piece::WhitePawn, sq("a2"))
            .put_piece(Piece::BlackPawn, sq("b2"));
        assert_eq!(dests(&pos, Piece::WhiteKing, "a1"), bb(&["b1", "b2"]));
    }

    #[test]
    fn castling_on_both_sides() {
        let pos = castling_position();
        assert_eq!(
            dests(&pos, Piece::WhiteKing, "e1"),
            bb(&["d1", "d2", "e2", "f2", "f1", "g1", "c1"])
        );
        let black = dests(&pos, Piece::BlackKing, "e8");
        assert!(black.contains(Square::G8));
        assert!(black.contains(Square::C8));
    }

    #[test]
    fn attacked_transit_square_removes_that_castle() {
        let mut pos = castling_position();
        pos.put_piece(Piece::BlackRook, sq("f5"));
        let moves = dests(&pos, Piece::WhiteKing, "e1");
        assert!(!moves.contains(Square::G1));
        assert!(moves.contains(Square::C1));
    }

    #[test]
    fn attacked_rook_transit_square_does_not_matter() {
        // b1 is crossed by the rook only.
        let mut pos = castling_position();
        pos.put_piece(Piece::BlackRook, sq("b5"));
        assert!(dests(&pos, Piece::WhiteKing, "e1").contains(Square::C1));
    }

    #[test]
    fn king_in_check_cannot_castle() {
        let mut pos = castling_position();
        pos.put_piece(Piece::BlackKnight, sq("d3"));
        let moves = dests(&pos, Piece::WhiteKing, "e1");
        assert!(!moves.contains(Square::G1));
        assert!(!moves.contains(Square::C1));
    }

    #[test]
    fn castling_needs_empty_path_rights_and_rook() {
        let mut pos = castling_position();
        pos.put_piece(Piece::WhiteKnight, Square::B1);
        assert!(!dests(&pos, Piece::WhiteKing, "e1").contains(Square::C1));

        let mut pos = castling_position();
        pos.set_castling_rights(CastlingRights::all() - CastlingRights::WHITE_KINGSIDE);
        let moves = dests(&pos, Piece::WhiteKing, "e1");
        assert!(!moves.contains(Square::G1));
        assert!(moves.contains(Square::C1));

        let mut pos = castling_position();
        pos.put_piece(Piece::None, Square::H1);
        assert!(!dests(&pos, Piece::WhiteKing, "e1").contains(Square::G1));
    }

    #[test]
    fn twenty_moves_from_the_start() {
        let pos = Position::start_pos();
        let moves = MoveGen::generate_all(&pos);
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|mov| mov.piece().player() == Player::White));
    }

    #[test]
    fn nothing_for_none() {
        let pos = Position::start_pos();
        assert!(MoveGen::destinations(&pos, Piece::None, Square::E1).is_empty());
    }
}
