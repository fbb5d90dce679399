//! Attack detection for castling.
//!
//! There is no full attack map here, only the questions castling needs: is a
//! given square attacked, and is any square the king would stand on or pass
//! through attacked.

use crate::bb::Bitboard;
use crate::masks::CASTLING_KING_PATH;
use crate::movegen::{Ray, BISHOP_RAYS, ROOK_RAYS};
use crate::position::{CastleType, Piece, PieceType, Player, Position, Square};
use crate::precalc::boards::{king_moves, knight_moves, pawn_attacks_from};

/// Returns true if any piece of player `by` attacks `sq`.
pub fn square_attacked(position: &Position, sq: Square, by: Player) -> bool {
    let hits = |piece_type, reach: Bitboard| (reach & position.piece_bb(by, piece_type)).is_not_empty();

    hits(PieceType::Knight, knight_moves(sq))
        // A pawn of `by` attacks `sq` iff a pawn of the other side on `sq` would attack it.
        || hits(PieceType::Pawn, pawn_attacks_from(sq, !by))
        || hits(PieceType::King, king_moves(sq))
        || ray_attacked(position, sq, by, &ROOK_RAYS, PieceType::Rook)
        || ray_attacked(position, sq, by, &BISHOP_RAYS, PieceType::Bishop)
}

/// Walks each ray outward from `sq` over the mailbox. The first occupied square
/// decides: a `slider` or queen of `by` attacks, anything else shields.
fn ray_attacked(
    position: &Position,
    sq: Square,
    by: Player,
    rays: &[Ray],
    slider: PieceType,
) -> bool {
    let slider = Piece::make(by, slider);
    let queen = Piece::make(by, PieceType::Queen);

    for ray in rays {
        let mut cur = sq.to_bb();
        for _ in 0..7 {
            if (cur & ray.edge).is_not_empty() {
                break;
            }
            cur = cur.shift(ray.delta);
            let piece = position.piece_at_sq(cur.to_square());
            if piece.is_none() {
                continue;
            }
            if piece == slider || piece == queen {
                return true;
            }
            break;
        }
    }
    false
}

/// Returns true if `by` attacks any square of `squares`.
pub fn any_attacked(position: &Position, squares: Bitboard, by: Player) -> bool {
    squares
        .into_iter()
        .any(|sq| square_attacked(position, sq, by))
}

/// Returns true if the opponent of `player` attacks the king's current, transit
/// or landing square for castling on `side`.
pub fn castle_path_attacked(position: &Position, player: Player, side: CastleType) -> bool {
    let king_path = Bitboard(CASTLING_KING_PATH[player as usize][side as usize]);
    any_attacked(position, king_path, !player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn lone(piece: Piece, on: &str) -> Position {
        let mut pos = Position::blank();
        pos.put_piece(piece, sq(on));
        pos
    }

    #[test_case(Piece::BlackKnight, "f3", "e1", true; "knight")]
    #[test_case(Piece::BlackKnight, "f2", "e1", false; "knight adjacent")]
    #[test_case(Piece::BlackPawn, "d2", "e1", true; "black pawn")]
    #[test_case(Piece::BlackPawn, "e2", "e1", false; "black pawn ahead")]
    #[test_case(Piece::WhitePawn, "d7", "e8", true; "white pawn")]
    #[test_case(Piece::WhitePawn, "d2", "e1", false; "white pawn behind")]
    #[test_case(Piece::BlackKing, "f2", "e1", true; "king")]
    #[test_case(Piece::BlackRook, "e7", "e1", true; "rook on file")]
    #[test_case(Piece::BlackRook, "a1", "e1", true; "rook on rank")]
    #[test_case(Piece::BlackRook, "d2", "e1", false; "rook on diagonal")]
    #[test_case(Piece::BlackBishop, "a5", "e1", true; "bishop")]
    #[test_case(Piece::BlackBishop, "e5", "e1", false; "bishop on file")]
    #[test_case(Piece::BlackQueen, "h4", "e1", true; "queen diagonal")]
    #[test_case(Piece::BlackQueen, "e6", "e1", true; "queen file")]
    #[test_case(Piece::BlackQueen, "f3", "e1", false; "queen knight jump")]
    fn single_attacker(piece: Piece, on: &str, target: &str, attacked: bool) {
        let pos = lone(piece, on);
        let by = piece.player();
        assert_eq!(square_attacked(&pos, sq(target), by), attacked);
        assert!(!square_attacked(&pos, sq(target), !by));
    }

    #[test]
    fn blockers_shield_the_square() {
        let mut pos = lone(Piece::BlackRook, "e8");
        assert!(square_attacked(&pos, Square::E1, Player::Black));

        pos.put_piece(Piece::WhitePawn, sq("e4"));
        assert!(!square_attacked(&pos, Square::E1, Player::Black));

        // An own piece shields just as well.
        pos.put_piece(Piece::BlackPawn, sq("e4"));
        assert!(!square_attacked(&pos, Square::E1, Player::Black));
    }

    #[test]
    fn rays_do_not_wrap_round_the_board() {
        let pos = lone(Piece::BlackRook, "a2");
        assert!(!square_attacked(&pos, Square::H1, Player::Black));
        let pos = lone(Piece::BlackBishop, "a3");
        assert!(!square_attacked(&pos, sq("h3"), Player::Black));
        assert!(square_attacked(&pos, Square::C1, Player::Black));
    }

    #[test]
    fn castle_path_covers_king_squares_only() {
        let mut pos = Position::start_pos();
        assert!(!castle_path_attacked(&pos, Player::White, CastleType::Kingside));

        pos.put_piece(Piece::BlackKnight, sq("h2"));
        assert!(castle_path_attacked(&pos, Player::White, CastleType::Kingside));
        assert!(!castle_path_attacked(&pos, Player::White, CastleType::Queenside));

        // b8 is not on the king's path.
        let mut pos = Position::start_pos();
        pos.put_piece(Piece::WhiteKnight, sq("a6"));
        assert!(!castle_path_attacked(&pos, Player::Black, CastleType::Queenside));
        pos.put_piece(Piece::WhiteKnight, sq("b6"));
        assert!(castle_path_attacked(&pos, Player::Black, CastleType::Queenside));
    }
}
