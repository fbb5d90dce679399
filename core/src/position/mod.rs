mod apply;
mod board;
mod castling;
mod piece;
mod square;

use crate::bb::Bitboard;
use crate::masks::PLAYER_CNT;
use crate::mov::Move;
use crate::movegen::MoveGen;

pub use board::Board;
pub use castling::{CastleType, CastlingRights};
pub use piece::{Piece, PieceType, PIECES};
pub use square::{ParseSquareError, Square};

use std::fmt;
use std::ops::Not;

/// The number of piece types including color on a chess board. Includes `Piece::None`.
pub const PIECE_TYPE_CNT: usize = 13;

/// The 8x8 label grid handed to callers. White's back rank is the last row.
pub type Grid = [[&'static str; 8]; 8];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    pub const BOTH: [Player; PLAYER_CNT] = [Player::White, Player::Black];

    /// Returns the other player.
    #[inline(always)]
    pub fn other_player(&self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Returns the offset for a single move pawn push.
    #[inline(always)]
    pub fn pawn_push(self) -> i8 {
        match self {
            Player::White => 8,
            Player::Black => -8,
        }
    }
}

impl Not for Player {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self::Output {
        self.other_player()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// A single chess position.
///
/// Every piece is recorded three times: in its own `Bitboard`, in the occupancy
/// `Bitboard` of its player, and in the mailbox `Board`. All three are only ever
/// written through `put_piece_c`, `remove_piece_c` and `move_piece_c`, which keeps
/// them in agreement.
#[derive(Clone, Eq, PartialEq)]
pub struct Position {
    // Array of pieces
    pub(crate) board: Board,

    // Bitboards for each piece, index 0 holds the empty squares
    pub(crate) bbs: [Bitboard; PIECE_TYPE_CNT],
    pub(crate) player_occ: [Bitboard; PLAYER_CNT],

    // "Invisible" state
    turn: Player,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) ep_square: Option<Square>,
}

impl Position {
    /// Creates an empty `Position` with White to move and no castling rights.
    pub fn blank() -> Self {
        let mut bbs = [Bitboard::EMPTY; PIECE_TYPE_CNT];
        bbs[Piece::None as usize] = Bitboard::ALL;

        Self {
            board: Board::new(),
            bbs,
            player_occ: [Bitboard::EMPTY; PLAYER_CNT],
            turn: Player::White,
            castling_rights: CastlingRights::none(),
            ep_square: None,
        }
    }

    /// The standard initial arrangement, White to move with all four castling rights.
    pub fn start_pos() -> Self {
        const BACK_RANK: [PieceType; 8] = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        let mut pos = Self::blank();
        for (file, piece_type) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            pos.put_piece_c(Piece::make(Player::White, *piece_type), Square(file));
            pos.put_piece_c(Piece::make(Player::White, PieceType::Pawn), Square(8 + file));
            pos.put_piece_c(Piece::make(Player::Black, PieceType::Pawn), Square(48 + file));
            pos.put_piece_c(Piece::make(Player::Black, *piece_type), Square(56 + file));
        }
        pos.castling_rights = CastlingRights::all();
        pos
    }

    /// Puts `piece` on `sq`, replacing any piece already standing there. Meant for
    /// setting up positions; it leaves turn, castling rights and en passant alone.
    pub fn put_piece(&mut self, piece: Piece, sq: Square) -> &mut Self {
        let current = self.piece_at_sq(sq);
        if !current.is_none() {
            self.remove_piece_c(current, sq);
        }
        if !piece.is_none() {
            self.put_piece_c(piece, sq);
        }
        self
    }

    pub fn set_turn(&mut self, turn: Player) -> &mut Self {
        self.turn = turn;
        self
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) -> &mut Self {
        self.castling_rights = rights;
        self
    }

    /// Moves a piece on the board for a given player from square `from`
    /// to square `to`. Updates all relevant `Bitboard` and the `Piece` array.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the to and from square are equal
    pub(crate) fn move_piece_c(&mut self, piece: Piece, from: Square, to: Square) {
        debug_assert_ne!(from, to);
        debug_assert_eq!(self.piece_at_sq(from), piece);
        debug_assert!(self.piece_at_sq(to).is_none());
        let comb_bb = from.to_bb() | to.to_bb();

        self.bbs[Piece::None as usize] ^= comb_bb;
        self.bbs[piece as usize] ^= comb_bb;
        self.player_occ[piece.player() as usize] ^= comb_bb;

        self.board.remove(from);
        self.board.place(to, piece);
    }

    /// Removes a `Piece` from the board for a given player.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if there is not a `piece` at the given square.
    pub(crate) fn remove_piece_c(&mut self, piece: Piece, square: Square) {
        debug_assert_eq!(self.piece_at_sq(square), piece);
        let bb = square.to_bb();

        self.bbs[Piece::None as usize] ^= bb;
        self.bbs[piece as usize] ^= bb;
        self.player_occ[piece.player() as usize] ^= bb;

        self.board.remove(square);
    }

    /// Places a `Piece` on the board at a given `Square`.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if there is already a piece at that `Square`.
    pub(crate) fn put_piece_c(&mut self, piece: Piece, square: Square) {
        debug_assert!(self.piece_at_sq(square).is_none());
        let bb = square.to_bb();

        self.bbs[Piece::None as usize] ^= bb;
        self.bbs[piece as usize] ^= bb;
        self.player_occ[piece.player() as usize] ^= bb;

        self.board.place(square, piece);
    }

    /// Checks that the bitboards, the mailbox and the en passant square all
    /// describe the same position.
    pub fn is_consistent(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        let mut occ = [Bitboard::EMPTY; PLAYER_CNT];

        for piece in PIECES {
            let bb = self.bbs[piece as usize];
            if (seen & bb).is_not_empty() {
                return false;
            }
            if bb.into_iter().any(|sq| self.board.piece_at_sq(sq) != piece) {
                return false;
            }
            seen |= bb;
            occ[piece.player() as usize] |= bb;
        }

        if self.board.into_iter().any(|(sq, piece)| piece.is_none() == seen.contains(sq)) {
            return false;
        }
        if self.bbs[Piece::None as usize] != !seen || self.player_occ != occ {
            return false;
        }

        match self.ep_square {
            None => true,
            Some(ep) => {
                // The pawn that double-stepped belongs to the side that just moved.
                let mover = !self.turn;
                let (ep_rank, pawn_sq) = match mover {
                    Player::White => (2, ep.0 + 8),
                    Player::Black => (5, ep.0.wrapping_sub(8)),
                };
                ep.rank() == ep_rank
                    && self.piece_at_sq(ep).is_none()
                    && self.piece_at_sq(Square(pawn_sq)) == Piece::make(mover, PieceType::Pawn)
            }
        }
    }

    /// Returns the label grid of the position, flipped so that row 0 of the
    /// grid is Black's back rank.
    pub fn grid(&self) -> Grid {
        let mut grid = [[""; 8]; 8];
        for (sq, piece) in &self.board {
            let (row, col) = sq.to_row_col();
            grid[7 - row as usize][col as usize] = piece.code();
        }
        grid
    }

    /// Pseudo-legal destinations of `piece` standing on `sq`.
    pub fn generate(&self, piece: Piece, sq: Square) -> Bitboard {
        MoveGen::destinations(self, piece, sq)
    }

    /// Every pseudo-legal move of the side to move.
    pub fn generate_moves(&self) -> Vec<Move> {
        MoveGen::generate_all(self)
    }

    /// Return the player whose turn it is to move.
    #[inline(always)]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline(always)]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Returns the en passant `Square`, if one exists.
    #[inline(always)]
    pub fn ep_square(&self) -> Option<Square> {
        self.ep_square
    }

    /// The en passant square as a `Bitboard`, empty when there is none.
    #[inline(always)]
    pub fn ep_bb(&self) -> Bitboard {
        self.ep_square.map_or(Bitboard::EMPTY, Square::to_bb)
    }

    /// Returns a `Bitboard` of all occupied squares.
    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        !self.bbs[Piece::None as usize]
    }

    #[inline(always)]
    pub fn get_occupied_player(&self, player: Player) -> Bitboard {
        self.player_occ[player as usize]
    }

    /// Returns the `Bitboard` for a given player and piece type.
    #[inline(always)]
    pub fn piece_bb(&self, player: Player, piece_type: PieceType) -> Bitboard {
        self.bbs[Piece::make(player, piece_type) as usize]
    }

    /// Returns the `Piece` on a given `Square`.
    #[inline(always)]
    pub fn piece_at_sq(&self, sq: Square) -> Piece {
        self.board.piece_at_sq(sq)
    }

    /// The number of pieces `player` has on the board.
    pub fn piece_count(&self, player: Player) -> u32 {
        self.get_occupied_player(player).popcnt()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start_pos()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        write!(f, "{} to move, castling {}", self.turn, self.castling_rights)?;
        match self.ep_square {
            Some(ep) => writeln!(f, ", en passant {}", ep),
            None => writeln!(f),
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "BITBOARDS\n=========\n")?;
        writeln!(f, "No Pieces:\n {}", self.bbs[Piece::None as usize])?;
        for piece in PIECES {
            let (player, piece_type) = piece.player_piece();
            writeln!(f, "{} {}:\n {}", player, piece_type, self.bbs[piece as usize])?;
        }
        for player in Player::BOTH {
            writeln!(f, "{} occupancy:\n {}", player, self.get_occupied_player(player))?;
        }
        writeln!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn start_position_is_consistent() {
        let pos = Position::start_pos();
        assert!(pos.is_consistent());
        assert_eq!(pos.turn(), Player::White);
        assert_eq!(pos.castling_rights(), CastlingRights::all());
        assert_eq!(pos.ep_square(), None);
        assert_eq!(pos.piece_count(Player::White), 16);
        assert_eq!(pos.piece_count(Player::Black), 16);
        assert_eq!(pos.occupied().popcnt(), 32);
    }

    #[test]
    fn start_position_layout() {
        let pos = Position::start_pos();
        assert_eq!(pos.piece_at_sq(Square::E1), Piece::WhiteKing);
        assert_eq!(pos.piece_at_sq(Square::D8), Piece::BlackQueen);
        assert_eq!(pos.piece_at_sq(sq("g2")), Piece::WhitePawn);
        assert_eq!(pos.piece_at_sq(sq("b7")), Piece::BlackPawn);
        assert_eq!(pos.piece_at_sq(sq("e4")), Piece::None);
        assert_eq!(pos.piece_bb(Player::White, PieceType::Rook).popcnt(), 2);
    }

    #[test]
    fn grid_puts_whites_back_rank_last() {
        let grid = Position::start_pos().grid();
        assert_eq!(grid[7], ["wr", "wn", "wb", "wq", "wk", "wb", "wn", "wr"]);
        assert_eq!(grid[6], ["wp"; 8]);
        assert_eq!(grid[3], [""; 8]);
        assert_eq!(grid[1], ["bp"; 8]);
        assert_eq!(grid[0], ["br", "bn", "bb", "bq", "bk", "bb", "bn", "br"]);
    }

    #[test]
    fn put_piece_replaces_occupant() {
        let mut pos = Position::blank();
        pos.put_piece(Piece::WhiteRook, sq("d4"))
            .put_piece(Piece::BlackKnight, sq("d4"));
        assert!(pos.is_consistent());
        assert_eq!(pos.piece_at_sq(sq("d4")), Piece::BlackKnight);
        assert!(pos.piece_bb(Player::White, PieceType::Rook).is_empty());
        assert_eq!(pos.piece_count(Player::White), 0);

        pos.put_piece(Piece::None, sq("d4"));
        assert_eq!(pos.occupied(), Bitboard::EMPTY);
        assert!(pos.is_consistent());
    }

    #[test]
    fn detects_mailbox_mismatch() {
        let mut pos = Position::start_pos();
        pos.board.remove(Square::E1);
        assert!(!pos.is_consistent());
    }

    #[test]
    fn detects_overlapping_masks() {
        let mut pos = Position::start_pos();
        pos.bbs[Piece::BlackQueen as usize] |= Square::E1.to_bb();
        assert!(!pos.is_consistent());
    }

    #[test]
    fn detects_stray_en_passant_square() {
        let mut pos = Position::start_pos();
        pos.ep_square = Some(sq("e3"));
        pos.turn = Player::Black;
        assert!(!pos.is_consistent());
    }
}
