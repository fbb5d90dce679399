use crate::position::Square;

/// The number of players in a chess game.
pub const PLAYER_CNT: usize = 2;
/// The number of directions available for castling.
pub const CASTLING_SIDES: usize = 2;

/// Bit representation of all squares.
pub const ALL: u64 = 0xFFFF_FFFF_FFFF_FFFF;

/// Bit representation of file A.
pub const FILE_A: u64 = 0b00000001_00000001_00000001_00000001_00000001_00000001_00000001_00000001;
/// Bit representation of file B.
pub const FILE_B: u64 = FILE_A << 1;
/// Bit representation of file G.
pub const FILE_G: u64 = FILE_A << 6;
/// Bit representation of file H.
pub const FILE_H: u64 = FILE_A << 7;

/// Every square except those on file A. A piece shifted one file to the right
/// must land inside this mask, otherwise it wrapped around from file H.
pub const NOT_A_FILE: u64 = !FILE_A;
/// Every square except those on files A and B.
pub const NOT_AB_FILE: u64 = !(FILE_A | FILE_B);
/// Every square except those on file H.
pub const NOT_H_FILE: u64 = !FILE_H;
/// Every square except those on files G and H.
pub const NOT_GH_FILE: u64 = !(FILE_G | FILE_H);

/// Bit representation of rank 1.
pub const RANK_1: u64 = 0x0000_0000_0000_00FF;
/// Bit representation of rank 2.
pub const RANK_2: u64 = 0x0000_0000_0000_FF00;
/// Bit representation of rank 3.
pub const RANK_3: u64 = 0x0000_0000_00FF_0000;
/// Bit representation of rank 6.
pub const RANK_6: u64 = 0x0000_FF00_0000_0000;
/// Bit representation of rank 7.
pub const RANK_7: u64 = 0x00FF_0000_0000_0000;
/// Bit representation of rank 8.
pub const RANK_8: u64 = 0xFF00_0000_0000_0000;

/// Rank a pawn starts on, per player.
pub static PAWN_START_RANK: [u64; PLAYER_CNT] = [RANK_2, RANK_7];
/// Rank a pawn promotes on, per player.
pub static PAWN_PROMO_RANK: [u64; PLAYER_CNT] = [RANK_8, RANK_1];
/// Rank a pawn of the given player captures onto when taking en passant.
pub static EP_CAPTURE_RANK: [u64; PLAYER_CNT] = [RANK_6, RANK_3];

const fn bit(sq: Square) -> u64 {
    1 << sq.0
}

/// Squares strictly between king and rook which must be empty to castle, indexed
/// per player and then per side (king-side, queen-side).
pub static CASTLING_PATH: [[u64; CASTLING_SIDES]; PLAYER_CNT] = [
    [
        bit(Square::F1) | bit(Square::G1),
        bit(Square::B1) | bit(Square::C1) | bit(Square::D1),
    ],
    [
        bit(Square::F8) | bit(Square::G8),
        bit(Square::B8) | bit(Square::C8) | bit(Square::D8),
    ],
];

/// The king's origin, transit and landing squares for a castle. None of them
/// may be attacked by the opponent.
pub static CASTLING_KING_PATH: [[u64; CASTLING_SIDES]; PLAYER_CNT] = [
    [
        bit(Square::E1) | bit(Square::F1) | bit(Square::G1),
        bit(Square::E1) | bit(Square::D1) | bit(Square::C1),
    ],
    [
        bit(Square::E8) | bit(Square::F8) | bit(Square::G8),
        bit(Square::E8) | bit(Square::D8) | bit(Square::C8),
    ],
];

/// Home square of each player's king.
pub static KING_START: [Square; PLAYER_CNT] = [Square::E1, Square::E8];

/// Square the king lands on when castling.
pub static CASTLING_KING_DEST: [[Square; CASTLING_SIDES]; PLAYER_CNT] = [
    [Square::G1, Square::C1],
    [Square::G8, Square::C8],
];

/// Array containing all the starting rook positions for each side, for each player.
pub static CASTLING_ROOK_START: [[Square; CASTLING_SIDES]; PLAYER_CNT] = [
    [Square::H1, Square::A1],
    [Square::H8, Square::A8],
];

/// Square the rook is relocated to by a castle.
pub static CASTLING_ROOK_DEST: [[Square; CASTLING_SIDES]; PLAYER_CNT] = [
    [Square::F1, Square::D1],
    [Square::F8, Square::D8],
];
