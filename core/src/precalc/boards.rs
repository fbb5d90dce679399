use crate::bb::Bitboard;
use crate::masks::{NOT_AB_FILE, NOT_A_FILE, NOT_GH_FILE, NOT_H_FILE};
use crate::position::{Player, Square};

/// Evaluates a single-square attack function for every square at compile time.
macro_rules! gen_table {
    ($attacks:ident) => {{
        let mut table = [0u64; 64];
        let mut idx = 0;
        while idx < 64 {
            table[idx] = $attacks(1u64 << idx);
            idx += 1;
        }
        table
    }};
}

/// Fast lookup table for Knight moves
static KNIGHT_TABLE: [u64; 64] = gen_table!(knight_attacks);
/// Fast lookup table for King moves
static KING_TABLE: [u64; 64] = gen_table!(king_attacks);
/// Fast lookup table for Pawn attacks, indexed by player then square
static PAWN_ATTACKS_FROM: [[u64; 64]; 2] = [
    gen_table!(white_pawn_attacks),
    gen_table!(black_pawn_attacks),
];

/// Knight jumps from every square set in `bb`. Each shift is masked so that a
/// jump from the a/b files cannot wrap round onto the g/h files, and vice versa.
/// Jumps off the top or bottom of the board fall out of the word.
pub const fn knight_attacks(bb: u64) -> u64 {
    ((bb << 17) & NOT_A_FILE)
        | ((bb << 15) & NOT_H_FILE)
        | ((bb << 10) & NOT_AB_FILE)
        | ((bb << 6) & NOT_GH_FILE)
        | ((bb >> 17) & NOT_H_FILE)
        | ((bb >> 15) & NOT_A_FILE)
        | ((bb >> 10) & NOT_GH_FILE)
        | ((bb >> 6) & NOT_AB_FILE)
}

/// The squares adjacent to every square set in `bb`.
pub const fn king_attacks(bb: u64) -> u64 {
    let sideways = ((bb << 1) & NOT_A_FILE) | ((bb >> 1) & NOT_H_FILE);
    let row = bb | sideways;
    sideways | (row << 8) | (row >> 8)
}

const fn white_pawn_attacks(bb: u64) -> u64 {
    ((bb << 7) & NOT_H_FILE) | ((bb << 9) & NOT_A_FILE)
}

const fn black_pawn_attacks(bb: u64) -> u64 {
    ((bb >> 9) & NOT_H_FILE) | ((bb >> 7) & NOT_A_FILE)
}

/// The diagonal squares pawns of `player` on `bb` capture onto.
pub const fn pawn_attacks(bb: u64, player: Player) -> u64 {
    match player {
        Player::White => white_pawn_attacks(bb),
        Player::Black => black_pawn_attacks(bb),
    }
}

/// Knight moves `Bitboard` from an origin square
#[inline(always)]
pub fn knight_moves(square: Square) -> Bitboard {
    debug_assert!(square.is_okay());
    Bitboard(KNIGHT_TABLE[square.0 as usize])
}

/// King moves `Bitboard` from an origin square
#[inline(always)]
pub fn king_moves(square: Square) -> Bitboard {
    debug_assert!(square.is_okay());
    Bitboard(KING_TABLE[square.0 as usize])
}

/// Pawn attacks `Bitboard` from a given square and player.
/// E.g. given square e6 and player Black, returns the
/// Bitboard of squares d5 and f5.
#[inline(always)]
pub fn pawn_attacks_from(square: Square, player: Player) -> Bitboard {
    debug_assert!(square.is_okay());
    Bitboard(PAWN_ATTACKS_FROM[player as usize][square.0 as usize])
}
