//! Pseudo-legal move path enumeration.
//!
//! Every branch works on its own copy of the position, since moves cannot be
//! unmade. The counts include moves that leave the mover's king in check, so
//! they only match the usual published figures for shallow depths.

use crate::mov::Move;
use crate::position::Position;

/// Counts the leaf nodes of the pseudo-legal move tree `depth` plies deep.
pub fn perft(position: &Position, depth: usize) -> usize {
    if depth == 0 {
        return 1;
    }

    let moves = position.generate_moves();
    if depth == 1 {
        return moves.len();
    }

    moves
        .into_iter()
        .map(|mov| {
            let mut child = position.clone();
            child.make_move(mov);
            perft(&child, depth - 1)
        })
        .sum()
}

/// Like [`perft`], but broken down by the first move.
pub fn divide(position: &Position, depth: usize) -> Vec<(Move, usize)> {
    position
        .generate_moves()
        .into_iter()
        .map(|mov| {
            let mut child = position.clone();
            child.make_move(mov);
            (mov, perft(&child, depth.saturating_sub(1)))
        })
        .collect()
}
