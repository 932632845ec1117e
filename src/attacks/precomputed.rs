//! Precomputed attack tables for non-sliding pieces.

use crate::utils::Bitboard;
use crate::utils::Square;
use static_init::dynamic;
use crate::attacks::manual;

/// Precomputed attacks table for kings.
#[dynamic]
static SINGLE_KING_ATTACKS: [Bitboard; 64] = build_king_attacks();

/// Precomputed attacks table for knights.
#[dynamic]
static SINGLE_KNIGHT_ATTACKS: [Bitboard; 64] = build_knight_attacks();

/// Builds the king attack set of every square, indexed by `Square as usize`.
pub fn build_king_attacks() -> [Bitboard; 64] {
    let mut attacks = [0; 64];
    for square in Square::iter_all() {
        attacks[square as usize] = manual::multi_king_attacks(square.get_mask());
    }
    attacks
}

/// Builds the knight attack set of every square, indexed by `Square as usize`.
pub fn build_knight_attacks() -> [Bitboard; 64] {
    let mut attacks = [0; 64];
    for square in Square::iter_all() {
        attacks[square as usize] = manual::multi_knight_attacks(square.get_mask());
    }
    attacks
}

/// Returns a precomputed bitboard with all squares attacked by a king on `src_square`
pub fn precomputed_single_king_attacks(src_square: Square) -> Bitboard {
    SINGLE_KING_ATTACKS[src_square as usize]
}

/// Returns a precomputed bitboard with all squares attacked by a knight on `src_square`
pub fn precomputed_single_knight_attacks(src_square: Square) -> Bitboard {
    SINGLE_KNIGHT_ATTACKS[src_square as usize]
}
