//! Attack generation for every piece type.

mod manual;
mod precomputed;
mod sliding;

pub use precomputed::{build_king_attacks, build_knight_attacks};
use crate::utils::{Bitboard, Color, SlidingPieceType, Square};

pub fn single_knight_attacks(src_square: Square) -> Bitboard {
    precomputed::precomputed_single_knight_attacks(src_square)
}

pub fn single_king_attacks(src_square: Square) -> Bitboard {
    precomputed::precomputed_single_king_attacks(src_square)
}

pub fn multi_knight_attacks(knights_mask: Bitboard) -> Bitboard {
    manual::multi_knight_attacks(knights_mask)
}

pub fn multi_king_attacks(kings_mask: Bitboard) -> Bitboard {
    manual::multi_king_attacks(kings_mask)
}

pub fn multi_pawn_attacks(pawns_mask: Bitboard, by_color: Color) -> Bitboard {
    manual::multi_pawn_attacks(pawns_mask, by_color)
}

pub fn multi_pawn_moves(pawns_mask: Bitboard, by_color: Color) -> Bitboard {
    manual::multi_pawn_moves(pawns_mask, by_color)
}

pub fn single_rook_attacks(src_square: Square, occupied_mask: Bitboard) -> Bitboard {
    sliding::single_sliding_attacks(SlidingPieceType::Rook, src_square, occupied_mask)
}

pub fn single_bishop_attacks(src_square: Square, occupied_mask: Bitboard) -> Bitboard {
    sliding::single_sliding_attacks(SlidingPieceType::Bishop, src_square, occupied_mask)
}

pub fn single_queen_attacks(src_square: Square, occupied_mask: Bitboard) -> Bitboard {
    sliding::single_sliding_attacks(SlidingPieceType::Queen, src_square, occupied_mask)
}

pub fn single_sliding_attacks(piece: SlidingPieceType, src_square: Square, occupied_mask: Bitboard) -> Bitboard {
    sliding::single_sliding_attacks(piece, src_square, occupied_mask)
}

pub fn multi_rook_attacks(rooks_mask: Bitboard, occupied_mask: Bitboard) -> Bitboard {
    sliding::multi_rook_attacks(rooks_mask, occupied_mask)
}

pub fn multi_bishop_attacks(bishops_mask: Bitboard, occupied_mask: Bitboard) -> Bitboard {
    sliding::multi_bishop_attacks(bishops_mask, occupied_mask)
}

pub fn multi_queen_attacks(queens_mask: Bitboard, occupied_mask: Bitboard) -> Bitboard {
    sliding::multi_queen_attacks(queens_mask, occupied_mask)
}
