//! Attack sets computed directly with shifts, for any number of pieces at once

use crate::utils::*;
use crate::utils::masks::*;

/// Returns a bitboard with all squares attacked by knights indicated by the bits in `knights_mask`
pub const fn multi_knight_attacks(knights_mask: Bitboard) -> Bitboard {
    (knights_mask << 17 & !FILE_H) | (knights_mask << 15 & !FILE_A) | (knights_mask << 10 & !FILES_GH) | (knights_mask << 6 & !FILES_AB) |
        (knights_mask >> 17 & !FILE_A) | (knights_mask >> 15 & !FILE_H) | (knights_mask >> 10 & !FILES_AB) | (knights_mask >> 6 & !FILES_GH)
}

/// Returns a bitboard with all squares attacked by kings indicated by the bits in `kings_mask`
pub const fn multi_king_attacks(kings_mask: Bitboard) -> Bitboard {
    north_one(kings_mask) | south_one(kings_mask) | east_one(kings_mask) | west_one(kings_mask) |
        north_east_one(kings_mask) | north_west_one(kings_mask) | south_east_one(kings_mask) | south_west_one(kings_mask)
}

/// Returns a bitboard with all squares attacked by pawns of `by_color` indicated by the bits in `pawns_mask`
pub const fn multi_pawn_attacks(pawns_mask: Bitboard, by_color: Color) -> Bitboard {
    match by_color {
        Color::White => north_east_one(pawns_mask) | north_west_one(pawns_mask),
        Color::Black => south_east_one(pawns_mask) | south_west_one(pawns_mask)
    }
}

/// Returns a bitboard with the squares one step forward of the pawns in `pawns_mask`, ignoring occupancy
pub const fn multi_pawn_moves(pawns_mask: Bitboard, by_color: Color) -> Bitboard {
    match by_color {
        Color::White => north_one(pawns_mask),
        Color::Black => south_one(pawns_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Square;

    #[test]
    fn test_knight_attacks() {
        let attacks = multi_knight_attacks(Square::E4.get_mask());
        let expected = [Square::D6, Square::F6, Square::C5, Square::G5, Square::C3, Square::G3, Square::D2, Square::F2]
            .iter().fold(0, |acc, s| acc | s.get_mask());
        assert_eq!(attacks, expected);

        let corner = multi_knight_attacks(Square::A1.get_mask());
        assert_eq!(corner, Square::B3.get_mask() | Square::C2.get_mask());

        let edge = multi_knight_attacks(Square::H5.get_mask());
        assert_eq!(edge, Square::G7.get_mask() | Square::F6.get_mask() | Square::F4.get_mask() | Square::G3.get_mask());
    }

    #[test]
    fn test_king_attacks() {
        assert_eq!(multi_king_attacks(Square::E4.get_mask()).count_ones(), 8);
        assert_eq!(multi_king_attacks(Square::A8.get_mask()), Square::B8.get_mask() | Square::A7.get_mask() | Square::B7.get_mask());
        assert_eq!(multi_king_attacks(Square::H4.get_mask()).count_ones(), 5);
    }

    #[test]
    fn test_pawn_attacks() {
        assert_eq!(multi_pawn_attacks(Square::E4.get_mask(), Color::White), Square::D5.get_mask() | Square::F5.get_mask());
        assert_eq!(multi_pawn_attacks(Square::E4.get_mask(), Color::Black), Square::D3.get_mask() | Square::F3.get_mask());
        assert_eq!(multi_pawn_attacks(Square::A2.get_mask(), Color::White), Square::B3.get_mask());
        assert_eq!(multi_pawn_attacks(Square::H7.get_mask(), Color::Black), Square::G6.get_mask());
        assert_eq!(multi_pawn_attacks(RANK_2, Color::White), RANK_3);
    }

    #[test]
    fn test_pawn_moves() {
        assert_eq!(multi_pawn_moves(Square::E2.get_mask(), Color::White), Square::E3.get_mask());
        assert_eq!(multi_pawn_moves(Square::E7.get_mask(), Color::Black), Square::E6.get_mask());
        assert_eq!(multi_pawn_moves(RANK_7, Color::Black), RANK_6);
    }
}
