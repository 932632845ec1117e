//! Blocker-aware ray attacks for bishops, rooks and queens.
//!
//! Every ray is produced by a bounded directional flood fill over the empty
//! squares, so the first occupied square in each direction is included whatever
//! its color. Callers filter out their own pieces.

use crate::utils::{Bitboard, Direction, SlidingPieceType, Square};

/// Returns all squares attacked by rooks on `rooks_mask` given `occupied_mask`
pub const fn multi_rook_attacks(rooks_mask: Bitboard, occupied_mask: Bitboard) -> Bitboard {
    let empty = !occupied_mask;
    Direction::North.flood_attacks(rooks_mask, empty) |
        Direction::South.flood_attacks(rooks_mask, empty) |
        Direction::East.flood_attacks(rooks_mask, empty) |
        Direction::West.flood_attacks(rooks_mask, empty)
}

/// Returns all squares attacked by bishops on `bishops_mask` given `occupied_mask`
pub const fn multi_bishop_attacks(bishops_mask: Bitboard, occupied_mask: Bitboard) -> Bitboard {
    let empty = !occupied_mask;
    Direction::NorthEast.flood_attacks(bishops_mask, empty) |
        Direction::NorthWest.flood_attacks(bishops_mask, empty) |
        Direction::SouthEast.flood_attacks(bishops_mask, empty) |
        Direction::SouthWest.flood_attacks(bishops_mask, empty)
}

pub const fn multi_queen_attacks(queens_mask: Bitboard, occupied_mask: Bitboard) -> Bitboard {
    multi_rook_attacks(queens_mask, occupied_mask) | multi_bishop_attacks(queens_mask, occupied_mask)
}

pub const fn single_sliding_attacks(piece: SlidingPieceType, src_square: Square, occupied_mask: Bitboard) -> Bitboard {
    let src_mask = src_square.get_mask();
    match piece {
        SlidingPieceType::Bishop => multi_bishop_attacks(src_mask, occupied_mask),
        SlidingPieceType::Rook => multi_rook_attacks(src_mask, occupied_mask),
        SlidingPieceType::Queen => multi_queen_attacks(src_mask, occupied_mask),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::get_squares_from_mask_iter;
    use crate::utils::masks::*;

    fn to_chess_square(square: Square) -> chess::Square {
        unsafe { chess::Square::new(square.get_rank() * 8 + square.get_file()) }
    }

    fn to_chess_bitboard(mask: Bitboard) -> chess::BitBoard {
        let mut result = chess::EMPTY;
        for square in get_squares_from_mask_iter(mask) {
            result |= chess::BitBoard::from_square(to_chess_square(square));
        }
        result
    }

    fn squares(list: &[Square]) -> Bitboard {
        list.iter().fold(0, |acc, s| acc | s.get_mask())
    }

    #[test]
    fn test_rook_on_empty_board() {
        let attacks = single_sliding_attacks(SlidingPieceType::Rook, Square::A1, 0);
        assert_eq!(attacks.count_ones(), 14);
        assert_eq!(attacks, (FILE_A | RANK_1) & !Square::A1.get_mask());

        for square in Square::iter_all() {
            let attacks = single_sliding_attacks(SlidingPieceType::Rook, square, square.get_mask());
            assert_eq!(attacks, (square.get_file_mask() | square.get_rank_mask()) & !square.get_mask());
        }
    }

    #[test]
    fn test_bishop_on_empty_board() {
        assert_eq!(single_sliding_attacks(SlidingPieceType::Bishop, Square::A1, 0).count_ones(), 7);
        assert_eq!(single_sliding_attacks(SlidingPieceType::Bishop, Square::D4, 0).count_ones(), 13);
        assert_eq!(single_sliding_attacks(SlidingPieceType::Bishop, Square::H8, 0),
                   squares(&[Square::G7, Square::F6, Square::E5, Square::D4, Square::C3, Square::B2, Square::A1]));
        assert_eq!(single_sliding_attacks(SlidingPieceType::Queen, Square::D4, 0).count_ones(), 27);
    }

    #[test]
    fn test_blockers_truncate_rays() {
        let occupied = squares(&[Square::D4, Square::D6, Square::F4, Square::B2]);
        let rook = single_sliding_attacks(SlidingPieceType::Rook, Square::D4, occupied);
        assert!(rook & Square::D6.get_mask() != 0);
        assert_eq!(rook & Square::D7.get_mask(), 0);
        assert!(rook & Square::F4.get_mask() != 0);
        assert_eq!(rook & Square::G4.get_mask(), 0);
        assert!(rook & Square::A4.get_mask() != 0);
        assert!(rook & Square::D1.get_mask() != 0);

        let bishop = single_sliding_attacks(SlidingPieceType::Bishop, Square::D4, occupied);
        assert!(bishop & Square::B2.get_mask() != 0);
        assert_eq!(bishop & Square::A1.get_mask(), 0);
        assert!(bishop & Square::H8.get_mask() != 0);
    }

    #[test]
    fn test_enclosed_piece_sees_only_neighbours() {
        let neighbours = crate::attacks::single_king_attacks(Square::E4);
        let occupied = neighbours | Square::E4.get_mask();
        assert_eq!(single_sliding_attacks(SlidingPieceType::Queen, Square::E4, occupied), neighbours);
        assert_eq!(single_sliding_attacks(SlidingPieceType::Rook, Square::E4, occupied),
                   squares(&[Square::E5, Square::E3, Square::D4, Square::F4]));
        assert_eq!(single_sliding_attacks(SlidingPieceType::Bishop, Square::E4, occupied),
                   squares(&[Square::D5, Square::F5, Square::D3, Square::F3]));
    }

    #[test]
    fn test_rays_do_not_wrap_across_files() {
        for square in Square::iter_all() {
            let attacks = single_sliding_attacks(SlidingPieceType::Rook, square, 0);
            if square.get_file() == 7 {
                assert_eq!(attacks & FILE_A & !square.get_rank_mask(), 0);
            }
            if square.get_file() == 0 {
                assert_eq!(attacks & FILE_H & !square.get_rank_mask(), 0);
            }
        }
        let h4 = single_sliding_attacks(SlidingPieceType::Rook, Square::H4, 0);
        assert_eq!(h4 & RANK_5 & !FILE_H, 0);
        assert_eq!(h4 & RANK_3 & !FILE_H, 0);
    }

    #[test]
    fn test_multi_attacks_are_union_of_singles() {
        let occupied = squares(&[Square::C3, Square::F6, Square::B7]);
        let rooks = squares(&[Square::A1, Square::H8]);
        let expected = single_sliding_attacks(SlidingPieceType::Rook, Square::A1, occupied)
            | single_sliding_attacks(SlidingPieceType::Rook, Square::H8, occupied);
        assert_eq!(multi_rook_attacks(rooks, occupied | rooks), expected);
    }

    #[test]
    fn test_sliding_attacks_agree_with_chess_crate() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..64 {
            let occupied = rng.u64(..) & rng.u64(..);
            for square in Square::iter_all() {
                let chess_square = to_chess_square(square);
                let blockers = to_chess_bitboard(occupied & !square.get_mask());
                assert_eq!(to_chess_bitboard(single_sliding_attacks(SlidingPieceType::Rook, square, occupied)),
                           chess::get_rook_moves(chess_square, blockers));
                assert_eq!(to_chess_bitboard(single_sliding_attacks(SlidingPieceType::Bishop, square, occupied)),
                           chess::get_bishop_moves(chess_square, blockers));
            }
        }
    }
}
