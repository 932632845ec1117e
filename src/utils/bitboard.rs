use crate::utils::Square;
use crate::utils::masks::{FILE_A, FILE_H};

pub type Bitboard = u64;

/// Returns `board` with the bit of `square` set.
pub const fn set_bit(board: Bitboard, square: Square) -> Bitboard {
    board | square.get_mask()
}

/// Returns `board` with the bit of `square` cleared.
pub const fn clear_bit(board: Bitboard, square: Square) -> Bitboard {
    board & !square.get_mask()
}

pub const fn north_one(board: Bitboard) -> Bitboard {
    board << 8
}

pub const fn south_one(board: Bitboard) -> Bitboard {
    board >> 8
}

// Anything that lands on the a-file after an eastward shift came from the h-file.
pub const fn east_one(board: Bitboard) -> Bitboard {
    (board >> 1) & !FILE_A
}

pub const fn west_one(board: Bitboard) -> Bitboard {
    (board << 1) & !FILE_H
}

pub const fn north_east_one(board: Bitboard) -> Bitboard {
    (board << 7) & !FILE_A
}

pub const fn north_west_one(board: Bitboard) -> Bitboard {
    (board << 9) & !FILE_H
}

pub const fn south_east_one(board: Bitboard) -> Bitboard {
    (board >> 9) & !FILE_A
}

pub const fn south_west_one(board: Bitboard) -> Bitboard {
    (board >> 7) & !FILE_H
}

#[derive(Debug, Clone)]
pub struct SquaresFromMaskIterator {
    mask: Bitboard,
}

impl From<Bitboard> for SquaresFromMaskIterator {
    fn from(mask: Bitboard) -> Self {
        SquaresFromMaskIterator {
            mask,
        }
    }
}

impl Iterator for SquaresFromMaskIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == 0 {
            return None;
        }

        let ls1b = self.mask & self.mask.wrapping_neg();  // Isolate the least significant set bit
        self.mask &= !ls1b;  // Clear the least significant set bit

        Square::from_mask(ls1b)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.mask.count_ones() as usize;
        (count, Some(count))
    }
}

pub fn get_squares_from_mask_iter(mask: Bitboard) -> SquaresFromMaskIterator {
    mask.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::masks::{RANK_1, RANK_8};

    #[test]
    fn test_set_and_clear_bit() {
        let board = set_bit(0, Square::E4);
        assert_eq!(board, Square::E4.get_mask());
        assert_eq!(set_bit(board, Square::E4), board);
        assert_eq!(clear_bit(board, Square::E4), 0);
        assert_eq!(clear_bit(0, Square::E4), 0);
        assert_eq!(clear_bit(!0, Square::A8), !0 >> 1);
        assert_eq!(set_bit(0, Square::H1), 1);
    }

    #[test]
    fn test_single_steps() {
        let e4 = Square::E4.get_mask();
        assert_eq!(north_one(e4), Square::E5.get_mask());
        assert_eq!(south_one(e4), Square::E3.get_mask());
        assert_eq!(east_one(e4), Square::F4.get_mask());
        assert_eq!(west_one(e4), Square::D4.get_mask());
        assert_eq!(north_east_one(e4), Square::F5.get_mask());
        assert_eq!(north_west_one(e4), Square::D5.get_mask());
        assert_eq!(south_east_one(e4), Square::F3.get_mask());
        assert_eq!(south_west_one(e4), Square::D3.get_mask());
    }

    #[test]
    fn test_single_steps_do_not_wrap() {
        for square in Square::iter_all() {
            let mask = square.get_mask();
            if square.get_file() == 7 {
                assert_eq!(east_one(mask), 0);
                assert_eq!(north_east_one(mask), 0);
                assert_eq!(south_east_one(mask), 0);
            }
            if square.get_file() == 0 {
                assert_eq!(west_one(mask), 0);
                assert_eq!(north_west_one(mask), 0);
                assert_eq!(south_west_one(mask), 0);
            }
        }
        assert_eq!(north_one(RANK_8), 0);
        assert_eq!(south_one(RANK_1), 0);
    }

    #[test]
    fn test_squares_from_mask_iter() {
        let mask = Square::A8.get_mask() | Square::E4.get_mask() | Square::H1.get_mask();
        let mut squares: Vec<Square> = get_squares_from_mask_iter(mask).collect();
        squares.sort_by_key(|s| *s as u8);
        assert_eq!(squares, vec![Square::A8, Square::E4, Square::H1]);
        assert_eq!(get_squares_from_mask_iter(0).count(), 0);
        assert_eq!(get_squares_from_mask_iter(!0).count(), 64);
    }
}
