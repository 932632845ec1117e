use crate::utils::*;
use crate::utils::masks::*;

/// Piece placement as twelve mutually exclusive bitboards, one per [`ColoredPiece`].
///
/// Occupancy unions are derived on every read, so there is no cached state to refresh
/// after a mutation.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub struct Board {
    piece_masks: [Bitboard; ColoredPiece::LIMIT],
}

impl Board {
    pub const fn initial() -> Board {
        Board {
            piece_masks: [
                STARTING_WP, STARTING_WN, STARTING_WB, STARTING_WR, STARTING_WQ, STARTING_WK,
                STARTING_BP, STARTING_BN, STARTING_BB, STARTING_BR, STARTING_BQ, STARTING_BK
            ]
        }
    }

    pub const fn blank() -> Board {
        Board {
            piece_masks: [0; ColoredPiece::LIMIT]
        }
    }

    pub const fn get_colored_piece_mask(&self, colored_piece: ColoredPiece) -> Bitboard {
        self.piece_masks[colored_piece.index()]
    }

    pub const fn get_piece_type_mask(&self, piece_type: PieceType) -> Bitboard {
        self.get_colored_piece_mask(ColoredPiece::new(Color::White, piece_type)) |
            self.get_colored_piece_mask(ColoredPiece::new(Color::Black, piece_type))
    }

    pub const fn get_color_mask(&self, color: Color) -> Bitboard {
        let offset = color as usize * ColoredPiece::COLOR_DIFFERENCE as usize;
        let mut res = 0;
        let mut i = 0;
        while i < PieceType::LIMIT {
            res |= self.piece_masks[offset + i];
            i += 1;
        }
        res
    }

    pub const fn white_occupancy(&self) -> Bitboard {
        self.get_color_mask(Color::White)
    }

    pub const fn black_occupancy(&self) -> Bitboard {
        self.get_color_mask(Color::Black)
    }

    pub const fn get_occupied_mask(&self) -> Bitboard {
        self.white_occupancy() | self.black_occupancy()
    }

    pub const fn is_empty_at(&self, square: Square) -> bool {
        self.get_occupied_mask() & square.get_mask() == 0
    }

    /// Places `colored_piece` on `square`, replacing whatever stood there.
    pub fn put_colored_piece_at(&mut self, colored_piece: ColoredPiece, square: Square) {
        self.clear_square(square);
        let index = colored_piece.index();
        self.piece_masks[index] = set_bit(self.piece_masks[index], square);
        debug_assert!(self.is_consistent(), "overlapping piece bitboards after placing {} on {}", colored_piece, square);
    }

    /// Removes any piece on `square`. Does nothing if the square is empty.
    pub fn clear_square(&mut self, square: Square) {
        for mask in self.piece_masks.iter_mut() {
            *mask = clear_bit(*mask, square);
        }
    }

    pub fn get_colored_piece_at(&self, square: Square) -> Option<ColoredPiece> {
        let square_mask = square.get_mask();
        ColoredPiece::iter().find(|colored_piece| self.get_colored_piece_mask(*colored_piece) & square_mask != 0)
    }

    pub fn get_piece_type_at(&self, square: Square) -> Option<PieceType> {
        self.get_colored_piece_at(square).map(|colored_piece| colored_piece.get_piece_type())
    }

    pub fn get_color_at(&self, square: Square) -> Option<Color> {
        self.get_colored_piece_at(square).map(|colored_piece| colored_piece.get_color())
    }

    /// The square of `color`'s king.
    ///
    /// Panics unless exactly one king of that color is on the board.
    pub fn get_king_square(&self, color: Color) -> Square {
        let king_mask = self.get_colored_piece_mask(ColoredPiece::new(color, PieceType::King));
        match Square::from_mask(king_mask) {
            Some(square) => square,
            None => panic!("expected exactly one {} king, found {}", color, king_mask.count_ones()),
        }
    }

    pub fn is_consistent(&self) -> bool {
        let mut seen: Bitboard = 0;
        for mask in self.piece_masks {
            if mask & seen != 0 {
                return false;
            }
            seen |= mask;
        }
        true
    }

    pub const fn has_valid_kings(&self) -> bool {
        self.get_colored_piece_mask(ColoredPiece::WhiteKing).count_ones() == 1 &&
            self.get_colored_piece_mask(ColoredPiece::BlackKing).count_ones() == 1
    }

    pub fn is_valid(&self) -> bool {
        self.is_consistent() && self.has_valid_kings()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::blank()
    }
}
