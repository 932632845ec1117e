use serde::{Deserialize, Serialize};
use crate::utils::{Bitboard, Color, Square};

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CastlingSide {
    KingSide=0, QueenSide=1
}

impl CastlingSide {
    pub fn iter() -> impl Iterator<Item = CastlingSide> {
        [CastlingSide::KingSide, CastlingSide::QueenSide].into_iter()
    }
}

const fn calc_castling_bit(color: Color, side: CastlingSide) -> u8 {
    0b00001000 >> ((color as u8) << 1 | side as u8)
}

/// Castling permissions as four flags: 0, 0, 0, 0, wk, wq, bk, bq.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const fn all() -> CastlingRights {
        CastlingRights(0b00001111)
    }

    pub const fn none() -> CastlingRights {
        CastlingRights(0)
    }

    pub const fn has(&self, color: Color, side: CastlingSide) -> bool {
        self.0 & calc_castling_bit(color, side) != 0
    }

    pub fn grant(&mut self, color: Color, side: CastlingSide) {
        self.0 |= calc_castling_bit(color, side);
    }

    pub fn revoke(&mut self, color: Color, side: CastlingSide) {
        self.0 &= !calc_castling_bit(color, side);
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::all()
    }
}

/// Fixed squares involved in castling for one color and side.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CastlingGeometry {
    pub king_src: Square,
    pub king_dst: Square,
    pub rook_src: Square,
    pub rook_dst: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub between_mask: Bitboard,
    /// Squares the king crosses or lands on after leaving its home square.
    pub king_path_mask: Bitboard,
    /// Squares the rook crosses or lands on.
    pub rook_path_mask: Bitboard,
}

impl CastlingGeometry {
    pub const fn of(color: Color, side: CastlingSide) -> CastlingGeometry {
        match (color, side) {
            (Color::White, CastlingSide::KingSide) => CastlingGeometry {
                king_src: Square::E1,
                king_dst: Square::G1,
                rook_src: Square::H1,
                rook_dst: Square::F1,
                between_mask: Square::F1.get_mask() | Square::G1.get_mask(),
                king_path_mask: Square::F1.get_mask() | Square::G1.get_mask(),
                rook_path_mask: Square::F1.get_mask() | Square::G1.get_mask(),
            },
            (Color::White, CastlingSide::QueenSide) => CastlingGeometry {
                king_src: Square::E1,
                king_dst: Square::C1,
                rook_src: Square::A1,
                rook_dst: Square::D1,
                between_mask: Square::B1.get_mask() | Square::C1.get_mask() | Square::D1.get_mask(),
                king_path_mask: Square::C1.get_mask() | Square::D1.get_mask(),
                rook_path_mask: Square::B1.get_mask() | Square::C1.get_mask() | Square::D1.get_mask(),
            },
            (Color::Black, CastlingSide::KingSide) => CastlingGeometry {
                king_src: Square::E8,
                king_dst: Square::G8,
                rook_src: Square::H8,
                rook_dst: Square::F8,
                between_mask: Square::F8.get_mask() | Square::G8.get_mask(),
                king_path_mask: Square::F8.get_mask() | Square::G8.get_mask(),
                rook_path_mask: Square::F8.get_mask() | Square::G8.get_mask(),
            },
            (Color::Black, CastlingSide::QueenSide) => CastlingGeometry {
                king_src: Square::E8,
                king_dst: Square::C8,
                rook_src: Square::A8,
                rook_dst: Square::D8,
                between_mask: Square::B8.get_mask() | Square::C8.get_mask() | Square::D8.get_mask(),
                king_path_mask: Square::C8.get_mask() | Square::D8.get_mask(),
                rook_path_mask: Square::B8.get_mask() | Square::C8.get_mask() | Square::D8.get_mask(),
            },
        }
    }

    /// Squares that must not be attacked by the enemy for castling to be allowed.
    pub const fn safety_mask(&self) -> Bitboard {
        self.king_path_mask | self.rook_path_mask
    }
}
