use serde::{Deserialize, Serialize};
use crate::utils::{Color, PieceType};

/// One of the twelve piece/color combinations. The discriminant is the index of
/// the piece's bitboard inside a [`Board`](crate::state::Board).
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ColoredPiece {
    WhitePawn=0, WhiteKnight=1, WhiteBishop=2, WhiteRook=3, WhiteQueen=4, WhiteKing=5,
    BlackPawn=6, BlackKnight=7, BlackBishop=8, BlackRook=9, BlackQueen=10, BlackKing=11
}

const ALL: [ColoredPiece; 12] = [
    ColoredPiece::WhitePawn, ColoredPiece::WhiteKnight, ColoredPiece::WhiteBishop,
    ColoredPiece::WhiteRook, ColoredPiece::WhiteQueen, ColoredPiece::WhiteKing,
    ColoredPiece::BlackPawn, ColoredPiece::BlackKnight, ColoredPiece::BlackBishop,
    ColoredPiece::BlackRook, ColoredPiece::BlackQueen, ColoredPiece::BlackKing
];

impl ColoredPiece {
    pub const LIMIT: usize = 12;
    pub const COLOR_DIFFERENCE: u8 = PieceType::LIMIT as u8;

    pub const fn new(color: Color, piece_type: PieceType) -> ColoredPiece {
        ALL[(color as u8 * ColoredPiece::COLOR_DIFFERENCE + piece_type as u8) as usize]
    }

    pub const fn index(&self) -> usize {
        *self as usize
    }

    pub const fn get_color(&self) -> Color {
        Color::from(*self as u8 >= ColoredPiece::COLOR_DIFFERENCE)
    }

    pub const fn get_piece_type(&self) -> PieceType {
        match PieceType::from_index(*self as u8 % ColoredPiece::COLOR_DIFFERENCE) {
            Some(piece_type) => piece_type,
            None => unreachable!()
        }
    }

    pub const fn from_char(c: char) -> Option<ColoredPiece> {
        match c {
            'P' => Some(ColoredPiece::WhitePawn),
            'N' => Some(ColoredPiece::WhiteKnight),
            'B' => Some(ColoredPiece::WhiteBishop),
            'R' => Some(ColoredPiece::WhiteRook),
            'Q' => Some(ColoredPiece::WhiteQueen),
            'K' => Some(ColoredPiece::WhiteKing),
            'p' => Some(ColoredPiece::BlackPawn),
            'n' => Some(ColoredPiece::BlackKnight),
            'b' => Some(ColoredPiece::BlackBishop),
            'r' => Some(ColoredPiece::BlackRook),
            'q' => Some(ColoredPiece::BlackQueen),
            'k' => Some(ColoredPiece::BlackKing),
            _ => None
        }
    }

    pub const fn to_char(&self) -> char {
        let c = self.get_piece_type().to_char();
        match self.get_color() {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase()
        }
    }

    pub fn iter() -> impl Iterator<Item = ColoredPiece> {
        ALL.iter().copied()
    }
}

impl std::fmt::Display for ColoredPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.get_color(), self.get_piece_type())
    }
}
