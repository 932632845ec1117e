use serde::{Deserialize, Serialize};
use subenum::subenum;

#[subenum(SlidingPieceType)]
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PieceType {
    Pawn=0,
    Knight=1,
    #[subenum(SlidingPieceType)]
    Bishop=2,
    #[subenum(SlidingPieceType)]
    Rook=3,
    #[subenum(SlidingPieceType)]
    Queen=4,
    King=5
}

const ALL_PIECES: [PieceType; 6] = [
    PieceType::Pawn,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen,
    PieceType::King
];

const ALL_SLIDING_PIECES: [PieceType; 3] = [
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen
];

const ALL_PROMOTION_PIECES: [PieceType; 4] = [
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen
];

impl PieceType {
    pub const LIMIT: usize = 6;

    pub const fn from_index(index: u8) -> Option<PieceType> {
        if (index as usize) < PieceType::LIMIT {
            Some(ALL_PIECES[index as usize])
        } else {
            None
        }
    }

    /// Uppercase letter of the piece, as used for white pieces in placement strings.
    pub const fn to_char(&self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K'
        }
    }

    /// Case-insensitive inverse of [`PieceType::to_char`].
    pub const fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceType::Pawn),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None
        }
    }

    pub const fn is_sliding(&self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }

    pub const fn is_promotion_target(&self) -> bool {
        matches!(self, PieceType::Knight | PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }

    pub fn iter_pieces() -> impl Iterator<Item = PieceType> {
        ALL_PIECES.iter().copied()
    }

    pub fn iter_sliding_pieces() -> impl Iterator<Item = PieceType> {
        ALL_SLIDING_PIECES.iter().copied()
    }

    pub fn iter_promotion_pieces() -> impl Iterator<Item = PieceType> {
        ALL_PROMOTION_PIECES.iter().copied()
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king"
        };
        write!(f, "{}", name)
    }
}
