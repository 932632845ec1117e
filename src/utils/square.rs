use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::utils::Bitboard;
use crate::utils::masks::{FILES, RANKS};

/// A board square, numbered rank by rank from the top: a8 is 0, h1 is 63.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Square {
    A8=0, B8=1, C8=2, D8=3, E8=4, F8=5, G8=6, H8=7,
    A7=8, B7=9, C7=10, D7=11, E7=12, F7=13, G7=14, H7=15,
    A6=16, B6=17, C6=18, D6=19, E6=20, F6=21, G6=22, H6=23,
    A5=24, B5=25, C5=26, D5=27, E5=28, F5=29, G5=30, H5=31,
    A4=32, B4=33, C4=34, D4=35, E4=36, F4=37, G4=38, H4=39,
    A3=40, B3=41, C3=42, D3=43, E3=44, F3=45, G3=46, H3=47,
    A2=48, B2=49, C2=50, D2=51, E2=52, F2=53, G2=54, H2=55,
    A1=56, B1=57, C1=58, D1=59, E1=60, F1=61, G1=62, H1=63
}

const ALL: [Square; 64] = [
    Square::A8, Square::B8, Square::C8, Square::D8, Square::E8, Square::F8, Square::G8, Square::H8,
    Square::A7, Square::B7, Square::C7, Square::D7, Square::E7, Square::F7, Square::G7, Square::H7,
    Square::A6, Square::B6, Square::C6, Square::D6, Square::E6, Square::F6, Square::G6, Square::H6,
    Square::A5, Square::B5, Square::C5, Square::D5, Square::E5, Square::F5, Square::G5, Square::H5,
    Square::A4, Square::B4, Square::C4, Square::D4, Square::E4, Square::F4, Square::G4, Square::H4,
    Square::A3, Square::B3, Square::C3, Square::D3, Square::E3, Square::F3, Square::G3, Square::H3,
    Square::A2, Square::B2, Square::C2, Square::D2, Square::E2, Square::F2, Square::G2, Square::H2,
    Square::A1, Square::B1, Square::C1, Square::D1, Square::E1, Square::F1, Square::G1, Square::H1
];

pub const SQUARE_NAMES: [&str; 64] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1"
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareParseError {
    InvalidLength(String),
    InvalidFile(char),
    InvalidRank(char),
    IndexOutOfRange(u8),
}

impl Display for SquareParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SquareParseError::InvalidLength(s) => write!(f, "Square must be two characters: {:?}", s),
            SquareParseError::InvalidFile(c) => write!(f, "Invalid file: {}", c),
            SquareParseError::InvalidRank(c) => write!(f, "Invalid rank: {}", c),
            SquareParseError::IndexOutOfRange(i) => write!(f, "Square index out of range: {}", i),
        }
    }
}

impl Error for SquareParseError {}

impl Square {
    pub const fn from_index(square_number: u8) -> Option<Square> {
        if square_number < 64 {
            Some(ALL[square_number as usize])
        } else {
            None
        }
    }

    /// `file` and `rank` are zero-based, with file 0 being the a-file and rank 0 the first rank.
    pub const fn from_file_rank(file: u8, rank: u8) -> Option<Square> {
        if file > 7 || rank > 7 {
            return None;
        }
        Some(ALL[((7 - rank) * 8 + file) as usize])
    }

    /// The square of the single set bit of `mask`, if exactly one bit is set.
    pub const fn from_mask(mask: Bitboard) -> Option<Square> {
        if mask.count_ones() != 1 {
            return None;
        }
        Some(ALL[mask.leading_zeros() as usize])
    }

    pub const fn get_mask(&self) -> Bitboard {
        1 << (63 - *self as u8)
    }

    pub const fn get_file(&self) -> u8 {
        *self as u8 % 8
    }

    pub const fn get_file_mask(&self) -> Bitboard {
        FILES[self.get_file() as usize]
    }

    pub const fn get_rank(&self) -> u8 {
        7 - *self as u8 / 8
    }

    pub const fn get_rank_mask(&self) -> Bitboard {
        RANKS[self.get_rank() as usize]
    }

    pub const fn get_file_char(&self) -> char {
        (b'a' + self.get_file()) as char
    }

    pub const fn get_rank_char(&self) -> char {
        (b'1' + self.get_rank()) as char
    }

    /// The square reached by a half turn of the board around its centre.
    pub const fn rotate(&self) -> Square {
        ALL[63 - *self as usize]
    }

    pub const fn readable(&self) -> &'static str {
        SQUARE_NAMES[*self as usize]
    }

    pub fn iter_all() -> impl Iterator<Item = Square> {
        ALL.iter().copied()
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.readable())
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Square::from_index(value).ok_or(SquareParseError::IndexOutOfRange(value))
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(SquareParseError::InvalidLength(s.to_string()))
        };
        if !('a'..='h').contains(&file) {
            return Err(SquareParseError::InvalidFile(file));
        }
        if !('1'..='8').contains(&rank) {
            return Err(SquareParseError::InvalidRank(rank));
        }
        let file_int = file as u8 - b'a';
        let rank_int = rank as u8 - b'1';
        Square::from_file_rank(file_int, rank_int).ok_or(SquareParseError::InvalidLength(s.to_string()))
    }
}
