//! Compass directions and the directional flood fill used by sliding pieces.

use crate::utils::bitboard::*;

#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    North=0, South=7,
    NorthEast=1, SouthWest=6,
    East=2, West=5,
    SouthEast=3, NorthWest=4,
}

const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::North, Direction::South,
    Direction::NorthEast, Direction::SouthWest,
    Direction::East, Direction::West,
    Direction::SouthEast, Direction::NorthWest
];

const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::North, Direction::South, Direction::East, Direction::West
];

const DIAGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::NorthEast, Direction::SouthWest, Direction::SouthEast, Direction::NorthWest
];

/// A ray crosses at most seven squares; six fill steps plus the final step cover it.
const FLOOD_STEPS: u32 = 6;

impl Direction {
    pub const fn flip(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::SouthEast => Direction::NorthWest,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    pub const fn is_diagonal(&self) -> bool {
        matches!(self, Direction::NorthEast | Direction::SouthWest | Direction::SouthEast | Direction::NorthWest)
    }

    /// Moves every set bit one square in this direction, dropping bits that would leave the board.
    pub const fn shift(&self, board: Bitboard) -> Bitboard {
        match self {
            Direction::North => north_one(board),
            Direction::South => south_one(board),
            Direction::East => east_one(board),
            Direction::West => west_one(board),
            Direction::NorthEast => north_east_one(board),
            Direction::NorthWest => north_west_one(board),
            Direction::SouthEast => south_east_one(board),
            Direction::SouthWest => south_west_one(board),
        }
    }

    /// Squares attacked along this direction by sliders on `origin`, stopping at
    /// and including the first square not in `empty`.
    pub const fn flood_attacks(&self, origin: Bitboard, empty: Bitboard) -> Bitboard {
        let mut flood = origin;
        let mut ray = origin;
        let mut i = 0;
        while i < FLOOD_STEPS {
            ray = self.shift(ray) & empty;
            flood |= ray;
            i += 1;
        }
        self.shift(flood)
    }

    pub fn iter() -> impl Iterator<Item = Direction> {
        ALL_DIRECTIONS.iter().copied()
    }

    pub fn iter_orthogonal() -> impl Iterator<Item = Direction> {
        ORTHOGONAL_DIRECTIONS.iter().copied()
    }

    pub fn iter_diagonal() -> impl Iterator<Item = Direction> {
        DIAGONAL_DIRECTIONS.iter().copied()
    }
}
