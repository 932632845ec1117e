//! Decoding of placement strings and FEN records.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::state::{Board, CastlingRights, CastlingSide, State};
use crate::utils::{Color, ColoredPiece, PieceType, Square};

pub const INITIAL_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
pub const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum FenParseError {
    InvalidFieldCount(usize),
    UnrecognizedCharacter { character: char, offset: usize },
    InvalidSquareCount(usize),
    InvalidRankWidth { rank_from_top: usize, squares: usize },
    InvalidKingCount { color: Color, count: u32 },
    InvalidSideToMove(String),
    InvalidCastle(String),
    InvalidEnPassantTarget(String),
    InvalidHalfmoveClock(String),
    InvalidFullmoveCounter(String),
}

impl Display for FenParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FenParseError::InvalidFieldCount(count) => write!(f, "Expected 4 to 6 FEN fields, found {}", count),
            FenParseError::UnrecognizedCharacter { character, offset } => write!(f, "Unrecognized character {:?} at offset {}", character, offset),
            FenParseError::InvalidSquareCount(count) => write!(f, "Placement covers {} squares instead of 64", count),
            FenParseError::InvalidRankWidth { rank_from_top, squares } => write!(f, "Rank {} from the top covers {} squares instead of 8", rank_from_top + 1, squares),
            FenParseError::InvalidKingCount { color, count } => write!(f, "Expected exactly one {} king, found {}", color, count),
            FenParseError::InvalidSideToMove(side) => write!(f, "Invalid side to move: {}", side),
            FenParseError::InvalidCastle(castle) => write!(f, "Invalid castling rights: {}", castle),
            FenParseError::InvalidEnPassantTarget(target) => write!(f, "Invalid en passant target: {}", target),
            FenParseError::InvalidHalfmoveClock(clock) => write!(f, "Invalid halfmove clock: {}", clock),
            FenParseError::InvalidFullmoveCounter(counter) => write!(f, "Invalid fullmove counter: {}", counter),
        }
    }
}

impl Error for FenParseError {}

fn square_at(rank_from_top: usize, file: usize) -> Option<Square> {
    if rank_from_top < 8 && file < 8 {
        Square::from_index((rank_from_top * 8 + file) as u8)
    } else {
        None
    }
}

/// Decodes the placement field of a FEN record into a board.
///
/// Ranks are listed from the eighth down, separated by `/`. Letters place
/// pieces and the digits 1 to 8 skip empty squares; every rank must cover
/// exactly eight squares and each side must have exactly one king.
pub fn parse_placement(placement: &str) -> Result<Board, FenParseError> {
    let mut board = Board::blank();
    let mut rank_widths: Vec<usize> = vec![0];

    for (offset, c) in placement.char_indices() {
        let rank_from_top = rank_widths.len() - 1;
        match c {
            '/' => rank_widths.push(0),
            '1'..='8' => rank_widths[rank_from_top] += c as usize - '0' as usize,
            _ => {
                let colored_piece = ColoredPiece::from_char(c)
                    .ok_or(FenParseError::UnrecognizedCharacter { character: c, offset })?;
                if let Some(square) = square_at(rank_from_top, rank_widths[rank_from_top]) {
                    board.put_colored_piece_at(colored_piece, square);
                }
                rank_widths[rank_from_top] += 1;
            }
        }
    }

    let square_count: usize = rank_widths.iter().sum();
    if square_count != 64 {
        return Err(FenParseError::InvalidSquareCount(square_count));
    }
    if let Some((rank_from_top, &squares)) = rank_widths.iter().enumerate().find(|(_, width)| **width != 8) {
        return Err(FenParseError::InvalidRankWidth { rank_from_top, squares });
    }

    for color in Color::iter() {
        let count = board.get_colored_piece_mask(ColoredPiece::new(color, PieceType::King)).count_ones();
        if count != 1 {
            return Err(FenParseError::InvalidKingCount { color, count });
        }
    }

    Ok(board)
}

fn parse_side_to_move(fen_side_to_move: &str) -> Result<Color, FenParseError> {
    match fen_side_to_move {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenParseError::InvalidSideToMove(fen_side_to_move.to_string()))
    }
}

fn parse_castle(fen_castle: &str) -> Result<CastlingRights, FenParseError> {
    let mut rights = CastlingRights::none();
    if fen_castle == "-" {
        return Ok(rights);
    }
    let invalid = || FenParseError::InvalidCastle(fen_castle.to_string());
    if fen_castle.is_empty() || fen_castle.len() > 4 {
        return Err(invalid());
    }
    for c in fen_castle.chars() {
        let (color, side) = match c {
            'K' => (Color::White, CastlingSide::KingSide),
            'Q' => (Color::White, CastlingSide::QueenSide),
            'k' => (Color::Black, CastlingSide::KingSide),
            'q' => (Color::Black, CastlingSide::QueenSide),
            _ => return Err(invalid())
        };
        if rights.has(color, side) {
            return Err(invalid());
        }
        rights.grant(color, side);
    }
    Ok(rights)
}

fn parse_en_passant_target(fen_en_passant_target: &str, side_to_move: Color) -> Result<Option<Square>, FenParseError> {
    if fen_en_passant_target == "-" {
        return Ok(None);
    }
    let invalid = || FenParseError::InvalidEnPassantTarget(fen_en_passant_target.to_string());
    let square = Square::from_str(fen_en_passant_target).map_err(|_| invalid())?;
    let expected_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2
    };
    if square.get_rank() != expected_rank {
        return Err(invalid());
    }
    Ok(Some(square))
}

fn parse_halfmove_clock(fen_halfmove_clock: &str) -> Result<u8, FenParseError> {
    match fen_halfmove_clock.parse::<u8>() {
        Ok(halfmove_clock) if halfmove_clock <= 100 => Ok(halfmove_clock),
        _ => Err(FenParseError::InvalidHalfmoveClock(fen_halfmove_clock.to_string()))
    }
}

fn parse_fullmove(fen_fullmove: &str) -> Result<u16, FenParseError> {
    match fen_fullmove.parse::<u16>() {
        Ok(fullmove) if fullmove >= 1 => Ok(fullmove),
        _ => Err(FenParseError::InvalidFullmoveCounter(fen_fullmove.to_string()))
    }
}

impl Board {
    pub fn from_placement(placement: &str) -> Result<Board, FenParseError> {
        parse_placement(placement)
    }
}

impl State {
    /// Decodes a placement string; the remaining fields take their starting-position defaults.
    pub fn from_placement(placement: &str) -> Result<State, FenParseError> {
        Ok(State::from_board(parse_placement(placement)?))
    }

    /// Decodes a FEN record. The halfmove clock and fullmove number may be omitted.
    pub fn from_fen(fen: &str) -> Result<State, FenParseError> {
        let fen_parts: Vec<&str> = fen.split_ascii_whitespace().collect();
        let (fen_board, fen_side_to_move, fen_castle, fen_en_passant, fen_halfmove_clock, fen_fullmove) = match fen_parts[..] {
            [board, side, castle, en_passant] => (board, side, castle, en_passant, None, None),
            [board, side, castle, en_passant, halfmove] => (board, side, castle, en_passant, Some(halfmove), None),
            [board, side, castle, en_passant, halfmove, fullmove] => (board, side, castle, en_passant, Some(halfmove), Some(fullmove)),
            _ => return Err(FenParseError::InvalidFieldCount(fen_parts.len())),
        };

        let mut state = State::from_placement(fen_board)?;
        state.side_to_move = parse_side_to_move(fen_side_to_move)?;
        state.castling_rights = parse_castle(fen_castle)?;
        state.en_passant_target = parse_en_passant_target(fen_en_passant, state.side_to_move)?;
        if let Some(fen_halfmove_clock) = fen_halfmove_clock {
            state.halfmove_clock = parse_halfmove_clock(fen_halfmove_clock)?;
        }
        if let Some(fen_fullmove) = fen_fullmove {
            state.fullmove_number = parse_fullmove(fen_fullmove)?;
        }
        Ok(state)
    }
}

impl FromStr for State {
    type Err = FenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        State::from_fen(s)
    }
}
