use std::error::Error;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::r#move::MoveFlag;
use crate::utils::{ColoredPiece, PieceType, Square, SquareParseError};

/// A proposed move. It is a plain value and does not touch any board until applied.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Move {
    pub src: Square,
    pub dst: Square,
    /// The piece being moved.
    pub piece: ColoredPiece,
    /// The kind of piece removed by this move, if any. For en passant this is the pawn
    /// beside the destination, not the (empty) destination itself.
    pub captured: Option<PieceType>,
    pub flag: MoveFlag,
    pub promotion: Option<PieceType>,
}

impl Move {
    /// Creates a quiet move with no capture, flag or promotion.
    pub const fn new(piece: ColoredPiece, src: Square, dst: Square) -> Move {
        Move {
            src,
            dst,
            piece,
            captured: None,
            flag: MoveFlag::NormalMove,
            promotion: None,
        }
    }

    pub const fn en_passant(piece: ColoredPiece, src: Square, dst: Square) -> Move {
        Move {
            captured: Some(PieceType::Pawn),
            flag: MoveFlag::EnPassant,
            ..Move::new(piece, src, dst)
        }
    }

    /// Creates a castling move, described by the king's source and destination squares.
    pub const fn castling(piece: ColoredPiece, src: Square, dst: Square) -> Move {
        Move {
            flag: MoveFlag::Castling,
            ..Move::new(piece, src, dst)
        }
    }

    pub const fn with_capture(self, captured: PieceType) -> Move {
        Move {
            captured: Some(captured),
            ..self
        }
    }

    pub const fn with_promotion(self, promotion: PieceType) -> Move {
        Move {
            promotion: Some(promotion),
            ..self
        }
    }

    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub const fn is_castling(&self) -> bool {
        matches!(self.flag, MoveFlag::Castling)
    }

    pub const fn is_en_passant(&self) -> bool {
        matches!(self.flag, MoveFlag::EnPassant)
    }

    /// Returns a readable representation of the move.
    pub fn readable(&self) -> String {
        let capture_str = match self.captured {
            Some(_) => "x",
            None => "-"
        };
        let promotion_str = match self.promotion {
            Some(promotion) => format!("={}", promotion.to_char()),
            None => "".to_string()
        };
        format!("{}{}{}{}{}{}", self.piece.to_char(), self.src, capture_str, self.dst, promotion_str, self.flag.to_readable())
    }

    /// Returns the UCI (Universal Chess Interface) representation of the move.
    pub fn uci(&self) -> String {
        let promotion_str = match self.promotion {
            Some(promotion) => promotion.to_char().to_ascii_lowercase().to_string(),
            None => "".to_string()
        };
        format!("{}{}{}", self.src, self.dst, promotion_str)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.readable())
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum MoveParseError {
    InvalidLength(String),
    InvalidSquare(SquareParseError),
    InvalidPromotion(char),
    EmptySource(Square),
}

impl Display for MoveParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveParseError::InvalidLength(text) => write!(f, "Expected 4 or 5 characters of move text, got {:?}", text),
            MoveParseError::InvalidSquare(error) => write!(f, "Invalid square in move text: {}", error),
            MoveParseError::InvalidPromotion(c) => write!(f, "Invalid promotion piece: {:?}", c),
            MoveParseError::EmptySource(square) => write!(f, "No piece on source square {}", square),
        }
    }
}

impl Error for MoveParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MoveParseError::InvalidSquare(error) => Some(error),
            _ => None
        }
    }
}

impl From<SquareParseError> for MoveParseError {
    fn from(error: SquareParseError) -> Self {
        MoveParseError::InvalidSquare(error)
    }
}
