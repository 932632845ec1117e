//! Pseudo-legal move validation for the state struct

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::attacks::{multi_pawn_attacks, multi_pawn_moves, single_king_attacks, single_knight_attacks, single_sliding_attacks};
use crate::r#move::{Move, MoveFlag, MoveParseError};
use crate::state::{CastlingGeometry, CastlingSide, State};
use crate::utils::masks::{RANK_1, RANK_3, RANK_6, RANK_8};
use crate::utils::{Bitboard, Color, ColoredPiece, PieceType, SlidingPieceType, Square};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IllegalMoveReason {
    NotSideToMove,
    PieceNotOnSource,
    SelfCapture,
    CaptureMismatch,
    Unreachable,
    NotAnEnPassantMove,
    NoEnPassantTarget,
    MissingPromotion,
    InvalidPromotionPiece,
    UnexpectedPromotion,
    NotACastlingMove,
    NoCastlingRights,
    CastlingPiecesMissing,
    CastlingPathBlocked,
    CastlingOutOfCheck,
    CastlingThroughAttack,
}

impl Display for IllegalMoveReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            IllegalMoveReason::NotSideToMove => "the moving piece does not belong to the side to move",
            IllegalMoveReason::PieceNotOnSource => "the moving piece is not on the source square",
            IllegalMoveReason::SelfCapture => "the destination is occupied by a piece of the same color",
            IllegalMoveReason::CaptureMismatch => "the captured piece does not match the board",
            IllegalMoveReason::Unreachable => "the piece cannot reach the destination",
            IllegalMoveReason::NotAnEnPassantMove => "only a pawn can capture en passant",
            IllegalMoveReason::NoEnPassantTarget => "en passant is not available on the destination",
            IllegalMoveReason::MissingPromotion => "a pawn reaching the last rank must promote",
            IllegalMoveReason::InvalidPromotionPiece => "pawns promote only to a knight, bishop, rook or queen",
            IllegalMoveReason::UnexpectedPromotion => "only a pawn reaching the last rank may promote",
            IllegalMoveReason::NotACastlingMove => "the move does not describe castling",
            IllegalMoveReason::NoCastlingRights => "castling rights have been lost on this side",
            IllegalMoveReason::CastlingPiecesMissing => "the king or rook is not on its home square",
            IllegalMoveReason::CastlingPathBlocked => "the squares between king and rook are not empty",
            IllegalMoveReason::CastlingOutOfCheck => "the king cannot castle out of check",
            IllegalMoveReason::CastlingThroughAttack => "the king or rook would cross or land on an attacked square",
        };
        write!(f, "{}", description)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnsupportedMoveReason {
    /// Castling written as the king capturing its own rook.
    RookSquareCastling,
}

impl Display for UnsupportedMoveReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UnsupportedMoveReason::RookSquareCastling => write!(f, "castling encoded as king-takes-rook is not supported"),
        }
    }
}

/// The verdict on a proposed move.
///
/// `Unsupported` separates notation this crate does not interpret from moves that break a rule.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Legality {
    Legal,
    Illegal(IllegalMoveReason),
    Unsupported(UnsupportedMoveReason),
}

impl Legality {
    pub const fn is_legal(&self) -> bool {
        matches!(self, Legality::Legal)
    }
}

impl Display for Legality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Legality::Legal => write!(f, "legal"),
            Legality::Illegal(reason) => write!(f, "illegal: {}", reason),
            Legality::Unsupported(reason) => write!(f, "unsupported: {}", reason),
        }
    }
}

const fn last_rank(color: Color) -> Bitboard {
    match color {
        Color::White => RANK_8,
        Color::Black => RANK_1
    }
}

impl State {
    fn pawn_destinations(&self, src: Square, color: Color) -> Bitboard {
        let empty_mask = !self.board.get_occupied_mask();
        let double_push_rank = match color {
            Color::White => RANK_3,
            Color::Black => RANK_6
        };
        let single_pushes = multi_pawn_moves(src.get_mask(), color) & empty_mask;
        let double_pushes = multi_pawn_moves(single_pushes & double_push_rank, color) & empty_mask;
        let captures = multi_pawn_attacks(src.get_mask(), color) & self.board.get_color_mask(color.flip());
        single_pushes | double_pushes | captures
    }

    /// Returns the pseudo-legal destinations of the piece on `square`, or an empty bitboard if
    /// the square is empty.
    ///
    /// Castling and en passant are not included; they are validated separately by [`State::check_move`].
    pub fn destinations(&self, square: Square) -> Bitboard {
        let colored_piece = match self.board.get_colored_piece_at(square) {
            Some(colored_piece) => colored_piece,
            None => return 0
        };
        let color = colored_piece.get_color();
        let own_mask = self.board.get_color_mask(color);
        let occupied_mask = self.board.get_occupied_mask();

        let reachable = match colored_piece.get_piece_type() {
            PieceType::Pawn => self.pawn_destinations(square, color),
            PieceType::Knight => single_knight_attacks(square),
            PieceType::Bishop => single_sliding_attacks(SlidingPieceType::Bishop, square, occupied_mask),
            PieceType::Rook => single_sliding_attacks(SlidingPieceType::Rook, square, occupied_mask),
            PieceType::Queen => single_sliding_attacks(SlidingPieceType::Queen, square, occupied_mask),
            PieceType::King => single_king_attacks(square),
        };
        reachable & !own_mask
    }

    /// Checks whether the side to move may castle on `side`.
    ///
    /// The king may not start in check, and no square the king or rook crosses or lands on may
    /// be attacked. On the queen side this includes b1/b8.
    pub fn castling_eligibility(&self, side: CastlingSide) -> Result<(), IllegalMoveReason> {
        let color = self.side_to_move;
        let geometry = CastlingGeometry::of(color, side);

        if !self.castling_rights.has(color, side) {
            return Err(IllegalMoveReason::NoCastlingRights);
        }
        if self.board.get_colored_piece_at(geometry.king_src) != Some(ColoredPiece::new(color, PieceType::King)) ||
            self.board.get_colored_piece_at(geometry.rook_src) != Some(ColoredPiece::new(color, PieceType::Rook)) {
            return Err(IllegalMoveReason::CastlingPiecesMissing);
        }
        if self.board.get_occupied_mask() & geometry.between_mask != 0 {
            return Err(IllegalMoveReason::CastlingPathBlocked);
        }
        if self.board.is_square_attacked(geometry.king_src, color.flip()) {
            return Err(IllegalMoveReason::CastlingOutOfCheck);
        }
        if self.board.is_mask_attacked(geometry.safety_mask(), color.flip()) {
            return Err(IllegalMoveReason::CastlingThroughAttack);
        }
        Ok(())
    }

    pub fn can_castle(&self, side: CastlingSide) -> bool {
        self.castling_eligibility(side).is_ok()
    }

    fn check_castling(&self, mv: &Move) -> Legality {
        let color = mv.piece.get_color();
        if mv.piece.get_piece_type() != PieceType::King || mv.captured.is_some() || mv.promotion.is_some() {
            return Legality::Illegal(IllegalMoveReason::NotACastlingMove);
        }
        for side in CastlingSide::iter() {
            let geometry = CastlingGeometry::of(color, side);
            if mv.src != geometry.king_src {
                continue;
            }
            if mv.dst == geometry.king_dst {
                return match self.castling_eligibility(side) {
                    Ok(()) => Legality::Legal,
                    Err(reason) => Legality::Illegal(reason)
                };
            }
            if mv.dst == geometry.rook_src {
                return Legality::Unsupported(UnsupportedMoveReason::RookSquareCastling);
            }
        }
        Legality::Illegal(IllegalMoveReason::NotACastlingMove)
    }

    fn check_en_passant(&self, mv: &Move) -> Legality {
        let color = mv.piece.get_color();
        if mv.piece.get_piece_type() != PieceType::Pawn {
            return Legality::Illegal(IllegalMoveReason::NotAnEnPassantMove);
        }
        if self.en_passant_target != Some(mv.dst) {
            return Legality::Illegal(IllegalMoveReason::NoEnPassantTarget);
        }
        if mv.captured != Some(PieceType::Pawn) {
            return Legality::Illegal(IllegalMoveReason::CaptureMismatch);
        }
        if mv.promotion.is_some() {
            return Legality::Illegal(IllegalMoveReason::UnexpectedPromotion);
        }
        if multi_pawn_attacks(mv.src.get_mask(), color) & mv.dst.get_mask() == 0 {
            return Legality::Illegal(IllegalMoveReason::Unreachable);
        }
        // the double-pushed pawn stands one step behind the target, seen from the capturer
        let victim_mask = multi_pawn_moves(mv.dst.get_mask(), color.flip());
        let enemy_pawns = self.board.get_colored_piece_mask(ColoredPiece::new(color.flip(), PieceType::Pawn));
        if !self.board.is_empty_at(mv.dst) || victim_mask & enemy_pawns == 0 {
            return Legality::Illegal(IllegalMoveReason::NoEnPassantTarget);
        }
        Legality::Legal
    }

    fn check_promotion(&self, mv: &Move) -> Result<(), IllegalMoveReason> {
        let reaches_last_rank = mv.piece.get_piece_type() == PieceType::Pawn &&
            mv.dst.get_mask() & last_rank(mv.piece.get_color()) != 0;
        match (reaches_last_rank, mv.promotion) {
            (true, None) => Err(IllegalMoveReason::MissingPromotion),
            (true, Some(promotion)) if !promotion.is_promotion_target() => Err(IllegalMoveReason::InvalidPromotionPiece),
            (false, Some(_)) => Err(IllegalMoveReason::UnexpectedPromotion),
            _ => Ok(())
        }
    }

    /// Validates `mv` against the movement rules of its piece and the current occupancy.
    ///
    /// This does not test whether the mover's own king is left in check.
    pub fn check_move(&self, mv: &Move) -> Legality {
        if mv.piece.get_color() != self.side_to_move {
            return Legality::Illegal(IllegalMoveReason::NotSideToMove);
        }
        if self.board.get_colored_piece_at(mv.src) != Some(mv.piece) {
            return Legality::Illegal(IllegalMoveReason::PieceNotOnSource);
        }

        match mv.flag {
            MoveFlag::Castling => return self.check_castling(mv),
            MoveFlag::EnPassant => return self.check_en_passant(mv),
            MoveFlag::NormalMove => {}
        }

        let target = self.board.get_colored_piece_at(mv.dst);
        if target.map(|colored_piece| colored_piece.get_color()) == Some(self.side_to_move) {
            return Legality::Illegal(IllegalMoveReason::SelfCapture);
        }
        if mv.captured != target.map(|colored_piece| colored_piece.get_piece_type()) {
            return Legality::Illegal(IllegalMoveReason::CaptureMismatch);
        }
        if let Err(reason) = self.check_promotion(mv) {
            return Legality::Illegal(reason);
        }
        if self.destinations(mv.src) & mv.dst.get_mask() == 0 {
            return Legality::Illegal(IllegalMoveReason::Unreachable);
        }
        Legality::Legal
    }

    pub fn is_pseudolegal(&self, mv: &Move) -> bool {
        self.check_move(mv).is_legal()
    }

    /// Builds a [`Move`] from long algebraic text such as `e2e4` or `e7e8q`, reading the
    /// moving piece, capture and special-move flag off the board.
    ///
    /// The result is not validated; pass it to [`State::check_move`] for that.
    pub fn move_from_uci(&self, text: &str) -> Result<Move, MoveParseError> {
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(MoveParseError::InvalidLength(text.to_string()));
        }
        let src = Square::from_str(&text[0..2])?;
        let dst = Square::from_str(&text[2..4])?;
        let promotion = match text[4..].chars().next() {
            Some(c) => Some(PieceType::from_char(c).ok_or(MoveParseError::InvalidPromotion(c))?),
            None => None
        };
        let piece = self.board.get_colored_piece_at(src).ok_or(MoveParseError::EmptySource(src))?;
        let color = piece.get_color();
        let target = self.board.get_colored_piece_at(dst);

        let mut mv = Move::new(piece, src, dst);
        mv.promotion = promotion;

        match piece.get_piece_type() {
            PieceType::Pawn if self.en_passant_target == Some(dst) && src.get_file() != dst.get_file() && target.is_none() => {
                mv.flag = MoveFlag::EnPassant;
                mv.captured = Some(PieceType::Pawn);
                return Ok(mv);
            },
            PieceType::King => {
                let is_castling = CastlingSide::iter().any(|side| {
                    let geometry = CastlingGeometry::of(color, side);
                    src == geometry.king_src && (
                        dst == geometry.king_dst ||
                            (dst == geometry.rook_src && target == Some(ColoredPiece::new(color, PieceType::Rook)))
                    )
                });
                if is_castling {
                    mv.flag = MoveFlag::Castling;
                    return Ok(mv);
                }
            },
            _ => {}
        }

        mv.captured = target
            .filter(|colored_piece| colored_piece.get_color() != color)
            .map(|colored_piece| colored_piece.get_piece_type());
        Ok(mv)
    }
}
