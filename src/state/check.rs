//! Attack and check queries for the board and state structs

use crate::attacks::{multi_pawn_attacks, single_bishop_attacks, single_king_attacks, single_knight_attacks, single_rook_attacks};
use crate::state::{Board, State};
use crate::utils::{get_squares_from_mask_iter, Bitboard, Color, ColoredPiece, PieceType, Square};

impl Board {
    /// Returns a bitboard of every `by_color` piece attacking `square`.
    ///
    /// Each piece kind is probed backwards from the target: a pawn attacks `square` exactly
    /// when a pawn of the opposite color on `square` would attack the pawn, and likewise for
    /// the symmetric leapers and sliders.
    pub fn attackers_of(&self, square: Square, by_color: Color) -> Bitboard {
        let piece_mask = |piece_type| self.get_colored_piece_mask(ColoredPiece::new(by_color, piece_type));
        let occupied_mask = self.get_occupied_mask();
        let queens = piece_mask(PieceType::Queen);

        let mut attackers = multi_pawn_attacks(square.get_mask(), by_color.flip()) & piece_mask(PieceType::Pawn);
        attackers |= single_knight_attacks(square) & piece_mask(PieceType::Knight);
        attackers |= single_rook_attacks(square, occupied_mask) & (piece_mask(PieceType::Rook) | queens);
        attackers |= single_bishop_attacks(square, occupied_mask) & (piece_mask(PieceType::Bishop) | queens);
        attackers |= single_king_attacks(square) & piece_mask(PieceType::King);
        attackers
    }

    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        self.attackers_of(square, by_color) != 0
    }

    /// Whether any square in `mask` is attacked by `by_color`.
    pub fn is_mask_attacked(&self, mask: Bitboard, by_color: Color) -> bool {
        get_squares_from_mask_iter(mask).any(|square| self.is_square_attacked(square, by_color))
    }

    /// Returns the enemy pieces giving check to `color`'s king.
    ///
    /// Panics unless `color` has exactly one king.
    pub fn checkers(&self, color: Color) -> Bitboard {
        self.attackers_of(self.get_king_square(color), color.flip())
    }

    pub fn is_color_in_check(&self, color: Color) -> bool { // including by king
        self.checkers(color) != 0
    }
}

impl State {
    /// Whether the side to move is in check.
    pub fn is_in_check(&self) -> bool {
        self.board.is_color_in_check(self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn board_with(pieces: &[(ColoredPiece, Square)]) -> Board {
        let mut board = Board::blank();
        for &(colored_piece, square) in pieces {
            board.put_colored_piece_at(colored_piece, square);
        }
        board
    }

    #[test]
    fn test_rook_on_file_gives_check() {
        let mut board = board_with(&[
            (ColoredPiece::WhiteKing, Square::E1),
            (ColoredPiece::BlackRook, Square::E8),
            (ColoredPiece::BlackKing, Square::A8),
        ]);
        assert!(board.is_color_in_check(Color::White));
        assert_eq!(board.checkers(Color::White), Square::E8.get_mask());
        assert!(!board.is_color_in_check(Color::Black));

        // a black rook or queen on the file would give check itself
        let blockers = ColoredPiece::iter().filter(|colored_piece| !matches!(
            colored_piece,
            ColoredPiece::WhiteKing | ColoredPiece::BlackKing | ColoredPiece::BlackRook | ColoredPiece::BlackQueen
        ));
        for blocker in blockers {
            for rank in 1..7 {
                let interposed = Square::from_file_rank(4, rank).unwrap();
                let mut blocked = board;
                blocked.put_colored_piece_at(blocker, interposed);
                assert!(!blocked.is_color_in_check(Color::White), "{} on {} should block the check", blocker, interposed);
            }
        }

        board.clear_square(Square::E8);
        board.put_colored_piece_at(ColoredPiece::BlackQueen, Square::E8);
        assert!(board.is_color_in_check(Color::White));
    }

    #[test]
    fn test_sliders_only_check_along_their_lines() {
        let board = board_with(&[
            (ColoredPiece::WhiteKing, Square::E1),
            (ColoredPiece::BlackRook, Square::H4),
            (ColoredPiece::BlackBishop, Square::E5),
            (ColoredPiece::BlackKing, Square::A8),
        ]);
        assert!(!board.is_color_in_check(Color::White));

        let board = board_with(&[
            (ColoredPiece::WhiteKing, Square::E1),
            (ColoredPiece::BlackBishop, Square::H4),
            (ColoredPiece::BlackRook, Square::D5),
            (ColoredPiece::BlackKing, Square::A8),
        ]);
        assert_eq!(board.checkers(Color::White), Square::H4.get_mask());
    }

    #[test]
    fn test_pawn_checks_depend_on_direction() {
        let board = board_with(&[
            (ColoredPiece::WhiteKing, Square::E4),
            (ColoredPiece::BlackPawn, Square::D5),
            (ColoredPiece::BlackKing, Square::A8),
        ]);
        assert!(board.is_color_in_check(Color::White));

        let board = board_with(&[
            (ColoredPiece::WhiteKing, Square::E4),
            (ColoredPiece::BlackPawn, Square::D3),
            (ColoredPiece::BlackPawn, Square::E5),
            (ColoredPiece::BlackKing, Square::A8),
        ]);
        assert!(!board.is_color_in_check(Color::White));

        let board = board_with(&[
            (ColoredPiece::WhiteKing, Square::A1),
            (ColoredPiece::BlackKing, Square::E5),
            (ColoredPiece::WhitePawn, Square::F4),
        ]);
        assert!(board.is_color_in_check(Color::Black));
        assert!(!board.is_color_in_check(Color::White));
    }

    #[test]
    fn test_knight_and_king_checks() {
        let board = board_with(&[
            (ColoredPiece::WhiteKing, Square::E1),
            (ColoredPiece::BlackKnight, Square::F3),
            (ColoredPiece::BlackKing, Square::A8),
        ]);
        assert_eq!(board.checkers(Color::White), Square::F3.get_mask());

        let board = board_with(&[
            (ColoredPiece::WhiteKing, Square::E4),
            (ColoredPiece::BlackKing, Square::E5),
        ]);
        assert!(board.is_color_in_check(Color::White));
        assert!(board.is_color_in_check(Color::Black));
    }

    #[test]
    fn test_attackers_of_empty_square() {
        let board = Board::initial();
        assert_eq!(board.attackers_of(Square::F3, Color::White), Square::E2.get_mask() | Square::G2.get_mask() | Square::G1.get_mask());
        assert_eq!(board.attackers_of(Square::E4, Color::White), 0);
        assert!(board.is_square_attacked(Square::D6, Color::Black));
        assert!(!board.is_mask_attacked(Square::E4.get_mask() | Square::D5.get_mask(), Color::White));
        assert!(!State::initial().is_in_check());
    }

    #[test]
    #[should_panic(expected = "expected exactly one black king")]
    fn test_check_without_king_panics() {
        board_with(&[(ColoredPiece::WhiteKing, Square::E1)]).is_color_in_check(Color::Black);
    }

    fn to_chess_square(square: Square) -> chess::Square {
        unsafe { chess::Square::new(square.get_rank() * 8 + square.get_file()) }
    }

    #[test]
    fn test_checkers_match_chess_crate() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
            "4k3/8/8/8/8/3n4/8/4K3 w - - 0 1",
            "4k3/8/8/8/1b6/8/8/4K2R w K - 0 1",
            "r3k2r/8/8/8/4Q3/8/8/4K3 b kq - 0 1",
            "8/8/8/3k4/4P3/8/8/4K3 b - - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        ];
        for fen in fens {
            let state = State::from_fen(fen).unwrap();
            let reference = chess::Board::from_str(fen).unwrap();
            let checkers: Vec<chess::Square> = get_squares_from_mask_iter(state.board.checkers(state.side_to_move))
                .map(to_chess_square)
                .collect();
            let mut expected: Vec<chess::Square> = (*reference.checkers()).collect();
            let mut actual = checkers;
            expected.sort_by_key(|square| square.to_index());
            actual.sort_by_key(|square| square.to_index());
            assert_eq!(actual, expected, "checkers differ for {}", fen);
            assert_eq!(state.is_in_check(), reference.checkers().popcnt() > 0);
        }
    }
}
