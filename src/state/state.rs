use crate::state::{Board, CastlingRights};
use crate::utils::{Color, Square};

/// A position: piece placement plus the flags that decide which moves are available.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub struct State {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// The square a pawn skipped over with a double push on the previous move.
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u8,
    pub fullmove_number: u16,
}

impl State {
    pub const fn initial() -> State {
        State::from_board(Board::initial())
    }

    /// Wraps `board` with white to move, all castling rights and no en passant target.
    pub const fn from_board(board: Board) -> State {
        State {
            board,
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        State::initial()
    }
}
