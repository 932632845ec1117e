use serde::{Deserialize, Serialize};

/// Enum representing the special kinds of move that need more than a source and destination to
/// describe. Used in the Move struct.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum MoveFlag {
    NormalMove = 0,
    EnPassant = 1,
    Castling = 2
}

impl MoveFlag {
    /// Returns a readable representation of the move flag.
    pub const fn to_readable(&self) -> &str {
        match self {
            MoveFlag::NormalMove => "",
            MoveFlag::EnPassant => "[e.p.]",
            MoveFlag::Castling => "[castling]"
        }
    }
}
