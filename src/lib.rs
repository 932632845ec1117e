//! Bitboard attack generation, check detection and pseudo-legal move validation for chess.
//!
//! Squares are numbered from a8 (0) to h1 (63) and square `s` maps to bit `63 - s` of a
//! [`Bitboard`](utils::Bitboard), so a8 is the most significant bit.

pub mod utils;
pub mod attacks;
pub mod state;
pub mod r#move;
