//! This module contains game state related code.

mod board;
mod castling;
mod state;
mod fen;
mod check;
mod legality;

pub use board::*;
pub use castling::*;
pub use state::*;
pub use fen::*;
pub use legality::*;
