//! This module contains the implementation of the `Move` struct and its associated functions.

mod move_flag;
mod r#move;

pub use r#move::*;
pub use move_flag::*;
