//! Fixed bitboard masks. Bit 63 is a8, bit 0 is h1.

use crate::utils::Bitboard;

pub const FILE_A: Bitboard = 0x8080808080808080;
pub const FILE_B: Bitboard = 0x4040404040404040;
pub const FILE_C: Bitboard = 0x2020202020202020;
pub const FILE_D: Bitboard = 0x1010101010101010;
pub const FILE_E: Bitboard = 0x0808080808080808;
pub const FILE_F: Bitboard = 0x0404040404040404;
pub const FILE_G: Bitboard = 0x0202020202020202;
pub const FILE_H: Bitboard = 0x0101010101010101;

pub const FILES_AB: Bitboard = FILE_A | FILE_B;
pub const FILES_GH: Bitboard = FILE_G | FILE_H;

pub const FILES: [Bitboard; 8] = [FILE_A, FILE_B, FILE_C, FILE_D, FILE_E, FILE_F, FILE_G, FILE_H];

pub const RANK_1: Bitboard = 0x00000000000000FF;
pub const RANK_2: Bitboard = 0x000000000000FF00;
pub const RANK_3: Bitboard = 0x0000000000FF0000;
pub const RANK_4: Bitboard = 0x00000000FF000000;
pub const RANK_5: Bitboard = 0x000000FF00000000;
pub const RANK_6: Bitboard = 0x0000FF0000000000;
pub const RANK_7: Bitboard = 0x00FF000000000000;
pub const RANK_8: Bitboard = 0xFF00000000000000;

pub const RANKS: [Bitboard; 8] = [RANK_1, RANK_2, RANK_3, RANK_4, RANK_5, RANK_6, RANK_7, RANK_8];

pub const STARTING_WP: Bitboard = RANK_2;
pub const STARTING_WN: Bitboard = 0x0000000000000042;
pub const STARTING_WB: Bitboard = 0x0000000000000024;
pub const STARTING_WR: Bitboard = 0x0000000000000081;
pub const STARTING_WQ: Bitboard = 0x0000000000000010;
pub const STARTING_WK: Bitboard = 0x0000000000000008;

pub const STARTING_BP: Bitboard = RANK_7;
pub const STARTING_BN: Bitboard = STARTING_WN << 56;
pub const STARTING_BB: Bitboard = STARTING_WB << 56;
pub const STARTING_BR: Bitboard = STARTING_WR << 56;
pub const STARTING_BQ: Bitboard = STARTING_WQ << 56;
pub const STARTING_BK: Bitboard = STARTING_WK << 56;

pub const STARTING_WHITE: Bitboard = RANK_1 | RANK_2;
pub const STARTING_BLACK: Bitboard = RANK_7 | RANK_8;
pub const STARTING_ALL: Bitboard = STARTING_WHITE | STARTING_BLACK;
