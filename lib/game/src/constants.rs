//! # constants.rs
//!
//! Defines board-wide constants and movement tables.
//!
//! This file contains the board dimensions, file labels, home and pawn ranks
//! of both colors, the castling destination files, the fixed offset tables
//! for knights and kings and the ray directions of the sliding pieces. All
//! offsets are `(rank, file)` deltas on a board whose rank 0 is black's home
//! rank.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 04/10/2026

use crate::representations::piece::PieceKind;

pub const FILES: u8 = 8;
pub const RANKS: u8 = 8;

pub const RNG_SEED: u64 = 0xDEADBEEFCAFEBABE;

pub const A: u8 = 0;
pub const B: u8 = 1;
pub const C: u8 = 2;
pub const D: u8 = 3;
pub const E: u8 = 4;
pub const F: u8 = 5;
pub const G: u8 = 6;
pub const H: u8 = 7;

pub const WHITE_HOME_RANK: u8 = 7;
pub const BLACK_HOME_RANK: u8 = 0;
pub const WHITE_PAWN_RANK: u8 = 6;
pub const BLACK_PAWN_RANK: u8 = 1;

pub const KINGSIDE_KING_FILE: u8 = G;
pub const KINGSIDE_ROOK_FILE: u8 = F;
pub const QUEENSIDE_KING_FILE: u8 = C;
pub const QUEENSIDE_ROOK_FILE: u8 = D;

pub const STANDARD_BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [
    (-1, -1), (-1, 1), (1, -1), (1, 1)
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [
    (-1, 0), (1, 0), (0, -1), (0, 1)
];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = KING_OFFSETS;                      /* Same 8 rays, unbounded length      */
