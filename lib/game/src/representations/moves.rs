//! # moves.rs
//!
//! Defines the move-related value types passed between the parser, the
//! generator and the executor.
//!
//! `CandidateMove` is what move generation produces, `ParsedIntent` is what
//! the notation parser produces, and `AppliedMove` is what the executor
//! reports back once a move is on the board. None of these are persisted;
//! the game session only keeps the accepted notation tokens.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 05/10/2026

use std::{fmt, str::FromStr};

use crate::{
    constants::*,
    error::{MoveError, ParseKindError},
    representations::{
        board::Square,
        piece::{Color, PieceKind},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
    pub is_capture: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub fn king_file(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_KING_FILE,
            CastleSide::Queenside => QUEENSIDE_KING_FILE,
        }
    }

    pub fn rook_file(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_ROOK_FILE,
            CastleSide::Queenside => QUEENSIDE_ROOK_FILE,
        }
    }

    /// File delta pointing away from the king towards its rook.
    pub fn direction(self) -> i8 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }
}

/// Optional source constraints taken from the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disambiguation {
    pub file: Option<u8>,
    pub rank: Option<u8>,
}

impl Disambiguation {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn file(file: u8) -> Self {
        Self { file: Some(file), rank: None }
    }

    pub fn rank(rank: u8) -> Self {
        Self { file: None, rank: Some(rank) }
    }

    pub fn matches(&self, square: Square) -> bool {
        self.file.is_none_or(|file| file == square.file()) &&
        self.rank.is_none_or(|rank| rank == square.rank())
    }
}

/// A non-castling move as decoded from its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    pub side: Color,
    pub piece_kind: PieceKind,
    pub disambiguation: Disambiguation,
    pub destination: Square,
    pub is_capture: bool,
    pub promotion: Option<PieceKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedIntent {
    /// Destinations are resolved by the executor from the current king and
    /// rook squares.
    Castle { side: Color, castle: CastleSide },
    Move(MoveIntent),
}

/// What the executor did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub side: Color,
    pub piece_kind: PieceKind,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub castle: Option<CastleSide>,
    pub gives_check: bool,
    pub gives_checkmate: bool,
}

pub type MoveOutcome = Result<AppliedMove, MoveError>;

/// How a promotion specifier is sequenced against the move it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromotionMode {
    /// Move first, then promote: a bad specifier is reported after the pawn
    /// has already been relocated.
    #[default]
    Legacy,
    /// Validate the specifier before anything on the board changes.
    Strict,
}

impl FromStr for PromotionMode {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(PromotionMode::Legacy),
            "strict" => Ok(PromotionMode::Strict),
            _ => Err(ParseKindError {
                what: "promotion mode",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PromotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromotionMode::Legacy => write!(f, "legacy"),
            PromotionMode::Strict => write!(f, "strict"),
        }
    }
}
