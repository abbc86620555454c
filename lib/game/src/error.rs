//! # error.rs
//!
//! Defines the error taxonomy of the rules engine.
//!
//! Notation errors are produced while decoding a move token, move errors
//! while resolving and applying the decoded intent, and setup errors while
//! seeding a position. Every variant renders a human-readable reason so a
//! front-end can show it verbatim.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 04/10/2026

use thiserror::Error;

use crate::representations::{
    board::Square,
    piece::{Color, PieceKind},
};
use crate::setup::SetupKind;

/// A token that matches none of the notation rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Invalid move syntax '{token}': {reason}")]
    InvalidSyntax { token: String, reason: String },
}

/// Why a castle was refused, in the order the preconditions are checked.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleFailure {
    #[error("no king on the board")]
    MissingKing,

    #[error("no rook to castle with on that side")]
    MissingRook,

    #[error("king and rook are not on the same rank")]
    NotSameRank,

    #[error("square {0} between king and rook is occupied")]
    PathBlocked(Square),

    #[error("the king has already moved")]
    KingMoved,

    #[error("the rook has already moved")]
    RookMoved,

    #[error("the king is in check")]
    KingInCheck,

    #[error("the king would pass through or land on attacked square {0}")]
    SquareAttacked(Square),

    #[error("destination square {0} is occupied")]
    DestinationOccupied(Square),
}

/// Why a promotion specifier was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionFailure {
    #[error("only pawns can promote, not a {0}")]
    NotAPawn(PieceKind),

    #[error("the pawn has not reached its last rank")]
    NotOnLastRank,

    #[error("a pawn cannot promote to a {0}")]
    InvalidTarget(PieceKind),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error("Invalid move '{token}': no legal {side} move matches")]
    NoLegalCandidate { token: String, side: Color },

    #[error("Ambiguous move '{token}': {count} pieces can make it")]
    AmbiguousCandidate { token: String, count: usize },

    #[error("Invalid castling move for {side}: {reason}")]
    InvalidCastle { side: Color, reason: CastleFailure },

    #[error("Invalid pawn promotion: {reason}")]
    InvalidPromotion { reason: PromotionFailure },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("The {0} setup is not yet available")]
    Unavailable(SetupKind),
}

/// A setup or promotion-mode name that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {what} '{value}'")]
pub struct ParseKindError {
    pub what: &'static str,
    pub value: String,
}
