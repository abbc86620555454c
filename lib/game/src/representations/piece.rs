//! # piece.rs
//!
//! Defines piece representation and properties.
//!
//! This file contains the `Color` and `PieceKind` enums and the `Piece`
//! struct, which couples a kind and color with the square the piece stands on
//! and whether it has ever moved. The kind of a piece is private: promotion
//! through `Piece::promote` is the only way to change it after construction.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 04/10/2026

use std::fmt;

use crate::{
    constants::*,
    error::PromotionFailure,
    representations::board::Square,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single pawn step. White marches towards rank 0.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn home_rank(self) -> u8 {
        match self {
            Color::White => WHITE_HOME_RANK,
            Color::Black => BLACK_HOME_RANK,
        }
    }

    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => WHITE_PAWN_RANK,
            Color::Black => BLACK_PAWN_RANK,
        }
    }

    /// The rank farthest from home, where pawns promote.
    pub fn last_rank(self) -> u8 {
        self.opponent().home_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Maps an uppercase notation letter to its kind.
    pub fn from_letter(letter: char) -> Option<PieceKind> {
        match letter {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Board symbol: uppercase for white, lowercase for black.
    pub fn symbol(self, color: Color) -> char {
        match color {
            Color::White => self.letter(),
            Color::Black => self.letter().to_ascii_lowercase(),
        }
    }

    pub fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook |
            PieceKind::Bishop | PieceKind::Knight
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A piece standing on the board.
///
/// `position` always mirrors the grid index the piece is stored under; only
/// `Position::place` writes it. `has_moved` gates castling and is never
/// cleared once set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
    pub position: Square,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, position: Square) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
            position,
        }
    }

    #[inline(always)]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline(always)]
    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    pub fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }

    pub fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    /// Checks whether this piece could promote to `target` on `square`
    /// without touching it.
    pub fn check_promotion(
        &self,
        target: PieceKind,
        square: Square
    ) -> Result<(), PromotionFailure> {
        if self.kind != PieceKind::Pawn {
            return Err(PromotionFailure::NotAPawn(self.kind));
        }

        if square.rank() != self.color.last_rank() {
            return Err(PromotionFailure::NotOnLastRank);
        }

        if !target.is_promotion_target() {
            return Err(PromotionFailure::InvalidTarget(target));
        }

        Ok(())
    }

    /// The single guarded mutator of `kind`.
    pub fn promote(&mut self, target: PieceKind) -> Result<(), PromotionFailure> {
        self.check_promotion(target, self.position)?;
        self.kind = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn white_pawn_promotes_on_eighth_rank() {
        let mut pawn = Piece::new(PieceKind::Pawn, Color::White, square("d8"));

        assert_eq!(pawn.promote(PieceKind::Queen), Ok(()));
        assert_eq!(pawn.kind(), PieceKind::Queen);
    }

    #[test]
    fn black_pawn_promotes_on_first_rank() {
        let mut pawn = Piece::new(PieceKind::Pawn, Color::Black, square("a1"));

        assert_eq!(pawn.promote(PieceKind::Knight), Ok(()));
        assert_eq!(pawn.kind(), PieceKind::Knight);
    }

    #[test]
    fn promotion_is_refused_short_of_last_rank() {
        let mut pawn = Piece::new(PieceKind::Pawn, Color::White, square("e7"));

        assert_eq!(
            pawn.promote(PieceKind::Queen),
            Err(PromotionFailure::NotOnLastRank)
        );
        assert_eq!(pawn.kind(), PieceKind::Pawn);
    }

    #[test]
    fn promotion_to_king_or_pawn_is_refused() {
        let mut pawn = Piece::new(PieceKind::Pawn, Color::White, square("e8"));

        assert_eq!(
            pawn.promote(PieceKind::King),
            Err(PromotionFailure::InvalidTarget(PieceKind::King))
        );
        assert_eq!(
            pawn.promote(PieceKind::Pawn),
            Err(PromotionFailure::InvalidTarget(PieceKind::Pawn))
        );
        assert_eq!(pawn.kind(), PieceKind::Pawn);
    }

    #[test]
    fn only_pawns_promote() {
        let mut rook = Piece::new(PieceKind::Rook, Color::White, square("a8"));

        assert_eq!(
            rook.promote(PieceKind::Queen),
            Err(PromotionFailure::NotAPawn(PieceKind::Rook))
        );
    }

    #[test]
    fn notation_letters_are_uppercase_only() {
        assert_eq!(PieceKind::from_letter('N'), Some(PieceKind::Knight));
        assert_eq!(PieceKind::from_letter('n'), None);
        assert_eq!(PieceKind::from_letter('X'), None);
        assert_eq!(PieceKind::Knight.symbol(Color::Black), 'n');
        assert_eq!(PieceKind::Queen.symbol(Color::White), 'Q');
    }
}
