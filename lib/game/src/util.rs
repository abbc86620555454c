//! # util.rs
//!
//! Provides consistency checks for positions.
//!
//! This file contains `verify_position`, which asserts the structural
//! invariants of a `Position`: every stored piece knows the square it is
//! stored under and neither side has more than one king. It is run by the
//! game session after each applied move in debug builds.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 08/10/2026

use crate::representations::{
    board::{Position, Square},
    piece::{Color, PieceKind},
};

pub fn verify_position(position: &Position) {
    for square in Square::all() {
        if let Some(piece) = position.piece_at(square) {
            assert_eq!(
                piece.position, square,
                "Piece {} stored on {} believes it stands on {}",
                piece.symbol(), square, piece.position
            );
        }
    }

    for color in [Color::White, Color::Black] {
        let kings = position
            .pieces_of(color)
            .filter(|piece| piece.kind() == PieceKind::King)
            .count();

        assert!(kings <= 1, "{color} has {kings} kings on the board");
    }
}
