//! # move_io.rs
//!
//! Implements coordinate formatting of applied moves.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 10/10/2026

use game::AppliedMove;

use crate::board_io::format_square;

/// Formats `mv` as source and destination squares, e.g. `e2e4`, with a
/// lowercase promotion letter appended when the pawn promoted (`e7e8q`).
pub fn format_move(mv: &AppliedMove) -> String {
    let promotion = mv
        .promotion
        .map(|kind| kind.letter().to_ascii_lowercase().to_string())
        .unwrap_or_default();

    format!("{}{}{}", format_square(mv.from), format_square(mv.to), promotion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::Game;

    #[test]
    fn pawn_push_and_castle() {
        let mut game = Game::standard();

        let push = game.play("e4").unwrap();
        assert_eq!(format_move(&push), "e2e4");

        for token in ["e5", "Nf3", "Nc6", "Bc4", "Bc5"] {
            game.play(token).unwrap();
        }
        let castle = game.play("O-O").unwrap();
        assert_eq!(format_move(&castle), "e1g1");
    }
}
