//! # legality.rs
//!
//! Implements attack detection and the self-check filter.
//!
//! This file contains the queries that turn pseudo-legal moves into legal
//! ones: whether a square is attacked, whether a side is in check, which of a
//! piece's moves keep its own king safe, and whether a side is checkmated or
//! stalemated. A move is tried by copying the position and applying it to the
//! copy, so the caller's position is never touched.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 06/10/2026

use log::trace;

use crate::{
    moves::move_gen::pseudo_legal_moves,
    representations::{
        board::{Position, Square},
        moves::CandidateMove,
        piece::{Color, Piece, PieceKind},
    },
};

/// Checks whether any piece of `defender`'s opponent can reach `target`.
///
/// The target is treated as if a `defender` piece stood on it, so pawns count
/// as attacking both forward diagonals even when the square is empty and
/// never attack the square straight ahead of them. This is the capture
/// reach of the enemy pieces, not the full set of their pseudo-legal
/// destinations: a pawn push onto `target` does not count.
///
/// # Arguments
///
/// * `defender` - The side whose square is being tested
/// * `target` - The square to test
/// * `position` - The position to test it in
///
/// # Returns
///
/// `true` if at least one enemy piece attacks `target`.
pub fn is_attacked(defender: Color, target: Square, position: &Position) -> bool {
    let attacker = defender.opponent();
    let mut probe = *position;

    if probe.piece_at(target).is_none_or(|piece| piece.color != defender) {
        probe.place(target, Piece::new(PieceKind::Pawn, defender, target));
    }

    let attacked = probe.pieces_of(attacker).any(|piece| {
        pseudo_legal_moves(&piece, &probe)
            .iter()
            .any(|mv| mv.to == target && mv.is_capture)
    });
    attacked
}

/// A side without a king on the board is never in check.
pub fn is_in_check(color: Color, position: &Position) -> bool {
    position
        .find_king(color)
        .is_some_and(|king| is_attacked(color, king, position))
}

pub fn legal_moves(piece: &Piece, position: &Position) -> Vec<CandidateMove> {
    pseudo_legal_moves(piece, position)
        .into_iter()
        .filter(|mv| {
            let simulated = position.with_move(mv);
            let safe = !is_in_check(piece.color, &simulated);

            trace!(
                "Simulated {} {}{} -> {}",
                piece.color, mv.from, mv.to,
                if safe { "legal" } else { "leaves king in check" }
            );

            safe
        })
        .collect()
}

pub fn all_legal_moves(color: Color, position: &Position) -> Vec<CandidateMove> {
    position
        .pieces_of(color)
        .flat_map(|piece| legal_moves(&piece, position))
        .collect()
}

pub fn has_legal_move(color: Color, position: &Position) -> bool {
    position
        .pieces_of(color)
        .any(|piece| !legal_moves(&piece, position).is_empty())
}

pub fn is_checkmate(color: Color, position: &Position) -> bool {
    is_in_check(color, position) && !has_legal_move(color, position)
}

/// Not in check and nothing to move. Only reported, never adjudicated.
pub fn is_stalemate(color: Color, position: &Position) -> bool {
    position.find_king(color).is_some() &&
    !is_in_check(color, position) &&
    !has_legal_move(color, position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::timeout;
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    use crate::constants::RNG_SEED;

    fn square(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn position_with(pieces: &[(PieceKind, Color, &str)]) -> Position {
        let mut position = Position::empty();
        for &(kind, color, name) in pieces {
            position.place(square(name), Piece::new(kind, color, square(name)));
        }
        position
    }

    #[test]
    fn pawns_attack_diagonally_not_forward() {
        let position = position_with(&[(PieceKind::Pawn, Color::Black, "e5")]);

        assert!(is_attacked(Color::White, square("d4"), &position));
        assert!(is_attacked(Color::White, square("f4"), &position));
        assert!(!is_attacked(Color::White, square("e4"), &position));
    }

    #[test]
    fn sliders_are_blocked_by_pieces() {
        let position = position_with(&[
            (PieceKind::Rook, Color::Black, "a8"),
            (PieceKind::Knight, Color::White, "a4"),
        ]);

        assert!(is_attacked(Color::White, square("a5"), &position));
        assert!(is_attacked(Color::White, square("a4"), &position));
        assert!(!is_attacked(Color::White, square("a3"), &position));
    }

    #[test]
    fn no_king_means_no_check() {
        let position = position_with(&[(PieceKind::Queen, Color::Black, "d8")]);

        assert!(!is_in_check(Color::White, &position));
        assert!(!is_checkmate(Color::White, &position));
        assert!(!is_stalemate(Color::White, &position));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let position = position_with(&[
            (PieceKind::King, Color::White, "e1"),
            (PieceKind::Bishop, Color::White, "e2"),
            (PieceKind::Rook, Color::Black, "e8"),
        ]);
        let bishop = position.piece_at(square("e2")).unwrap();

        assert!(!pseudo_legal_moves(&bishop, &position).is_empty());
        assert!(legal_moves(&bishop, &position).is_empty());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let position = position_with(&[
            (PieceKind::King, Color::White, "e1"),
            (PieceKind::Rook, Color::Black, "d8"),
            (PieceKind::Rook, Color::Black, "f8"),
        ]);
        let king = position.piece_at(square("e1")).unwrap();

        let mut destinations: Vec<String> = legal_moves(&king, &position)
            .iter()
            .map(|mv| mv.to.to_string())
            .collect();
        destinations.sort();

        assert_eq!(destinations, vec!["e2"]);
    }

    #[test]
    fn capturing_the_checker_is_legal() {
        let position = position_with(&[
            (PieceKind::King, Color::White, "h1"),
            (PieceKind::Rook, Color::White, "a2"),
            (PieceKind::Queen, Color::Black, "h2"),
            (PieceKind::King, Color::Black, "a8"),
        ]);

        assert!(is_in_check(Color::White, &position));
        assert!(!is_checkmate(Color::White, &position));

        let rook = position.piece_at(square("a2")).unwrap();
        let moves = legal_moves(&rook, &position);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, square("h2"));
        assert!(moves[0].is_capture);
    }

    #[test]
    fn back_rank_mate_is_detected() {
        let position = position_with(&[
            (PieceKind::King, Color::Black, "g8"),
            (PieceKind::Pawn, Color::Black, "f7"),
            (PieceKind::Pawn, Color::Black, "g7"),
            (PieceKind::Pawn, Color::Black, "h7"),
            (PieceKind::Rook, Color::White, "a8"),
            (PieceKind::King, Color::White, "g1"),
        ]);

        assert!(is_checkmate(Color::Black, &position));
        assert!(!is_checkmate(Color::White, &position));
    }

    #[test]
    fn cornered_king_is_stalemated() {
        let position = position_with(&[
            (PieceKind::King, Color::Black, "h8"),
            (PieceKind::Queen, Color::White, "g6"),
            (PieceKind::King, Color::White, "f7"),
        ]);

        assert!(!is_in_check(Color::Black, &position));
        assert!(is_stalemate(Color::Black, &position));
        assert!(!is_checkmate(Color::Black, &position));
    }

    #[test]
    fn legal_moves_never_leave_own_king_attacked() {
        let position = position_with(&[
            (PieceKind::King, Color::White, "e1"),
            (PieceKind::Knight, Color::White, "d2"),
            (PieceKind::Bishop, Color::Black, "b4"),
            (PieceKind::Rook, Color::Black, "e8"),
            (PieceKind::King, Color::Black, "h8"),
        ]);

        for mv in all_legal_moves(Color::White, &position) {
            let after = position.with_move(&mv);
            assert!(!is_in_check(Color::White, &after), "{}{}", mv.from, mv.to);
        }
    }

    #[test]
    #[timeout(20000)]
    fn random_games_never_expose_the_mover() {
        let mut rng = StdRng::seed_from_u64(RNG_SEED);

        for _ in 0..20 {
            let mut position = Position::standard();
            let mut side = Color::White;

            for _ in 0..60 {
                let moves = all_legal_moves(side, &position);
                let Some(mv) = moves.choose(&mut rng) else {
                    break;
                };

                let after = position.with_move(mv);
                assert!(!is_in_check(side, &after));
                assert!(after.find_king(side).is_some());

                position = after;
                side = side.opponent();
            }
        }
    }
}
