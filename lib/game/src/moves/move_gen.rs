//! # move_gen.rs
//!
//! Implements pseudo-legal move generation per piece kind.
//!
//! This file contains the generators for pawns (single and double pushes,
//! diagonal captures), for the leapers (knight and king, fixed offset sets)
//! and for the sliders (bishop, rook and queen, ray casting until the edge or
//! the first occupied square). Moves produced here ignore whether the mover's
//! own king ends up in check; `legality.rs` filters them. Generation never
//! mutates the position.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 05/10/2026

use crate::{
    constants::*,
    representations::{
        board::{Position, Square},
        moves::CandidateMove,
        piece::{Piece, PieceKind},
    },
};

pub fn pseudo_legal_moves(piece: &Piece, position: &Position) -> Vec<CandidateMove> {
    let mut moves = Vec::with_capacity(28);

    match piece.kind() {
        PieceKind::Pawn => pawn_moves(piece, position, &mut moves),
        PieceKind::Knight => step_moves(piece, position, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::King => step_moves(piece, position, &KING_OFFSETS, &mut moves),
        PieceKind::Bishop => ray_moves(piece, position, &BISHOP_DIRECTIONS, &mut moves),
        PieceKind::Rook => ray_moves(piece, position, &ROOK_DIRECTIONS, &mut moves),
        PieceKind::Queen => ray_moves(piece, position, &QUEEN_DIRECTIONS, &mut moves),
    }

    moves
}

/// Classifies `to` for `piece`: `None` if a friendly piece blocks it,
/// otherwise whether landing there captures.
#[inline(always)]
fn landing(piece: &Piece, to: Square, position: &Position) -> Option<bool> {
    match position.piece_at(to) {
        None => Some(false),
        Some(occupant) if occupant.color != piece.color => Some(true),
        Some(_) => None,
    }
}

fn pawn_moves(piece: &Piece, position: &Position, moves: &mut Vec<CandidateMove>) {
    let from = piece.position;
    let direction = piece.color.pawn_direction();

    if let Some(one) = from.offset(direction, 0) {
        if position.is_empty(one) {
            moves.push(CandidateMove { from, to: one, is_capture: false });

            if from.rank() == piece.color.pawn_rank() {
                if let Some(two) = one.offset(direction, 0) {
                    if position.is_empty(two) {
                        moves.push(CandidateMove { from, to: two, is_capture: false });
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        let Some(to) = from.offset(direction, file_delta) else {
            continue;
        };

        if let Some(target) = position.piece_at(to) {
            if target.color != piece.color {                                    /* No en passant                      */
                moves.push(CandidateMove { from, to, is_capture: true });
            }
        }
    }
}

fn step_moves(
    piece: &Piece,
    position: &Position,
    offsets: &[(i8, i8)],
    moves: &mut Vec<CandidateMove>
) {
    let from = piece.position;

    for &(rank_delta, file_delta) in offsets {
        let Some(to) = from.offset(rank_delta, file_delta) else {
            continue;
        };

        if let Some(is_capture) = landing(piece, to, position) {
            moves.push(CandidateMove { from, to, is_capture });
        }
    }
}

fn ray_moves(
    piece: &Piece,
    position: &Position,
    directions: &[(i8, i8)],
    moves: &mut Vec<CandidateMove>
) {
    let from = piece.position;

    for &(rank_delta, file_delta) in directions {
        let mut current = from;

        while let Some(to) = current.offset(rank_delta, file_delta) {
            match landing(piece, to, position) {
                Some(false) => moves.push(CandidateMove { from, to, is_capture: false }),
                Some(true) => {
                    moves.push(CandidateMove { from, to, is_capture: true });
                    break;                                                      /* Stop after the first enemy         */
                }
                None => break,
            }
            current = to;
        }
    }
}
