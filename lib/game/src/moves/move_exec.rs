//! # move_exec.rs
//!
//! Implements applying a notation token to a position.
//!
//! This file contains the executor that sits on top of the parser and the
//! legality filter. A parsed move is resolved to the unique legal candidate
//! that matches its piece kind, source hint, destination and capture flag;
//! castling runs through its own ordered list of preconditions and moves king
//! and rook together. After a move lands the executor reports whether the
//! opponent is now in check or checkmated.
//!
//! Promotion has two sequencing modes. In `PromotionMode::Legacy` the pawn
//! is moved first and promoted afterwards, so an unacceptable promotion
//! specifier is reported as an error while the board already shows the pawn
//! on its new square. This legacy sequencing is the default.
//! `PromotionMode::Strict` validates the specifier first and leaves the
//! position untouched on failure.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 07/10/2026

use log::debug;

use crate::{
    error::{CastleFailure, MoveError},
    moves::{
        legality::{is_attacked, is_checkmate, is_in_check, legal_moves},
        move_parse::parse,
    },
    representations::{
        board::{Position, Square},
        moves::{
            AppliedMove, CandidateMove, CastleSide, MoveIntent, MoveOutcome,
            ParsedIntent, PromotionMode,
        },
        piece::{Color, Piece, PieceKind},
    },
};

/// Parses `token` for `side` and plays it on `position`.
///
/// # Arguments
///
/// * `token` - The move in notation
/// * `side` - The side playing the move
/// * `position` - The position to play it on, mutated on success
/// * `mode` - How a promotion specifier is sequenced against the move
///
/// # Returns
///
/// The applied move with check and checkmate flags for the opponent, or the
/// reason the move was refused. Apart from a failed legacy promotion, a
/// refused move leaves `position` as it was.
pub fn apply_move(
    token: &str,
    side: Color,
    position: &mut Position,
    mode: PromotionMode
) -> MoveOutcome {
    let applied = match parse(token, side)? {
        ParsedIntent::Castle { side, castle } => {
            let (king, rook) = check_castle(side, castle, position)
                .map_err(|reason| MoveError::InvalidCastle { side, reason })?;
            castle_pieces(king, rook, castle, position)
        }
        ParsedIntent::Move(intent) => {
            let (piece, mv) = resolve_candidate(token, &intent, position)?;
            play_candidate(&intent, piece, mv, position, mode)?
        }
    };

    Ok(with_check_flags(applied, position))
}

/// Collects every legal move that matches `intent`, paired with its piece.
pub fn find_candidates(
    intent: &MoveIntent,
    position: &Position
) -> Vec<(Piece, CandidateMove)> {
    let MoveIntent { destination, is_capture, .. } = *intent;

    position
        .pieces_of(intent.side)
        .filter(|piece| {
            piece.kind() == intent.piece_kind &&
            intent.disambiguation.matches(piece.position)
        })
        .flat_map(|piece| {
            legal_moves(&piece, position)
                .into_iter()
                .filter(move |mv| mv.to == destination && mv.is_capture == is_capture)
                .map(move |mv| (piece, mv))
        })
        .collect()
}

fn resolve_candidate(
    token: &str,
    intent: &MoveIntent,
    position: &Position
) -> Result<(Piece, CandidateMove), MoveError> {
    let candidates = find_candidates(intent, position);

    debug!(
        "{} candidate(s) for {} {} to {}",
        candidates.len(), intent.side, intent.piece_kind, intent.destination
    );

    match candidates.as_slice() {
        [single] => Ok(*single),
        [] => Err(MoveError::NoLegalCandidate {
            token: token.to_string(),
            side: intent.side,
        }),
        many => Err(MoveError::AmbiguousCandidate {
            token: token.to_string(),
            count: many.len(),
        }),
    }
}

fn play_candidate(
    intent: &MoveIntent,
    piece: Piece,
    mv: CandidateMove,
    position: &mut Position,
    mode: PromotionMode
) -> MoveOutcome {
    let invalid_promotion = |reason| MoveError::InvalidPromotion { reason };

    if mode == PromotionMode::Strict {
        if let Some(target) = intent.promotion {
            piece.check_promotion(target, mv.to).map_err(invalid_promotion)?;
        }
    }

    let captured = position.relocate(mv.from, mv.to).map(|piece| piece.kind());

    if let Some(target) = intent.promotion {
        if let Some(moved) = position.piece_at_mut(mv.to) {
            moved.promote(target).map_err(invalid_promotion)?;                 /* Legacy: the move already happened  */
        }
    }

    Ok(AppliedMove {
        side: piece.color,
        piece_kind: piece.kind(),
        from: mv.from,
        to: mv.to,
        captured,
        promotion: intent.promotion,
        castle: None,
        gives_check: false,
        gives_checkmate: false,
    })
}

fn with_check_flags(mut applied: AppliedMove, position: &Position) -> AppliedMove {
    let opponent = applied.side.opponent();

    applied.gives_check = is_in_check(opponent, position);
    applied.gives_checkmate = applied.gives_check && is_checkmate(opponent, position);
    applied
}

/// Scans `side`'s home rank outward from `king_file` for the first own rook.
fn find_castling_rook(
    side: Color,
    king_file: u8,
    castle: CastleSide,
    position: &Position
) -> Option<Piece> {
    let mut square = Square::new(side.home_rank(), king_file);

    while let Some(next) = square.offset(0, castle.direction()) {
        if let Some(piece) = position.piece_at(next) {
            if piece.is(PieceKind::Rook, side) {
                return Some(piece);
            }
        }
        square = next;
    }

    None
}

/// Squares on `rank` strictly between files `a` and `b`.
fn between(rank: u8, a: u8, b: u8) -> impl Iterator<Item = Square> {
    (a.min(b) + 1..a.max(b)).map(move |file| Square::new(rank, file))
}

/// Runs the castling preconditions in order and returns the king and rook
/// that would take part.
///
/// 1. king and castling rook exist
/// 2. both stand on the same rank
/// 3. every square strictly between them is empty
/// 4. neither has moved
/// 5. the king is not in check
/// 6. no square the king crosses, its destination included, is attacked
/// 7. the destinations and the rest of the span the pieces cover hold
///    nothing but the castling king and rook
pub fn check_castle(
    side: Color,
    castle: CastleSide,
    position: &Position
) -> Result<(Piece, Piece), CastleFailure> {
    let king = position
        .find_king(side)
        .and_then(|square| position.piece_at(square))
        .ok_or(CastleFailure::MissingKing)?;
    let rook = find_castling_rook(side, king.position.file(), castle, position)
        .ok_or(CastleFailure::MissingRook)?;

    let rank = king.position.rank();
    if rook.position.rank() != rank {
        return Err(CastleFailure::NotSameRank);
    }

    if let Some(blocked) = between(rank, king.position.file(), rook.position.file())
        .find(|&square| !position.is_empty(square))
    {
        return Err(CastleFailure::PathBlocked(blocked));
    }

    if king.has_moved {
        return Err(CastleFailure::KingMoved);
    }
    if rook.has_moved {
        return Err(CastleFailure::RookMoved);
    }

    if is_in_check(side, position) {
        return Err(CastleFailure::KingInCheck);
    }

    let king_file = king.position.file();
    let king_target = castle.king_file();
    let mut without_king = *position;
    without_king.remove(king.position);

    let transit = if king_target >= king_file {
        (king_file + 1..=king_target).collect::<Vec<_>>()
    } else {
        (king_target..king_file).rev().collect::<Vec<_>>()
    };

    if let Some(attacked) = transit
        .into_iter()
        .map(|file| Square::new(rank, file))
        .find(|&square| is_attacked(side, square, &without_king))
    {
        return Err(CastleFailure::SquareAttacked(attacked));
    }

    let files = [king_file, rook.position.file(), king_target, castle.rook_file()];
    let low = files.iter().copied().min().unwrap_or(king_file);
    let high = files.iter().copied().max().unwrap_or(king_file);

    if let Some(occupied) = (low..=high)
        .map(|file| Square::new(rank, file))
        .find(|&square| {
            square != king.position &&
            square != rook.position &&
            !position.is_empty(square)
        })
    {
        return Err(CastleFailure::DestinationOccupied(occupied));
    }

    Ok((king, rook))
}

/// Lifts both pieces before placing either, so overlapping source and
/// destination squares cannot clobber one another.
fn castle_pieces(
    mut king: Piece,
    mut rook: Piece,
    castle: CastleSide,
    position: &mut Position
) -> AppliedMove {
    let rank = king.position.rank();
    let from = king.position;
    let king_to = Square::new(rank, castle.king_file());
    let rook_to = Square::new(rank, castle.rook_file());

    position.remove(king.position);
    position.remove(rook.position);

    king.mark_moved();
    rook.mark_moved();
    position.place(king_to, king);
    position.place(rook_to, rook);

    AppliedMove {
        side: king.color,
        piece_kind: PieceKind::King,
        from,
        to: king_to,
        captured: None,
        promotion: None,
        castle: Some(castle),
        gives_check: false,
        gives_checkmate: false,
    }
}
