//! # move_parse.rs
//!
//! Implements decoding of move tokens into structured intents.
//!
//! This file contains the notation parser. A token is decoded in a fixed
//! priority order: castling, then check/mate annotations (stripped and
//! ignored), then a promotion suffix, then the capture marker, and finally
//! the square part, which is tried as a pawn push, a pawn capture and a piece
//! move in that order. The parser only looks at the token and the side that
//! plays it; whether the move is possible on the board is decided by the
//! executor.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 06/10/2026

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::{
    error::NotationError,
    representations::{
        board::{file_from_char, rank_from_char, Square},
        moves::{CastleSide, Disambiguation, MoveIntent, ParsedIntent},
        piece::{Color, PieceKind},
    },
};

lazy_static! {
    static ref ANNOTATION_PATTERN: Regex = Regex::new(
        r"[+#]+$"
    ).unwrap();
    static ref CASTLE_PATTERN: Regex = Regex::new(
        r"^O-O(-O)?$"
    ).unwrap();
    static ref PAWN_PUSH_PATTERN: Regex = Regex::new(
        r"^([a-hA-H])([1-8])$"
    ).unwrap();
    static ref PAWN_CAPTURE_PATTERN: Regex = Regex::new(
        r"^([a-h1-8])([a-hA-H])([1-8])$"
    ).unwrap();
    static ref PIECE_PATTERN: Regex = Regex::new(
        r"^([KQRBN])([a-hA-H1-8])?([a-hA-H])([1-8])$"
    ).unwrap();
}

fn invalid(token: &str, reason: impl Into<String>) -> NotationError {
    NotationError::InvalidSyntax {
        token: token.to_string(),
        reason: reason.into(),
    }
}

/// Decodes `token` as a move played by `side`.
///
/// # Arguments
///
/// * `token` - The move in notation, e.g. `"Nbd7"`, `"exd8=Q+"` or `"O-O"`
/// * `side` - The side playing the move
///
/// # Returns
///
/// A castle or move intent, or `NotationError::InvalidSyntax` describing the
/// first rule the token broke.
///
/// # Examples
///
/// ```
/// use game::{Color, PieceKind};
/// use game::moves::move_parse::parse;
/// use game::representations::moves::ParsedIntent;
///
/// let ParsedIntent::Move(intent) = parse("Nbd7", Color::Black).unwrap() else {
///     panic!("expected a piece move");
/// };
/// assert_eq!(intent.piece_kind, PieceKind::Knight);
/// assert_eq!(intent.destination.to_string(), "d7");
/// ```
pub fn parse(token: &str, side: Color) -> Result<ParsedIntent, NotationError> {
    let trimmed = token.trim();

    if trimmed.is_empty() {
        return Err(invalid(token, "empty move"));
    }

    let body = ANNOTATION_PATTERN.replace(trimmed, "");

    if CASTLE_PATTERN.is_match(&body) {
        let castle = if body.len() == 5 {
            CastleSide::Queenside
        } else {
            CastleSide::Kingside
        };
        return Ok(ParsedIntent::Castle { side, castle });
    }

    let (body, promotion) = split_promotion(token, &body)?;
    let (body, is_capture) = split_capture(token, body)?;

    if let Some(caps) = PAWN_PUSH_PATTERN.captures(&body) {
        if is_capture {
            return Err(invalid(token, "a pawn capture needs a source file"));
        }

        let destination = parse_destination(&caps, 1, 2)
            .ok_or_else(|| invalid(token, "bad destination square"))?;

        return Ok(ParsedIntent::Move(MoveIntent {
            side,
            piece_kind: PieceKind::Pawn,
            disambiguation: Disambiguation::file(destination.file()),
            destination,
            is_capture: false,
            promotion,
        }));
    }

    if is_capture {
        if let Some(caps) = PAWN_CAPTURE_PATTERN.captures(&body) {
            let destination = parse_destination(&caps, 2, 3)
                .ok_or_else(|| invalid(token, "bad destination square"))?;

            return Ok(ParsedIntent::Move(MoveIntent {
                side,
                piece_kind: PieceKind::Pawn,
                disambiguation: disambiguation(caps.get(1).map(|m| m.as_str())),
                destination,
                is_capture,
                promotion,
            }));
        }
    }

    let Some(caps) = PIECE_PATTERN.captures(&body) else {
        return Err(invalid(token, "unrecognised move format"));
    };

    let piece_kind = caps[1]
        .chars()
        .next()
        .and_then(PieceKind::from_letter)
        .ok_or_else(|| invalid(token, "unknown piece letter"))?;
    let destination = parse_destination(&caps, 3, 4)
        .ok_or_else(|| invalid(token, "bad destination square"))?;

    Ok(ParsedIntent::Move(MoveIntent {
        side,
        piece_kind,
        disambiguation: disambiguation(caps.get(2).map(|m| m.as_str())),
        destination,
        is_capture,
        promotion,
    }))
}

/// Splits off an `=X` suffix. Any piece letter is accepted here, including
/// `K` and `P`; whether the target is allowed is decided when promoting.
fn split_promotion<'a>(
    token: &str,
    body: &'a str
) -> Result<(&'a str, Option<PieceKind>), NotationError> {
    let Some((head, suffix)) = body.split_once('=') else {
        return Ok((body, None));
    };

    let mut letters = suffix.chars();
    match (letters.next(), letters.next()) {
        (Some(letter), None) => {
            let kind = PieceKind::from_letter(letter).ok_or_else(|| {
                invalid(token, format!("unknown promotion piece '{letter}'"))
            })?;
            Ok((head, Some(kind)))
        }
        _ => Err(invalid(token, "a promotion names exactly one piece")),
    }
}

fn split_capture(token: &str, body: &str) -> Result<(String, bool), NotationError> {
    match body.matches('x').count() {
        0 => Ok((body.to_string(), false)),
        1 => Ok((body.replacen('x', "", 1), true)),
        _ => Err(invalid(token, "more than one capture marker")),
    }
}

fn parse_destination(
    caps: &Captures,
    file_group: usize,
    rank_group: usize
) -> Option<Square> {
    let file = file_from_char(caps[file_group].chars().next()?)?;
    let rank = rank_from_char(caps[rank_group].chars().next()?)?;

    Some(Square::new(rank, file))
}

/// A single source hint: a letter constrains the file, a digit the rank.
fn disambiguation(hint: Option<&str>) -> Disambiguation {
    let Some(c) = hint.and_then(|hint| hint.chars().next()) else {
        return Disambiguation::none();
    };

    if let Some(file) = file_from_char(c) {
        Disambiguation::file(file)
    } else if let Some(rank) = rank_from_char(c) {
        Disambiguation::rank(rank)
    } else {
        Disambiguation::none()
    }
}
