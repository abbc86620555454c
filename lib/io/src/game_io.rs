//! # game_io.rs
//!
//! Implements move list and FEN parsing and game state formatting.
//!
//! This file contains the readers and writers that move games in and out of
//! text. Move lists use the numbered `1. e4 e5 2. Nf3` layout of a PGN move
//! section; reading one back skips tag pairs, comments, move numbers and the
//! result marker. Positions are read from FEN, of which the placement, side
//! to move and castling fields are used. Castling rights are translated into
//! the moved flags of kings and rooks, since the engine keeps no separate
//! rights.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 11/10/2026

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use thiserror::Error;

use game::{
    constants::{FILES, RANKS},
    Color, Game, GameStatus, Piece, PieceKind, Position, Square,
};

use crate::board_io::format_position;

lazy_static! {
    static ref TAG_PAIR_PATTERN: Regex = Regex::new(
        r"(?m)^\s*\[[^\]]*\]\s*$"
    ).unwrap();
    static ref COMMENT_PATTERN: Regex = Regex::new(
        r"\{[^}]*\}|;[^\n]*"
    ).unwrap();
    static ref MOVE_NUMBER_PATTERN: Regex = Regex::new(
        r"\d+\.+"
    ).unwrap();
    static ref RESULT_PATTERN: Regex = Regex::new(
        r"^(1-0|0-1|1/2-1/2|\*)$"
    ).unwrap();
    static ref CASTLING_PATTERN: Regex = Regex::new(
        r"^(-|K?Q?k?q?)$"
    ).unwrap();
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("FEN is empty")]
    Empty,

    #[error("FEN placement has {0} ranks, expected 8")]
    RankCount(usize),

    #[error("FEN rank {rank} covers {files} files, expected 8")]
    FileCount { rank: u8, files: usize },

    #[error("unknown piece letter '{0}' in FEN placement")]
    UnknownPiece(char),

    #[error("FEN placement has more than one {0} king")]
    ExtraKing(Color),

    #[error("side to move must be 'w' or 'b', got '{0}'")]
    SideToMove(String),

    #[error("malformed castling field '{0}'")]
    Castling(String),
}

/// Renders accepted tokens as a numbered move list, e.g. `1. e4 e5 2. Nf3`.
pub fn format_move_list(moves: &[String]) -> String {
    moves
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts move tokens from PGN-style text.
///
/// Tag pair lines, `{...}` and `;` comments, move numbers (`12.` and
/// `12...`) and result markers are dropped; everything else is returned in
/// order, unvalidated.
pub fn parse_move_list(text: &str) -> Vec<String> {
    let without_tags = TAG_PAIR_PATTERN.replace_all(text, "");
    let without_comments = COMMENT_PATTERN.replace_all(&without_tags, " ");
    let without_numbers = MOVE_NUMBER_PATTERN.replace_all(&without_comments, " ");

    without_numbers
        .split_whitespace()
        .filter(|token| !RESULT_PATTERN.is_match(token))
        .map(str::to_string)
        .collect()
}

/// Reads the placement field of a FEN string. Every piece starts unmoved
/// except pawns that have left their starting rank.
pub fn parse_placement(placement: &str) -> Result<Position, PlacementError> {
    let mut position = Position::empty();

    for (square, kind, color) in placement_pieces(placement)? {
        let mut piece = Piece::new(kind, color, square);
        piece.has_moved = kind == PieceKind::Pawn && square.rank() != color.pawn_rank();
        position.place(square, piece);
    }

    Ok(position)
}

fn placement_pieces(
    placement: &str
) -> Result<Vec<(Square, PieceKind, Color)>, PlacementError> {
    let rows: Vec<&str> = placement.split('/').collect();

    if rows.len() != RANKS as usize {
        return Err(PlacementError::RankCount(rows.len()));
    }

    let mut pieces = Vec::with_capacity(32);

    for (rank, row) in rows.iter().enumerate() {
        let mut file: usize = 0;

        for c in row.chars() {
            if let Some(skip) = c.to_digit(10).filter(|&n| (1..=8).contains(&n)) {
                file += skip as usize;
                continue;
            }

            let kind = PieceKind::from_letter(c.to_ascii_uppercase())
                .ok_or(PlacementError::UnknownPiece(c))?;
            let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };

            if file < FILES as usize {
                pieces.push((Square::new(rank as u8, file as u8), kind, color));
            }
            file += 1;
        }

        if file != FILES as usize {
            return Err(PlacementError::FileCount {
                rank: RANKS - rank as u8,
                files: file,
            });
        }
    }

    for color in [Color::White, Color::Black] {
        let kings = pieces
            .iter()
            .filter(|&&(_, kind, c)| kind == PieceKind::King && c == color)
            .count();

        if kings > 1 {
            return Err(PlacementError::ExtraKing(color));
        }
    }

    Ok(pieces)
}

/// Reads a FEN string into a game.
///
/// Only the first three fields matter. A missing side to move means White;
/// a missing castling field leaves every king and rook unmoved. When the
/// field is present, a king is unmoved only if its side keeps some right,
/// and a rook only if it is the rook a granted castle would use.
pub fn parse_fen(fen: &str) -> Result<Game, PlacementError> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or(PlacementError::Empty)?;

    let side = match fields.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => return Err(PlacementError::SideToMove(other.to_string())),
    };

    let castling = fields.next();
    if let Some(rights) = castling {
        if !CASTLING_PATTERN.is_match(rights) {
            return Err(PlacementError::Castling(rights.to_string()));
        }
    }

    let pieces = placement_pieces(placement)?;
    let mut position = Position::empty();

    for &(square, kind, color) in &pieces {
        let mut piece = Piece::new(kind, color, square);
        piece.has_moved = match (kind, castling) {
            (PieceKind::Pawn, _) => square.rank() != color.pawn_rank(),
            (PieceKind::King, Some(rights)) => !king_keeps_rights(color, square, rights),
            (PieceKind::Rook, Some(rights)) => {
                !rook_keeps_rights(color, square, rights, &pieces)
            }
            _ => false,
        };
        position.place(square, piece);
    }

    debug!("Parsed FEN '{fen}' with {} pieces, {side} to move", pieces.len());

    Ok(Game::from_position(position, side))
}

fn rights_letters(color: Color) -> (char, char) {
    match color {
        Color::White => ('K', 'Q'),
        Color::Black => ('k', 'q'),
    }
}

fn king_keeps_rights(color: Color, square: Square, rights: &str) -> bool {
    let (kingside, queenside) = rights_letters(color);

    square.rank() == color.home_rank() &&
    (rights.contains(kingside) || rights.contains(queenside))
}

fn rook_keeps_rights(
    color: Color,
    square: Square,
    rights: &str,
    pieces: &[(Square, PieceKind, Color)]
) -> bool {
    let (kingside, queenside) = rights_letters(color);
    let home = color.home_rank();

    let Some(king_file) = pieces
        .iter()
        .find(|&&(sq, kind, c)| kind == PieceKind::King && c == color && sq.rank() == home)
        .map(|(sq, _, _)| sq.file())
    else {
        return false;
    };

    let nearest_rook = |toward_h: bool| {
        pieces
            .iter()
            .filter(|&&(sq, kind, c)| {
                kind == PieceKind::Rook && c == color && sq.rank() == home &&
                if toward_h { sq.file() > king_file } else { sq.file() < king_file }
            })
            .map(|(sq, _, _)| *sq)
            .min_by_key(|sq| sq.file().abs_diff(king_file))
    };

    (rights.contains(kingside) && nearest_rook(true) == Some(square)) ||
    (rights.contains(queenside) && nearest_rook(false) == Some(square))
}

/// Describes the game: the board, then who is to move and how the game
/// stands. `verbose` adds the setup, promotion mode and the move list.
pub fn format_game_state(game: &Game, verbose: bool) -> String {
    let mut result = format_position(game.position(), &[]);

    result.push_str(&format!("\nCurrent move\t: {}\n", game.side_to_move()));
    result.push_str(&format!(
        "Status\t\t: {}\n",
        match game.status() {
            GameStatus::Ongoing => "ongoing".to_string(),
            GameStatus::Check(color) => format!("{color} is in check"),
            GameStatus::Checkmate(color) => format!("{color} is checkmated"),
            GameStatus::Stalemate(color) => format!("{color} is stalemated"),
        }
    ));

    if verbose {
        result.push_str(&format!("Setup\t\t: {}\n", game.setup()));
        result.push_str(&format!("Promotion\t: {}\n", game.promotion_mode()));
        result.push_str(&format!(
            "Moves\t\t: {}\n",
            if game.move_log().is_empty() {
                "-".to_string()
            } else {
                format_move_list(game.move_log())
            }
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn square(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn move_list_numbers_pairs() {
        let moves: Vec<String> = ["e4", "e5", "Nf3"].iter().map(|s| s.to_string()).collect();

        assert_eq!(format_move_list(&moves), "1. e4 e5 2. Nf3");
        assert_eq!(format_move_list(&[]), "");
    }

    #[test]
    fn pgn_noise_is_skipped() {
        let text = "[Event \"Casual\"]\n[Site \"?\"]\n\n\
                    1. e4 e5 {open game} 2.Nf3 Nc6 3. Bb5 a6 ; Ruy Lopez\n\
                    4... Nf6 1-0";

        assert_eq!(
            parse_move_list(text),
            vec!["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Nf6"]
        );
    }

    #[test]
    fn start_fen_matches_standard_position() {
        let game = parse_fen(START_FEN).unwrap();

        assert_eq!(game.current_position(), Position::standard());
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn castling_field_sets_moved_flags() {
        let game = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R b Kq - 0 1").unwrap();
        let position = game.position();

        assert_eq!(game.side_to_move(), Color::Black);
        assert!(!position.piece_at(square("e1")).unwrap().has_moved);
        assert!(!position.piece_at(square("h1")).unwrap().has_moved);
        assert!(position.piece_at(square("a1")).unwrap().has_moved);
        assert!(!position.piece_at(square("a8")).unwrap().has_moved);
        assert!(position.piece_at(square("h8")).unwrap().has_moved);
    }

    #[test]
    fn no_rights_means_moved_kings() {
        let game = parse_fen("4k3/8/8/8/8/8/8/4K2R w - - 0 1").unwrap();

        assert!(game.position().piece_at(square("e1")).unwrap().has_moved);
        assert!(game.position().piece_at(square("h1")).unwrap().has_moved);
    }

    #[test]
    fn advanced_pawns_count_as_moved() {
        let position = parse_placement("4k3/8/8/8/4P3/8/3P4/4K3").unwrap();

        assert!(position.piece_at(square("e4")).unwrap().has_moved);
        assert!(!position.piece_at(square("d2")).unwrap().has_moved);
    }

    #[test]
    fn malformed_placements_are_rejected() {
        assert_eq!(parse_placement("8/8/8"), Err(PlacementError::RankCount(3)));
        assert_eq!(
            parse_placement("9/8/8/8/8/8/8/8"),
            Err(PlacementError::UnknownPiece('9'))
        );
        assert_eq!(
            parse_placement("7/8/8/8/8/8/8/8"),
            Err(PlacementError::FileCount { rank: 8, files: 7 })
        );
        assert_eq!(
            parse_placement("ppppppppp/8/8/8/8/8/8/8"),
            Err(PlacementError::FileCount { rank: 8, files: 9 })
        );
        assert_eq!(parse_fen(""), Err(PlacementError::Empty));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/8 x"),
            Err(PlacementError::SideToMove(_))
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/8 w KX"),
            Err(PlacementError::Castling(_))
        ));
    }

    #[test]
    fn second_king_of_one_color_is_rejected() {
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/4P3/K3K3 w - - 0 1"),
            Err(PlacementError::ExtraKing(Color::White))
        );
        assert_eq!(
            parse_placement("k3k3/8/8/8/8/8/8/4K3"),
            Err(PlacementError::ExtraKing(Color::Black))
        );
        assert!(parse_placement("4k3/8/8/8/8/8/8/8").is_ok());
    }

    #[test]
    fn game_state_mentions_turn_and_status() {
        let mut game = Game::standard();
        game.play("e4").unwrap();

        let text = format_game_state(&game, true);

        assert!(text.contains("Current move\t: Black"));
        assert!(text.contains("Status\t\t: ongoing"));
        assert!(text.contains("Moves\t\t: 1. e4"));
    }
}
