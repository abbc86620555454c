//! # board.rs
//!
//! Defines the square type and the 8x8 position grid.
//!
//! This file contains the `Square` struct, a bounds-checked `(rank, file)`
//! coordinate with rank 0 being black's home rank, and the `Position` struct,
//! an 8x8 grid of optional pieces. `Position` only offers lookup and mutation
//! primitives; move generation and legality live in the `moves` modules.
//! Positions are plain `Copy` values, which is what makes simulating a move
//! as cheap as copying the grid.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 04/10/2026

use std::fmt;

use crate::{
    constants::*,
    representations::{
        moves::CandidateMove,
        piece::{Color, Piece, PieceKind},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Creates a square. Out-of-range coordinates are a programming error.
    pub fn new(rank: u8, file: u8) -> Square {
        assert!(
            rank < RANKS && file < FILES,
            "Square ({rank}, {file}) is out of bounds."
        );

        Square { rank, file }
    }

    pub fn try_new(rank: i8, file: i8) -> Option<Square> {
        if (0..RANKS as i8).contains(&rank) && (0..FILES as i8).contains(&file) {
            Some(Square { rank: rank as u8, file: file as u8 })
        } else {
            None
        }
    }

    /// Parses `"e4"`-style names; the file letter is case-insensitive.
    pub fn from_algebraic(name: &str) -> Option<Square> {
        let mut chars = name.chars();
        let file = file_from_char(chars.next()?)?;
        let rank = rank_from_char(chars.next()?)?;

        if chars.next().is_some() {
            return None;
        }

        Some(Square { rank, file })
    }

    #[inline(always)]
    pub fn rank(self) -> u8 {
        self.rank
    }

    #[inline(always)]
    pub fn file(self) -> u8 {
        self.file
    }

    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Square> {
        Square::try_new(
            self.rank as i8 + rank_delta,
            self.file as i8 + file_delta
        )
    }

    /// All 64 squares, rank 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..RANKS).flat_map(|rank| {
            (0..FILES).map(move |file| Square { rank, file })
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_char = (b'a' + self.file) as char;
        let rank_char = (b'8' - self.rank) as char;
        write!(f, "{}{}", file_char, rank_char)
    }
}

/// Maps a file letter (`a`-`h`, either case) to a file index.
pub fn file_from_char(c: char) -> Option<u8> {
    match c.to_ascii_lowercase() {
        c @ 'a'..='h' => Some(c as u8 - b'a'),
        _ => None,
    }
}

/// Maps a rank digit (`1`-`8`) to a rank index, rank 8 being index 0.
pub fn rank_from_char(c: char) -> Option<u8> {
    match c {
        '1'..='8' => Some(b'8' - c as u8),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    grid: [[Option<Piece>; FILES as usize]; RANKS as usize],
}

impl Position {
    pub fn empty() -> Position {
        Position::default()
    }

    pub fn standard() -> Position {
        Position::from_back_rank(&STANDARD_BACK_RANK)
    }

    /// Mirrors `back_rank` onto both home ranks and fills both pawn ranks.
    pub fn from_back_rank(back_rank: &[PieceKind; 8]) -> Position {
        let mut position = Position::empty();

        for color in [Color::White, Color::Black] {
            for (file, &kind) in back_rank.iter().enumerate() {
                let home = Square::new(color.home_rank(), file as u8);
                let pawn = Square::new(color.pawn_rank(), file as u8);

                position.place(home, Piece::new(kind, color, home));
                position.place(pawn, Piece::new(PieceKind::Pawn, color, pawn));
            }
        }

        position
    }

    #[inline(always)]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.rank as usize][square.file as usize]
    }

    pub(crate) fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.grid[square.rank as usize][square.file as usize].as_mut()
    }

    #[inline(always)]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Puts `piece` on `square`, returning whatever stood there before.
    pub fn place(&mut self, square: Square, mut piece: Piece) -> Option<Piece> {
        piece.position = square;
        self.grid[square.rank as usize][square.file as usize].replace(piece)
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.grid[square.rank as usize][square.file as usize].take()
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|piece| piece.kind() == PieceKind::King)
            .map(|piece| piece.position)
    }

    /// Every piece on the board, scanned rank 0 first.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.grid.iter().flatten().flatten().copied()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    /// Moves the piece on `from` to `to` and marks it as moved, returning
    /// the captured occupant of `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self.remove(from)?;
        piece.mark_moved();
        self.place(to, piece)
    }

    /// The position after `mv`, leaving `self` untouched.
    pub fn with_move(&self, mv: &CandidateMove) -> Position {
        let mut simulated = *self;
        simulated.relocate(mv.from, mv.to);
        simulated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn algebraic_names_map_to_top_left_origin() {
        assert_eq!(square("a8"), Square::new(0, 0));
        assert_eq!(square("e4"), Square::new(4, 4));
        assert_eq!(square("H1"), Square::new(7, 7));
        assert_eq!(Square::new(6, 4).to_string(), "e2");
    }

    #[test]
    fn malformed_square_names_are_rejected() {
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic("e44"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_range_square_fails_fast() {
        Square::new(8, 0);
    }

    #[test]
    fn offsets_stop_at_the_edge() {
        assert_eq!(square("a1").offset(0, -1), None);
        assert_eq!(square("a1").offset(-1, 1), Some(square("b2")));
        assert_eq!(Square::try_new(-1, 3), None);
    }

    #[test]
    fn standard_position_layout() {
        let position = Position::standard();

        assert_eq!(position.pieces().count(), 32);
        assert_eq!(position.find_king(Color::White), Some(square("e1")));
        assert_eq!(position.find_king(Color::Black), Some(square("e8")));

        let queen = position.piece_at(square("d1")).unwrap();
        assert!(queen.is(PieceKind::Queen, Color::White));

        for file in 0..8 {
            let pawn = position.piece_at(Square::new(6, file)).unwrap();
            assert!(pawn.is(PieceKind::Pawn, Color::White));
            assert!(!pawn.has_moved);
        }
    }

    #[test]
    fn place_keeps_stored_position_in_sync() {
        let mut position = Position::empty();
        let knight = Piece::new(PieceKind::Knight, Color::Black, square("a1"));

        assert_eq!(position.place(square("c3"), knight), None);
        assert_eq!(position.piece_at(square("c3")).unwrap().position, square("c3"));

        let removed = position.remove(square("c3")).unwrap();
        assert!(removed.is(PieceKind::Knight, Color::Black));
        assert!(position.is_empty(square("c3")));
    }

    #[test]
    fn find_king_on_empty_board_is_none() {
        assert_eq!(Position::empty().find_king(Color::White), None);
    }

    #[test]
    fn with_move_leaves_original_untouched() {
        let position = Position::standard();
        let mv = CandidateMove {
            from: square("e2"),
            to: square("e4"),
            is_capture: false,
        };

        let after = position.with_move(&mv);

        assert!(after.is_empty(square("e2")));
        assert!(after.piece_at(square("e4")).unwrap().has_moved);
        assert_eq!(position, Position::standard());
    }
}
