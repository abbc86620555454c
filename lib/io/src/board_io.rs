//! # board_io.rs
//!
//! Implements position formatting for terminal display.
//!
//! This file contains functionality for turning a `Position` into a text
//! board drawn with Unicode box-drawing characters. White pieces print as
//! uppercase letters and black pieces as lowercase ones. Squares can be
//! marked, which the front-end uses to show where a piece may move. Rank
//! labels run 8 to 1 from the top, file labels a to h from the left.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 10/10/2026

use game::{
    constants::{FILES, RANKS},
    Position, Square,
};

const MARK: char = '·';

pub fn format_square(square: Square) -> String {
    square.to_string()
}

/// Draws `position` as a boxed 8x8 grid.
///
/// # Arguments
///
/// * `position` - The position to draw
/// * `marked` - Squares to highlight; an empty marked square shows `·`, an
///   occupied one keeps its piece letter wrapped in brackets
///
/// # Examples
///
/// ```plaintext
///    ╔═══╤═══╤═══╤═══╤═══╤═══╤═══╤═══╗
///  8 ║ r │ n │ b │ q │ k │ b │ n │ r ║
///    ╟───┼───┼───┼───┼───┼───┼───┼───╢
///  ...
///    ╚═══╧═══╧═══╧═══╧═══╧═══╧═══╧═══╝
///      a   b   c   d   e   f   g   h
/// ```
pub fn format_position(position: &Position, marked: &[Square]) -> String {
    let files = FILES as usize;
    let mut result = String::new();

    result.push_str(
        &format!("   ╔{}╗\n", "═══╤".repeat(files - 1) + "═══")
    );

    for rank in 0..RANKS {
        let cells: Vec<String> = (0..FILES)
            .map(|file| {
                let square = Square::new(rank, file);
                let is_marked = marked.contains(&square);

                match (position.piece_at(square), is_marked) {
                    (Some(piece), true) => format!("[{}]", piece.symbol()),
                    (Some(piece), false) => format!(" {} ", piece.symbol()),
                    (None, true) => format!(" {MARK} "),
                    (None, false) => "   ".to_string(),
                }
            })
            .collect();

        result.push_str(
            &format!("{:>2} ║{}║\n", RANKS - rank, cells.join("│"))
        );

        if rank != RANKS - 1 {
            result.push_str(
                &format!("   ╟{}╢\n", "───┼".repeat(files - 1) + "───")
            );
        }
    }

    result.push_str(
        &format!("   ╚{}╝\n    ", "═══╧".repeat(files - 1) + "═══")
    );

    for file in 0..FILES {
        result.push_str(&format!(" {} ", (b'a' + file) as char));
        if file != FILES - 1 {
            result.push(' ');
        }
    }
    result.push('\n');

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_rows() {
        let board = format_position(&Position::standard(), &[]);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), 18);
        assert_eq!(lines[1], " 8 ║ r │ n │ b │ q │ k │ b │ n │ r ║");
        assert_eq!(lines[15], " 1 ║ R │ N │ B │ Q │ K │ B │ N │ R ║");
        assert_eq!(lines[9], " 4 ║   │   │   │   │   │   │   │   ║");
        assert_eq!(lines[17].trim(), "a   b   c   d   e   f   g   h");
    }

    #[test]
    fn marked_squares_are_highlighted() {
        let e3 = Square::from_algebraic("e3").unwrap();
        let e2 = Square::from_algebraic("e2").unwrap();

        let board = format_position(&Position::standard(), &[e3, e2]);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines[11], " 3 ║   │   │   │   │ · │   │   │   ║");
        assert_eq!(lines[13], " 2 ║ P │ P │ P │ P │[P]│ P │ P │ P ║");
    }
}
