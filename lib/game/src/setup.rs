//! # setup.rs
//!
//! Implements the starting setups, including Fischer-random back ranks.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 08/10/2026

use std::{fmt, str::FromStr};

use log::debug;
use rand::Rng;

use crate::{
    constants::*,
    error::{ParseKindError, SetupError},
    representations::{board::Position, piece::PieceKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupKind {
    #[default]
    Standard,
    FischerRandom,
    /// Reserved for a two-rook variant that has no layout yet.
    TwoRooksPlaceholder,
}

impl FromStr for SetupKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(SetupKind::Standard),
            "fischer-random" | "fischer" | "960" | "chess960" => {
                Ok(SetupKind::FischerRandom)
            }
            "two-rooks" => Ok(SetupKind::TwoRooksPlaceholder),
            _ => Err(ParseKindError {
                what: "setup",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SetupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupKind::Standard => write!(f, "standard"),
            SetupKind::FischerRandom => write!(f, "fischer-random"),
            SetupKind::TwoRooksPlaceholder => write!(f, "two-rooks"),
        }
    }
}

/// Takes the `n`th still-empty slot, counting from the a-file.
fn nth_empty(slots: &mut [Option<PieceKind>; 8], n: usize, kind: PieceKind) {
    if let Some(slot) = slots.iter_mut().filter(|slot| slot.is_none()).nth(n) {
        *slot = Some(kind);
    }
}

/// Draws a Fischer-random back rank.
///
/// The bishops land on one even and one odd file, so on opposite square
/// colors. The queen and both knights then take random free files, and the
/// last three free files get rook, king, rook from left to right, which puts
/// the king between the rooks. Every one of the 960 arrangements is equally
/// likely.
///
/// # Arguments
///
/// * `rng` - Source of randomness; a seeded `StdRng` makes the draw repeatable
pub fn generate_back_rank<R: Rng + ?Sized>(rng: &mut R) -> [PieceKind; 8] {
    let mut slots: [Option<PieceKind>; 8] = [None; 8];

    slots[rng.gen_range(0..4) * 2] = Some(PieceKind::Bishop);
    slots[rng.gen_range(0..4) * 2 + 1] = Some(PieceKind::Bishop);

    nth_empty(&mut slots, rng.gen_range(0..6), PieceKind::Queen);
    nth_empty(&mut slots, rng.gen_range(0..5), PieceKind::Knight);
    nth_empty(&mut slots, rng.gen_range(0..4), PieceKind::Knight);

    for kind in [PieceKind::Rook, PieceKind::King, PieceKind::Rook] {
        nth_empty(&mut slots, 0, kind);
    }

    slots.map(|slot| slot.unwrap_or(PieceKind::Pawn))                          /* Every slot is filled by now        */
}

pub fn is_valid_back_rank(back_rank: &[PieceKind; 8]) -> bool {
    let files_of = |kind: PieceKind| -> Vec<usize> {
        back_rank
            .iter()
            .enumerate()
            .filter(|(_, piece)| **piece == kind)
            .map(|(file, _)| file)
            .collect()
    };

    let bishops = files_of(PieceKind::Bishop);
    let rooks = files_of(PieceKind::Rook);
    let kings = files_of(PieceKind::King);

    bishops.len() == 2 &&
    bishops[0] % 2 != bishops[1] % 2 &&
    rooks.len() == 2 &&
    kings.len() == 1 &&
    rooks[0] < kings[0] && kings[0] < rooks[1] &&
    files_of(PieceKind::Queen).len() == 1 &&
    files_of(PieceKind::Knight).len() == 2
}

/// Builds the starting position for `kind`.
pub fn setup_position<R: Rng + ?Sized>(
    kind: SetupKind,
    rng: &mut R
) -> Result<Position, SetupError> {
    match kind {
        SetupKind::Standard => Ok(Position::from_back_rank(&STANDARD_BACK_RANK)),
        SetupKind::FischerRandom => {
            let back_rank = generate_back_rank(rng);
            debug!(
                "Fischer-random back rank {}",
                back_rank.iter().map(|kind| kind.letter()).collect::<String>()
            );
            Ok(Position::from_back_rank(&back_rank))
        }
        SetupKind::TwoRooksPlaceholder => Err(SetupError::Unavailable(kind)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use ntest::timeout;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::representations::{board::Square, piece::Color};

    #[test]
    fn standard_back_rank_is_valid() {
        assert!(is_valid_back_rank(&STANDARD_BACK_RANK));
    }

    #[test]
    fn bad_back_ranks_are_caught() {
        let mut same_color_bishops = STANDARD_BACK_RANK;
        same_color_bishops.swap(2, 3);
        assert!(!is_valid_back_rank(&same_color_bishops));

        let mut king_outside = STANDARD_BACK_RANK;
        king_outside.swap(4, 7);
        assert!(!is_valid_back_rank(&king_outside));
    }

    #[test]
    #[timeout(10000)]
    fn ten_thousand_fischer_ranks_are_valid() {
        let mut rng = StdRng::seed_from_u64(RNG_SEED);

        for _ in 0..10_000 {
            let back_rank = generate_back_rank(&mut rng);
            assert!(is_valid_back_rank(&back_rank), "{back_rank:?}");
        }
    }

    #[test]
    fn seeded_draws_repeat() {
        let first = generate_back_rank(&mut StdRng::seed_from_u64(42));
        let second = generate_back_rank(&mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    #[timeout(20000)]
    fn every_arrangement_is_reachable() {
        let mut rng = StdRng::seed_from_u64(RNG_SEED);
        let mut seen = HashSet::new();

        for _ in 0..30_000 {
            seen.insert(generate_back_rank(&mut rng));
        }

        assert_eq!(seen.len(), 960);
    }

    #[test]
    fn fischer_position_mirrors_both_sides() {
        let mut rng = StdRng::seed_from_u64(RNG_SEED);
        let position = setup_position(SetupKind::FischerRandom, &mut rng).unwrap();

        for file in 0..8 {
            let white = position.piece_at(Square::new(WHITE_HOME_RANK, file)).unwrap();
            let black = position.piece_at(Square::new(BLACK_HOME_RANK, file)).unwrap();
            assert_eq!(white.kind(), black.kind());
            assert_eq!(white.color, Color::White);
            assert_eq!(black.color, Color::Black);
        }
        assert_eq!(position.pieces().count(), 32);
    }

    #[test]
    fn two_rooks_setup_is_unavailable() {
        let mut rng = StdRng::seed_from_u64(RNG_SEED);
        let err = setup_position(SetupKind::TwoRooksPlaceholder, &mut rng).unwrap_err();

        assert_eq!(err, SetupError::Unavailable(SetupKind::TwoRooksPlaceholder));
        assert!(err.to_string().contains("not yet available"));
    }

    #[test]
    fn setup_names_parse() {
        assert_eq!("Chess960".parse(), Ok(SetupKind::FischerRandom));
        assert_eq!("two-rooks".parse(), Ok(SetupKind::TwoRooksPlaceholder));
        assert!("crazyhouse".parse::<SetupKind>().is_err());
    }
}
