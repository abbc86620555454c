//! # state.rs
//!
//! Defines the game session and its query surface.
//!
//! This file contains the `Game` struct, which owns the position of one game
//! together with the side to move, the setup it was started from, the
//! promotion mode and the log of accepted move tokens. All mutation goes
//! through `&mut self`; a host that shares a game between threads wraps it in
//! a `Mutex`. Front-ends only ever see snapshots of the position.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 09/10/2026

use log::{info, warn};
use rand::Rng;

use crate::{
    error::{MoveError, SetupError},
    moves::{
        legality::{is_checkmate, is_in_check, is_stalemate, legal_moves},
        move_exec,
    },
    representations::{
        board::{Position, Square},
        moves::{MoveOutcome, PromotionMode},
        piece::Color,
    },
    setup::{setup_position, SetupKind},
};

#[cfg(debug_assertions)]
use crate::util::verify_position;

/// Where the game stands from the side to move's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check(Color),
    Checkmate(Color),
    Stalemate(Color),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    position: Position,
    side_to_move: Color,
    setup: SetupKind,
    promotion_mode: PromotionMode,
    move_log: Vec<String>,
}

impl Game {
    /// Starts a game from `setup`, drawing from `rng` when the setup is
    /// randomised. White moves first.
    pub fn new<R: Rng + ?Sized>(setup: SetupKind, rng: &mut R) -> Result<Game, SetupError> {
        let position = setup_position(setup, rng)?;

        info!("Starting a {setup} game");

        Ok(Game {
            position,
            side_to_move: Color::White,
            setup,
            promotion_mode: PromotionMode::default(),
            move_log: Vec::new(),
        })
    }

    pub fn standard() -> Game {
        Game::from_position(Position::standard(), Color::White)
    }

    /// Wraps an arbitrary position, e.g. one read from a FEN placement.
    pub fn from_position(position: Position, side_to_move: Color) -> Game {
        Game {
            position,
            side_to_move,
            setup: SetupKind::Standard,
            promotion_mode: PromotionMode::default(),
            move_log: Vec::new(),
        }
    }

    pub fn with_promotion_mode(mut self, mode: PromotionMode) -> Game {
        self.promotion_mode = mode;
        self
    }

    /// A snapshot; later moves do not show up in it.
    pub fn current_position(&self) -> Position {
        self.position
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn setup(&self) -> SetupKind {
        self.setup
    }

    pub fn promotion_mode(&self) -> PromotionMode {
        self.promotion_mode
    }

    /// Accepted tokens in the order they were played.
    pub fn move_log(&self) -> &[String] {
        &self.move_log
    }

    /// Squares the piece on `square` may legally move to. An empty square
    /// has none.
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        self.position
            .piece_at(square)
            .map(|piece| {
                legal_moves(&piece, &self.position)
                    .into_iter()
                    .map(|mv| mv.to)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Plays `token` for `side`.
    ///
    /// A move for the side not on turn is refused as `NoLegalCandidate`. On
    /// success the token is logged and the turn passes; on failure neither
    /// happens, even when a legacy promotion failure already moved the pawn.
    pub fn apply_move(&mut self, token: &str, side: Color) -> MoveOutcome {
        if side != self.side_to_move {
            warn!("{side} tried '{token}' while {} is to move", self.side_to_move);
            return Err(MoveError::NoLegalCandidate {
                token: token.to_string(),
                side,
            });
        }

        let outcome = move_exec::apply_move(
            token,
            side,
            &mut self.position,
            self.promotion_mode
        );

        #[cfg(debug_assertions)]
        verify_position(&self.position);

        match &outcome {
            Ok(applied) => {
                info!(
                    "{side} played {token} ({} {} -> {})",
                    applied.piece_kind, applied.from, applied.to
                );
                self.move_log.push(token.trim().to_string());
                self.side_to_move = side.opponent();
            }
            Err(err) => warn!("{err}"),
        }

        outcome
    }

    /// Plays `token` for whichever side is to move.
    pub fn play(&mut self, token: &str) -> MoveOutcome {
        self.apply_move(token, self.side_to_move)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(color, &self.position)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        is_checkmate(color, &self.position)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        is_stalemate(color, &self.position)
    }

    pub fn status(&self) -> GameStatus {
        let side = self.side_to_move;

        if self.is_checkmate(side) {
            GameStatus::Checkmate(side)
        } else if self.is_in_check(side) {
            GameStatus::Check(side)
        } else if self.is_stalemate(side) {
            GameStatus::Stalemate(side)
        } else {
            GameStatus::Ongoing
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::constants::RNG_SEED;

    fn square(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn new_game_starts_with_white() {
        let mut rng = StdRng::seed_from_u64(RNG_SEED);
        let game = Game::new(SetupKind::FischerRandom, &mut rng).unwrap();

        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.setup(), SetupKind::FischerRandom);
        assert!(game.move_log().is_empty());
        assert_eq!(game.status(), GameStatus::Ongoing);
    }

    #[test]
    fn legal_destinations_of_a_knight() {
        let game = Game::standard();

        let mut destinations = game.legal_destinations(square("b1"));
        destinations.sort();

        assert_eq!(destinations, vec![square("a3"), square("c3")]);
        assert!(game.legal_destinations(square("e4")).is_empty());
    }

    #[test]
    fn snapshot_does_not_follow_the_game() {
        let mut game = Game::standard();
        let before = game.current_position();

        game.play("e4").unwrap();

        assert_eq!(before, Position::standard());
        assert_ne!(game.current_position(), before);
    }

    #[test]
    fn wrong_side_is_refused() {
        let mut game = Game::standard();

        assert!(matches!(
            game.apply_move("e5", Color::Black),
            Err(MoveError::NoLegalCandidate { side: Color::Black, .. })
        ));
        assert_eq!(game.current_position(), Position::standard());
    }

    #[test]
    fn check_is_reported_for_side_to_move() {
        let mut game = Game::standard();

        for token in ["e4", "f5", "Qh5+"] {
            game.play(token).unwrap();
        }

        assert_eq!(game.status(), GameStatus::Check(Color::Black));
        assert!(game.is_in_check(Color::Black));
        assert!(!game.is_checkmate(Color::Black));
    }
}
