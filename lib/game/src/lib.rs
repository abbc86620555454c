pub mod representations {
	pub mod board;
	pub mod piece;
	pub mod state;
	pub mod moves;
}

pub mod moves {
	pub mod move_gen;
	pub mod legality;
	pub mod move_parse;
	pub mod move_exec;
}

pub mod constants;
pub mod error;
pub mod setup;
pub mod util;

pub use error::{CastleFailure, MoveError, NotationError, PromotionFailure};
pub use representations::{
    board::{Position, Square},
    moves::{AppliedMove, CandidateMove, CastleSide, MoveOutcome, PromotionMode},
    piece::{Color, Piece, PieceKind},
    state::{Game, GameStatus},
};
pub use setup::SetupKind;
