//! Core atomic chess types: board representation, move generation, and game rules.

mod board;
mod color;
mod error;
mod file;
mod game;
mod movegen;
mod piece;
mod piece_kind;
mod placement;
mod rank;
mod square;
mod squareset;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::{ParseSquareError, PlacementError};
pub use file::File;
pub use game::{Game, GameState};
pub use movegen::reachable_squares;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use rank::Rank;
pub use square::Square;
pub use squareset::SquareSet;
