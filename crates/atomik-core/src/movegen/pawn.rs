//! Pawn pushes and diagonal captures.
//!
//! No en passant and no promotion in this variant; a pawn's reach is just
//! its pushes plus any occupied forward diagonal.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::squareset::SquareSet;

/// All raw pawn destinations from `from` for a pawn of the given color.
///
/// The double push requires both the intermediate and the destination
/// square to be empty. Diagonals are included only when occupied; whether
/// the occupant is capturable is the engine's call.
pub(super) fn pawn_moves(color: Color, from: Square, board: &Board) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    let step = color.pawn_step();

    if let Some(one) = from.offset(0, step) {
        if !board.is_occupied(one) {
            moves.insert(one);
            if from.rank() == color.pawn_home_rank() {
                if let Some(two) = one.offset(0, step) {
                    if !board.is_occupied(two) {
                        moves.insert(two);
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        if let Some(diagonal) = from.offset(file_delta, step) {
            if board.is_occupied(diagonal) {
                moves.insert(diagonal);
            }
        }
    }

    moves
}
