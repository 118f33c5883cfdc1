//! Raw move generation: geometric reach of a piece, ignoring turn order
//! and the atomic-capture rule.

mod king;
mod knight;
mod pawn;
mod sliders;

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::squareset::SquareSet;

use self::king::king_moves;
use self::knight::knight_moves;
use self::pawn::pawn_moves;
use self::sliders::{BISHOP_RAYS, ROOK_RAYS, slider_moves};

/// Return every square the given piece could move to from `from` by its raw
/// movement pattern.
///
/// Board occupancy matters only for blocking (sliders stop on the first
/// occupied square, which is included as a potential capture) and for pawn
/// pushes and diagonal captures. Whose turn it is, the color of a blocking
/// piece, and the explosion side effect are the engine's concern, not this
/// function's. The result never contains `from` or off-board squares.
pub fn reachable_squares(piece: Piece, from: Square, board: &Board) -> SquareSet {
    let moves = match piece.kind() {
        PieceKind::Rook => slider_moves(from, board, &ROOK_RAYS),
        PieceKind::Bishop => slider_moves(from, board, &BISHOP_RAYS),
        PieceKind::Queen => {
            slider_moves(from, board, &ROOK_RAYS) | slider_moves(from, board, &BISHOP_RAYS)
        }
        PieceKind::Knight => knight_moves(from),
        PieceKind::King => king_moves(from),
        PieceKind::Pawn => pawn_moves(piece.color(), from, board),
    };
    moves.without(from)
}
