//! Sliding piece rays: rook, bishop, and (via both tables) queen.

use crate::board::Board;
use crate::square::Square;
use crate::squareset::SquareSet;

/// Orthogonal ray directions as (file, rank) deltas.
pub(super) const ROOK_RAYS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal ray directions as (file, rank) deltas.
pub(super) const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each ray outward from `from` one square at a time. Empty squares
/// are added and the walk continues; the first occupied square is added as
/// a potential capture and ends the ray.
pub(super) fn slider_moves(from: Square, board: &Board, rays: &[(i8, i8)]) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    for &(file_delta, rank_delta) in rays {
        let mut sq = from;
        while let Some(next) = sq.offset(file_delta, rank_delta) {
            moves.insert(next);
            if board.is_occupied(next) {
                break;
            }
            sq = next;
        }
    }
    moves
}
