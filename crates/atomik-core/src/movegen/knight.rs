//! Knight jumps.

use crate::square::Square;
use crate::squareset::SquareSet;

/// The eight knight offsets as (file, rank) deltas.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// All on-board knight destinations from `from`. Knights jump, so occupancy
/// never blocks them.
pub(super) fn knight_moves(from: Square) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    for &(file_delta, rank_delta) in &KNIGHT_OFFSETS {
        if let Some(sq) = from.offset(file_delta, rank_delta) {
            moves.insert(sq);
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::square::Square;
    use crate::squareset::SquareSet;

    #[test]
    fn center_knight_has_eight_moves() {
        let moves = knight_moves(Square::D4);
        assert_eq!(moves.count(), 8);
        assert!(moves.contains(Square::C6));
        assert!(moves.contains(Square::E6));
        assert!(moves.contains(Square::F5));
        assert!(moves.contains(Square::F3));
        assert!(moves.contains(Square::E2));
        assert!(moves.contains(Square::C2));
        assert!(moves.contains(Square::B3));
        assert!(moves.contains(Square::B5));
    }

    #[test]
    fn corner_knight_has_two_moves() {
        let moves = knight_moves(Square::A1);
        let expected: SquareSet = [Square::B3, Square::C2].into_iter().collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn b1_knight_edge_clipped() {
        let moves = knight_moves(Square::B1);
        let expected: SquareSet = [Square::A3, Square::C3, Square::D2].into_iter().collect();
        assert_eq!(moves, expected);
    }
}
