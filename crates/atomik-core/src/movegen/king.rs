//! King steps.

use crate::square::Square;
use crate::squareset::SquareSet;

/// All on-board king destinations from `from`: the 3×3 neighborhood minus
/// the king's own square.
pub(super) fn king_moves(from: Square) -> SquareSet {
    SquareSet::neighborhood(from).without(from)
}

#[cfg(test)]
mod tests {
    use super::king_moves;
    use crate::square::Square;

    #[test]
    fn center_king_has_eight_moves() {
        let moves = king_moves(Square::E4);
        assert_eq!(moves.count(), 8);
        assert!(!moves.contains(Square::E4));
        assert!(moves.contains(Square::D3));
        assert!(moves.contains(Square::F5));
    }

    #[test]
    fn corner_king_has_three_moves() {
        let moves = king_moves(Square::H8);
        assert_eq!(moves.count(), 3);
        assert!(moves.contains(Square::G8));
        assert!(moves.contains(Square::G7));
        assert!(moves.contains(Square::H7));
    }

    #[test]
    fn edge_king_has_five_moves() {
        let moves = king_moves(Square::A4);
        assert_eq!(moves.count(), 5);
    }
}
