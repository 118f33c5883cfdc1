//! The board: a fixed 8×8 grid of optional pieces keyed by [`Square`].

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::squareset::SquareSet;

/// Piece placement for one game, as a mailbox grid.
///
/// Every valid [`Square`] maps to a cell that is either empty or holds one
/// [`Piece`]. The board carries no turn or game-state information; that
/// belongs to [`Game`](crate::game::Game), which exclusively owns and
/// mutates its board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position (identical to standard chess).
    pub fn starting_position() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (file_index, &kind) in BACK_RANK.iter().enumerate() {
            let file_index = file_index as u8;
            board.cells[file_index as usize] = Some(Piece::new(kind, Color::White));
            board.cells[8 + file_index as usize] = Some(Piece::WHITE_PAWN);
            board.cells[48 + file_index as usize] = Some(Piece::BLACK_PAWN);
            board.cells[56 + file_index as usize] = Some(Piece::new(kind, Color::Black));
        }
        board
    }

    /// Return the piece on the given square, or `None` if it is empty.
    #[inline]
    pub const fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return `true` if the given square holds a piece.
    #[inline]
    pub const fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Place a piece on the given square, replacing whatever was there.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.index()] = Some(piece);
    }

    /// Remove the piece from the given square, if any.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.cells[sq.index()] = None;
    }

    /// Iterate over all occupied squares and their pieces, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Return the set of occupied squares.
    pub fn occupied(&self) -> SquareSet {
        self.pieces().map(|(sq, _)| sq).collect()
    }

    /// Return the square of the given side's king, if it is still on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, piece)| piece.is_king_of(color))
            .map(|(sq, _)| sq)
    }

    /// Return a wrapper that pretty-prints the board as an 8×8 grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.placement())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid with rank and file legends.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank_index in (0u8..8).rev() {
            write!(f, "{}  ", rank_index + 1)?;
            for file_index in 0u8..8 {
                let sq = Square::from_index(rank_index * 8 + file_index).unwrap();
                let c = match board.piece_at(sq) {
                    Some(piece) => piece.fen_char(),
                    None => '.',
                };
                if file_index < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
