//! Piece-placement string parsing and serialization for [`Board`].
//!
//! Only the board field of a FEN record is used: eight '/'-separated ranks
//! from rank 8 down to rank 1, with digits encoding runs of empty squares.
//! Side to move and game state live in the engine, not in the string.

use std::str::FromStr;

use crate::board::Board;
use crate::error::PlacementError;
use crate::file::File;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::Square;

/// The placement string for the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(placement: &str) -> Result<Board, PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();

        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // Placement ranks go from 8 to 1 (top to bottom)
            let rank = Rank::from_index(7 - rank_index as u8).unwrap();
            let mut file_index: u8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    file_index += digit as u8;
                } else {
                    let piece = Piece::from_fen_char(c)
                        .ok_or(PlacementError::InvalidPieceChar { character: c })?;

                    if file_index >= 8 {
                        return Err(PlacementError::BadRankLength {
                            rank_index,
                            length: file_index as usize + 1,
                        });
                    }

                    let file = File::from_index(file_index).unwrap();
                    board.set_piece(Square::new(rank, file), piece);
                    file_index += 1;
                }
            }

            if file_index != 8 {
                return Err(PlacementError::BadRankLength {
                    rank_index,
                    length: file_index as usize,
                });
            }
        }

        Ok(board)
    }
}

impl Board {
    /// Serialize the placement back into the FEN board-field form.
    pub fn placement(&self) -> String {
        let mut out = String::new();
        for rank_index in (0u8..8).rev() {
            let mut empty_run = 0;
            for file_index in 0u8..8 {
                let sq = Square::from_index(rank_index * 8 + file_index).unwrap();
                match self.piece_at(sq) {
                    Some(piece) => {
                        if empty_run > 0 {
                            out.push(char::from_digit(empty_run, 10).unwrap());
                            empty_run = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                out.push(char::from_digit(empty_run, 10).unwrap());
            }
            if rank_index > 0 {
                out.push('/');
            }
        }
        out
    }
}
