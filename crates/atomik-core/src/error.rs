//! Error types for the string boundaries of the engine.

/// A string that is not a valid algebraic square (file letter a–h followed
/// by a rank digit 1–8).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square: \"{input}\"")]
pub struct ParseSquareError {
    /// The rejected input.
    pub input: String,
}

impl ParseSquareError {
    pub(crate) fn new(input: &str) -> ParseSquareError {
        ParseSquareError {
            input: input.to_string(),
        }
    }
}

/// Errors from parsing a piece-placement string (the board field of a FEN
/// record: eight '/'-separated ranks, digits for runs of empty squares).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index as written (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}
