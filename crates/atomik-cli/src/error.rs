//! Command-line front-end errors.

use atomik_core::{ParseSquareError, PlacementError};

/// Errors that can occur while parsing or running CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A command needs arguments that were not supplied.
    #[error("{command} expects {expected}")]
    MissingArgument {
        /// The command name.
        command: &'static str,
        /// Human-readable description of the expected arguments.
        expected: &'static str,
    },

    /// A square argument was not valid algebraic notation.
    #[error(transparent)]
    InvalidSquare(#[from] ParseSquareError),

    /// A `position` argument was not a valid placement string.
    #[error("invalid placement: {source}")]
    InvalidPlacement {
        /// The underlying placement error.
        #[from]
        source: PlacementError,
    },

    /// An I/O error occurred while reading from stdin.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
