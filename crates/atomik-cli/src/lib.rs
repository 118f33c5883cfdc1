//! Interactive command-line front end for the atomic chess engine.

mod command;
mod error;
mod session;

pub use command::{Command, parse_command};
pub use error::CliError;
pub use session::Session;
