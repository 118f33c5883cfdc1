//! CLI command parsing.

use atomik_core::{Board, Square};

use crate::error::CliError;

/// A parsed CLI command.
#[derive(Debug)]
pub enum Command {
    /// `move <from> <to>` -- attempt a move.
    Move {
        /// Origin square.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// `board` -- print the current position.
    Board,
    /// `state` -- print the game state.
    State,
    /// `new` -- restart from the standard starting position.
    New,
    /// `position <placement>` -- restart from a custom placement, White to move.
    Position(Board),
    /// `help` -- list the available commands.
    Help,
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command (reported, then ignored).
    Unknown(String),
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "move" | "mv" => parse_move(&tokens[1..]),
        "board" | "b" => Ok(Command::Board),
        "state" => Ok(Command::State),
        "new" => Ok(Command::New),
        "position" => parse_position(&tokens[1..]),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Ok(Command::Unknown(other.to_string())),
    }
}

fn parse_move(tokens: &[&str]) -> Result<Command, CliError> {
    let [from, to] = tokens else {
        return Err(CliError::MissingArgument {
            command: "move",
            expected: "two squares, e.g. `move e2 e4`",
        });
    };
    Ok(Command::Move {
        from: from.parse()?,
        to: to.parse()?,
    })
}

fn parse_position(tokens: &[&str]) -> Result<Command, CliError> {
    let [placement] = tokens else {
        return Err(CliError::MissingArgument {
            command: "position",
            expected: "one placement string, e.g. `position 8/8/8/3qk3/8/8/8/4K3`",
        });
    };
    let board: Board = placement.parse()?;
    Ok(Command::Position(board))
}

#[cfg(test)]
mod tests {
    use super::{Command, parse_command};
    use crate::error::CliError;
    use atomik_core::Square;

    #[test]
    fn parse_move_command() {
        match parse_command("move e2 e4").unwrap() {
            Command::Move { from, to } => {
                assert_eq!(from, Square::E2);
                assert_eq!(to, Square::E4);
            }
            other => panic!("expected Move, got {other:?}"),
        }
    }

    #[test]
    fn move_alias() {
        assert!(matches!(
            parse_command("mv d7 d5").unwrap(),
            Command::Move { .. }
        ));
    }

    #[test]
    fn move_with_bad_square() {
        let err = parse_command("move e2 e9").unwrap_err();
        assert!(matches!(err, CliError::InvalidSquare(_)));
        assert_eq!(format!("{err}"), "invalid square: \"e9\"");
    }

    #[test]
    fn move_with_missing_squares() {
        assert!(matches!(
            parse_command("move e2").unwrap_err(),
            CliError::MissingArgument { command: "move", .. }
        ));
    }

    #[test]
    fn simple_commands() {
        assert!(matches!(parse_command("board").unwrap(), Command::Board));
        assert!(matches!(parse_command("b").unwrap(), Command::Board));
        assert!(matches!(parse_command("state").unwrap(), Command::State));
        assert!(matches!(parse_command("new").unwrap(), Command::New));
        assert!(matches!(parse_command("help").unwrap(), Command::Help));
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
        assert!(matches!(parse_command("exit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_position_command() {
        assert!(matches!(
            parse_command("position 8/8/8/3qk3/8/8/8/4K3").unwrap(),
            Command::Position(_)
        ));
    }

    #[test]
    fn position_with_bad_placement() {
        let err = parse_command("position 8/8/8").unwrap_err();
        assert!(matches!(err, CliError::InvalidPlacement { .. }));
    }

    #[test]
    fn unknown_and_empty() {
        assert!(matches!(
            parse_command("castle").unwrap(),
            Command::Unknown(cmd) if cmd == "castle"
        ));
        assert!(matches!(parse_command("   ").unwrap(), Command::Unknown(_)));
    }
}
