//! The interactive session loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use atomik_core::{Game, GameState, Square};

use crate::command::{Command, parse_command};
use crate::error::CliError;

/// An interactive session holding one [`Game`].
///
/// Reads commands line by line, applies them to the game, and prints
/// results to stdout. The engine is synchronous, so the session is a plain
/// single-threaded loop.
pub struct Session {
    game: Game,
}

impl Session {
    /// Create a session with a fresh game from the starting position.
    pub fn new() -> Session {
        Session { game: Game::new() }
    }

    /// Run the session on stdin until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), CliError> {
        let stdin = io::stdin();
        let reader = stdin.lock();
        self.run_on(reader)
    }

    /// Run the session on an arbitrary line source. Split out from
    /// [`Session::run`] so tests can drive the loop with a byte buffer.
    pub fn run_on(&mut self, reader: impl BufRead) -> Result<(), CliError> {
        println!("atomik — atomic chess. Type `help` for commands.");
        println!("{}", self.game.board().pretty());
        self.prompt()?;

        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                self.prompt()?;
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd),
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    println!("error: {e}");
                }
            }
            self.prompt()?;
        }

        info!("atomik session closed");
        Ok(())
    }

    fn handle(&mut self, cmd: Command) {
        match cmd {
            Command::Move { from, to } => self.handle_move(from, to),
            Command::Board => println!("{}", self.game.board().pretty()),
            Command::State => println!("{}", self.game.state()),
            Command::New => {
                self.game = Game::new();
                println!("{}", self.game.board().pretty());
            }
            Command::Position(board) => {
                self.game = Game::from_board(board);
                println!("{}", self.game.board().pretty());
            }
            Command::Help => print_help(),
            Command::Unknown(cmd) if cmd.is_empty() => {}
            Command::Unknown(cmd) => println!("unknown command: {cmd} (try `help`)"),
            Command::Quit => unreachable!("quit is handled by the loop"),
        }
    }

    fn handle_move(&mut self, from: Square, to: Square) {
        if self.game.make_move(from, to) {
            println!("{}", self.game.board().pretty());
            match self.game.state() {
                GameState::Unfinished => {
                    println!("{} to move", self.game.side_to_move());
                }
                state => println!("{state}"),
            }
        } else {
            println!("illegal move: {from} {to}");
        }
    }

    fn prompt(&self) -> Result<(), CliError> {
        if self.game.state() == GameState::Unfinished {
            print!("{}> ", self.game.side_to_move());
        } else {
            print!("{}> ", self.game.state());
        }
        io::stdout().flush()?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Session {
        Session::new()
    }
}

fn print_help() {
    println!("commands:");
    println!("  move <from> <to>      attempt a move, e.g. `move e2 e4`");
    println!("  board                 print the current position");
    println!("  state                 print the game state");
    println!("  new                   restart from the starting position");
    println!("  position <placement>  restart from a placement string");
    println!("  quit                  end the session");
}
