//! The game engine: legality checking, move application, and explosion
//! resolution.

use std::fmt;

use tracing::{debug, info};

use crate::board::Board;
use crate::color::Color;
use crate::movegen::reachable_squares;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::squareset::SquareSet;

/// The lifecycle state of a game.
///
/// Both terminal states are absorbing: once a king has been destroyed no
/// further moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Unfinished,
    WhiteWon,
    BlackWon,
}

impl GameState {
    /// Return `true` once a side has won.
    #[inline]
    pub const fn is_finished(self) -> bool {
        !matches!(self, GameState::Unfinished)
    }

    /// Return the winning side, if any.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::Unfinished => None,
            GameState::WhiteWon => Some(Color::White),
            GameState::BlackWon => Some(Color::Black),
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Unfinished => write!(f, "UNFINISHED"),
            GameState::WhiteWon => write!(f, "WHITE_WON"),
            GameState::BlackWon => write!(f, "BLACK_WON"),
        }
    }
}

/// One game of atomic chess.
///
/// The engine exclusively owns its board, turn counter, and game state;
/// there are no hidden statics, so independent games are simply independent
/// `Game` values. [`Game::make_move`] is the sole mutating entry point, and
/// a rejected move is guaranteed to leave all three fields untouched.
pub struct Game {
    board: Board,
    turn_counter: u32,
    state: GameState,
}

impl Game {
    /// Start a game from the standard starting position.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position())
    }

    /// Start a game from an arbitrary position, White to move.
    pub fn from_board(board: Board) -> Game {
        Game {
            board,
            turn_counter: 0,
            state: GameState::Unfinished,
        }
    }

    /// Return the current game state.
    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Return a read-only snapshot of the board, for display and queries.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the piece on the given square, or `None` if it is empty.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Number of successfully applied moves so far.
    #[inline]
    pub fn turn_counter(&self) -> u32 {
        self.turn_counter
    }

    /// The side whose turn it is: even counter means White.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.turn_counter % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Return `true` if moving the piece on `from` to `to` passes every
    /// legality check short of the double-king explosion guard.
    ///
    /// The checks, in order: the game is still running, `from` holds a
    /// piece of the side to move, the destination holds no friendly piece,
    /// kings never capture, a pawn stranded on rank 1 or 8 never moves,
    /// `from != to`, and `to` is geometrically reachable.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        if self.state.is_finished() {
            return false;
        }

        let Some(piece) = self.board.piece_at(from) else {
            return false;
        };
        if piece.color() != self.side_to_move() {
            return false;
        }

        let target = self.board.piece_at(to);
        if let Some(target) = target {
            if target.color() == piece.color() {
                return false;
            }
        }

        // The atomic king would die in its own explosion, so it may never
        // capture at all.
        if piece.kind() == PieceKind::King && target.is_some() {
            return false;
        }

        // With no promotion, a pawn on an outer rank is stuck. Normally
        // unreachable for its own color, but guarded against malformed
        // custom positions.
        if piece.kind() == PieceKind::Pawn && from.rank().is_back_rank() {
            return false;
        }

        if from == to {
            return false;
        }

        reachable_squares(piece, from, &self.board).contains(to)
    }

    /// Attempt to move the piece on `from` to `to`, resolving any explosion.
    ///
    /// Returns `true` and increments the turn counter when the move was
    /// applied. Returns `false` for every rejected move — wrong turn,
    /// unreachable destination, finished game, or a capture whose blast
    /// would destroy both kings — in which case board, counter, and state
    /// are untouched.
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        if !self.is_legal(from, to) {
            return false;
        }

        let Some(piece) = self.board.piece_at(from) else {
            return false;
        };

        if self.board.is_occupied(to) {
            if !self.resolve_capture(from, to) {
                return false;
            }
        } else {
            self.board.clear(from);
            self.board.set_piece(to, piece);
        }

        self.turn_counter += 1;
        debug!(%from, %to, piece = ?piece, turn = self.turn_counter, "move applied");
        true
    }

    /// The squares an explosion at `dest` would clear: every occupied,
    /// non-pawn square in the 3×3 neighborhood (captured and capturing
    /// pieces included when they stand there, pawns immune).
    fn blast_zone(&self, dest: Square) -> SquareSet {
        let mut blast = SquareSet::EMPTY;
        for sq in SquareSet::neighborhood(dest) {
            if let Some(piece) = self.board.piece_at(sq) {
                if !piece.kind().survives_blast() {
                    blast.insert(sq);
                }
            }
        }
        blast
    }

    /// Resolve a capture at `to` by the piece on `from`.
    ///
    /// Returns `false` without mutating anything when the explosion would
    /// destroy both kings — a single blast may not end the game for both
    /// sides. Otherwise updates the game state if exactly one king dies,
    /// clears the blast zone, and consumes both the captured piece and the
    /// capturing piece (which dies in its own explosion even when it
    /// attacked from outside the radius).
    fn resolve_capture(&mut self, from: Square, to: Square) -> bool {
        let blast = self.blast_zone(to);

        let white_king_dies = blast
            .iter()
            .any(|sq| self.board.piece_at(sq) == Some(Piece::WHITE_KING));
        let black_king_dies = blast
            .iter()
            .any(|sq| self.board.piece_at(sq) == Some(Piece::BLACK_KING));

        if white_king_dies && black_king_dies {
            debug!(%from, %to, "capture rejected: explosion would destroy both kings");
            return false;
        }

        if black_king_dies {
            self.state = GameState::WhiteWon;
        } else if white_king_dies {
            self.state = GameState::BlackWon;
        }

        for sq in blast {
            self.board.clear(sq);
        }
        // A captured pawn is immune to the radius but not to the capture
        // itself; the capturing piece is consumed regardless of distance.
        self.board.clear(to);
        self.board.clear(from);

        if let Some(winner) = self.state.winner() {
            info!(%winner, turn = self.turn_counter + 1, "king destroyed, game over");
        }
        true
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
