//! End-to-end games exercising the atomic rules through the public API.

use atomik_core::{Board, Color, Game, GameState, Piece, Square, reachable_squares};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn board(placement: &str) -> Board {
    placement.parse().unwrap()
}

#[test]
fn turns_alternate_strictly() {
    let mut game = Game::new();
    let moves = [
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "f3"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("g8", "f6"),
    ];

    for (i, (from, to)) in moves.iter().enumerate() {
        let mover = game
            .piece_at(sq(from))
            .unwrap_or_else(|| panic!("no piece on {from}"));
        assert_eq!(mover.color(), game.side_to_move());
        let expected = if i % 2 == 0 { Color::White } else { Color::Black };
        assert_eq!(game.side_to_move(), expected);
        assert!(game.make_move(sq(from), sq(to)), "{from}->{to} must be legal");
    }
    assert_eq!(game.turn_counter(), 6);
}

#[test]
fn rejected_moves_mutate_nothing() {
    let mut game = Game::new();
    assert!(game.make_move(sq("e2"), sq("e4")));

    let board_before = *game.board();
    let counter_before = game.turn_counter();
    let state_before = game.state();

    // Wrong side, unreachable square, empty origin, same-side capture,
    // null move.
    for (from, to) in [
        ("d2", "d4"),
        ("e7", "e3"),
        ("e5", "e6"),
        ("d8", "d7"),
        ("a8", "a8"),
    ] {
        assert!(!game.make_move(sq(from), sq(to)), "{from}->{to} must be rejected");
        assert_eq!(*game.board(), board_before);
        assert_eq!(game.turn_counter(), counter_before);
        assert_eq!(game.state(), state_before);
    }
}

#[test]
fn scholars_capture_explodes_neighborhood() {
    // Spec scenario: 1. e4 d5 2. exd5. The capture removes both pawns; the
    // nearby black pieces are outside the d5 radius, so nothing else dies.
    let mut game = Game::new();
    assert!(game.make_move(sq("e2"), sq("e4")));
    assert_eq!(game.turn_counter(), 1);
    assert!(game.make_move(sq("d7"), sq("d5")));
    assert_eq!(game.turn_counter(), 2);
    assert!(game.make_move(sq("e4"), sq("d5")));
    assert_eq!(game.turn_counter(), 3);

    assert_eq!(game.piece_at(sq("d5")), None, "captured pawn removed");
    assert_eq!(game.piece_at(sq("e4")), None, "capturing pawn consumed");
    // Rank 7 neighbors of d5 are out of range; the back rank is untouched.
    assert_eq!(game.piece_at(sq("c7")), Some(Piece::BLACK_PAWN));
    assert_eq!(game.piece_at(sq("e7")), Some(Piece::BLACK_PAWN));
    assert_eq!(game.piece_at(sq("d8")), Some(Piece::BLACK_QUEEN));
    assert_eq!(game.state(), GameState::Unfinished);
}

#[test]
fn capture_near_pieces_clears_non_pawns_only() {
    // Knight takes the d5 pawn surrounded by a mixed neighborhood.
    let mut game = Game::from_board(board("k7/8/2p1p3/3p4/2r1b3/4N3/8/7K"));
    assert!(game.make_move(sq("e3"), sq("d5")));

    assert_eq!(game.piece_at(sq("d5")), None, "target pawn captured");
    assert_eq!(game.piece_at(sq("e3")), None, "knight consumed");
    assert_eq!(game.piece_at(sq("c4")), None, "rook exploded");
    assert_eq!(game.piece_at(sq("e4")), None, "bishop exploded");
    assert_eq!(game.piece_at(sq("c6")), Some(Piece::BLACK_PAWN));
    assert_eq!(game.piece_at(sq("e6")), Some(Piece::BLACK_PAWN));
    assert_eq!(game.state(), GameState::Unfinished);
}

#[test]
fn double_king_guard_rejects_and_preserves_board() {
    let start = board("8/8/8/2kpK3/8/8/8/3Q4");
    let mut game = Game::from_board(start);

    assert!(!game.make_move(sq("d1"), sq("d5")));
    assert_eq!(*game.board(), start);
    assert_eq!(game.turn_counter(), 0);
    assert_eq!(game.state(), GameState::Unfinished);

    // The queen is not stuck, only that capture is: a quiet move works.
    assert!(game.make_move(sq("d1"), sq("d4")));
}

#[test]
fn winning_blast_then_terminal_absorption() {
    let mut game = Game::from_board(board("kr6/8/2N5/8/8/8/8/7K"));
    assert!(game.make_move(sq("c6"), sq("b8")));

    assert_eq!(game.state(), GameState::WhiteWon);
    assert_eq!(game.state().winner(), Some(Color::White));
    assert_eq!(game.turn_counter(), 1);

    let board_after = *game.board();
    assert!(!game.make_move(sq("h1"), sq("h2")), "game over, White blocked");
    assert!(!game.make_move(sq("h1"), sq("g2")), "game over, every move blocked");
    assert_eq!(*game.board(), board_after);
    assert_eq!(game.turn_counter(), 1);
}

#[test]
fn black_can_win_by_exploding_the_white_king() {
    // Black rook takes the knight next to the white king; the blast
    // destroys the king and wins for Black.
    let mut game = Game::from_board(board("k5r1/8/8/8/8/8/P7/6NK"));
    assert!(game.make_move(sq("a2"), sq("a3")), "white moves first");
    assert!(game.make_move(sq("g8"), sq("g1")));

    assert_eq!(game.state(), GameState::BlackWon);
    assert_eq!(game.state().winner(), Some(Color::Black));
    assert_eq!(game.piece_at(sq("h1")), None, "white king destroyed");
    assert_eq!(game.piece_at(sq("g1")), None, "captured knight removed");
    assert_eq!(game.piece_at(sq("g8")), None, "capturing rook consumed");
    assert_eq!(game.turn_counter(), 2);
}

#[test]
fn queen_reach_from_d1_on_empty_board() {
    let mut b = Board::empty();
    b.set_piece(sq("d1"), Piece::WHITE_QUEEN);
    let moves = reachable_squares(Piece::WHITE_QUEEN, sq("d1"), &b);

    assert_eq!(moves.count(), 21);
    for dest in ["a1", "h1", "d8", "h5", "a4", "e2", "c2"] {
        assert!(moves.contains(sq(dest)), "queen must reach {dest}");
    }
}

#[test]
fn knight_reach_from_b1_on_empty_board() {
    let mut b = Board::empty();
    b.set_piece(sq("b1"), Piece::WHITE_KNIGHT);
    let moves = reachable_squares(Piece::WHITE_KNIGHT, sq("b1"), &b);

    assert_eq!(moves.count(), 3);
    for dest in ["a3", "c3", "d2"] {
        assert!(moves.contains(sq(dest)), "knight must reach {dest}");
    }
}

#[test]
fn independent_games_do_not_share_state() {
    let mut first = Game::new();
    let second = Game::new();

    assert!(first.make_move(sq("e2"), sq("e4")));
    assert_eq!(first.turn_counter(), 1);
    assert_eq!(second.turn_counter(), 0);
    assert_eq!(second.piece_at(sq("e2")), Some(Piece::WHITE_PAWN));
}
