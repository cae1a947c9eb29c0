extern crate remora;

use remora::{Board, Move, Termination};

fn play(board: &mut Board, moves: &[&str]) {
    for uci in moves {
        board.push(Move::from_uci(uci).unwrap());
    }
}

#[test]
fn threefold_claim_after_knight_shuffle() {
    let mut board = Board::start_pos();
    assert!(!board.can_claim_threefold_repetition());
    play(
        &mut board,
        &["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8"],
    );
    // The starting position has now occurred three times; White may claim
    // on the ninth move.
    assert!(board.is_threefold_repetition());
    assert!(board.can_claim_threefold_repetition());
    assert!(board.can_claim_draw());
    assert!(!board.is_fivefold_repetition());

    // The board is unchanged by asking.
    assert_eq!(board.moves_played(), 8);
    assert_eq!(board.fen(), remora::board::START_FEN);
}

#[test]
fn fivefold_repetition_ends_the_game() {
    let mut board = Board::start_pos();
    let cycle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    for _ in 0..4 {
        play(&mut board, &cycle);
    }
    assert!(board.is_fivefold_repetition());
    assert_eq!(
        board.outcome(false).unwrap().termination,
        Termination::FivefoldRepetition
    );
}

#[test]
fn phantom_ep_square_does_not_block_repetition() {
    // 1. e4 e5 leaves an en-passant square behind each double push, but no
    // capture is ever available, so the shuffled positions still repeat.
    let mut board = Board::start_pos();
    play(&mut board, &["e2e4", "e7e5"]);
    play(
        &mut board,
        &["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8"],
    );
    assert!(board.is_threefold_repetition());
}

#[test]
fn real_ep_availability_distinguishes_positions() {
    // With pawns on e5 and f7, Black's f7f5 creates a position where an
    // en-passant capture is genuinely available; the same arrangement
    // reached later without the ep right must not count as a repetition.
    let mut board = Board::start_pos();
    play(&mut board, &["e2e4", "a7a6", "e4e5", "f7f5"]);
    assert!(board.has_legal_en_passant());
    let key_with_ep = board.transposition_key();

    // Shuffle knights once around: the piece arrangement returns, the ep
    // right does not.
    play(&mut board, &["g1f3", "g8f6", "f3g1", "f6g8"]);
    assert!(!board.has_legal_en_passant());
    assert_ne!(board.transposition_key(), key_with_ep);
    assert!(!board.is_threefold_repetition());
}

#[test]
fn fifty_move_counters() {
    let mut board = Board::from_fen("4k3/4r3/8/8/8/8/8/4K3 w - - 99 80").unwrap();
    assert!(!board.is_fifty_moves());
    assert!(board.can_claim_fifty_moves());

    let mut board = Board::from_fen("4k3/4r3/8/8/8/8/8/4K3 w - - 100 80").unwrap();
    assert!(board.is_fifty_moves());
    assert!(board.can_claim_fifty_moves());
    assert!(board.can_claim_draw());
    assert!(!board.is_seventy_five_moves());
}

#[test]
fn seventy_five_moves_is_automatic() {
    let mut board = Board::from_fen("4k3/4r3/8/8/8/8/8/4K3 w - - 150 90").unwrap();
    assert!(board.is_seventy_five_moves());
    let outcome = board.outcome(false).unwrap();
    assert_eq!(outcome.termination, Termination::SeventyFiveMoves);
    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.result(), "1/2-1/2");
}

#[test]
fn checkmate_beats_move_counters() {
    // A mate delivered on the 150th halfmove still wins the game.
    let mut board = Board::from_fen("k7/8/1K6/8/8/8/8/6R1 w - - 149 100").unwrap();
    board.push(Move::from_uci("g1g8").unwrap());
    assert_eq!(board.halfmove_clock(), 150);
    assert!(board.is_checkmate());
    let outcome = board.outcome(false).unwrap();
    assert_eq!(outcome.termination, Termination::Checkmate);
    assert_eq!(outcome.result(), "1-0");
}

#[test]
fn repetition_scan_stops_at_irreversible_moves() {
    // A capture breaks the chain: identical-looking positions before and
    // after it cannot repeat each other.
    let mut board = Board::start_pos();
    play(&mut board, &["e2e4", "d7d5", "e4d5", "d8d5"]);
    let plies = board.moves_played();
    play(
        &mut board,
        &["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8"],
    );
    assert!(board.is_threefold_repetition());
    assert_eq!(board.moves_played(), plies + 8);

    // Only two occurrences since the capture: no claim there.
    let mut board2 = Board::start_pos();
    play(&mut board2, &["e2e4", "d7d5", "e4d5", "d8d5"]);
    play(&mut board2, &["g1f3", "g8f6", "f3g1", "f6g8"]);
    assert!(!board2.is_threefold_repetition());
}
