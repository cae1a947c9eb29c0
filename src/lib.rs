//! A chess position representation and move-generation library.
//!
//! `remora` models a chess position as a set of bitboards and generates its
//! pseudo-legal and strictly legal moves, for both standard chess and
//! Chess960. It also houses the incremental make/unmake protocol
//! ([`Board::push`] / [`Board::pop`]) and the predicates used to decide
//! game termination: check, checkmate, stalemate, repetition claims, the
//! fifty- and seventy-five-move rules, and insufficient material.
//!
//! Parsing and formatting beyond FEN strings and UCI move text (SAN, PGN,
//! engine protocols, rendering) is deliberately left to other crates; this
//! one is a pure, deterministic state machine.
//!
//! # Usage
//!
//! Create a [`Board`] with the starting position and walk its legal moves:
//!
//! ```
//! use remora::Board;
//!
//! let mut board = Board::start_pos();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! for mv in &moves {
//!     board.push(*mv);
//!     assert!(board.pop().is_ok());
//! }
//! ```
//!
//! Boards round-trip through FEN, including positions that are not
//! reachable in a real game (validity is reported by [`Board::status`]
//! rather than enforced):
//!
//! ```
//! use remora::Board;
//!
//! let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
//! let board = Board::from_fen(fen).unwrap();
//! assert_eq!(board.fen(), fen);
//! ```
//!
//! # Board layout
//!
//! Each bit index of a [`BitBoard`] maps to a square as follows:
//!
//! ```md,ignore
//! 8 | 56 57 58 59 60 61 62 63
//! 7 | 48 49 50 51 52 53 54 55
//! 6 | 40 41 42 43 44 45 46 47
//! 5 | 32 33 34 35 36 37 38 39
//! 4 | 24 25 26 27 28 29 30 31
//! 3 | 16 17 18 19 20 21 22 23
//! 2 | 8  9  10 11 12 13 14 15
//! 1 | 0  1  2  3  4  5  6  7
//!   -------------------------
//!      a  b  c  d  e  f  g  h
//! ```
//!
//! [`Board`]: board/struct.Board.html
//! [`Board::push`]: board/struct.Board.html#method.push
//! [`Board::pop`]: board/struct.Board.html#method.pop
//! [`Board::status`]: board/struct.Board.html#method.status
//! [`BitBoard`]: core/bitboard/struct.BitBoard.html

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
extern crate failure;
#[macro_use]
extern crate failure_derive;

pub mod board;
pub mod core;
pub mod helper;
pub mod tools;

#[doc(no_inline)]
pub use crate::board::base::BaseBoard;
#[doc(no_inline)]
pub use crate::board::fen::Status;
#[doc(no_inline)]
pub use crate::board::{Board, Outcome, Termination};
#[doc(no_inline)]
pub use crate::core::bitboard::BitBoard;
#[doc(no_inline)]
pub use crate::core::move_list::MoveList;
#[doc(no_inline)]
pub use crate::core::piece_move::Move;
#[doc(no_inline)]
pub use crate::core::square_set::SquareSet;
#[doc(no_inline)]
pub use crate::core::sq::SQ;
#[doc(no_inline)]
pub use crate::core::{File, Piece, PieceType, Player, Rank};
