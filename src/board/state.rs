//! Contains the [`BoardState`] structure, the snapshot a [`Board`] pushes
//! for every move so that [`Board::pop`] can restore the previous position
//! without re-computing anything.
//!
//! The snapshot stores every bitboard and scalar field by value. This is a
//! little more memory than a delta encoding, but it makes unmaking a move
//! a plain copy: popping restores the board bit-for-bit, captured pieces
//! and promotion markers included.
//!
//! [`BoardState`]: struct.BoardState.html
//! [`Board`]: ../struct.Board.html
//! [`Board::pop`]: ../struct.Board.html#method.pop

use super::base::BaseBoard;
use super::Board;
use crate::core::bitboard::BitBoard;
use crate::core::sq::SQ;
use crate::core::Player;

/// A full-value snapshot of a [`Board`]'s position fields.
///
/// [`Board`]: ../struct.Board.html
#[derive(Clone)]
pub struct BoardState {
    pub(crate) base: BaseBoard,
    pub(crate) turn: Player,
    pub(crate) castling_rights: BitBoard,
    pub(crate) ep_square: Option<SQ>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl BoardState {
    /// Captures the current state of a board.
    pub fn capture(board: &Board) -> BoardState {
        BoardState {
            base: board.base().clone(),
            turn: board.turn(),
            castling_rights: board.castling_rights(),
            ep_square: board.ep_square(),
            halfmove_clock: board.halfmove_clock(),
            fullmove_number: board.fullmove_number(),
        }
    }

    /// Writes every captured field back onto the board.
    pub fn restore(&self, board: &mut Board) {
        board.restore_fields(
            self.base.clone(),
            self.turn,
            self.castling_rights,
            self.ep_square,
            self.halfmove_clock,
            self.fullmove_number,
        );
    }

    /// The occupancy bitboard at the time of the snapshot. Used as a cheap
    /// first filter when counting repetitions.
    #[inline]
    pub fn occupied(&self) -> BitBoard {
        self.base.occupied()
    }
}
