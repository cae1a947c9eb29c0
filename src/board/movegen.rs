//! Move generation for a [`Board`]: pseudo-legal moves, strictly legal
//! moves, and the specialised castling, en-passant and check-evasion
//! sub-generators.
//!
//! Every generator takes a `from_mask` and a `to_mask` restricting the
//! origin and destination squares, so callers (the legality filter, SAN
//! and UCI matching, evasion generation) can narrow the work to the moves
//! they care about.
//!
//! The output order is stable and part of the contract: piece moves for
//! every friendly non-pawn (origins and targets scanned from h8 down),
//! then castling, then pawn captures with promotions, then single pawn
//! advances, then double advances, then en passant. Within a promotion
//! fan-out the order is queen, rook, bishop, knight.
//!
//! [`Board`]: ../struct.Board.html

use super::Board;
use crate::core::bitboard::BitBoard;
use crate::core::move_list::MoveList;
use crate::core::piece_move::Move;
use crate::core::sq::SQ;
use crate::core::{PieceType, Player};
use crate::helper;

const PROMOTION_ORDER: [PieceType; 4] =
    [PieceType::Q, PieceType::R, PieceType::B, PieceType::N];

impl Board {
    /// Generates all legal moves for the side to move.
    ///
    /// # Examples
    ///
    /// ```
    /// use remora::Board;
    ///
    /// let board = Board::start_pos();
    /// assert_eq!(board.generate_moves().len(), 20);
    /// ```
    pub fn generate_moves(&self) -> MoveList {
        self.generate_legal_moves(BitBoard::ALL, BitBoard::ALL)
    }

    /// Generates the legal moves whose origin and destination fall inside
    /// the given masks.
    ///
    /// If the king is in check only evasions are considered; otherwise the
    /// pseudo-legal moves are filtered through the safety oracle (pins and
    /// the en-passant discovered check).
    pub fn generate_legal_moves(&self, from_mask: BitBoard, to_mask: BitBoard) -> MoveList {
        let mut list = MoveList::default();
        if let Some(king) = self.base().king(self.turn()) {
            let blockers = self.slider_blockers(king);
            let checkers = self.base().attackers_mask(!self.turn(), king);

            let mut candidates = MoveList::default();
            if checkers.is_not_empty() {
                self.gen_evasions_into(king, checkers, from_mask, to_mask, &mut candidates);
            } else {
                self.gen_pseudo_legal_into(from_mask, to_mask, &mut candidates);
            }
            for mv in &candidates {
                if self.is_safe(king, blockers, *mv) {
                    list.push(*mv);
                }
            }
        } else {
            // No king to worry about; every pseudo-legal move stands.
            self.gen_pseudo_legal_into(from_mask, to_mask, &mut list);
        }
        list
    }

    /// Generates all pseudo-legal moves inside the given masks: moves that
    /// obey the movement rules but may leave the own king in check.
    pub fn generate_pseudo_legal_moves(&self, from_mask: BitBoard, to_mask: BitBoard) -> MoveList {
        let mut list = MoveList::default();
        self.gen_pseudo_legal_into(from_mask, to_mask, &mut list);
        list
    }

    /// Generates the castling moves available inside the given masks, at
    /// most one per wing.
    pub fn generate_castling_moves(&self, from_mask: BitBoard, to_mask: BitBoard) -> MoveList {
        let mut list = MoveList::default();
        self.gen_castling_into(from_mask, to_mask, &mut list);
        list
    }

    /// Generates the pseudo-legal en-passant captures inside the masks.
    pub fn generate_pseudo_legal_ep(&self, from_mask: BitBoard, to_mask: BitBoard) -> MoveList {
        let mut list = MoveList::default();
        self.gen_ep_into(from_mask, to_mask, &mut list);
        list
    }

    /// Generates the legal en-passant captures inside the masks.
    pub fn generate_legal_ep(&self, from_mask: BitBoard, to_mask: BitBoard) -> MoveList {
        let mut list = MoveList::default();
        let pseudo = self.generate_pseudo_legal_ep(from_mask, to_mask);
        for mv in &pseudo {
            if !self.is_into_check(*mv) {
                list.push(*mv);
            }
        }
        list
    }

    pub(crate) fn gen_pseudo_legal_into(
        &self,
        from_mask: BitBoard,
        to_mask: BitBoard,
        list: &mut MoveList,
    ) {
        let us = self.turn();
        let our_pieces = self.base().get_occupied_player(us);
        let all_pawns = self.base().piece_bb_both_players(PieceType::P);

        // Piece moves: everything but pawns.
        let non_pawns = our_pieces & !all_pawns & from_mask;
        for from_sq in non_pawns.iter_rev() {
            let moves = self.base().attacks_mask(from_sq) & !our_pieces & to_mask;
            for to_sq in moves.iter_rev() {
                list.push(Move::new(from_sq, to_sq));
            }
        }

        // Castling.
        if (from_mask & self.base().piece_bb_both_players(PieceType::K)).is_not_empty() {
            self.gen_castling_into(from_mask, to_mask, list);
        }

        // The remaining moves are all pawn moves.
        let pawns = self.base().piece_bb(us, PieceType::P) & from_mask;
        if pawns.is_empty() {
            return;
        }

        // Pawn captures.
        for from_sq in pawns.iter_rev() {
            let targets = helper::pawn_attacks_from(from_sq, us)
                & self.base().get_occupied_player(!us)
                & to_mask;
            for to_sq in targets.iter_rev() {
                self.push_pawn_move(list, from_sq, to_sq);
            }
        }

        // Single and double pawn advances.
        let occupied = self.base().occupied();
        let (mut single, mut double) = match us {
            Player::White => {
                let single = pawns.shift_up() & !occupied;
                let double =
                    single.shift_up() & !occupied & (BitBoard::RANK_3 | BitBoard::RANK_4);
                (single, double)
            }
            Player::Black => {
                let single = pawns.shift_down() & !occupied;
                let double =
                    single.shift_down() & !occupied & (BitBoard::RANK_6 | BitBoard::RANK_5);
                (single, double)
            }
        };
        single &= to_mask;
        double &= to_mask;

        let push = us.pawn_push();
        for to_sq in single.iter_rev() {
            let from_sq = SQ((i16::from(to_sq.0) - i16::from(push)) as u8);
            self.push_pawn_move(list, from_sq, to_sq);
        }
        for to_sq in double.iter_rev() {
            let from_sq = SQ((i16::from(to_sq.0) - 2 * i16::from(push)) as u8);
            list.push(Move::new(from_sq, to_sq));
        }

        // En passant.
        if self.ep_square().is_some() {
            self.gen_ep_into(from_mask, to_mask, list);
        }
    }

    /// Pushes a pawn move, fanning out the promotions on the back ranks.
    fn push_pawn_move(&self, list: &mut MoveList, from_sq: SQ, to_sq: SQ) {
        let rank = to_sq.rank_idx_of_sq();
        if rank == 0 || rank == 7 {
            for &promo in PROMOTION_ORDER.iter() {
                list.push(Move::new_promotion(from_sq, to_sq, promo));
            }
        } else {
            list.push(Move::new(from_sq, to_sq));
        }
    }

    fn gen_ep_into(&self, from_mask: BitBoard, to_mask: BitBoard, list: &mut MoveList) {
        let ep = match self.ep_square() {
            Some(ep) => ep,
            None => return,
        };
        if (ep.to_bb() & to_mask).is_empty() {
            return;
        }
        if (ep.to_bb() & self.base().occupied()).is_not_empty() {
            return;
        }
        // Only pawns on the capturing rank that attack the skipped square.
        let rank_mask = match self.turn() {
            Player::White => BitBoard::RANK_5,
            Player::Black => BitBoard::RANK_4,
        };
        let capturers = self.base().piece_bb(self.turn(), PieceType::P)
            & from_mask
            & helper::pawn_attacks_from(ep, !self.turn())
            & rank_mask;
        for capturer in capturers.iter_rev() {
            list.push(Move::new(capturer, ep));
        }
    }

    fn gen_castling_into(&self, from_mask: BitBoard, to_mask: BitBoard, list: &mut MoveList) {
        let us = self.turn();
        let backrank = us.backrank();
        let king_bb = (self.base().get_occupied_player(us)
            & self.base().piece_bb_both_players(PieceType::K)
            & !self.base().promoted()
            & backrank
            & from_mask)
            .lsb();
        if king_bb.is_empty() {
            return;
        }
        let king = king_bb.to_sq();

        let bb_c = BitBoard::FILE_C & backrank;
        let bb_d = BitBoard::FILE_D & backrank;
        let bb_f = BitBoard::FILE_F & backrank;
        let bb_g = BitBoard::FILE_G & backrank;

        for candidate in (self.clean_castling_rights() & backrank & to_mask).iter_rev() {
            let rook = candidate.to_bb();

            let a_side = candidate < king;
            let king_to_bb = if a_side { bb_c } else { bb_g };
            let rook_to_bb = if a_side { bb_d } else { bb_f };
            let king_to = king_to_bb.to_sq();
            let rook_to = rook_to_bb.to_sq();

            let king_path = helper::between_bb(king, king_to);
            let rook_path = helper::between_bb(candidate, rook_to);

            // Nothing but the castling king and rook may sit on the paths
            // or the destination squares.
            let blocked = ((self.base().occupied() ^ king_bb ^ rook)
                & (king_path | rook_path | king_to_bb | rook_to_bb))
                .is_not_empty();
            if blocked {
                continue;
            }
            // The king's route (its origin included) must not be attacked
            // with the king lifted off the board.
            if self.attacked_for_king(king_path | king_bb, self.base().occupied() ^ king_bb) {
                continue;
            }
            // And the arrival square must be safe with the rook already
            // relocated.
            if self.attacked_for_king(
                king_to_bb,
                self.base().occupied() ^ king_bb ^ rook ^ rook_to_bb,
            ) {
                continue;
            }

            list.push(self.from_chess960(king, candidate, None, None));
        }
    }

    fn attacked_for_king(&self, path: BitBoard, occupied: BitBoard) -> bool {
        path.iter_rev()
            .any(|sq| self.base().attackers_mask_occ(!self.turn(), sq, occupied).is_not_empty())
    }

    /// Generates moves that address a check: king steps off the attacked
    /// rays, and — against a single checker — captures and blocks,
    /// including the en-passant capture of a double-pushed checking pawn.
    pub(crate) fn gen_evasions_into(
        &self,
        king: SQ,
        checkers: BitBoard,
        from_mask: BitBoard,
        to_mask: BitBoard,
        list: &mut MoveList,
    ) {
        let us = self.turn();
        let sliders = checkers
            & (self.base().piece_bb_both_players(PieceType::B)
                | self.base().piece_bb_both_players(PieceType::R)
                | self.base().piece_bb_both_players(PieceType::Q));

        // The king may not step anywhere on a checking slider's ray.
        let mut attacked = BitBoard(0);
        for checker in sliders.iter_rev() {
            attacked |= helper::line_bb(king, checker) ^ checker.to_bb();
        }

        if (king.to_bb() & from_mask).is_not_empty() {
            let targets = helper::king_moves(king)
                & !self.base().get_occupied_player(us)
                & !attacked
                & to_mask;
            for to_sq in targets.iter_rev() {
                list.push(Move::new(king, to_sq));
            }
        }

        // A double check can only be answered by a king move.
        if checkers.more_than_one() {
            return;
        }
        let checker = checkers.to_sq();

        // Capture or block the single checker.
        let target = helper::between_bb(king, checker) | checkers;
        self.gen_pseudo_legal_into(
            !self.base().piece_bb_both_players(PieceType::K) & from_mask,
            target & to_mask,
            list,
        );

        // The checking pawn of a double push may also be captured en
        // passant, which the block/capture target above cannot express.
        if let Some(ep) = self.ep_square() {
            if (ep.to_bb() & target).is_empty() {
                let down: i16 = if us == Player::White { -8 } else { 8 };
                let last_double = SQ((i16::from(ep.0) + down) as u8);
                if last_double == checker {
                    self.gen_ep_into(from_mask, to_mask, list);
                }
            }
        }
    }
}
