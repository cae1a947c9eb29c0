//! Process-wide, immutable lookup tables for attack generation.
//!
//! The tables are created once, on first use, behind a `lazy_static`
//! reference. Nothing is ever mutated after initialisation, so they are
//! safe to consult from any thread without synchronisation. All attack
//! queries of the board go through the free functions of this module.

pub mod boards;
pub mod magic;

use self::boards::*;
use self::magic::{MagicTable, BISHOP_M_SIZE, B_DELTAS, ROOK_M_SIZE, R_DELTAS};

use crate::core::bitboard::BitBoard;
use crate::core::sq::SQ;
use crate::core::Player;

lazy_static! {
    /// Statically initialized lookup tables, created when first accessed.
    /// Nothing is ever mutated in here, so it is safe to share.
    pub static ref TABLES: Tables = Tables::new();
}

/// Struct which provides various pre-computed lookup tables: the magic
/// sliding-attack tables for rook and bishop, step tables for knight and
/// king, pawn attacks per player, square distance, and the line / between
/// tables for any two squares.
pub struct Tables {
    magic_rook: MagicTable,
    magic_bishop: MagicTable,
    knight_table: [u64; 64],
    king_table: [u64; 64],
    pawn_attacks_from: [[u64; 64]; 2],
    dist_table: [[u8; 64]; 64],
    line_bitboard: Box<[[u64; 64]; 64]>,
    between_sqs_bb: Box<[[u64; 64]; 64]>,
}

impl Tables {
    fn new() -> Tables {
        let magic_rook = MagicTable::init(ROOK_M_SIZE, &R_DELTAS);
        let magic_bishop = MagicTable::init(BISHOP_M_SIZE, &B_DELTAS);
        let mut line_bitboard = Box::new([[0u64; 64]; 64]);
        let mut between_sqs_bb = Box::new([[0u64; 64]; 64]);
        gen_between_and_line_bbs(
            &magic_rook,
            &magic_bishop,
            &mut line_bitboard,
            &mut between_sqs_bb,
        );
        Tables {
            magic_rook,
            magic_bishop,
            knight_table: gen_knight_moves(),
            king_table: gen_king_moves(),
            pawn_attacks_from: gen_pawn_attacks(),
            dist_table: gen_distance_table(),
            line_bitboard,
            between_sqs_bb,
        }
    }
}

/// Generates a knight-move `BitBoard` from a source square.
#[inline(always)]
pub fn knight_moves(sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    BitBoard(TABLES.knight_table[sq.0 as usize])
}

/// Generates a king-move `BitBoard` from a source square.
#[inline(always)]
pub fn king_moves(sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    BitBoard(TABLES.king_table[sq.0 as usize])
}

/// Generates a bishop-attack `BitBoard` from a square and the occupancy of
/// the board.
#[inline(always)]
pub fn bishop_moves(occupied: BitBoard, sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    BitBoard(TABLES.magic_bishop.attacks(occupied.0, sq.0))
}

/// Generates a rook-attack `BitBoard` from a square and the occupancy of
/// the board.
#[inline(always)]
pub fn rook_moves(occupied: BitBoard, sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    BitBoard(TABLES.magic_rook.attacks(occupied.0, sq.0))
}

/// Generates a queen-attack `BitBoard` from a square and the occupancy of
/// the board.
#[inline(always)]
pub fn queen_moves(occupied: BitBoard, sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    BitBoard(TABLES.magic_rook.attacks(occupied.0, sq.0) | TABLES.magic_bishop.attacks(occupied.0, sq.0))
}

/// Pawn attacks `BitBoard` from a given square, per player. Given square
/// x, returns the BitBoard of squares a pawn on x attacks.
#[inline(always)]
pub fn pawn_attacks_from(sq: SQ, player: Player) -> BitBoard {
    debug_assert!(sq.is_okay());
    BitBoard(TABLES.pawn_attacks_from[player as usize][sq.0 as usize])
}

/// Gets the distance of two squares, in king steps.
#[inline(always)]
pub fn distance_of_sqs(sq_one: SQ, sq_two: SQ) -> u8 {
    debug_assert!(sq_one.is_okay());
    debug_assert!(sq_two.is_okay());
    TABLES.dist_table[sq_one.0 as usize][sq_two.0 as usize]
}

/// Gets the full line (diagonal, file, or rank) `BitBoard` that two
/// squares both exist on, if any.
#[inline(always)]
pub fn line_bb(sq_one: SQ, sq_two: SQ) -> BitBoard {
    debug_assert!(sq_one.is_okay());
    debug_assert!(sq_two.is_okay());
    BitBoard(TABLES.line_bitboard[sq_one.0 as usize][sq_two.0 as usize])
}

/// Gets the line `BitBoard` strictly between two squares, if any.
#[inline(always)]
pub fn between_bb(sq_one: SQ, sq_two: SQ) -> BitBoard {
    debug_assert!(sq_one.is_okay());
    debug_assert!(sq_two.is_okay());
    BitBoard(TABLES.between_sqs_bb[sq_one.0 as usize][sq_two.0 as usize])
}

/// Returns if three squares are on the same diagonal, file, or rank.
#[inline(always)]
pub fn aligned(s1: SQ, s2: SQ, s3: SQ) -> bool {
    (line_bb(s1, s2) & s3.to_bb()).is_not_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_and_line() {
        assert_eq!(between_bb(SQ::A1, SQ::A4), SQ::A2.to_bb() | SQ::A3.to_bb());
        assert_eq!(between_bb(SQ::A1, SQ::C3), SQ::B2.to_bb());
        assert_eq!(between_bb(SQ::A1, SQ::B3), BitBoard(0));
        assert!(line_bb(SQ::A1, SQ::H8).is_not_empty());
        assert_eq!(line_bb(SQ::A1, SQ::H8).count_bits(), 8);
        assert!(aligned(SQ::A1, SQ::D4, SQ::H8));
        assert!(!aligned(SQ::A1, SQ::D4, SQ::H7));
    }

    #[test]
    fn stepper_tables() {
        assert_eq!(knight_moves(SQ::A1), SQ::B3.to_bb() | SQ::C2.to_bb());
        assert_eq!(king_moves(SQ::A1).count_bits(), 3);
        assert_eq!(
            pawn_attacks_from(SQ::E4, Player::White),
            SQ::D5.to_bb() | SQ::F5.to_bb()
        );
        assert_eq!(
            pawn_attacks_from(SQ::E4, Player::Black),
            SQ::D3.to_bb() | SQ::F3.to_bb()
        );
        assert_eq!(distance_of_sqs(SQ::A1, SQ::H8), 7);
    }

    #[test]
    fn slider_queries() {
        let occ = SQ::E4.to_bb() | SQ::E6.to_bb();
        let rook = rook_moves(occ, SQ::E1);
        assert!(rook.is_not_empty());
        assert!((rook & SQ::E4.to_bb()).is_not_empty());
        assert!((rook & SQ::E5.to_bb()).is_empty());
        assert_eq!(
            queen_moves(BitBoard(0), SQ::D4),
            rook_moves(BitBoard(0), SQ::D4) | bishop_moves(BitBoard(0), SQ::D4)
        );
    }
}
